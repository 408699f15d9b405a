use tessera_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_install_is_rejected() {
    let _logger = Logger::builder()
        .name("tessera-first")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("tessera-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
