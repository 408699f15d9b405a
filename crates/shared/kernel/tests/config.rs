use std::io::Write;
use tessera_kernel::config::{ConfigError, load_config};
use tessera_kernel::domain::config::{ApiConfig, LogFormat};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn file_values_override_defaults() {
    let file = write_config(
        r#"
        [server]
        port = 8081

        [themes]
        root = "/srv/themes"

        [logging]
        format = "json"
        "#,
    );

    let cfg: ApiConfig = load_config(Some(file.path())).unwrap();
    assert_eq!(cfg.server.port, 8081);
    assert_eq!(cfg.themes.root.to_str(), Some("/srv/themes"));
    assert_eq!(cfg.themes.settings_file, "settings.json");
    assert_eq!(cfg.logging.format, LogFormat::Json);
    assert!(cfg.components.builtins);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = load_config::<ApiConfig>(Some(&missing)).unwrap_err();
    assert!(matches!(err, ConfigError::Config { .. }));
}
