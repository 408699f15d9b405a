use std::path::PathBuf;
use tessera_domain::config::{
    ApiConfig, ComponentsConfig, LogFormat, LoggingConfig, ServerConfig, ThemesConfig,
};

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4590);
    assert!(server.ssl.is_none());

    let themes = ThemesConfig::default();
    assert_eq!(themes.root, PathBuf::from("themes"));
    assert_eq!(themes.settings_file, "settings.json");

    let components = ComponentsConfig::default();
    assert!(components.builtins);
    assert!(components.manifest.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert_eq!(logging.format, LogFormat::Compact);
}

#[test]
fn api_config_deserializes_partial_documents() {
    let raw = serde_json::json!({
        "server": { "address": "::", "port": 8080 },
        "themes": { "root": "/srv/themes" },
        "components": { "builtins": false, "manifest": "components.json" },
        "logging": { "format": "json" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.themes.root, PathBuf::from("/srv/themes"));
    assert_eq!(cfg.themes.settings_file, "settings.json");
    assert!(!cfg.components.builtins);
    assert_eq!(cfg.components.manifest.as_deref(), Some(std::path::Path::new("components.json")));
    assert_eq!(cfg.logging.format, LogFormat::Json);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn api_config_mutation_is_copy_on_write() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 1;

    assert_eq!(original.server.port, 4590);
    assert_eq!(changed.server.port, 1);
}
