use crate::constants::THEME_SETTINGS_FILE;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub themes: ThemesConfig,
    pub components: ComponentsConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Where themes live on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemesConfig {
    /// Directory holding one sub-directory per theme.
    pub root: PathBuf,
    /// Settings document name inside each theme directory.
    pub settings_file: String,
    /// Create `root` at startup if it is missing.
    pub create_root: bool,
}

/// Sources the component registry is initialized from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    /// Register the built-in catalogue (header, hero, rich-text, gallery, footer).
    pub builtins: bool,
    /// Optional JSON manifest declaring additional components.
    pub manifest: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
    pub format: LogFormat,
    /// Directory for rolling log files; console only when absent.
    pub path: Option<PathBuf>,
    /// Extra filter directives, e.g. `tessera_themes=debug`.
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4590, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("themes"),
            settings_file: THEME_SETTINGS_FILE.to_owned(),
            create_root: false,
        }
    }
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self { builtins: true, manifest: None }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), format: LogFormat::Compact, path: None, env_filter: None }
    }
}
