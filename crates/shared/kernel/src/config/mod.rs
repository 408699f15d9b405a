use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "tessera";

/// Prefix of environment overrides, e.g. `TESSERA__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "TESSERA";

#[tessera_derive::tessera_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file overlaid with environment overrides.
///
/// Layering:
/// 1. **Base file**: `path` when given (must exist), otherwise the optional
///    [`DEFAULT_CONFIG_NAME`] file in the working directory. Any format the `config`
///    crate understands (TOML, JSON, YAML...) is accepted; the extension may be omitted.
/// 2. **Environment**: variables prefixed with `TESSERA__`, nested keys separated by
///    double underscores (`TESSERA__THEMES__ROOT` maps to `themes.root`).
///
/// Fields missing from both layers fall back to the target type's serde defaults.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing, a source is
/// malformed, or the merged values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use tessera_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .convert_case(config::Case::Snake)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_NAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(env);

    info!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tessera_domain::config::ApiConfig;

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(b"[server]\nport = 8081\n[themes]\nroot = \"from-file\"\n").unwrap();

        let vars = config::Map::from([
            ("TESSERA__SERVER__PORT".to_owned(), "9090".to_owned()),
            ("TESSERA__COMPONENTS__BUILTINS".to_owned(), "false".to_owned()),
        ]);
        let cfg: ApiConfig = load_layered(Some(file.path()), environment().source(Some(vars))).unwrap();

        assert_eq!(cfg.server.port, 9090);
        assert!(!cfg.components.builtins);
        assert_eq!(cfg.themes.root.to_str(), Some("from-file"));
    }
}
