use super::{ThemeFileProvider, ThemeProviderError, ThemeProviderErrorExt, validate_theme_id};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tessera_domain::constants::THEME_SETTINGS_FILE;
use tessera_storage::FileSystem;
use tracing::debug;

/// Reads themes from a [`FileSystem`]: one directory per theme, each holding a JSON
/// settings document.
#[derive(Debug, Clone)]
pub struct StorageThemeProvider {
    fs: Arc<dyn FileSystem>,
    settings_file: String,
}

impl StorageThemeProvider {
    pub fn new(fs: impl FileSystem + 'static) -> Self {
        Self { fs: Arc::new(fs), settings_file: THEME_SETTINGS_FILE.to_owned() }
    }

    /// Overrides the settings document name (default `settings.json`).
    #[must_use]
    pub fn settings_file(mut self, name: impl Into<String>) -> Self {
        self.settings_file = name.into();
        self
    }

    fn settings_path(&self, theme_id: &str) -> PathBuf {
        Path::new(theme_id).join(&self.settings_file)
    }
}

#[async_trait]
impl ThemeFileProvider for StorageThemeProvider {
    async fn theme_settings(&self, theme_id: &str) -> Result<Value, ThemeProviderError> {
        validate_theme_id(theme_id)?;
        let path = self.settings_path(theme_id);

        let raw = self
            .fs
            .read_to_string(&path)
            .await
            .context(format!("Reading settings of theme '{theme_id}'"))?;
        debug!(theme_id, bytes = raw.len(), "Theme settings read");

        serde_json::from_str::<Value>(&raw).context(format!("Parsing {}", path.display()))
    }

    async fn theme_exists(&self, theme_id: &str) -> Result<bool, ThemeProviderError> {
        validate_theme_id(theme_id)?;
        self.fs
            .is_dir(Path::new(theme_id))
            .await
            .context(format!("Checking theme directory '{theme_id}'"))
    }

    async fn list_themes(&self) -> Result<Vec<String>, ThemeProviderError> {
        let entries = self.fs.list_dir(Path::new("")).await.context("Listing themes")?;
        Ok(entries
            .into_iter()
            .filter(|entry| entry.is_dir() && validate_theme_id(&entry.name).is_ok())
            .map(|entry| entry.name)
            .collect())
    }
}
