use super::{ThemeFileProvider, ThemeProviderError, ThemeProviderErrorExt, validate_theme_id};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-memory provider for tests and embedding.
///
/// A theme inserted with [`insert_raw`](Self::insert_raw) holds unparsed text, which lets
/// callers exercise the parse failure path.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeProvider {
    themes: Arc<RwLock<BTreeMap<String, Entry>>>,
}

#[derive(Debug, Clone)]
enum Entry {
    Parsed(Value),
    Raw(String),
}

impl MemoryThemeProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_theme(self, theme_id: impl Into<String>, settings: Value) -> Self {
        self.insert(theme_id, settings);
        self
    }

    pub fn insert(&self, theme_id: impl Into<String>, settings: Value) {
        self.themes.write().insert(theme_id.into(), Entry::Parsed(settings));
    }

    pub fn insert_raw(&self, theme_id: impl Into<String>, raw: impl Into<String>) {
        self.themes.write().insert(theme_id.into(), Entry::Raw(raw.into()));
    }

    pub fn remove(&self, theme_id: &str) -> bool {
        self.themes.write().remove(theme_id).is_some()
    }
}

#[async_trait]
impl ThemeFileProvider for MemoryThemeProvider {
    async fn theme_settings(&self, theme_id: &str) -> Result<Value, ThemeProviderError> {
        validate_theme_id(theme_id)?;
        let entry = self.themes.read().get(theme_id).cloned();
        match entry {
            Some(Entry::Parsed(value)) => Ok(value),
            Some(Entry::Raw(raw)) => serde_json::from_str::<Value>(&raw)
                .context(format!("Parsing in-memory settings of theme '{theme_id}'")),
            None => Err(ThemeProviderError::NotFound { theme_id: theme_id.to_owned(), context: None }),
        }
    }

    async fn theme_exists(&self, theme_id: &str) -> Result<bool, ThemeProviderError> {
        validate_theme_id(theme_id)?;
        Ok(self.themes.read().contains_key(theme_id))
    }

    async fn list_themes(&self) -> Result<Vec<String>, ThemeProviderError> {
        Ok(self.themes.read().keys().cloned().collect())
    }
}
