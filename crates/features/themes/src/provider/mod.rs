//! Where theme settings documents come from.

mod error;
mod memory;
mod storage;

pub use error::{ThemeProviderError, ThemeProviderErrorExt};
pub use memory::MemoryThemeProvider;
pub use storage::StorageThemeProvider;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

pub const MAX_THEME_ID_LEN: usize = 64;

/// Source of theme settings documents.
///
/// Implementations hide path resolution and encoding; the resolver only sees parsed JSON.
#[async_trait]
pub trait ThemeFileProvider: Debug + Send + Sync {
    /// The parsed settings document of `theme_id`.
    ///
    /// # Errors
    /// Fails when the theme id is invalid, the document cannot be read or is not JSON.
    async fn theme_settings(&self, theme_id: &str) -> Result<Value, ThemeProviderError>;

    /// Whether `theme_id` names an existing theme.
    ///
    /// # Errors
    /// Fails when the theme id is invalid or the backing store cannot be queried.
    async fn theme_exists(&self, theme_id: &str) -> Result<bool, ThemeProviderError>;

    /// Ids of all themes, sorted.
    ///
    /// # Errors
    /// Fails when the backing store cannot be listed.
    async fn list_themes(&self) -> Result<Vec<String>, ThemeProviderError>;
}

/// Checks that `theme_id` is a single safe path segment.
///
/// # Errors
/// Returns [`ThemeProviderError::InvalidThemeId`] otherwise.
pub fn validate_theme_id(theme_id: &str) -> Result<(), ThemeProviderError> {
    let valid = !theme_id.is_empty()
        && theme_id.len() <= MAX_THEME_ID_LEN
        && theme_id.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');

    if valid {
        Ok(())
    } else {
        Err(ThemeProviderError::InvalidThemeId { theme_id: theme_id.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_ids_are_single_safe_segments() {
        for ok in ["aurora", "dark-mode", "v2_theme", "a"] {
            assert!(validate_theme_id(ok).is_ok(), "{ok}");
        }
        for bad in ["", "../etc", "a/b", "Aurora", "with space", &"x".repeat(65)] {
            assert!(validate_theme_id(bad).is_err(), "{bad}");
        }
    }
}
