use std::borrow::Cow;
use tessera_storage::StorageError;

#[tessera_derive::tessera_error]
pub enum ThemeProviderError {
    #[error("Theme storage error{}: {source}", format_context(.context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },
    #[error("Theme settings parse error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// Ids are restricted to lowercase ASCII letters, digits, `-` and `_`.
    #[error("Invalid theme id '{theme_id}'")]
    InvalidThemeId { theme_id: String },
    #[error("Theme '{theme_id}' not found{}", format_context(.context))]
    NotFound { theme_id: String, context: Option<Cow<'static, str>> },
}

impl ThemeProviderError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::InvalidThemeId { .. } => true,
            Self::Storage { source, .. } => source.is_not_found(),
            Self::Parse { .. } => false,
        }
    }
}
