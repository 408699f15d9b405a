use std::borrow::Cow;

/// Failures that abort a whole theme resolution.
#[tessera_derive::tessera_error]
pub enum ThemeError {
    #[error("Theme '{theme_id}' not found{}", format_context(.detail))]
    ThemeNotFound { theme_id: String, detail: Option<Cow<'static, str>> },
    #[error("Invalid settings for theme '{theme_id}': {detail}")]
    InvalidThemeSettings { theme_id: String, detail: Cow<'static, str> },
}

impl ThemeError {
    #[must_use]
    pub fn theme_id(&self) -> &str {
        match self {
            Self::ThemeNotFound { theme_id, .. } | Self::InvalidThemeSettings { theme_id, .. } => {
                theme_id
            },
        }
    }
}
