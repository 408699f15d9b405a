use std::borrow::Cow;

/// A specialized [`StorageError`] enum of this crate.
#[tessera_derive::tessera_error]
pub enum StorageError {
    #[error("Directory not found{}: {message}", format_context(.context))]
    DirectoryNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("File not found{}: {message}", format_context(.context))]
    FileNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Path traversal security violation{}: {message}", format_context(.context))]
    PathTraversalAttempt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("File is not valid UTF-8{}: {source}", format_context(.context))]
    Encoding { source: std::string::FromUtf8Error, context: Option<Cow<'static, str>> },

    #[error("Filesystem I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl StorageError {
    /// Whether the error means "nothing there" rather than a real failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::DirectoryNotFound { .. })
    }
}
