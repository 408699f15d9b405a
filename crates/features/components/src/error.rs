use std::borrow::Cow;

/// A specialized [`RegistryError`] enum of this crate.
#[tessera_derive::tessera_error]
pub enum RegistryError {
    /// No declaration is registered under the key.
    #[error("Unknown component '{key}'{}", format_context(.context))]
    UnknownComponent { key: String, context: Option<Cow<'static, str>> },
    /// The manifest parsed but declares something unusable.
    #[error("Invalid component manifest{}: {message}", format_context(.context))]
    InvalidManifest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The manifest is not valid JSON or does not match the manifest shape.
    #[error("Component manifest parse error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
    /// The manifest file could not be read.
    #[error("Component manifest IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}
