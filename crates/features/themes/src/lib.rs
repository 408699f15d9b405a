//! # Themes
//!
//! Reads theme settings documents through a [`ThemeFileProvider`] and resolves them into
//! a [`ThemeComposition`]: every page with its visible component instances in render
//! order, plus the [`ResolutionIssue`]s for whatever had to be skipped.
//!
//! ```rust
//! use serde_json::json;
//! use tessera_components::ComponentRegistry;
//! use tessera_themes::{MemoryThemeProvider, PageResolver};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let provider = MemoryThemeProvider::new().with_theme("aurora", json!({
//!     "pages": [{
//!         "id": "home", "name": "Home", "path": "/",
//!         "components": [
//!             { "id": "c1", "componentKey": "hero", "order": 2 },
//!             { "id": "c2", "componentKey": "footer", "order": 1 }
//!         ]
//!     }]
//! }));
//! let resolver = PageResolver::new(provider, ComponentRegistry::with_builtins());
//!
//! let composition = resolver.resolve_theme("aurora").await.unwrap();
//! assert_eq!(composition.pages[0].component_ids().collect::<Vec<_>>(), ["c2", "c1"]);
//! # }
//! ```

mod composition;
mod error;
mod issues;
pub mod provider;
pub mod resolver;
#[cfg(feature = "server")]
mod routes;

pub use crate::composition::ThemeComposition;
pub use crate::error::{ThemeError, ThemeErrorExt};
pub use crate::issues::ResolutionIssue;
pub use crate::provider::{
    MemoryThemeProvider, StorageThemeProvider, ThemeFileProvider, ThemeProviderError,
    ThemeProviderErrorExt,
};
pub use crate::resolver::PageResolver;
#[cfg(feature = "server")]
pub use crate::routes::themes_router;

use tessera_domain::config::ThemesConfig;
use tessera_kernel::domain::registry::InitializedSlice;
use tessera_storage::Storage;
use tracing::info;

/// Themes feature state
#[tessera_derive::tessera_slice]
pub struct Themes {
    pub resolver: PageResolver,
}

/// Opens the configured themes directory as a provider.
///
/// # Errors
/// Returns [`ThemeProviderError::Storage`] when the root is missing (and `create_root` is
/// off) or cannot be resolved.
pub async fn build_provider(config: &ThemesConfig) -> Result<StorageThemeProvider, ThemeProviderError> {
    let storage = Storage::builder()
        .root(&config.root)
        .create(config.create_root)
        .connect()
        .await
        .context(format!("Opening themes root {}", config.root.display()))?;

    info!(root = %storage.root().display(), settings_file = %config.settings_file, "Theme storage ready");
    Ok(StorageThemeProvider::new(storage).settings_file(&config.settings_file))
}

/// Initialize the themes feature.
#[must_use]
pub fn init(resolver: PageResolver) -> InitializedSlice {
    info!("Themes slice initialized");
    InitializedSlice::new(Themes::new(ThemesInner { resolver }))
}
