//! Facade crate for Tessera features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `tessera` with the desired feature flags (`server`).
//! - Call [`init`] to build the component registry and theme resolver and get the feature
//!   slices to register in the API state.

use std::borrow::Cow;
use tessera_components::RegistryError;
pub use tessera_domain as domain;
use tessera_domain::config::ApiConfig;
pub use tessera_kernel as kernel;
use tessera_themes::{PageResolver, ThemeProviderError};
pub use tessera_storage as storage;
use tracing::info;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use tessera_components::components_router;
        pub use tessera_kernel::server::router::system_router;
        pub use tessera_themes::themes_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use tessera_components as components;
    pub use tessera_themes as themes;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "components",
        "themes",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[tessera_derive::tessera_error]
pub enum InitError {
    #[error("Component registry bootstrap failed{}: {source}", format_context(.context))]
    Components { source: RegistryError, context: Option<Cow<'static, str>> },
    #[error("Theme provider bootstrap failed{}: {source}", format_context(.context))]
    Themes { source: ThemeProviderError, context: Option<Cow<'static, str>> },
}

/// Initialize all features: the component registry first, then the theme resolver that
/// reads from it.
///
/// # Errors
/// Returns an error if the component manifest or the themes root cannot be loaded.
pub async fn init(config: &ApiConfig) -> Result<Vec<domain::registry::InitializedSlice>, InitError> {
    let registry = features::components::build_registry(&config.components)?;
    let provider = features::themes::build_provider(&config.themes).await?;
    let resolver = PageResolver::new(provider, registry.clone());

    let slices = vec![features::components::init(registry), features::themes::init(resolver)];
    info!(slices = slices.len(), "Feature slices initialized");

    Ok(slices)
}
