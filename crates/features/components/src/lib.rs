//! # Component Registry
//!
//! Maps component keys to their [`ComponentDeclaration`]: implementation path, settings
//! schema and capability tags. The registry is built once at startup from the built-in
//! catalogue and an optional JSON manifest, read by every theme resolution through
//! [`ComponentRegistry::snapshot`], and can be reloaded atomically at runtime.

mod builtins;
mod declaration;
mod error;
pub mod manifest;
mod registry;
#[cfg(feature = "server")]
mod routes;
pub mod schema;

pub use crate::builtins::{MAX_GALLERY_COLUMNS, builtin_declarations};
pub use crate::declaration::ComponentDeclaration;
pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::manifest::ComponentManifest;
pub use crate::registry::{ComponentRegistry, ComponentRegistryBuilder, RegistrySnapshot};
#[cfg(feature = "server")]
pub use crate::routes::components_router;
pub use crate::schema::{FieldSchema, FieldType, OpenSchema, SchemaError, SettingsSchema, TypedSchema};

use tessera_domain::config::ComponentsConfig;
use tessera_kernel::domain::registry::InitializedSlice;
use tracing::info;

/// Components feature state
#[tessera_derive::tessera_slice]
pub struct Components {
    pub registry: ComponentRegistry,
}

/// Builds the registry described by `config`.
///
/// # Errors
/// Returns a [`RegistryError`] when the configured manifest cannot be loaded.
pub fn build_registry(config: &ComponentsConfig) -> Result<ComponentRegistry, RegistryError> {
    let mut builder = ComponentRegistry::builder();
    if config.builtins {
        builder = builder.builtins();
    }
    if let Some(path) = &config.manifest {
        builder = builder.manifest(ComponentManifest::load(path)?);
    }
    Ok(builder.build())
}

/// Initialize the components feature around an already built registry.
#[must_use]
pub fn init(registry: ComponentRegistry) -> InitializedSlice {
    info!(components = registry.len(), "Components slice initialized");
    InitializedSlice::new(Components::new(ComponentsInner { registry }))
}
