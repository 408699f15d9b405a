use crate::schema::{SchemaError, SettingsSchema};
use serde_json::{Map, Value};
use std::sync::Arc;
use tessera_domain::components::{CapabilitySet, ComponentSettings};

/// A registry entry: where a component lives, what it accepts and what it supports.
#[derive(Debug, Clone)]
pub struct ComponentDeclaration {
    pub key: String,
    /// Implementation location of the component (module path, asset URL...).
    pub path: String,
    pub schema: Arc<dyn SettingsSchema>,
    pub capabilities: CapabilitySet,
}

impl ComponentDeclaration {
    pub fn new(
        key: impl Into<String>,
        path: impl Into<String>,
        schema: impl SettingsSchema + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            schema: Arc::new(schema),
            capabilities: CapabilitySet::new(),
        }
    }

    #[must_use]
    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = capabilities.into_iter().collect();
        self
    }

    /// Runs the declaration's schema over a raw settings object.
    ///
    /// # Errors
    /// Propagates the schema's [`SchemaError`].
    pub fn validate(&self, settings: &Map<String, Value>) -> Result<ComponentSettings, SchemaError> {
        self.schema.validate(settings)
    }
}
