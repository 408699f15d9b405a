//! Components discovered at startup from a JSON manifest.
//!
//! ```json
//! {
//!   "components": [
//!     {
//!       "key": "newsletter",
//!       "path": "ext/newsletter",
//!       "capabilities": ["responsive"],
//!       "schema": {
//!         "fields": { "listId": { "type": "string", "required": true } },
//!         "additionalFields": false
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! An entry without `schema` accepts any settings object.

use crate::declaration::ComponentDeclaration;
use crate::error::{RegistryError, RegistryErrorExt};
use crate::schema::{FieldSchema, OpenSchema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tessera_domain::components::CapabilitySet;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComponentManifest {
    pub components: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ManifestEntry {
    pub key: String,
    pub path: String,
    #[serde(default)]
    pub capabilities: CapabilitySet,
    #[serde(default)]
    pub schema: Option<FieldSchema>,
}

impl ComponentManifest {
    /// Parses and validates a manifest document.
    ///
    /// # Errors
    /// [`RegistryError::Parse`] for malformed JSON, [`RegistryError::InvalidManifest`] for
    /// blank or duplicated keys and blank paths.
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let manifest: Self = serde_json::from_str(raw).context("Parsing component manifest")?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    /// [`RegistryError::Io`] when the file cannot be read, otherwise as [`Self::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .context(format!("Reading component manifest {}", path.display()))?;
        let manifest =
            Self::from_json(&raw).context(format!("Component manifest {}", path.display()))?;
        debug!(path = %path.display(), components = manifest.components.len(), "Manifest loaded");
        Ok(manifest)
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = BTreeSet::new();
        for (index, entry) in self.components.iter().enumerate() {
            if entry.key.trim().is_empty() {
                return Err(invalid(format!("components[{index}].key must not be blank")));
            }
            if entry.path.trim().is_empty() {
                return Err(invalid(format!("component '{}' has a blank path", entry.key)));
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(invalid(format!("component '{}' is declared twice", entry.key)));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn into_declarations(self) -> Vec<ComponentDeclaration> {
        self.components.into_iter().map(ManifestEntry::into_declaration).collect()
    }
}

impl ManifestEntry {
    #[must_use]
    pub fn into_declaration(self) -> ComponentDeclaration {
        let declaration = match self.schema {
            Some(schema) => ComponentDeclaration::new(self.key, self.path, schema),
            None => ComponentDeclaration::new(self.key, self.path, OpenSchema),
        };
        ComponentDeclaration { capabilities: self.capabilities, ..declaration }
    }
}

fn invalid(message: String) -> RegistryError {
    RegistryError::InvalidManifest { message: message.into(), context: None }
}
