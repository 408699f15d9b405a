//! Page definitions and the resolved composition plan.

use crate::components::ComponentInstance;
use serde::Serialize;

/// A validated page, with every valid instance in declaration order (including hidden ones).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDefinition {
    /// Unique within its theme.
    pub id: String,
    pub name: String,
    /// Route or address of the page.
    pub path: String,
    pub components: Vec<ComponentInstance>,
}

/// A render-ready page: visible instances only, sorted by `order`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub id: String,
    pub name: String,
    pub path: String,
    pub components: Vec<ComponentInstance>,
}

impl ResolvedPage {
    /// Component ids in render order.
    pub fn component_ids(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.id.as_str())
    }
}
