use serde::Serialize;

/// A recoverable problem found while resolving a theme.
///
/// The offending page or component instance is left out of the composition; everything
/// else is still resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum ResolutionIssue {
    /// A page entry is not an object, or `field` is missing or mistyped (`"."` for the entry itself).
    #[error("page #{page_index}: invalid field `{field}`")]
    InvalidPageDefinition { page_index: usize, field: String },
    #[error("page #{page_index}: duplicate page id '{page_id}'")]
    DuplicatePageId { page_index: usize, page_id: String },
    /// A component entry is not an object, or `field` is missing or mistyped.
    #[error("page '{page_id}': component #{component_index} has invalid field `{field}`")]
    InvalidComponentDefinition { page_id: String, component_index: usize, field: String },
    #[error("page '{page_id}': duplicate component id '{component_id}'")]
    DuplicateComponentId { page_id: String, component_id: String },
    #[error("page '{page_id}': component '{component_id}' uses unknown component '{key}'")]
    UnknownComponent { page_id: String, component_id: String, key: String },
    #[error("page '{page_id}': component '{component_id}' ({key}) has invalid settings: {detail}")]
    InvalidComponentSettings { page_id: String, component_id: String, key: String, detail: String },
}

impl ResolutionIssue {
    /// The page the issue belongs to, when the page itself got an id.
    #[must_use]
    pub fn page_id(&self) -> Option<&str> {
        match self {
            Self::InvalidPageDefinition { .. } => None,
            Self::DuplicatePageId { page_id, .. }
            | Self::InvalidComponentDefinition { page_id, .. }
            | Self::DuplicateComponentId { page_id, .. }
            | Self::UnknownComponent { page_id, .. }
            | Self::InvalidComponentSettings { page_id, .. } => Some(page_id),
        }
    }

    /// The component instance the issue belongs to, if it had an id.
    #[must_use]
    pub fn component_id(&self) -> Option<&str> {
        match self {
            Self::DuplicateComponentId { component_id, .. }
            | Self::UnknownComponent { component_id, .. }
            | Self::InvalidComponentSettings { component_id, .. } => Some(component_id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPageDefinition { .. } => "InvalidPageDefinition",
            Self::DuplicatePageId { .. } => "DuplicatePageId",
            Self::InvalidComponentDefinition { .. } => "InvalidComponentDefinition",
            Self::DuplicateComponentId { .. } => "DuplicateComponentId",
            Self::UnknownComponent { .. } => "UnknownComponent",
            Self::InvalidComponentSettings { .. } => "InvalidComponentSettings",
        }
    }
}
