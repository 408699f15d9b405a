//! Common imports for feature slices.

pub use crate::domain::components::{CapabilitySet, ComponentInstance, ComponentSettings};
pub use crate::domain::config::ApiConfig;
pub use crate::domain::constants;
pub use crate::domain::pages::{PageDefinition, ResolvedPage};
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{
    response::{ApiError, ApiResponse, ApiResult},
    state::ApiState,
};
