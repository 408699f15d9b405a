//! HTTP building blocks shared by every slice: the response envelope, the API state
//! container and the system routes.

pub mod response;
pub mod router;
pub mod state;
mod system;

pub use response::{ApiError, ApiResponse, ApiResult};
pub use router::system_router;
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
