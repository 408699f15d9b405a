//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the API state container and the
//! response envelope every route speaks.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! use tessera_kernel::config::load_config;
//! use tessera_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(cfg.components.builtins);
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use tessera_domain as domain;
