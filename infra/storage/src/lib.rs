//! A sandboxed, read-only view over a directory tree.
//!
//! Theme providers read settings documents through the [`FileSystem`] trait; the
//! disk-backed [`Storage`] implementation guarantees that no relative path, `..`
//! sequence or symlink can reach outside the configured root.
//!
//! # Example
//!
//! ```rust
//! use tessera_storage::{FileSystem, Storage, StorageError};
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), StorageError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     # let root = tmp.path().join("themes");
//!     let storage = Storage::builder().root(&root).create(true).connect().await?;
//!
//!     assert!(storage.list_dir(Path::new("")).await?.is_empty());
//!     assert!(storage.normalize(Path::new("../outside")).await.is_err());
//!     Ok(())
//! }
//! ```

mod builder;
mod engine;
mod error;
mod fs;
mod security;

pub use builder::StorageBuilder;
pub use engine::Storage;
pub use error::{StorageError, StorageErrorExt};
pub use fs::{DirEntry, EntryKind, FileSystem};
