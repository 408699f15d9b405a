//! Disk-backed [`FileSystem`] implementation.
//!
//! [`Storage`] is rooted at a canonical directory; every operation resolves its path
//! through the sandbox checks in `security` before touching the disk. Path resolution
//! and directory walks run on the blocking pool, metadata and reads go through
//! `tokio::fs`.

use crate::builder::StorageBuilder;
use crate::error::{StorageError, StorageErrorExt};
use crate::fs::{DirEntry, EntryKind, FileSystem};
use crate::security;
use async_trait::async_trait;
use std::fs::Metadata;
use std::io::ErrorKind;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

/// The internal shared state of a [`Storage`] instance.
#[derive(Debug)]
pub struct StorageInner {
    /// Canonical physical path every relative path is resolved against.
    pub(crate) root: PathBuf,
}

/// A thread-safe, read-only handle to a sandboxed directory tree.
///
/// The handle is reference-counted and cheap to clone across tasks.
///
/// # Example
///
/// ```rust
/// use tessera_storage::{FileSystem, Storage, StorageError};
/// use std::path::Path;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), StorageError> {
///     # let tmp = tempfile::tempdir().unwrap();
///     # std::fs::create_dir_all(tmp.path().join("aurora")).unwrap();
///     # std::fs::write(tmp.path().join("aurora/settings.json"), b"{}").unwrap();
///     let storage = Storage::builder().root(tmp.path()).connect().await?;
///
///     assert!(storage.is_dir(Path::new("aurora")).await?);
///     let raw = storage.read_to_string(Path::new("aurora/settings.json")).await?;
///     assert_eq!(raw, "{}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Storage {
    pub(crate) inner: Arc<StorageInner>,
}

impl Deref for Storage {
    type Target = StorageInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Storage {
    #[must_use = "The storage is not initialized until you call .connect()"]
    pub fn builder() -> StorageBuilder {
        StorageBuilder::new()
    }

    /// The canonical root directory of this sandbox.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Metadata of `path`, `None` when nothing exists there.
    async fn metadata(&self, path: &Path) -> Result<Option<Metadata>, StorageError> {
        let resolved = self.normalize(path).await?;
        match fs::metadata(&resolved).await {
            Ok(meta) => Ok(Some(meta)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).context(format!("Failed to get metadata: {}", resolved.display())),
        }
    }

    fn not_found(resolved: &Path) -> StorageError {
        StorageError::FileNotFound { message: resolved.display().to_string().into(), context: None }
    }
}

/// Runs blocking filesystem work off the async workers.
async fn blocking<T, F>(task: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task).await.map_err(|err| StorageError::Io {
        source: std::io::Error::other(err),
        context: Some("Blocking filesystem task failed".into()),
    })?
}

fn children(resolved: &Path) -> Result<Vec<DirEntry>, StorageError> {
    if !resolved.is_dir() {
        return Err(StorageError::DirectoryNotFound {
            message: resolved.display().to_string().into(),
            context: None,
        });
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(resolved).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| StorageError::Io {
            source: err.into(),
            context: Some(format!("Listing {}", resolved.display()).into()),
        })?;
        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "Skipping non UTF-8 entry");
            continue;
        };
        let kind = if entry.file_type().is_dir() { EntryKind::Directory } else { EntryKind::File };
        entries.push(DirEntry { name: name.to_owned(), kind });
    }

    Ok(entries)
}

#[async_trait]
impl FileSystem for Storage {
    async fn normalize(&self, path: &Path) -> Result<PathBuf, StorageError> {
        let root = self.root.clone();
        let path = path.to_path_buf();
        blocking(move || security::resolve_path(&root, &path)).await
    }

    async fn exists(&self, path: &Path) -> Result<bool, StorageError> {
        Ok(self.metadata(path).await?.is_some())
    }

    async fn is_dir(&self, path: &Path) -> Result<bool, StorageError> {
        Ok(self.metadata(path).await?.is_some_and(|meta| meta.is_dir()))
    }

    async fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, StorageError> {
        let root = self.root.clone();
        let path = path.to_path_buf();
        blocking(move || children(&security::resolve_path(&root, &path)?)).await
    }

    fn read_sync(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        let resolved = security::resolve_path(&self.root, path)?;
        match std::fs::read(&resolved) {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(Self::not_found(&resolved)),
            Err(err) => Err(err).context(format!("Read failed: {}", resolved.display())),
        }
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>, StorageError> {
        let resolved = self.normalize(path).await?;
        let data = match fs::read(&resolved).await {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Self::not_found(&resolved));
            },
            Err(err) => {
                return Err(err).context(format!("Read failed: {}", resolved.display()));
            },
        };

        debug!(path = %resolved.display(), bytes = data.len(), "File read");
        Ok(data)
    }
}
