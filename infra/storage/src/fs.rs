//! The filesystem contract consumed by theme providers.

use crate::error::{StorageError, StorageErrorExt};
use async_trait::async_trait;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// Kind of a directory entry returned by [`FileSystem::list_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name relative to the listed directory.
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

/// Read-only filesystem operations over paths relative to an implementation-defined root.
///
/// Every path argument is relative; implementations decide how it maps onto physical
/// storage and must refuse paths that escape their root.
#[async_trait]
pub trait FileSystem: Debug + Send + Sync {
    /// Resolves `path` to the physical location it would be read from.
    ///
    /// # Errors
    /// Returns [`StorageError::PathTraversalAttempt`] when the path escapes the root.
    async fn normalize(&self, path: &Path) -> Result<PathBuf, StorageError>;

    /// `Ok(false)` only when nothing exists at `path`.
    ///
    /// # Errors
    /// Fails when the path cannot be resolved safely or its metadata cannot be read
    /// (permissions, symlink loops...).
    async fn exists(&self, path: &Path) -> Result<bool, StorageError>;

    /// # Errors
    /// Same as [`FileSystem::exists`].
    async fn is_dir(&self, path: &Path) -> Result<bool, StorageError>;

    /// Lists the direct children of a directory, sorted by name.
    ///
    /// # Errors
    /// Returns [`StorageError::DirectoryNotFound`] when `path` is not a directory.
    async fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, StorageError>;

    /// Reads a whole file on the calling thread.
    ///
    /// # Errors
    /// Returns [`StorageError::FileNotFound`] when the file is missing.
    fn read_sync(&self, path: &Path) -> Result<Vec<u8>, StorageError>;

    /// Reads a whole file.
    ///
    /// # Errors
    /// Returns [`StorageError::FileNotFound`] when the file is missing.
    async fn read(&self, path: &Path) -> Result<Vec<u8>, StorageError>;

    /// Reads a whole file as UTF-8 text.
    ///
    /// # Errors
    /// Same as [`FileSystem::read`], plus [`StorageError::Encoding`] for invalid UTF-8.
    async fn read_to_string(&self, path: &Path) -> Result<String, StorageError> {
        let bytes = self.read(path).await?;
        String::from_utf8(bytes).context(format!("Decoding {}", path.display()))
    }
}
