use crate::engine::{Storage, StorageInner};
use crate::error::{StorageError, StorageErrorExt};
use private::Sealed;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::info;

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

/// Type-state builder for [`Storage`]; a root is required before `connect`.
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct StorageBuilder<S: Sealed = NoRoot> {
    state: S,
    create: bool,
}

#[allow(private_bounds)]
impl<S: Sealed> StorageBuilder<S> {
    /// Creates the root directory on `connect` when it does not exist yet.
    #[must_use = "Sets whether the root directory should be created if missing"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.create = enable;
        self
    }
}

impl StorageBuilder<NoRoot> {
    #[must_use = "Creates a new storage builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory of the sandbox"]
    pub fn root(self, path: impl Into<PathBuf>) -> StorageBuilder<WithRoot> {
        StorageBuilder { state: WithRoot(path.into()), create: self.create }
    }
}

impl StorageBuilder<WithRoot> {
    /// Validates the root and returns a [`Storage`] handle.
    ///
    /// The root is canonicalized so later containment checks compare physical paths.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DirectoryNotFound`] if the root is missing and
    /// `create(true)` was not set, or [`StorageError::Io`] if it cannot be created or
    /// resolved.
    pub async fn connect(self) -> Result<Storage, StorageError> {
        let root = self.state.0;

        if self.create {
            fs::create_dir_all(&root)
                .await
                .context(format!("Failed to bootstrap storage root: {}", root.display()))?;
        } else if !fs::try_exists(&root).await.unwrap_or(false) {
            return Err(StorageError::DirectoryNotFound {
                message: root.display().to_string().into(),
                context: Some("Storage root does not exist".into()),
            });
        }

        let canonical = fs::canonicalize(&root)
            .await
            .context(format!("Failed to resolve storage root: {}", root.display()))?;

        info!(path = %canonical.display(), "Storage root attached");

        Ok(Storage { inner: Arc::new(StorageInner { root: canonical }) })
    }
}
