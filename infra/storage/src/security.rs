use crate::error::StorageError;
use std::path::{Component, Path, PathBuf};

/// Lexically collapses `.` and `..`, refusing anything that climbs above the sandbox root
/// or is absolute.
pub(crate) fn normalize_relative(path: &Path) -> Result<PathBuf, StorageError> {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::Normal(segment) => out.push(segment),
            Component::ParentDir => {
                if !out.pop() {
                    return Err(traversal(path, "Path climbs above the sandbox root"));
                }
            },
            Component::RootDir | Component::Prefix(_) => {
                return Err(traversal(path, "Absolute paths are not allowed in the sandbox"));
            },
        }
    }

    Ok(out)
}

/// Joins `path` onto `root` and proves the physical result stays inside `root`.
///
/// Existing targets are canonicalized, so a symlink pointing outside the sandbox is
/// rejected. For missing targets the closest existing ancestor is checked instead.
pub(crate) fn resolve_path(root: &Path, path: &Path) -> Result<PathBuf, StorageError> {
    let joined = root.join(normalize_relative(path)?);

    match joined.canonicalize() {
        Ok(canonical) if canonical.starts_with(root) => Ok(canonical),
        Ok(canonical) => Err(traversal(&canonical, "Path resolves outside the sandbox")),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => verify_ancestor(root, joined),
        Err(err) => Err(StorageError::Io {
            source: err,
            context: Some(format!("Failed to canonicalize {}", joined.display()).into()),
        }),
    }
}

fn verify_ancestor(root: &Path, joined: PathBuf) -> Result<PathBuf, StorageError> {
    let Some(ancestor) = joined.ancestors().skip(1).find(|p| p == &root || p.exists()) else {
        return Err(traversal(&joined, "No ancestor inside the sandbox"));
    };

    if ancestor == root {
        return Ok(joined);
    }

    match ancestor.canonicalize() {
        Ok(canonical) if canonical.starts_with(root) => Ok(joined),
        Ok(canonical) => Err(traversal(&canonical, "Parent directory links outside the sandbox")),
        Err(err) => Err(StorageError::Io {
            source: err,
            context: Some(format!("Failed to verify parent of {}", joined.display()).into()),
        }),
    }
}

fn traversal(path: &Path, reason: &'static str) -> StorageError {
    StorageError::PathTraversalAttempt {
        message: path.display().to_string().into(),
        context: Some(reason.into()),
    }
}
