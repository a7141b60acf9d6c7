//! Removal of stale output files.
//!
//! Pruning never touches anything outside the output root, nor the root
//! itself.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::debug;

/// Make `path` absolute and resolve `.`/`..` lexically.
fn absolute_normalized(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Check whether deleting `path` could escape `base`.
///
/// Only paths strictly inside `base` are safe; `base` itself is not.
///
/// # Examples
/// ```
/// use ssg_util::fs::is_unsafe_to_delete;
/// assert!(!is_unsafe_to_delete("/site/out/index.html", "/site/out"));
/// assert!(is_unsafe_to_delete("/site/out", "/site/out"));
/// assert!(is_unsafe_to_delete("/site/out/../src", "/site/out"));
/// ```
pub fn is_unsafe_to_delete(path: impl AsRef<Path>, base: impl AsRef<Path>) -> bool {
    let path = absolute_normalized(path.as_ref());
    let base = absolute_normalized(base.as_ref());
    path == base || !path.starts_with(&base)
}

/// Result of [`prune_file_and_folder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pruned {
    /// `name` is `base` itself or lies outside it; nothing was touched.
    Refused,
    /// `name` could not be removed.
    Failed,
    /// `name` was removed, along with any parents it left empty.
    Removed,
}

impl Pruned {
    pub const fn is_removed(self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// Remove a file (or empty directory) and any parent directories it leaves
/// empty, stopping at `base` or at the first non-empty directory.
pub fn prune_file_and_folder(name: impl AsRef<Path>, base: impl AsRef<Path>) -> Pruned {
    let name = name.as_ref();
    let base = base.as_ref();

    if is_unsafe_to_delete(name, base) {
        return Pruned::Refused;
    }
    if fs::remove_file(name).is_err() && fs::remove_dir(name).is_err() {
        return Pruned::Failed;
    }
    debug!("prune"; "removed {}", name.display());

    let mut current = name.parent();
    while let Some(dir) = current {
        if dir.as_os_str().is_empty() || is_unsafe_to_delete(dir, base) {
            break;
        }
        if fs::remove_dir(dir).is_err() {
            break;
        }
        debug!("prune"; "removed empty {}", dir.display());
        current = dir.parent();
    }
    Pruned::Removed
}
