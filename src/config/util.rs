//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is if it exists.
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← start
/// /home/user/site/ssg-util.toml   ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Expand `~` and resolve relative paths against `root`.
pub fn resolve_user_path(path: &str, root: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
    if expanded.is_relative() {
        root.join(expanded)
    } else {
        expanded
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_walks_up() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("ssg-util.toml");
        std::fs::write(&config, "").unwrap();
        let nested = tmp.path().join("content/posts");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(Path::new("ssg-util.toml"), &nested);
        assert_eq!(found, Some(config));
    }

    #[test]
    fn test_find_config_file_missing() {
        let tmp = TempDir::new().unwrap();
        let name = Path::new("ssg-util-definitely-missing.toml");
        assert_eq!(find_config_file(name, tmp.path()), None);
    }

    #[test]
    fn test_find_config_file_absolute() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("custom.toml");
        assert_eq!(find_config_file(&config, Path::new("/")), None);
        std::fs::write(&config, "").unwrap();
        assert_eq!(find_config_file(&config, Path::new("/")), Some(config));
    }

    #[test]
    fn test_resolve_user_path() {
        let root = Path::new("/site");
        assert_eq!(resolve_user_path("bin", root), PathBuf::from("/site/bin"));
        assert_eq!(resolve_user_path("/opt/bin", root), PathBuf::from("/opt/bin"));
        let home = resolve_user_path("~/bin", root);
        assert!(!home.starts_with("~"));
        assert!(home.ends_with("bin"));
    }
}
