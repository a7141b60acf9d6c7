//! `which`, `write` and `prune` commands.

use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::{
    config::UtilConfig,
    fs::{self, Pruned},
    log,
};

/// Locate `name` with the configured search path.
pub fn which(config: &UtilConfig, name: &str, cwd: &Path) -> Result<PathBuf> {
    let locator = config.locator();
    locator
        .locate(name, Some(cwd))
        .with_context(|| format!("could not locate executable `{name}`"))
}

/// Replace `path` with the content of `from` (or stdin) atomically.
pub fn write(path: &Path, from: Option<&Path>) -> Result<()> {
    let content = match from {
        Some(src) => {
            std::fs::read(src).with_context(|| format!("Failed to read {}", src.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    fs::write_atomic(path, &content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log!("write"; "wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Prune `path` below `base`.
pub fn prune(path: &Path, base: &Path) -> Result<()> {
    match fs::prune_file_and_folder(path, base) {
        Pruned::Refused => bail!(
            "refusing to remove {} outside of {}",
            path.display(),
            base.display()
        ),
        Pruned::Failed => bail!("could not remove {}", path.display()),
        Pruned::Removed => {
            log!("prune"; "removed {}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_from_file() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.txt");
        let dst = tmp.path().join("dst.txt");
        std::fs::write(&src, "fresh").unwrap();
        std::fs::write(&dst, "stale").unwrap();

        write(&dst, Some(&src)).unwrap();
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "fresh");
    }

    #[test]
    fn test_write_missing_source_keeps_target() {
        let tmp = TempDir::new().unwrap();
        let dst = tmp.path().join("dst.txt");
        std::fs::write(&dst, "stale").unwrap();

        let err = write(&dst, Some(&tmp.path().join("missing"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "stale");
    }

    #[test]
    fn test_prune_outside_base_errors() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("out");
        std::fs::create_dir(&base).unwrap();

        let err = prune(&base, &base).unwrap_err();
        assert!(err.to_string().contains("refusing"));
        assert!(base.exists());
    }

    #[test]
    fn test_prune_inside_base() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("out");
        std::fs::create_dir_all(base.join("old")).unwrap();
        std::fs::write(base.join("keep.html"), "").unwrap();
        let file = base.join("old/index.html");
        std::fs::write(&file, "").unwrap();

        prune(&file, &base).unwrap();
        assert!(!base.join("old").exists());
        assert!(base.join("keep.html").exists());
    }

    #[test]
    fn test_prune_empties_every_parent_below_base() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("out");
        std::fs::create_dir_all(base.join("old/deep")).unwrap();
        let file = base.join("old/deep/index.html");
        std::fs::write(&file, "").unwrap();

        prune(&file, &base).unwrap();
        assert!(!base.join("old").exists());
        assert!(base.exists());
    }

    #[test]
    fn test_prune_missing_file_errors() {
        let tmp = TempDir::new().unwrap();
        let err = prune(&tmp.path().join("gone.html"), tmp.path()).unwrap_err();
        assert!(err.to_string().contains("could not remove"));
    }

    #[test]
    fn test_which_missing() {
        let tmp = TempDir::new().unwrap();
        let config = UtilConfig {
            root: tmp.path().to_path_buf(),
            ..UtilConfig::default()
        };
        let err = which(&config, "ssg-util-no-such-tool", tmp.path()).unwrap_err();
        assert!(err.to_string().contains("could not locate"));
    }

    #[cfg(unix)]
    #[test]
    fn test_which_uses_config_paths() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("tools")).unwrap();
        let exe = tmp.path().join("tools/ssg-util-helper");
        std::fs::write(&exe, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut config = UtilConfig::from_str("[exec]\npaths = [\"tools\"]").unwrap();
        config.root = tmp.path().to_path_buf();
        assert_eq!(which(&config, "ssg-util-helper", tmp.path()).unwrap(), exe);
    }
}
