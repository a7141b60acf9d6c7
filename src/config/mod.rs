//! Tool configuration from `ssg-util.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [log], [exec], [url]
//! ├── error      # ConfigError
//! ├── util       # config discovery, path expansion
//! └── mod.rs     # UtilConfig (this file)
//! ```
//!
//! A missing config file is not an error: every section has defaults.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{ExecConfig, LogConfig, TrailingSlash, UrlConfig};
pub use util::find_config_file;

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{exec::ExecutableLocator, fs::write_atomic, log};

/// Default config file name.
pub const CONFIG_NAME: &str = "ssg-util.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `ssg-util.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UtilConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub exec: ExecConfig,

    #[serde(default)]
    pub url: UrlConfig,
}

impl UtilConfig {
    /// Load the config named `config_name`, searching upward from `cwd`.
    ///
    /// Falls back to defaults rooted at `cwd` when no file is found.
    pub fn load(config_name: &Path, cwd: &Path) -> Result<Self, ConfigError> {
        let Some(path) = find_config_file(config_name, cwd) else {
            return Ok(Self {
                root: cwd.to_path_buf(),
                ..Self::default()
            });
        };

        let mut config = Self::from_path(&path)?;
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        config.config_path = Some(path);
        config.validate()?;
        Ok(config)
    }

    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse, collecting the paths of keys no section understands.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exec.paths.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "[exec] paths must not contain empty entries".to_string(),
            ));
        }
        Ok(())
    }

    /// `[exec] paths` with `~` expanded and resolved against the root.
    pub fn exec_dirs(&self) -> Vec<PathBuf> {
        self.exec
            .paths
            .iter()
            .map(|p| util::resolve_user_path(p, &self.root))
            .collect()
    }

    /// An executable locator searching `[exec] paths` before `PATH`.
    pub fn locator(&self) -> ExecutableLocator {
        let dirs = self.exec_dirs();
        if dirs.is_empty() {
            ExecutableLocator::from_env()
        } else {
            ExecutableLocator::with_extra_dirs(&dirs)
        }
    }

    /// Trailing slash flag for URL building.
    pub const fn trailing_slash(&self) -> Option<bool> {
        self.url.trailing_slash.as_flag()
    }

    /// Write the default configuration to `path` atomically.
    pub fn write_default(path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(&Self::default())?;
        write_atomic(path, content.as_bytes())
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))
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
    fn test_default_sections() {
        let config = UtilConfig::from_str("").unwrap();
        assert!(!config.log.verbose);
        assert!(config.exec.paths.is_empty());
        assert_eq!(config.url.trailing_slash, TrailingSlash::Auto);
        assert_eq!(config.trailing_slash(), None);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = UtilConfig::from_str("[log\nverbose = true");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_full_config() {
        let config = UtilConfig::from_str(
            r#"
            [log]
            verbose = true

            [exec]
            paths = ["bin", "/opt/tools"]

            [url]
            trailing_slash = "always"
            "#,
        )
        .unwrap();
        assert!(config.log.verbose);
        assert_eq!(config.exec.paths, ["bin", "/opt/tools"]);
        assert_eq!(config.trailing_slash(), Some(true));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let (_, ignored) = UtilConfig::parse_with_ignored(
            r#"
            [log]
            verbose = true
            colour = "always"

            [deploy]
            target = "ftp"
            "#,
        )
        .unwrap();
        assert!(ignored.contains(&"log.colour".to_string()));
        assert!(ignored.contains(&"deploy".to_string()));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = UtilConfig::parse_with_ignored("[url]\ntrailing_slash = \"never\"").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_missing_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = UtilConfig::load(Path::new("ssg-util-missing.toml"), tmp.path()).unwrap();
        assert_eq!(config.config_path, None);
        assert_eq!(config.root, tmp.path());
        assert!(!config.log.verbose);
    }

    #[test]
    fn test_load_sets_root_from_config_dir() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_NAME),
            "[exec]\npaths = [\"tools\"]\n",
        )
        .unwrap();
        let nested = tmp.path().join("content");
        std::fs::create_dir(&nested).unwrap();

        let config = UtilConfig::load(Path::new(CONFIG_NAME), &nested).unwrap();
        assert_eq!(config.root, tmp.path());
        assert_eq!(config.config_path, Some(tmp.path().join(CONFIG_NAME)));
        assert_eq!(config.exec_dirs(), [tmp.path().join("tools")]);
    }

    #[test]
    fn test_load_rejects_empty_exec_path() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_NAME), "[exec]\npaths = [\" \"]\n").unwrap();

        let result = UtilConfig::load(Path::new(CONFIG_NAME), tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_write_default_roundtrips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_NAME);
        UtilConfig::write_default(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[url]"));
        assert!(content.contains("trailing_slash = \"auto\""));

        let loaded = UtilConfig::load(Path::new(CONFIG_NAME), tmp.path()).unwrap();
        assert_eq!(loaded.url, UrlConfig::default());
        assert_eq!(loaded.log, LogConfig::default());
    }

    #[test]
    fn test_write_default_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope").join(CONFIG_NAME);
        let err = UtilConfig::write_default(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(ref p, _) if *p == path));
    }
}
