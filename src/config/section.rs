//! Configuration sections.
//!
//! # Example
//!
//! ```toml
//! [log]
//! verbose = false          # Show debug output
//!
//! [exec]
//! paths = ["~/.local/bin"] # Searched before PATH
//!
//! [url]
//! trailing_slash = "auto"  # auto | always | never
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// `[log]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Show debug messages.
    pub verbose: bool,
}

/// `[exec]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExecConfig {
    /// Extra directories searched before `PATH`.
    /// Relative entries resolve against the config file's directory.
    pub paths: Vec<String>,
}

/// `[url]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UrlConfig {
    pub trailing_slash: TrailingSlash,
}

/// Trailing slash policy for built URLs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
    /// Append `/` unless the URL looks like a file.
    #[default]
    Auto,
    Always,
    Never,
}

impl TrailingSlash {
    /// The flag expected by [`crate::url::build_url`].
    pub const fn as_flag(self) -> Option<bool> {
        match self {
            Self::Auto => None,
            Self::Always => Some(true),
            Self::Never => Some(false),
        }
    }
}
