//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CONFIG_NAME, TrailingSlash};

/// Path, URL and file utilities for static site builds
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: ssg-util.toml)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Split a path into its real and virtual (`@`) parts
    Split {
        path: String,
    },

    /// Join a path onto a base path, honoring virtual parts
    #[command(visible_alias = "j")]
    Join {
        base: String,
        path: String,
    },

    /// Check whether one path is strictly below another
    ChildOf {
        path: String,
        parent: String,

        /// Also count a path as a child of itself
        #[arg(short, long)]
        allow_self: bool,
    },

    /// Compute the relative path (or URL) from one location to another
    #[command(visible_alias = "r")]
    Relative {
        source: String,
        target: String,

        /// Treat both locations as URLs
        #[arg(short, long)]
        url: bool,
    },

    /// Assemble a site URL from path pieces
    #[command(visible_alias = "u")]
    Url {
        #[arg(required = true)]
        items: Vec<String>,

        /// Trailing slash policy (default: from config)
        #[arg(short, long, value_enum)]
        trailing_slash: Option<TrailingSlash>,
    },

    /// URL of an artifact derived from another URL
    DependentUrl {
        url: String,
        suffix: String,

        /// Replacement extension, including the dot
        #[arg(short, long)]
        ext: Option<String>,
    },

    /// Locate an executable, searching `[exec] paths` first
    #[command(visible_alias = "w")]
    Which {
        name: String,

        /// Resolve path-like names against this directory
        #[arg(long, value_hint = clap::ValueHint::DirPath)]
        cwd: Option<PathBuf>,
    },

    /// Atomically replace a file with stdin (or another file)
    Write {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,

        /// Read content from this file instead of stdin
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        from: Option<PathBuf>,
    },

    /// Remove an output file and the empty directories it leaves behind
    Prune {
        #[arg(value_hint = clap::ValueHint::AnyPath)]
        path: PathBuf,

        /// Output root that is never removed or escaped
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        base: PathBuf,
    },

    /// Transform JSON data
    Json {
        #[command(flatten)]
        args: JsonArgs,
    },

    /// Write a default config file
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,

        /// Print the config template instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Json command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct JsonArgs {
    /// Input file (default: stdin)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Treat the input as an object with dotted keys and rebuild nesting
    #[arg(short = 'F', long)]
    pub flat: bool,

    /// Merge these files into the input; the input wins on conflicts
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub merge: Vec<PathBuf>,

    /// Print only the value at this dotted path
    #[arg(short, long)]
    pub get: Option<String>,

    /// Escape output for embedding in HTML
    #[arg(short = 'H', long)]
    pub html_safe: bool,

    /// Pretty-print JSON output
    #[arg(short, long, conflicts_with = "html_safe")]
    pub pretty: bool,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
