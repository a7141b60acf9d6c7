//! Supporting utilities for a static site generator.
//!
//! - [`path`]: virtual path algebra (`join_path`, `is_path_child_of`), POSIX
//!   normalization, relative URLs and extension splitting
//! - [`fs`]: atomic file writes and safe pruning of output files
//! - [`url`]: URL assembly helpers
//! - [`exec`]: executable lookup with an explicit cache
//! - [`json`]: HTML-safe JSON and dotted-key data helpers
//! - [`text`]: small string helpers
//! - [`deprecate`]: deprecation warnings for callables
//!
//! The [`config`] and [`cli`] modules back the `ssg-util` binary.

pub mod cli;
pub mod config;
pub mod deprecate;
pub mod exec;
pub mod fs;
pub mod json;
pub mod logger;
pub mod path;
pub mod text;
pub mod url;

pub use fs::{AtomicFile, AtomicHandle, OpenMode, open_atomic, with_atomic_open, write_atomic};
pub use path::{VirtualPath, is_path_child_of, join_path, split_virtual_path};
