//! Filesystem helpers for build output.
//!
//! - [`atomic`]: temp-file-then-rename writes (`open_atomic`, `write_atomic`)
//! - [`prune`]: removal of stale output files and their empty parents

pub mod atomic;
pub mod prune;

pub use atomic::{AtomicFile, AtomicHandle, OpenMode, open_atomic, with_atomic_open, write_atomic};
pub use prune::{Pruned, is_unsafe_to_delete, prune_file_and_folder};
