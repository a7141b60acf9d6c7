//! Path error types.

use thiserror::Error;

/// Errors from relative path computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("cannot navigate from relative path `{from}` to absolute path `{to}`")]
    RelativeToAbsolute { from: String, to: String },
}
