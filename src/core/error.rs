//! Error kinds surfaced by the editing core.
//!
//! All creation-time failures are reported synchronously with no side effect
//! on the registry. Search misses are not errors; the search family returns
//! `Option<usize>` instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by buffer creation and file I/O.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Read/write/stat failure, carrying the underlying cause
    #[error("could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creation target exists but is not a plain file
    #[error("{} is not a regular file", .0.display())]
    NotRegularFile(PathBuf),

    /// A buffer with this display name is already open
    #[error("a buffer with the name ({0}) is already open")]
    DuplicateName(String),

    /// The resolved path is already open in another buffer
    #[error("{} is already open in another buffer", .0.display())]
    DuplicatePath(PathBuf),
}

impl EditorError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
