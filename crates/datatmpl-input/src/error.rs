//! Error types for reading input sources.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading a [`Source`](crate::Source).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Failed to read from stdin.
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    /// Failed to open or read a named file.
    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
