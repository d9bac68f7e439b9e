//! Path-related error types.
//!
//! Raised only while resolving the default marker location; writing,
//! reading and deleting the marker itself never surface errors.

use thiserror::Error;

/// Errors that can occur while resolving a marker path.
#[derive(Debug, Error)]
pub enum PathError {
    /// The path of the running executable could not be determined.
    #[error("Cannot determine path of the running executable: {0}")]
    NoExecutable(String),

    /// The running executable has no usable file name.
    #[error("Cannot determine program name of the running executable")]
    NoProgramName,

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
