//! Errors surfaced by `PidMarker` construction.
//!
//! Runtime write, read and delete failures are absorbed and logged by the
//! marker, so only construction can fail.

use std::path::PathBuf;

use thiserror::Error;

use crate::paths::PathError;

/// Marker construction failure.
#[derive(Debug, Error)]
pub enum PidError {
    /// The marker did not contain the expected pid after the initial write.
    #[error("Verification of PID file {} failed (expected pid {pid})", .path.display())]
    Verification { path: PathBuf, pid: u32 },

    /// The marker location could not be resolved.
    #[error(transparent)]
    Path(#[from] PathError),
}
