//! Marker file I/O primitives.
//!
//! Format: the decimal pid, no trailing newline
//! ```text
//! <pid>
//! ```
//!
//! These return `io::Result`; the policy of absorbing failures lives in
//! `PidMarker`.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Outcome of a marker removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
    Removed,
    Missing,
}

/// Create or truncate `path` and write `pid` in decimal.
pub(crate) fn write_pid(path: &Path, pid: u32) -> io::Result<()> {
    fs::write(path, pid.to_string())
}

/// Read the first line of `path`, without its line terminator.
///
/// `Ok(None)` for an empty file.
pub(crate) fn read_first_line(path: &Path) -> io::Result<Option<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().next().transpose()
}

/// Remove `path` (idempotent - a missing file is not an error).
pub(crate) fn remove_marker(path: &Path) -> io::Result<Removal> {
    match fs::remove_file(path) {
        Ok(()) => Ok(Removal::Removed),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Removal::Missing),
        Err(e) => Err(e),
    }
}
