//! Reading side of the marker file, for tooling that watches a process.
//!
//! No locking and no takeover: a `Running` status only means the recorded
//! pid is alive right now, not that it belongs to the expected program.

use std::io;
use std::path::Path;

#[cfg(not(unix))]
use sysinfo::{ProcessesToUpdate, System};

use super::io::read_first_line;

/// What a marker file says about its process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStatus {
    /// No marker file at the path (or it cannot be opened).
    Missing,
    /// The file exists but does not hold a pid.
    Invalid,
    /// The recorded process is gone.
    Stale(u32),
    /// The recorded process exists.
    Running(u32),
}

impl MarkerStatus {
    /// Pid recorded in the marker, if any.
    pub const fn pid(self) -> Option<u32> {
        match self {
            Self::Stale(pid) | Self::Running(pid) => Some(pid),
            Self::Missing | Self::Invalid => None,
        }
    }

    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running(_))
    }
}

/// Parse the pid recorded in a marker file.
pub fn read_marker(path: &Path) -> io::Result<u32> {
    read_first_line(path)?
        .and_then(|line| line.trim().parse::<u32>().ok())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "missing or invalid PID"))
}

/// Check if a PID exists (without verifying which program it is).
///
/// Uses `kill` with the null signal, which checks existence without signalling.
#[cfg(unix)]
pub fn pid_exists(pid: u32) -> bool {
    use nix::errno::Errno;
    use nix::sys::signal;
    use nix::unistd::Pid;

    // 0 and values past i32::MAX address process groups, not a process
    let Ok(raw) = i32::try_from(pid) else {
        return false;
    };
    if raw == 0 {
        return false;
    }

    match signal::kill(Pid::from_raw(raw), None) {
        Ok(()) => true,
        Err(Errno::ESRCH) => false, // No such process
        Err(_) => true,             // Process exists but we lack permission
    }
}

/// Check if a PID exists (without verifying which program it is).
#[cfg(not(unix))]
pub fn pid_exists(pid: u32) -> bool {
    let target = sysinfo::Pid::from_u32(pid);
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::Some(&[target]), true);
    sys.process(target).is_some()
}

/// Classify the marker at `path`.
pub fn inspect(path: &Path) -> MarkerStatus {
    match read_marker(path) {
        Ok(pid) if pid_exists(pid) => MarkerStatus::Running(pid),
        Ok(pid) => MarkerStatus::Stale(pid),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => MarkerStatus::Invalid,
        Err(_) => MarkerStatus::Missing,
    }
}
