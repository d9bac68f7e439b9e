//! Process environment port.
//!
//! The only place the marker asks the operating system about the running
//! process. Everything else in the crate is portable and testable through
//! substitution of this trait.

use std::path::PathBuf;

use crate::paths::{self, PathError};

/// Facts about, and control over, the hosting process.
///
/// # Implementations
///
/// - `SystemEnvironment` - the real process
/// - Test doubles that pin the pid and directory and record termination
#[cfg_attr(test, mockall::automock)]
pub trait ProcessEnvironment: Send + Sync {
    /// OS-assigned identifier of the running process.
    fn current_pid(&self) -> u32;

    /// Program name used for `<program>.pid` when none is given.
    fn program_name(&self) -> Result<String, PathError>;

    /// Directory used when no directory is given.
    fn default_marker_directory(&self) -> Result<PathBuf, PathError>;

    /// Terminate the hosting process with `code`.
    ///
    /// Production implementations do not return. Test doubles may return,
    /// in which case the caller carries on as if the exit policy were off.
    fn terminate(&self, code: i32);
}

/// `ProcessEnvironment` backed by the real process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    /// Create a new system environment.
    pub const fn new() -> Self {
        Self
    }
}

impl ProcessEnvironment for SystemEnvironment {
    fn current_pid(&self) -> u32 {
        std::process::id()
    }

    fn program_name(&self) -> Result<String, PathError> {
        paths::current_program_name()
    }

    fn default_marker_directory(&self) -> Result<PathBuf, PathError> {
        paths::default_marker_dir()
    }

    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}
