//! Construction options for a `PidMarker`.
//!
//! Options are plain data so hosts can embed them in their own config files:
//!
//! ```json
//! { "target": { "kind": "program", "directory": "/var/run", "program_name": "worker" } }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths::{PathError, is_full_path, marker_path};
use crate::ports::ProcessEnvironment;

/// Where the marker file goes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerTarget {
    /// Default directory, running program's name.
    #[default]
    Auto,
    /// A full path if it looks like one, otherwise a program name.
    PathOrProgram { value: String },
    /// Exactly this path.
    FullPath { path: PathBuf },
    /// `<directory>/<program_name>.pid`; default directory when `directory` is `None`.
    Program {
        #[serde(default)]
        directory: Option<PathBuf>,
        program_name: String,
    },
}

/// Intent-based marker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerOptions {
    /// Where the marker file goes.
    #[serde(default)]
    pub target: MarkerTarget,
    /// Pid to record (if None, the current process id).
    #[serde(default)]
    pub pid: Option<u32>,
    /// Terminate the process when the marker cannot be written.
    #[serde(default = "default_true")]
    pub exit_on_write_error: bool,
    /// Emit `tracing` events.
    #[serde(default = "default_true")]
    pub logging_enabled: bool,
    /// Remove the marker when the handle is dropped without `close()`.
    #[serde(default = "default_true")]
    pub delete_on_drop: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self::with_target(MarkerTarget::Auto)
    }
}

impl MarkerOptions {
    /// Default directory, running program's name, current pid.
    pub fn new() -> Self {
        Self::default()
    }

    const fn with_target(target: MarkerTarget) -> Self {
        Self {
            target,
            pid: None,
            exit_on_write_error: true,
            logging_enabled: true,
            delete_on_drop: true,
        }
    }

    /// Use `value` verbatim if it is a full path, else treat it as a program name.
    pub fn path_or_program(value: impl Into<String>) -> Self {
        Self::with_target(MarkerTarget::PathOrProgram {
            value: value.into(),
        })
    }

    /// Explicit path and pid.
    pub fn full_path(path: impl Into<PathBuf>, pid: u32) -> Self {
        Self::with_target(MarkerTarget::FullPath { path: path.into() }).with_pid(pid)
    }

    /// `<directory>/<program_name>.pid`.
    pub fn in_directory(directory: impl Into<PathBuf>, program_name: impl Into<String>) -> Self {
        Self::with_target(MarkerTarget::Program {
            directory: Some(directory.into()),
            program_name: program_name.into(),
        })
    }

    /// `<default directory>/<program_name>.pid`.
    pub fn program(program_name: impl Into<String>) -> Self {
        Self::with_target(MarkerTarget::Program {
            directory: None,
            program_name: program_name.into(),
        })
    }

    /// Record `pid` instead of the current process id.
    #[must_use]
    pub const fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }

    /// Set the exit-on-write-error policy.
    #[must_use]
    pub const fn with_exit_on_write_error(mut self, exit: bool) -> Self {
        self.exit_on_write_error = exit;
        self
    }

    /// Enable or disable logging.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Enable or disable removal on drop.
    #[must_use]
    pub const fn with_delete_on_drop(mut self, enabled: bool) -> Self {
        self.delete_on_drop = enabled;
        self
    }

    /// Resolve the marker path and pid against `env`.
    ///
    /// Only consults the environment for what the target leaves open.
    pub fn resolve(&self, env: &dyn ProcessEnvironment) -> Result<(PathBuf, u32), PathError> {
        let path = match &self.target {
            MarkerTarget::Auto => {
                let program = env.program_name()?;
                marker_path(&env.default_marker_directory()?, &program)
            }
            MarkerTarget::PathOrProgram { value } => {
                if is_full_path(value) {
                    PathBuf::from(value)
                } else {
                    marker_path(&env.default_marker_directory()?, value)
                }
            }
            MarkerTarget::FullPath { path } => path.clone(),
            MarkerTarget::Program {
                directory: Some(directory),
                program_name,
            } => marker_path(directory, program_name),
            MarkerTarget::Program {
                directory: None,
                program_name,
            } => marker_path(&env.default_marker_directory()?, program_name),
        };

        let pid = self.pid.unwrap_or_else(|| env.current_pid());
        Ok((path, pid))
    }
}
