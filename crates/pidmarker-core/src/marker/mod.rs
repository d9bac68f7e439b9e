//! PID marker lifecycle: resolve, write, verify, remove.
//!
//! # Guarantees
//! - Construction succeeds only if the file holds exactly the pid afterwards
//! - Write, read and delete failures never surface as errors
//! - `close()` is idempotent; dropping an open marker removes it (best effort)

mod io;
mod status;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info, trace, warn};

use crate::error::PidError;
use crate::events::{WriteErrorEvent, WriteErrorObservers};
use crate::options::MarkerOptions;
use crate::ports::{ProcessEnvironment, SystemEnvironment};

use io::Removal;

pub use status::{MarkerStatus, inspect, pid_exists, read_marker};

/// Exit status used when the write-error policy terminates the process.
pub const WRITE_ERROR_EXIT_CODE: i32 = 0;

/// Emit a `tracing` event only when logging is enabled.
macro_rules! log_if {
    ($enabled:expr, $level:ident!($($arg:tt)+)) => {
        if $enabled {
            $level!($($arg)+);
        }
    };
}

/// Owns a single marker file for the lifetime of the handle.
pub struct PidMarker {
    path: PathBuf,
    pid: u32,
    exit_on_write_error: bool,
    logging_enabled: bool,
    delete_on_drop: bool,
    closed: bool,
    observers: WriteErrorObservers,
    env: Arc<dyn ProcessEnvironment>,
}

/// Configures a `PidMarker` before the initial write.
pub struct PidMarkerBuilder {
    options: MarkerOptions,
    env: Arc<dyn ProcessEnvironment>,
    observers: WriteErrorObservers,
}

impl PidMarkerBuilder {
    /// Replace the process environment (pid, default directory, termination).
    #[must_use]
    pub fn environment(mut self, env: Arc<dyn ProcessEnvironment>) -> Self {
        self.env = env;
        self
    }

    /// Register an observer for the write-error exit.
    ///
    /// Observers run synchronously, in registration order, right before the
    /// process terminates.
    #[must_use]
    pub fn on_write_error<F>(mut self, observer: F) -> Self
    where
        F: Fn(&WriteErrorEvent) + Send + Sync + 'static,
    {
        self.observers.register(Box::new(observer));
        self
    }

    /// Resolve the marker location, write it and verify it.
    pub fn open(self) -> Result<PidMarker, PidError> {
        let Self {
            options,
            env,
            observers,
        } = self;

        let (path, pid) = options.resolve(env.as_ref())?;
        log_if!(options.logging_enabled, trace!(pid, "Resolved process id"));

        let mut marker = PidMarker {
            path,
            pid,
            exit_on_write_error: options.exit_on_write_error,
            logging_enabled: options.logging_enabled,
            delete_on_drop: options.delete_on_drop,
            closed: false,
            observers,
            env,
        };

        marker.write();

        if marker.verify() {
            log_if!(
                marker.logging_enabled,
                info!("Successfully created PID file at {}", marker.path.display())
            );
            Ok(marker)
        } else {
            log_if!(
                marker.logging_enabled,
                error!("Verification of PID file {} failed", marker.path.display())
            );
            // Whatever sits at the path is not ours to remove
            marker.closed = true;
            Err(PidError::Verification {
                path: marker.path.clone(),
                pid: marker.pid,
            })
        }
    }
}

impl PidMarker {
    /// Start configuring a marker.
    pub fn builder(options: MarkerOptions) -> PidMarkerBuilder {
        PidMarkerBuilder {
            options,
            env: Arc::new(SystemEnvironment::new()),
            observers: WriteErrorObservers::new(),
        }
    }

    /// Open a marker for the real process with no observers.
    pub fn open(options: MarkerOptions) -> Result<Self, PidError> {
        Self::builder(options).open()
    }

    /// Path of the marker file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pid recorded in the marker file.
    pub const fn pid(&self) -> u32 {
        self.pid
    }

    pub const fn exit_on_write_error(&self) -> bool {
        self.exit_on_write_error
    }

    pub const fn set_exit_on_write_error(&mut self, exit: bool) {
        self.exit_on_write_error = exit;
    }

    pub const fn logging_enabled(&self) -> bool {
        self.logging_enabled
    }

    pub const fn set_logging_enabled(&mut self, enabled: bool) {
        self.logging_enabled = enabled;
    }

    /// Whether `close()` has run.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Compare the pid in the file with ours. True if they are identical.
    ///
    /// Read failures count as a mismatch.
    pub fn verify(&self) -> bool {
        let expected = self.pid.to_string();

        if self.read().as_deref() == Some(expected.as_str()) {
            log_if!(self.logging_enabled, trace!("PID file verification successful"));
            true
        } else {
            log_if!(
                self.logging_enabled,
                error!(path = %self.path.display(), pid = self.pid, "PID file verification failed")
            );
            false
        }
    }

    /// Remove the marker file. Call before exiting the program.
    ///
    /// Safe to call any number of times, and when the file was never written
    /// or was removed externally.
    pub fn close(&mut self) {
        self.delete();
        self.closed = true;
    }

    /// Write our pid, applying the write-error policy on failure.
    fn write(&self) {
        match io::write_pid(&self.path, self.pid) {
            Ok(()) => {
                log_if!(
                    self.logging_enabled,
                    trace!("Wrote PID file with pid='{}' to '{}'", self.pid, self.path.display())
                );
            }
            Err(e) if self.exit_on_write_error => {
                log_if!(
                    self.logging_enabled,
                    error!(
                        path = %self.path.display(),
                        pid = self.pid,
                        "Could not write PID file: {e}. Exiting program"
                    )
                );
                self.observers
                    .notify(&WriteErrorEvent::new(self.path.clone(), self.pid));
                self.env.terminate(WRITE_ERROR_EXIT_CODE);
            }
            Err(e) => {
                log_if!(
                    self.logging_enabled,
                    error!(path = %self.path.display(), pid = self.pid, "Could not write PID file: {e}")
                );
            }
        }
    }

    /// First line of the marker file; `None` on any failure.
    fn read(&self) -> Option<String> {
        match io::read_first_line(&self.path) {
            Ok(line) => {
                log_if!(self.logging_enabled, trace!("Read PID file: {:?}", line));
                line
            }
            Err(e) => {
                log_if!(
                    self.logging_enabled,
                    warn!(path = %self.path.display(), "Could not read PID file: {e}")
                );
                None
            }
        }
    }

    /// Remove the marker file; failures are logged and swallowed.
    fn delete(&self) {
        match io::remove_marker(&self.path) {
            Ok(Removal::Removed) => {
                log_if!(
                    self.logging_enabled,
                    debug!("Removed PID file {}", self.path.display())
                );
            }
            Ok(Removal::Missing) => {
                log_if!(
                    self.logging_enabled,
                    debug!("Could not find PID file {}. Ignoring", self.path.display())
                );
            }
            Err(e) => {
                log_if!(
                    self.logging_enabled,
                    warn!("Could not delete PID file {}: {e}. Ignoring", self.path.display())
                );
            }
        }
    }
}

impl Drop for PidMarker {
    fn drop(&mut self) {
        if !self.closed && self.delete_on_drop {
            self.delete();
        }
    }
}

impl fmt::Debug for PidMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PidMarker")
            .field("path", &self.path)
            .field("pid", &self.pid)
            .field("exit_on_write_error", &self.exit_on_write_error)
            .field("logging_enabled", &self.logging_enabled)
            .field("delete_on_drop", &self.delete_on_drop)
            .field("closed", &self.closed)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
