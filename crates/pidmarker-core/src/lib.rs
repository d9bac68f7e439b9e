//! PID marker files for running processes.
//!
//! A marker records the pid of the running process in a well-known file so
//! init systems and monitoring scripts can tell whether an instance is up.
//!
//! ```no_run
//! use pidmarker_core::{MarkerOptions, PidMarker};
//!
//! let mut marker = PidMarker::builder(MarkerOptions::program("worker"))
//!     .on_write_error(|event| eprintln!("cannot write {}", event.path.display()))
//!     .open()?;
//! println!("pid {} recorded at {}", marker.pid(), marker.path().display());
//! marker.close();
//! # Ok::<(), pidmarker_core::PidError>(())
//! ```
#![deny(unused_crate_dependencies)]

pub mod error;
pub mod events;
pub mod marker;
pub mod options;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use error::PidError;
pub use events::{WriteErrorEvent, WriteErrorObserver, WriteErrorObservers};
pub use marker::{
    MarkerStatus, PidMarker, PidMarkerBuilder, WRITE_ERROR_EXIT_CODE, inspect, pid_exists,
    read_marker,
};
pub use options::{MarkerOptions, MarkerTarget};
pub use paths::{
    MARKER_DIR_ENV, PID_EXTENSION, PathError, current_program_name, default_marker_dir,
    is_full_path, marker_path, pid_file_name,
};
pub use ports::{ProcessEnvironment, SystemEnvironment};
