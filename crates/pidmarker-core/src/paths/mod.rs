//! Path resolution for marker files.
//!
//! - Default directory and program name of the running process
//! - Marker file naming (`<program>.pid`)
//! - Lenient full-path detection
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - OS-specific logic is kept in `platform`

mod error;
mod platform;
mod resolve;

#[cfg(test)]
pub(crate) mod test_utils;

// Error type
pub use error::PathError;

// Running-process detection
pub use platform::{MARKER_DIR_ENV, current_program_name, default_marker_dir};

// Naming
pub use resolve::{PID_EXTENSION, is_full_path, marker_path, pid_file_name};
