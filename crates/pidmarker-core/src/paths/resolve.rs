//! Marker file naming and full-path detection.

use std::path::{Path, PathBuf};

/// File extension of marker files.
pub const PID_EXTENSION: &str = "pid";

/// Check whether `input` names a marker file directly.
///
/// A full path has both a non-empty directory component and a file-name
/// component. Anything else, including input the path parser cannot split,
/// counts as a bare program name. Never panics.
///
/// A trailing separator does not make a path full: `"app/"` has no parent,
/// so it is treated as the program name `app/` and resolves to
/// `<dir>/app/.pid`.
pub fn is_full_path(input: &str) -> bool {
    let path = Path::new(input);

    let has_dir = path
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());
    let has_file = path.file_name().is_some();

    has_dir && has_file
}

/// Marker file name for a program: `<program>.pid`.
pub fn pid_file_name(program_name: &str) -> String {
    format!("{program_name}.{PID_EXTENSION}")
}

/// Join a directory and the marker file name for `program_name`.
pub fn marker_path(directory: &Path, program_name: &str) -> PathBuf {
    directory.join(pid_file_name(program_name))
}
