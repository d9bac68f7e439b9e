//! Platform-specific path detection for the running process.
//!
//! This module contains the helpers `SystemEnvironment` uses to find the
//! default marker directory and program name. Public API is exposed through
//! the `paths` module.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable that overrides the default marker directory.
pub const MARKER_DIR_ENV: &str = "PIDMARKER_DIR";

/// Path of the running executable.
fn executable_path() -> Result<PathBuf, PathError> {
    env::current_exe().map_err(|e| PathError::NoExecutable(e.to_string()))
}

/// Get the directory marker files go to when none is given explicitly.
///
/// Resolution order:
/// 1. `PIDMARKER_DIR` environment variable (highest priority)
/// 2. Parent of the directory containing the running executable
/// 3. The executable's own directory, when it sits at a filesystem root
pub fn default_marker_dir() -> Result<PathBuf, PathError> {
    // 1. Runtime override
    if let Ok(raw) = env::var(MARKER_DIR_ENV)
        && !raw.trim().is_empty()
    {
        return normalize_user_path(&raw);
    }

    // 2. Executable location, one level up
    let exe = executable_path()?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| PathError::NoExecutable(format!("{} has no parent", exe.display())))?;

    // 3. Executable already at a root
    Ok(exe_dir.parent().unwrap_or(exe_dir).to_path_buf())
}

/// Name of the running program: the executable's file name without extension.
pub fn current_program_name() -> Result<String, PathError> {
    let exe = executable_path()?;
    exe.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or(PathError::NoProgramName)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
