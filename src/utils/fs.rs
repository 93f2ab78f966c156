//! File system utilities.

use crate::Result;
use std::path::{Component, Path};

/// Create the parent directory of a target path, if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Move a file from one location to another.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    // Try rename first (fast, same filesystem)
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }

    // Fall back to copy + delete (cross filesystem)
    std::fs::copy(from, to)?;
    std::fs::remove_file(from)?;
    Ok(())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Whether two paths name the same location, ignoring `.` components.
///
/// Purely lexical: the file system is not consulted, so `..` and
/// symlinks stay significant.
pub fn same_path(a: &Path, b: &Path) -> bool {
    a.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .eq(b.components().filter(|c| !matches!(c, Component::CurDir)))
}
