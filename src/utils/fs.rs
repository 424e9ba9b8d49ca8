//! File system utilities.

use crate::Result;
use std::path::Path;

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// File name without its last extension, as a lossy string.
pub fn name_without_extension(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Split `name` at the last dot into (stem, extension).
///
/// A leading dot or no dot at all yields no extension.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], Some(&name[idx + 1..])),
        _ => (name, None),
    }
}

/// Rename a file within the same directory, refusing to clobber another file.
pub fn rename_file(from: &Path, to: &Path) -> Result<()> {
    let fail = |reason: String| crate::Error::RenameFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason,
    };

    if from == to {
        return Ok(());
    }
    if to.exists() {
        return Err(fail("target already exists".to_string()));
    }
    std::fs::rename(from, to).map_err(|e| fail(e.to_string()))
}
