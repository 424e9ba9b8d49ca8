//! Directory scanner module.
//!
//! Lists the media containers and sidecars directly inside a directory.

use crate::generators::mnfo::MNFO_EXTENSION;
use crate::utils::fs::{ensure_directory, get_extension, name_without_extension};
use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Container formats MediaInfo can report on.
pub const CONTAINER_EXTENSIONS: &[&str] = &["mkv", "avi", "divx", "mp4", "ogm", "wmv"];

/// Result of scanning a directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Media containers, sorted by file name.
    pub containers: Vec<PathBuf>,
    /// Sidecar documents, sorted by file name.
    pub sidecars: Vec<PathBuf>,
    /// Total files scanned.
    pub total_files_scanned: usize,
}

/// Check if a file extension is a supported container format.
fn is_container_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    CONTAINER_EXTENSIONS.contains(&ext_lower.as_str())
}

/// Scan a directory (not recursively) for containers and sidecars.
pub fn scan_directory(path: &Path) -> Result<ScanResult> {
    ensure_directory(path)?;

    let mut result = ScanResult::default();

    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        result.total_files_scanned += 1;

        let entry_path = entry.path();
        match get_extension(entry_path) {
            Some(ext) if is_container_extension(&ext) => {
                result.containers.push(entry_path.to_path_buf());
            }
            Some(ext) if ext == MNFO_EXTENSION => {
                result.sidecars.push(entry_path.to_path_buf());
            }
            _ => {}
        }
    }

    tracing::info!(
        "Scanned {} files: {} containers, {} media info files",
        result.total_files_scanned,
        result.containers.len(),
        result.sidecars.len()
    );

    Ok(result)
}

/// Whether a container already has a sidecar with the same base name.
pub fn is_cataloged(container: &Path, sidecars: &[PathBuf]) -> bool {
    let media_name = name_without_extension(container);
    sidecars
        .iter()
        .any(|sidecar| name_without_extension(sidecar) == media_name)
}
