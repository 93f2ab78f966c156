//! Input scanner module.
//!
//! Expands the paths given on the command line into the flat list of
//! candidate files a rename batch works on.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

use super::classifier::is_supported_extension;

/// Result of expanding the input paths.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Candidate files, sorted and deduplicated.
    pub files: Vec<PathBuf>,
    /// Files skipped because their extension is not supported.
    pub skipped_unsupported: usize,
    /// Total files seen.
    pub total_files_scanned: usize,
    /// Total directories walked.
    pub total_dirs_scanned: usize,
}

/// Expand files and directories into candidate files.
///
/// Directories are walked recursively and filtered to supported
/// extensions, skipping hidden entries. A path named explicitly is
/// taken as-is, whatever its extension; classification decides what to
/// make of it. A path that does not exist fails the whole run.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<ScanResult> {
    let mut result = ScanResult::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for input in inputs {
        if !input.exists() {
            return Err(Error::PathNotFound(input.display().to_string()));
        }

        if input.is_dir() {
            scan_directory(input, &mut result, &mut seen);
        } else {
            result.total_files_scanned += 1;
            if seen.insert(input.clone()) {
                result.files.push(input.clone());
            }
        }
    }

    result.files.sort();

    tracing::info!(
        "Scanned {} files in {} directories: {} candidates, {} unsupported",
        result.total_files_scanned,
        result.total_dirs_scanned,
        result.files.len(),
        result.skipped_unsupported
    );

    Ok(result)
}

fn scan_directory(root: &Path, result: &mut ScanResult, seen: &mut HashSet<PathBuf>) {
    let walker = WalkDir::new(root).follow_links(false).into_iter();

    for entry in walker
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|e| e.ok())
    {
        let entry_path = entry.path();

        if entry.file_type().is_dir() {
            result.total_dirs_scanned += 1;
        } else if entry.file_type().is_file() {
            result.total_files_scanned += 1;

            let supported = entry_path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(is_supported_extension)
                .unwrap_or(false);
            if !supported {
                tracing::debug!("Skipping unsupported file: {}", entry_path.display());
                result.skipped_unsupported += 1;
                continue;
            }

            if seen.insert(entry_path.to_path_buf()) {
                result.files.push(entry_path.to_path_buf());
            }
        }
    }
}

/// Hidden entries (dotfiles) below the scan root are pruned.
fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

// Integration tests for expand_inputs() live in tests/scanner_tests.rs
