//! Integration tests for input expansion.
//!
//! Tests cover:
//! - Recursive directory walking and extension filtering
//! - Hidden entry pruning and deduplication
//! - Missing input handling

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use media_utilities::core::scanner::expand_inputs;
use media_utilities::error::Error;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"x").unwrap();
}

// ========== DIRECTORY EXPANSION TESTS ==========

#[test]
fn test_expand_directory_recursively() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("a.mp3"));
    touch(&temp.path().join("Artist/Album/b.flac"));
    touch(&temp.path().join("Shows/Foo.S01E01.mkv"));

    let result = expand_inputs(&[temp.path().to_path_buf()]).unwrap();

    assert_eq!(result.files.len(), 3);
    assert_eq!(result.total_files_scanned, 3);
    // Walked directories include the root itself
    assert!(result.total_dirs_scanned >= 3);
}

#[test]
fn test_expand_filters_unsupported_extensions() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("song.mp3"));
    touch(&temp.path().join("cover.jpg"));
    touch(&temp.path().join("notes.txt"));
    touch(&temp.path().join("README"));

    let result = expand_inputs(&[temp.path().to_path_buf()]).unwrap();

    assert_eq!(result.files.len(), 1);
    assert!(result.files[0].ends_with("song.mp3"));
    assert_eq!(result.skipped_unsupported, 3);
    assert_eq!(result.total_files_scanned, 4);
}

#[test]
fn test_expand_skips_hidden_entries() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("visible.mp3"));
    touch(&temp.path().join(".hidden.mp3"));
    touch(&temp.path().join(".stash/buried.mp3"));

    let result = expand_inputs(&[temp.path().to_path_buf()]).unwrap();

    assert_eq!(result.files.len(), 1);
    assert!(result.files[0].ends_with("visible.mp3"));
}

#[test]
fn test_expand_output_is_sorted() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("c.mp3"));
    touch(&temp.path().join("a.mp3"));
    touch(&temp.path().join("b.mp3"));

    let result = expand_inputs(&[temp.path().to_path_buf()]).unwrap();

    let names: Vec<_> = result
        .files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a.mp3", "b.mp3", "c.mp3"]);
}

#[test]
fn test_expand_deduplicates_overlapping_inputs() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("song.mp3");
    touch(&file);

    // The same file arrives via the directory walk and explicitly
    let result = expand_inputs(&[temp.path().to_path_buf(), file.clone()]).unwrap();

    assert_eq!(result.files.len(), 1);
}

// ========== EXPLICIT FILE TESTS ==========

#[test]
fn test_explicit_file_bypasses_extension_filter() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("lecture.opus.bak");
    touch(&file);

    // Named directly, so the scanner passes it through; classification
    // decides later whether anything can be done with it
    let result = expand_inputs(&[file.clone()]).unwrap();

    assert_eq!(result.files, vec![file]);
    assert_eq!(result.skipped_unsupported, 0);
}

#[test]
fn test_expand_mixed_files_and_directories() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("dir/inner.mp3"));
    let explicit = temp.path().join("outer.epub");
    touch(&explicit);

    let result = expand_inputs(&[temp.path().join("dir"), explicit]).unwrap();

    assert_eq!(result.files.len(), 2);
}

// ========== ERROR TESTS ==========

#[test]
fn test_missing_input_fails_the_run() {
    let temp = TempDir::new().unwrap();
    touch(&temp.path().join("ok.mp3"));

    let result = expand_inputs(&[
        temp.path().to_path_buf(),
        temp.path().join("missing"),
    ]);

    match result {
        Err(Error::PathNotFound(path)) => assert!(path.ends_with("missing")),
        other => panic!("Expected PathNotFound, got {other:?}"),
    }
}

#[test]
fn test_no_inputs_yields_empty_result() {
    let result = expand_inputs(&[]).unwrap();
    assert!(result.files.is_empty());
    assert_eq!(result.total_files_scanned, 0);
}
