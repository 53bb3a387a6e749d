//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use msgtpl::cli::LineSelector;
use msgtpl::storage::{ensure_layout, StorageLayout};
use tempfile::TempDir;

/// Fresh empty base directory inside a temp dir.
///
/// The base itself does not exist yet, so bootstrap has to create it.
pub fn temp_layout() -> (TempDir, StorageLayout) {
    let temp_dir = TempDir::new().unwrap();
    let layout = StorageLayout::new(temp_dir.path().join("message_templates"));
    (temp_dir, layout)
}

/// Base directory already populated with the example data.
pub fn seeded_layout() -> (TempDir, StorageLayout) {
    let (temp_dir, layout) = temp_layout();
    ensure_layout(&layout).unwrap();
    (temp_dir, layout)
}

/// Write a file, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
    path.to_path_buf()
}

/// Sorted names of the entries in a directory.
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

/// Selector fed from a fixed script of input lines, printing into a buffer.
pub fn scripted_selector(script: &str) -> LineSelector<Cursor<Vec<u8>>, Vec<u8>> {
    LineSelector::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}
