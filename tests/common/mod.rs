//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty output directory
pub fn create_output_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp_dir.path().to_path_buf();
    (temp_dir, output_dir)
}

/// Write an input file next to (not inside) the output directory
pub fn create_input_file(content: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create input dir");
    let path = temp_dir.path().join("input.dat");
    fs::write(&path, content).expect("Failed to write input file");
    (temp_dir, path)
}

/// Sorted file names in a directory
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read output dir")
        .map(|entry| {
            entry
                .expect("Failed to read dir entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Contents of the parts named `part-<tag>-1`, `part-<tag>-2`, ... in index order
pub fn read_parts(dir: &Path, tag: &str, count: usize) -> Vec<Vec<u8>> {
    (1..=count)
        .map(|i| {
            fs::read(dir.join(format!("part-{}-{}", tag, i)))
                .unwrap_or_else(|e| panic!("Failed to read part {}: {}", i, e))
        })
        .collect()
}

/// Deterministic pseudo-random bytes
pub fn sample_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 31 + 7) % 251) as u8).collect()
}
