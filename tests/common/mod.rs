// Shared test helpers for integration tests
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// Writes the given (file name, content) pairs into a fresh temporary
/// directory and returns the guard keeping it alive.
pub fn setup_results_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().expect("Failed to create temporary directory");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("Failed to write result file");
    }
    dir
}

/// The paths of the written files, in the order given.
pub fn target_paths(dir: &TempDir, names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|name| dir.path().join(name)).collect()
}
