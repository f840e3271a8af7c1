//! Test fixtures shared by unit and integration tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway directory tree for tests. Dropped with the value.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a text file at `rel`, creating parent directories as needed.
    /// Returns the absolute path.
    pub fn add_file(&self, rel: &str, content: &str) -> PathBuf {
        self.write(rel, content.as_bytes())
    }

    /// Write raw bytes at `rel`, creating parent directories as needed.
    pub fn add_binary(&self, rel: &str, content: &[u8]) -> PathBuf {
        self.write(rel, content)
    }

    fn write(&self, rel: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&path, content).expect("failed to write test file");
        path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
