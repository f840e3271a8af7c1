//! Test harness for grove integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.write(path, content.as_bytes())
    }

    pub fn add_binary(&self, path: &str, content: &[u8]) -> PathBuf {
        self.write(path, content)
    }

    fn write(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

pub fn run_grove(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_grove");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run grove");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
