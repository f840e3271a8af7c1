//! Binary and empty-file classification
//!
//! Status is recomputed on demand from a small probe read; nothing is cached.
//! Read failures are never fatal here: an unreadable file classifies as
//! binary, which keeps it out of content output while traversal continues.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected when deciding whether a file is binary.
const PROBE_LEN: usize = 1024;

/// Whether a file should be treated as binary.
///
/// A file is binary if its probe contains a NUL byte or is not valid UTF-8.
/// An incomplete multi-byte sequence at the probe boundary does not count as
/// invalid. Unreadable files are reported as binary.
pub fn is_binary_file(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return true,
    };
    let mut buf = [0u8; PROBE_LEN];
    let n = match file.read(&mut buf) {
        Ok(n) => n,
        Err(_) => return true,
    };
    let probe = &buf[..n];

    if probe.contains(&0) {
        return true;
    }
    match std::str::from_utf8(probe) {
        Ok(_) => false,
        // error_len() == None means the probe ended mid-character.
        Err(e) => e.error_len().is_some(),
    }
}

/// Whether a file counts as empty: zero length, or whitespace-only text.
/// Binary files are never empty.
pub fn is_file_empty(path: &Path) -> bool {
    let len = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => return false,
    };
    if len == 0 {
        return true;
    }
    if is_binary_file(path) {
        return false;
    }
    match fs::read_to_string(path) {
        Ok(content) => content.trim().is_empty(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn text_file_is_not_binary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "plain text\n").unwrap();
        assert!(!is_binary_file(&path));
    }

    #[test]
    fn nul_byte_means_binary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.bin");
        fs::write(&path, b"\x00\x01\x02\x03").unwrap();
        assert!(is_binary_file(&path));
    }

    #[test]
    fn invalid_utf8_means_binary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.dat");
        fs::write(&path, [0xFF, 0xFE, 0x41, 0x42]).unwrap();
        assert!(is_binary_file(&path));
    }

    #[test]
    fn multibyte_char_split_at_probe_boundary_is_not_binary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        // Fill to one byte short of the probe, then a 4-byte character that
        // straddles the boundary.
        let mut content = "x".repeat(PROBE_LEN - 1).into_bytes();
        content.extend_from_slice("🦀".as_bytes());
        fs::write(&path, content).unwrap();
        assert!(!is_binary_file(&path));
    }

    #[test]
    fn missing_file_classifies_as_binary() {
        assert!(is_binary_file(Path::new("/nonexistent/file")));
    }

    #[test]
    fn zero_length_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(is_file_empty(&path));
    }

    #[test]
    fn whitespace_only_text_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.txt");
        fs::write(&path, "  \n\t\n").unwrap();
        assert!(is_file_empty(&path));
    }

    #[test]
    fn nonempty_text_is_not_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "content").unwrap();
        assert!(!is_file_empty(&path));
    }

    #[test]
    fn binary_file_is_never_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.bin");
        fs::write(&path, b"\x00").unwrap();
        assert!(!is_file_empty(&path));
    }

    #[test]
    fn directory_is_not_empty() {
        let dir = TempDir::new().unwrap();
        assert!(!is_file_empty(dir.path()));
    }
}
