//! TreeWalker - builds the filtered tree view in memory

use std::fs;
use std::path::Path;

use crate::classify::{is_binary_file, is_file_empty};
use crate::error::{GroveError, Result};
use crate::filter::FilterConfig;
use crate::ignore_rules::IgnoreSpec;

use super::node::{FileStatus, TreeNode};

/// Walks the directory tree depth-first, consulting the ignore rules and the
/// tree filter at every node, and the content filter once per surviving file
/// to decide its status tag.
///
/// Visibility is decided bottom-up: `visit` returns `None` for a pruned
/// subtree, and a directory survives only if it produced at least one
/// surviving child. The analysis root itself is never a node; `walk` returns
/// the forest of its direct children.
pub struct TreeWalker<'a> {
    root: &'a Path,
    ignore: Option<&'a IgnoreSpec>,
    tree_filter: &'a FilterConfig,
    content_filter: &'a FilterConfig,
}

impl<'a> TreeWalker<'a> {
    pub fn new(
        root: &'a Path,
        ignore: Option<&'a IgnoreSpec>,
        tree_filter: &'a FilterConfig,
        content_filter: &'a FilterConfig,
    ) -> Self {
        Self {
            root,
            ignore,
            tree_filter,
            content_filter,
        }
    }

    /// Build the forest. An empty result is the "no visible content"
    /// terminal state, not an error.
    pub fn walk(&self) -> Result<Vec<TreeNode>> {
        let entries = read_dir_sorted(self.root).map_err(|source| GroveError::ReadDir {
            path: self.root.to_path_buf(),
            source,
        })?;
        Ok(entries.iter().filter_map(|path| self.visit(path)).collect())
    }

    fn visit(&self, path: &Path) -> Option<TreeNode> {
        let rel = path.strip_prefix(self.root).ok()?;
        let is_dir = path.is_dir();

        if let Some(spec) = self.ignore {
            if spec.is_ignored(rel, is_dir) {
                return None;
            }
        }
        if !self.tree_filter.passes(path, rel, is_dir) {
            return None;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !is_dir {
            let status = if is_file_empty(path) {
                FileStatus::Empty
            } else if is_binary_file(path) {
                FileStatus::Binary
            } else if self.content_filter.passes(path, rel, false) {
                FileStatus::Content
            } else {
                FileStatus::Plain
            };
            return Some(TreeNode::File {
                name,
                path: path.to_path_buf(),
                status,
            });
        }

        // Symlinked directories would allow traversal cycles.
        if path.is_symlink() {
            return None;
        }

        // Unreadable directories are skipped, not fatal.
        let entries = match read_dir_sorted(path) {
            Ok(e) => e,
            Err(err) => {
                log::warn!("skipping unreadable directory {}: {}", path.display(), err);
                return None;
            }
        };

        let children: Vec<TreeNode> = entries
            .iter()
            .filter_map(|child| self.visit(child))
            .collect();

        if children.is_empty() {
            return None;
        }
        Some(TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            children,
        })
    }
}

/// Enumerate a directory's entries sorted by file name, for deterministic
/// output across platforms.
pub(crate) fn read_dir_sorted(path: &Path) -> std::io::Result<Vec<std::path::PathBuf>> {
    let mut entries: Vec<_> = fs::read_dir(path)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(entries)
}
