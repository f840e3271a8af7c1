//! Gitignore-style ignore rules
//!
//! Wraps the `ignore` crate's gitignore matcher. Rules come from a single
//! file (either an explicit path or `<root>/.gitignore`). A match here is the
//! highest-precedence exclusion: the path disappears from both the tree and
//! the content output no matter what the include patterns say.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Parsed ignore rules for one run. Read-only after construction.
pub struct IgnoreSpec {
    gitignore: Gitignore,
}

impl IgnoreSpec {
    /// Load rules from `file`, with patterns rooted at `root`.
    ///
    /// Returns `None` if the file does not exist or cannot be parsed into a
    /// usable rule set; callers decide whether that deserves a warning.
    pub fn load(root: &Path, file: &Path) -> Option<Self> {
        if !file.is_file() {
            return None;
        }
        let mut builder = GitignoreBuilder::new(root);
        if builder.add(file).is_some() {
            return None;
        }
        let gitignore = builder.build().ok()?;
        Some(Self { gitignore })
    }

    /// Whether the path (relative to the rules root) is ignored.
    /// Later rules override earlier ones; `!` negations re-include.
    pub fn is_ignored(&self, rel: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(rel, is_dir).is_ignore()
    }
}
