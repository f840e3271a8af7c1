//! Grove - tree view plus file contents, filtered for LLM context
//!
//! Walks a directory, applies gitignore rules and regex filters, and prints
//! two things: a tree of what survived (with `[empty]`, `[binary]`, and
//! `[content]` tags on files) and the bodies of the files selected for
//! content. The two passes are filtered differently on purpose: directory
//! patterns shape the tree only, never the content output.

pub mod classify;
pub mod error;
pub mod filter;
pub mod ignore_rules;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{GroveError, Result};
pub use filter::{FilterConfig, FilterPatterns};
pub use ignore_rules::IgnoreSpec;
pub use output::{ContentEmitter, TreeFormatter, print_json, NO_VISIBLE_CONTENT};
pub use tree::{FileStatus, TreeNode, TreeWalker};
