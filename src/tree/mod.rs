//! Directory tree building
//!
//! `TreeWalker` builds the filtered tree view: ignore rules and the tree
//! filter decide visibility, the content filter decides the status tag on
//! each file node, and directories that end up without visible descendants
//! are pruned bottom-up.

mod node;
mod walker;

pub use node::{FileStatus, TreeNode};
pub use walker::TreeWalker;

pub(crate) use walker::read_dir_sorted;
