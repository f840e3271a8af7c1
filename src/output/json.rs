//! JSON output mode

use std::path::Path;

use crate::error::Result;
use crate::tree::TreeNode;

/// Serialize the forest as a single root directory object and print it.
/// Content blocks are never part of JSON output.
pub fn print_json(label: &str, root: &Path, forest: &[TreeNode]) -> Result<()> {
    let tree = TreeNode::Dir {
        name: label.to_string(),
        path: root.to_path_buf(),
        children: forest.to_vec(),
    };
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}
