//! Tree node types for the rendered directory view

use std::path::PathBuf;

use serde::Serialize;

/// Status tag attached to a file node in the rendered tree.
///
/// Only one tag applies, decided in this order: empty, binary, content.
/// `Plain` files carry no suffix; they are visible in the tree but their
/// bodies are not printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Empty,
    Binary,
    Content,
    Plain,
}

impl FileStatus {
    /// Suffix rendered after the file name, if any.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            FileStatus::Empty => Some(" [empty]"),
            FileStatus::Binary => Some(" [binary]"),
            FileStatus::Content => Some(" [content]"),
            FileStatus::Plain => None,
        }
    }
}

/// A node in the filtered tree view. Built bottom-up: a directory only
/// exists here if at least one descendant survived filtering.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        status: FileStatus,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_match_rendered_tags() {
        assert_eq!(FileStatus::Empty.suffix(), Some(" [empty]"));
        assert_eq!(FileStatus::Binary.suffix(), Some(" [binary]"));
        assert_eq!(FileStatus::Content.suffix(), Some(" [content]"));
        assert_eq!(FileStatus::Plain.suffix(), None);
    }

    #[test]
    fn json_shape_tags_node_type_and_status() {
        let node = TreeNode::File {
            name: "a.py".to_string(),
            path: PathBuf::from("a.py"),
            status: FileStatus::Content,
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["status"], "content");
    }
}
