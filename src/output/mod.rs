//! Output rendering: tree view, content blocks, and JSON

mod content;
mod json;
mod tree;

pub use content::ContentEmitter;
pub use json::print_json;
pub use tree::TreeFormatter;

/// Printed instead of a tree when filtering leaves nothing visible.
pub const NO_VISIBLE_CONTENT: &str =
    "No visible content based on the current filters and .gitignore rules.";
