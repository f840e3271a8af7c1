//! Tree rendering with box-drawing connectors
//!
//! `TreeFormatter` renders the filtered forest under a root label, one line
//! per visible node, with the file status suffixes (`[empty]`, `[binary]`,
//! `[content]`) appended where they apply.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeNode;

pub struct TreeFormatter {
    use_color: bool,
}

impl TreeFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Render the forest to a plain string.
    pub fn format(&self, label: &str, forest: &[TreeNode]) -> String {
        let mut output = String::new();
        output.push_str(label);
        output.push('\n');
        for (i, node) in forest.iter().enumerate() {
            self.format_node(node, &mut output, "", i == forest.len() - 1);
        }
        output
    }

    /// Render the forest to stdout, with colors when enabled.
    pub fn print(&self, label: &str, forest: &[TreeNode]) -> io::Result<()> {
        // Terminal detection already happened upstream; Always vs Never only.
        let choice = if self.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(stdout, "{}", label)?;
        stdout.reset()?;

        for (i, node) in forest.iter().enumerate() {
            self.print_node(node, &mut stdout, "", i == forest.len() - 1)?;
        }
        Ok(())
    }

    fn format_node(&self, node: &TreeNode, output: &mut String, prefix: &str, is_last: bool) {
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            TreeNode::File { name, status, .. } => {
                output.push_str(prefix);
                output.push_str(connector);
                output.push_str(name);
                if let Some(suffix) = status.suffix() {
                    output.push_str(suffix);
                }
                output.push('\n');
            }
            TreeNode::Dir { name, children, .. } => {
                output.push_str(prefix);
                output.push_str(connector);
                output.push_str(name);
                output.push('\n');

                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                for (i, child) in children.iter().enumerate() {
                    self.format_node(child, output, &child_prefix, i == children.len() - 1);
                }
            }
        }
    }

    fn print_node(
        &self,
        node: &TreeNode,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
    ) -> io::Result<()> {
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            TreeNode::File { name, status, .. } => {
                write!(stdout, "{}{}{}", prefix, connector, name)?;
                if let Some(suffix) = status.suffix() {
                    stdout.set_color(ColorSpec::new().set_dimmed(true).set_italic(true))?;
                    write!(stdout, "{}", suffix)?;
                    stdout.reset()?;
                }
                writeln!(stdout)?;
            }
            TreeNode::Dir { name, children, .. } => {
                write!(stdout, "{}{}", prefix, connector)?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                writeln!(stdout, "{}", name)?;
                stdout.reset()?;

                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                for (i, child) in children.iter().enumerate() {
                    self.print_node(child, stdout, &child_prefix, i == children.len() - 1)?;
                }
            }
        }
        Ok(())
    }
}
