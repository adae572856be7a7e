//! Tree formatter for the matrix hierarchy
//!
//! This module provides `TreeFormatter` which formats a complete `MatrixTree`
//! into a string or prints it with colors.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::MatrixTree;

use super::config::OutputConfig;
use super::utils::{child_prefix, connector, describe, summary_line};

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, tree: &MatrixTree) -> String {
        let mut output = String::new();
        if let Some(root) = tree.root() {
            self.format_node(tree, root, &mut output, "", true, true);
        }
        output.push_str(&format!(
            "\n{}\n",
            summary_line(tree.len(), tree.split_count())
        ));
        output
    }

    pub fn print(&self, tree: &MatrixTree) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        if let Some(root) = tree.root() {
            self.print_node(tree, root, &mut stdout, "", true, true)?;
        }
        writeln!(stdout)?;
        writeln!(stdout, "{}", summary_line(tree.len(), tree.split_count()))?;
        Ok(())
    }

    fn format_node(
        &self,
        tree: &MatrixTree,
        index: usize,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) {
        let (Some(node), Some(id)) = (tree.node(index), tree.id_of(index)) else {
            return;
        };

        if !is_root {
            output.push_str(prefix);
            output.push_str(connector(is_last));
        }
        output.push_str(&id.label());
        output.push_str("  ");
        output.push_str(&describe(&node.info));
        output.push('\n');

        let new_prefix = child_prefix(prefix, is_last, is_root);
        for (i, &child) in node.children.iter().enumerate() {
            let child_is_last = i == node.children.len() - 1;
            self.format_node(tree, child, output, &new_prefix, child_is_last, false);
        }
    }

    fn print_node(
        &self,
        tree: &MatrixTree,
        index: usize,
        stdout: &mut StandardStream,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        let (Some(node), Some(id)) = (tree.node(index), tree.id_of(index)) else {
            return Ok(());
        };

        if !is_root {
            write!(stdout, "{}{}", prefix, connector(is_last))?;
        }
        let label_color = if node.info.has_explorable_blocks() {
            Color::Blue
        } else {
            Color::White
        };
        stdout.set_color(
            ColorSpec::new()
                .set_fg(Some(label_color))
                .set_bold(node.info.has_explorable_blocks()),
        )?;
        write!(stdout, "{}", id.label())?;
        stdout.reset()?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(stdout, "  {}", describe(&node.info))?;
        stdout.reset()?;

        let new_prefix = child_prefix(prefix, is_last, is_root);
        for (i, &child) in node.children.iter().enumerate() {
            let child_is_last = i == node.children.len() - 1;
            self.print_node(tree, child, stdout, &new_prefix, child_is_last, false)?;
        }
        Ok(())
    }
}
