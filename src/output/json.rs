//! JSON output formatting

use std::io;

use crate::tree::{MatrixTree, TreeNode};

/// Render the hierarchy as pretty-printed JSON. `null` for an empty tree.
pub fn to_json(tree: &MatrixTree) -> serde_json::Result<String> {
    let root = tree.root().and_then(|index| TreeNode::from_tree(tree, index));
    serde_json::to_string_pretty(&root)
}

/// Print the hierarchy as pretty-printed JSON to stdout.
pub fn print_json(tree: &MatrixTree) -> io::Result<()> {
    let json = to_json(tree).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
