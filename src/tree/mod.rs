//! Walking the matrix hierarchy
//!
//! Two views of the same tree:
//!
//! - `next_node`: walks the sparse, string-keyed store one question at a time,
//!   as answers are still coming in
//! - `MatrixTree`: an explicit index-linked tree built from a finished store,
//!   used for rendering and JSON output

mod arena;
mod json_types;
mod state;
mod walker;

pub use arena::{MatrixNode, MatrixTree};
pub use json_types::TreeNode;
pub use state::TraversalState;
pub use walker::{Next, next_node, next_node_str};
