//! Node metadata for the matrix hierarchy
//!
//! The surrounding UI fills the store as answers come in; the tree walker only
//! reads it through the [`NodeStore`] trait.

mod info;
mod mat_info;

pub use info::NodeInfo;
pub use mat_info::MatInfo;

use std::collections::{BTreeMap, HashMap};

use crate::node_id::NodeId;

/// Read-only lookup of node metadata by path id.
pub trait NodeStore {
    /// Metadata for `id`, or `None` if the node has not been created yet.
    fn lookup(&self, id: &NodeId) -> Option<&NodeInfo>;

    fn contains(&self, id: &NodeId) -> bool {
        self.lookup(id).is_some()
    }
}

impl NodeStore for BTreeMap<NodeId, NodeInfo> {
    fn lookup(&self, id: &NodeId) -> Option<&NodeInfo> {
        self.get(id)
    }
}

impl NodeStore for HashMap<NodeId, NodeInfo> {
    fn lookup(&self, id: &NodeId) -> Option<&NodeInfo> {
        self.get(id)
    }
}
