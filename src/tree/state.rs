//! Per-session traversal bookkeeping

use std::collections::BTreeSet;

use crate::node_id::NodeId;

/// State threaded through successive `next_node` calls.
///
/// `started` records that the root has been handed out once; hitting the root
/// again afterwards ends the walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalState {
    pub(crate) visited: BTreeSet<NodeId>,
    pub(crate) started: bool,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a session whose root has already been asked about.
    pub fn resumed() -> Self {
        let mut state = Self::new();
        state.mark_root();
        state
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn visited(&self) -> &BTreeSet<NodeId> {
        &self.visited
    }

    pub fn has_visited(&self, id: &NodeId) -> bool {
        self.visited.contains(id)
    }

    pub(crate) fn mark_root(&mut self) {
        self.started = true;
        self.visited.insert(NodeId::root());
    }

    pub(crate) fn mark(&mut self, id: &NodeId) {
        self.visited.insert(id.clone());
    }
}
