//! Next-question search over the sparse node store

use tracing::debug;

use crate::error::{Error, Result};
use crate::node_id::NodeId;
use crate::store::NodeStore;

use super::state::TraversalState;

/// Outcome of a walker step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    /// Ask about this matrix next.
    Node(NodeId),
    /// Every reachable matrix has been asked about.
    Done,
}

impl Next {
    pub fn node(&self) -> Option<&NodeId> {
        match self {
            Next::Node(id) => Some(id),
            Next::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Next::Done)
    }
}

/// Find the matrix to ask about after `current`.
///
/// Depth-first: descend into the first block of a log-structured matrix whose
/// blocks have not been created yet, otherwise move to the next sibling,
/// otherwise retry from the parent. Blocks of a matrix that is not
/// log-structured are never visited.
///
/// Whether a matrix still needs its blocks is decided by looking up its
/// *last* block id, so a store holding only a later block counts as
/// populated.
pub fn next_node<S>(current: &NodeId, store: &S, state: &mut TraversalState) -> Result<Next>
where
    S: NodeStore + ?Sized,
{
    if current.is_root() && state.started {
        debug!("returned to root, walk complete");
        return Ok(Next::Done);
    }

    // Nothing in `state` changes until every fallible step for `current`
    // has succeeded
    let info = store
        .lookup(current)
        .ok_or_else(|| Error::UnknownNode(current.clone()))?;

    let descend = if info.has_explorable_blocks() {
        let last_child = current.child(info.blocks - 1)?;
        if store.contains(&last_child) {
            None
        } else {
            Some(current.child(0)?)
        }
    } else {
        None
    };

    if current.is_root() {
        state.mark_root();
    }

    if let Some(first_child) = descend {
        debug!(from = %current, to = %first_child, "descend");
        state.mark(&first_child);
        return Ok(Next::Node(first_child));
    }

    let Some(parent) = current.parent() else {
        debug!(id = %current, "root has no blocks left to ask about");
        return Ok(Next::Done);
    };

    let parent_info = store
        .lookup(&parent)
        .ok_or_else(|| Error::UnknownNode(parent.clone()))?;
    let next_index = current.last_digit() + 1;
    if next_index < parent_info.blocks {
        let sibling = parent.child(next_index)?;
        debug!(from = %current, to = %sibling, "sibling");
        state.mark(&sibling);
        return Ok(Next::Node(sibling));
    }

    debug!(from = %current, to = %parent, "ascend");
    next_node(&parent, store, state)
}

/// `next_node` for a raw id string, rejecting malformed ids.
pub fn next_node_str<S>(current: &str, store: &S, state: &mut TraversalState) -> Result<Next>
where
    S: NodeStore + ?Sized,
{
    let id = NodeId::parse(current)?;
    next_node(&id, store, state)
}
