//! Ordered store of matrix answers keyed by path id

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::node_id::NodeId;

use super::{NodeInfo, NodeStore};

/// Sparse map from path id to node metadata.
///
/// Entries only ever get added or overwritten during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatInfo {
    nodes: BTreeMap<NodeId, NodeInfo>,
}

impl MatInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `id` with default metadata, returning the existing entry if
    /// there already is one.
    ///
    /// A new root starts out all-false; any other node inherits `symm` and
    /// `posdef` from its parent, which must already exist.
    pub fn create(&mut self, id: &NodeId) -> Result<&NodeInfo> {
        if !self.nodes.contains_key(id) {
            let defaults = match id.parent() {
                None => NodeInfo::default(),
                Some(parent) => {
                    let parent_info = self
                        .nodes
                        .get(&parent)
                        .ok_or_else(|| Error::UnknownNode(parent.clone()))?;
                    NodeInfo::inherited_from(parent_info)
                }
            };
            debug!(id = %id, symm = defaults.symm, posdef = defaults.posdef, "created node");
            self.nodes.insert(id.clone(), defaults);
        }
        self.nodes
            .get(id)
            .ok_or_else(|| Error::UnknownNode(id.clone()))
    }

    /// Store the answers for `id`, replacing whatever was there.
    pub fn record(&mut self, id: &NodeId, info: NodeInfo, max_blocks: usize) -> Result<()> {
        if info.blocks > max_blocks {
            return Err(Error::TooManyBlocks {
                id: id.clone(),
                blocks: info.blocks,
                max: max_blocks,
            });
        }
        self.nodes.insert(id.clone(), info.normalized());
        Ok(())
    }

    pub fn get(&self, id: &NodeId) -> Option<&NodeInfo> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &NodeInfo)> {
        self.nodes.iter()
    }
}

impl NodeStore for MatInfo {
    fn lookup(&self, id: &NodeId) -> Option<&NodeInfo> {
        self.nodes.get(id)
    }
}

impl FromIterator<(NodeId, NodeInfo)> for MatInfo {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeInfo)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
