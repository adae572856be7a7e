//! Index-linked matrix tree built from a filled-in store

use crate::node_id::NodeId;
use crate::store::{MatInfo, NodeInfo, NodeStore};

/// One matrix in a `MatrixTree`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixNode {
    pub info: NodeInfo,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    /// Position among the parent's blocks.
    pub index_in_parent: usize,
}

/// Explicit tree of matrices. Node 0 is the root.
///
/// Only blocks reachable under the walker's pruning rule are included: a
/// matrix keeps children only if it is log-structured with a non-zero block
/// count, and only the blocks actually present in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixTree {
    nodes: Vec<MatrixNode>,
}

impl MatrixTree {
    /// Build the tree rooted at `"0"`. Empty if the store has no root.
    pub fn from_store(store: &MatInfo) -> Self {
        let mut tree = Self::default();
        let root = NodeId::root();
        if let Some(info) = store.lookup(&root) {
            tree.nodes.push(MatrixNode {
                info: *info,
                parent: None,
                children: Vec::new(),
                index_in_parent: 0,
            });
            tree.attach_children(0, &root, store);
        }
        tree
    }

    fn attach_children(&mut self, index: usize, id: &NodeId, store: &MatInfo) {
        let info = self.nodes[index].info;
        if !info.has_explorable_blocks() {
            return;
        }
        for block in 0..info.blocks {
            let Ok(child_id) = id.child(block) else {
                break;
            };
            let Some(child_info) = store.lookup(&child_id) else {
                continue;
            };
            let child = self.nodes.len();
            self.nodes.push(MatrixNode {
                info: *child_info,
                parent: Some(index),
                children: Vec::new(),
                index_in_parent: block,
            });
            self.nodes[index].children.push(child);
            self.attach_children(child, &child_id, store);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() { None } else { Some(0) }
    }

    pub fn node(&self, index: usize) -> Option<&MatrixNode> {
        self.nodes.get(index)
    }

    /// Path id of the node at `index`, rebuilt from its ancestors.
    pub fn id_of(&self, index: usize) -> Option<NodeId> {
        let mut digits = Vec::new();
        let mut at = index;
        loop {
            let node = self.nodes.get(at)?;
            match node.parent {
                Some(parent) => {
                    digits.push(node.index_in_parent);
                    at = parent;
                }
                None => break,
            }
        }
        let path: String = std::iter::once('0')
            .chain(digits.iter().rev().filter_map(|d| char::from_digit(*d as u32, 10)))
            .collect();
        NodeId::parse(&path).ok()
    }

    /// Index of the node with path `id`, if it is in the tree.
    pub fn find(&self, id: &NodeId) -> Option<usize> {
        let mut at = self.root()?;
        for digit in id.as_str().bytes().skip(1) {
            let block = usize::from(digit - b'0');
            at = *self.nodes[at]
                .children
                .iter()
                .find(|&&c| self.nodes[c].index_in_parent == block)?;
        }
        Some(at)
    }

    /// Pre-order successor: first child, else the next sibling of this node
    /// or of its nearest ancestor that has one.
    pub fn next_after(&self, index: usize) -> Option<usize> {
        let node = self.nodes.get(index)?;
        if let Some(&first) = node.children.first() {
            return Some(first);
        }
        let mut at = index;
        while let Some(parent) = self.nodes[at].parent {
            let siblings = &self.nodes[parent].children;
            let pos = siblings.iter().position(|&c| c == at)?;
            if let Some(&next) = siblings.get(pos + 1) {
                return Some(next);
            }
            at = parent;
        }
        None
    }

    /// Node indices in pre-order.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut at = self.root();
        while let Some(index) = at {
            order.push(index);
            at = self.next_after(index);
        }
        order
    }

    /// Number of matrices that are split into blocks.
    pub fn split_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.info.has_explorable_blocks())
            .count()
    }
}
