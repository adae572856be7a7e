//! JSON serialization types for tree output

use serde::Serialize;

use crate::node_id::NodeId;

use super::arena::MatrixTree;

/// Nested, serializable form of one matrix and its blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub id: NodeId,
    pub symm: bool,
    pub posdef: bool,
    pub logstruc: bool,
    pub blocks: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Convert the subtree rooted at `index`.
    pub fn from_tree(tree: &MatrixTree, index: usize) -> Option<Self> {
        let node = tree.node(index)?;
        Some(Self {
            id: tree.id_of(index)?,
            symm: node.info.symm,
            posdef: node.info.posdef,
            logstruc: node.info.logstruc,
            blocks: node.info.blocks,
            children: node
                .children
                .iter()
                .filter_map(|&child| Self::from_tree(tree, child))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MatInfo, NodeInfo};

    #[test]
    fn test_leaf_omits_children() {
        let store: MatInfo = [(NodeId::root(), NodeInfo::default())].into_iter().collect();
        let tree = MatrixTree::from_store(&store);
        let node = TreeNode::from_tree(&tree, 0).unwrap();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["id"], "0");
        assert!(json.get("children").is_none());
    }

    #[test]
    fn test_nested_children() {
        let split = NodeInfo {
            logstruc: true,
            blocks: 1,
            ..Default::default()
        };
        let store: MatInfo = [
            (NodeId::root(), split),
            (NodeId::parse("00").unwrap(), NodeInfo::default()),
        ]
        .into_iter()
        .collect();
        let tree = MatrixTree::from_store(&store);
        let json = serde_json::to_value(TreeNode::from_tree(&tree, 0).unwrap()).unwrap();
        assert_eq!(json["children"][0]["id"], "00");
        assert_eq!(json["blocks"], 1);
    }
}
