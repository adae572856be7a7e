//! Per-matrix answers

use serde::{Deserialize, Serialize};

/// What is known about one matrix in the hierarchy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeInfo {
    /// Matrix is symmetric.
    pub symm: bool,
    /// Matrix is positive definite (only meaningful when `symm` is set).
    pub posdef: bool,
    /// Matrix is log-structured; only these are split into blocks.
    pub logstruc: bool,
    /// Number of field-split blocks.
    pub blocks: usize,
}

impl NodeInfo {
    /// Drop `posdef` when the matrix is not symmetric.
    pub fn normalized(self) -> Self {
        Self {
            posdef: self.symm && self.posdef,
            ..self
        }
    }

    /// Defaults for a freshly discovered block of `parent`.
    pub fn inherited_from(parent: &NodeInfo) -> Self {
        Self {
            symm: parent.symm,
            posdef: parent.posdef,
            logstruc: false,
            blocks: 0,
        }
    }

    /// Whether the walker will descend into this matrix's blocks.
    pub fn has_explorable_blocks(&self) -> bool {
        self.logstruc && self.blocks != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_clears_posdef_without_symm() {
        let info = NodeInfo {
            symm: false,
            posdef: true,
            ..Default::default()
        };
        assert!(!info.normalized().posdef);

        let spd = NodeInfo {
            symm: true,
            posdef: true,
            ..Default::default()
        };
        assert!(spd.normalized().posdef);
    }

    #[test]
    fn test_inherited_keeps_only_symmetry_flags() {
        let parent = NodeInfo {
            symm: true,
            posdef: true,
            logstruc: true,
            blocks: 3,
        };
        let child = NodeInfo::inherited_from(&parent);
        assert!(child.symm && child.posdef);
        assert!(!child.logstruc);
        assert_eq!(child.blocks, 0);
    }

    #[test]
    fn test_blocks_without_logstruc_are_not_explorable() {
        let info = NodeInfo {
            logstruc: false,
            blocks: 4,
            ..Default::default()
        };
        assert!(!info.has_explorable_blocks());
    }

    #[test]
    fn test_missing_fields_default_when_deserializing() {
        let info: NodeInfo = serde_json::from_str(r#"{"symm": true}"#).unwrap();
        assert_eq!(
            info,
            NodeInfo {
                symm: true,
                ..Default::default()
            }
        );
    }
}
