//! Path identifiers for matrices in the block hierarchy
//!
//! A `NodeId` spells the path from the root to a matrix, one decimal digit per
//! level: `"0"` is the whole system, `"01"` its second block, `"010"` the first
//! block of that block, and so on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Highest child index a single path digit can encode.
pub const MAX_CHILD_INDEX: usize = 9;

/// Root-to-node path in the matrix tree.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// The id of the top-level matrix.
    pub fn root() -> Self {
        Self("0".to_string())
    }

    /// Parse and validate a path id.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidNodeId {
            id: s.to_string(),
            reason,
        };
        if s.is_empty() {
            return Err(invalid("empty id"));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("ids may only contain decimal digits"));
        }
        if !s.starts_with('0') {
            return Err(invalid("ids must start at the root matrix '0'"));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "0"
    }

    /// Number of splits between the root and this matrix (root = 0).
    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }

    /// Knock off the last digit. `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_string()))
    }

    /// Index of this matrix among its siblings.
    pub fn last_digit(&self) -> usize {
        self.0
            .bytes()
            .last()
            .map(|b| usize::from(b - b'0'))
            .unwrap_or(0)
    }

    /// Id of the `index`-th block of this matrix.
    pub fn child(&self, index: usize) -> Result<NodeId> {
        if index > MAX_CHILD_INDEX {
            return Err(Error::TooManyBlocks {
                id: self.clone(),
                blocks: index + 1,
                max: MAX_CHILD_INDEX + 1,
            });
        }
        Ok(Self(format!("{}{}", self.0, index)))
    }

    /// Human-facing name, e.g. `A01`.
    pub fn label(&self) -> String {
        format!("A{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NodeId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl std::str::FromStr for NodeId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
