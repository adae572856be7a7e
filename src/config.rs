//! Configuration types for the wizard

use crate::node_id::MAX_CHILD_INDEX;

/// Most blocks a single matrix can be split into.
pub const MAX_BLOCKS: usize = MAX_CHILD_INDEX + 1;

/// Configuration for a wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// Upper bound on the field-split block count (at most [`MAX_BLOCKS`]).
    pub max_blocks: usize,
    /// Matrices at this depth are never split further (root = 0).
    pub max_depth: Option<usize>,
}

impl WizardConfig {
    /// Block limit clamped to what the path ids can encode.
    pub fn effective_max_blocks(&self) -> usize {
        self.max_blocks.min(MAX_BLOCKS)
    }

    /// Whether a matrix at `depth` may still be split.
    pub fn can_split_at(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            max_blocks: MAX_BLOCKS,
            max_depth: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_blocks_clamped_to_encoding() {
        let config = WizardConfig {
            max_blocks: 25,
            ..Default::default()
        };
        assert_eq!(config.effective_max_blocks(), 10);
    }

    #[test]
    fn test_depth_limit() {
        let config = WizardConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        assert!(config.can_split_at(0));
        assert!(!config.can_split_at(1));
        assert!(WizardConfig::default().can_split_at(42));
    }
}
