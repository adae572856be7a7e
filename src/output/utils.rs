//! Shared helpers for tree output

use crate::store::NodeInfo;

/// Tree connector for an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Prefix for the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool, is_root: bool) -> String {
    if is_root {
        String::new()
    } else if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Short property summary, e.g. `symmetric, positive definite, 2 blocks`.
pub fn describe(info: &NodeInfo) -> String {
    let mut parts = Vec::new();
    if info.symm {
        parts.push("symmetric".to_string());
        if info.posdef {
            parts.push("positive definite".to_string());
        }
    }
    if info.has_explorable_blocks() {
        let noun = if info.blocks == 1 { "block" } else { "blocks" };
        parts.push(format!("{} {}", info.blocks, noun));
    }
    if parts.is_empty() {
        "general".to_string()
    } else {
        parts.join(", ")
    }
}

/// Closing count line.
pub fn summary_line(matrices: usize, split: usize) -> String {
    let noun = if matrices == 1 { "matrix" } else { "matrices" };
    format!("{} {}, {} split", matrices, noun, split)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_general() {
        assert_eq!(describe(&NodeInfo::default()), "general");
    }

    #[test]
    fn test_describe_spd_split() {
        let info = NodeInfo {
            symm: true,
            posdef: true,
            logstruc: true,
            blocks: 2,
        };
        assert_eq!(describe(&info), "symmetric, positive definite, 2 blocks");
    }

    #[test]
    fn test_describe_ignores_blocks_without_logstruc() {
        let info = NodeInfo {
            blocks: 3,
            ..Default::default()
        };
        assert_eq!(describe(&info), "general");
    }

    #[test]
    fn test_child_prefix() {
        assert_eq!(child_prefix("", true, true), "");
        assert_eq!(child_prefix("│   ", true, false), "│       ");
        assert_eq!(child_prefix("", false, false), "│   ");
    }

    #[test]
    fn test_summary_line_pluralizes() {
        assert_eq!(summary_line(1, 0), "1 matrix, 0 split");
        assert_eq!(summary_line(3, 1), "3 matrices, 1 split");
    }
}
