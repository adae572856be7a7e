//! Fixtures for tests and benchmarks.
//!
//! This module is only compiled for tests and with the `test-utils` feature.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::form::Answer;
use crate::node_id::NodeId;
use crate::store::{MatInfo, NodeInfo};
use crate::tree::{Next, TraversalState, next_node};

/// A temporary directory for answer scripts.
///
/// Cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write `answers` as a JSON answer script.
    pub fn add_answers(&self, path: &str, answers: &[Answer]) -> PathBuf {
        let json = serde_json::to_string_pretty(answers).expect("Failed to serialize answers");
        self.add_file(path, &json)
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an id, panicking on malformed input.
pub fn id(s: &str) -> NodeId {
    NodeId::parse(s).expect("invalid test id")
}

/// Log-structured matrix split into `blocks` blocks.
pub fn split(blocks: usize) -> NodeInfo {
    NodeInfo {
        logstruc: true,
        blocks,
        ..Default::default()
    }
}

/// Build a store from `(id, info)` pairs.
pub fn store_from(entries: &[(&str, NodeInfo)]) -> MatInfo {
    entries.iter().map(|(s, info)| (id(s), *info)).collect()
}

/// Walk a tree the way the wizard does: create each node when it is handed
/// out, fill it from `answers` (unlisted ids are plain leaves) and ask for the
/// next one. Returns the visit order and the filled store.
pub fn simulate(answers: &BTreeMap<NodeId, NodeInfo>) -> (Vec<NodeId>, MatInfo) {
    let mut store = MatInfo::new();
    let mut state = TraversalState::new();
    let mut current = NodeId::root();
    let mut order = vec![current.clone()];

    loop {
        store.create(&current).expect("parent created before child");
        let info = answers.get(&current).copied().unwrap_or_default();
        store.record(&current, info, 10).expect("answer within limits");
        match next_node(&current, &store, &mut state).expect("walk step") {
            Next::Node(next) => {
                order.push(next.clone());
                current = next;
            }
            Next::Done => break,
        }
    }
    (order, store)
}

/// Complete tree where every matrix above `depth` splits into `fanout` blocks.
pub fn full_tree(fanout: usize, depth: usize) -> BTreeMap<NodeId, NodeInfo> {
    let mut answers = BTreeMap::new();
    let mut level = vec![NodeId::root()];
    for _ in 0..depth {
        let mut next_level = Vec::new();
        for node in level {
            answers.insert(node.clone(), split(fanout));
            for block in 0..fanout {
                next_level.push(node.child(block).expect("fanout fits in one digit"));
            }
        }
        level = next_level;
    }
    answers
}
