//! Error type shared by the store, the walker and the wizard

use std::io;

use thiserror::Error;

use crate::node_id::NodeId;

/// Everything that can go wrong while walking or answering for a matrix tree.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid node id '{id}': {reason}")]
    InvalidNodeId { id: String, reason: &'static str },

    #[error("no information recorded for matrix A{0}")]
    UnknownNode(NodeId),

    #[error("matrix A{id} cannot be split into {blocks} blocks (at most {max})")]
    TooManyBlocks {
        id: NodeId,
        blocks: usize,
        max: usize,
    },

    #[error("input ended while asking for matrix A{0}")]
    InputClosed(NodeId),

    #[error("every matrix has already been answered")]
    Finished,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("malformed answers: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
