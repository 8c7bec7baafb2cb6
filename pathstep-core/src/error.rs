//! Error Types
//!
//! Every fallible operation in the crate returns [`Error`]. The variants fall
//! into three groups:
//!
//! - Structural errors (`InvalidReference`, `InvalidWeight`, `InvalidEdge`,
//!   `InvalidSource`, `InvalidTarget`, `InvalidSnapshot`) are raised by the
//!   call that would introduce them, before any state is touched.
//! - `Unreachable` is an ordinary outcome of path reconstruction.
//! - `EmptyQueue` and `InternalInconsistency` signal a broken invariant inside
//!   the engine.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors produced by the shortest-path engine and its adapters.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge endpoint does not name an existing node.
    #[error("invalid node reference: {id} (graph has {node_count} nodes)")]
    InvalidReference { id: NodeId, node_count: usize },

    /// Edge weights must be strictly positive.
    #[error("invalid edge weight: {weight} (weights must be positive)")]
    InvalidWeight { weight: u32 },

    /// An edge index does not name an existing edge.
    #[error("invalid edge index: {index} (graph has {edge_count} edges)")]
    InvalidEdge { index: usize, edge_count: usize },

    /// The source id of a run is out of range.
    #[error("invalid source node: {id} (graph has {node_count} nodes)")]
    InvalidSource { id: NodeId, node_count: usize },

    /// The target id of a run or a reconstruction is out of range.
    #[error("invalid target node: {id} (graph has {node_count} nodes)")]
    InvalidTarget { id: NodeId, node_count: usize },

    /// `pop_min` was called on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// The target has no path from the source.
    #[error("node {target} is unreachable from node {origin}")]
    Unreachable { origin: NodeId, target: NodeId },

    /// A predecessor cycle or another violated engine invariant.
    #[error("internal inconsistency: {reason}")]
    InternalInconsistency { reason: String },

    /// A graph snapshot is structurally invalid.
    #[error("invalid graph snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    /// A snapshot or configuration document is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this error is the expected "no path" outcome rather than a
    /// failure.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Error::Unreachable { .. })
    }

    pub(crate) fn inconsistency(reason: impl Into<String>) -> Self {
        Error::InternalInconsistency {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
