//! Graph Edges

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// A directed, weighted edge.
///
/// Parallel edges and self-loops are legal. The weight is always positive;
/// [`Graph`](super::Graph) rejects zero when the edge is added or reweighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u32,
}

impl Edge {
    pub(crate) fn new(from: NodeId, to: NodeId, weight: u32) -> Self {
        Self { from, to, weight }
    }

    /// Check if the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Check if the edge connects `from` to `to` in that direction.
    pub fn connects(&self, from: NodeId, to: NodeId) -> bool {
        self.from == from && self.to == to
    }
}
