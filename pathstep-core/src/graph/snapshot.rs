//! Graph Snapshots
//!
//! A snapshot is the serializable form of a graph: node ids with their
//! coordinates and the edge list. Only authored data is stored; per-run state
//! is never persisted.
//!
//! ```json
//! {
//!   "nodes": [{"id": 0, "x": 40.0, "y": 60.0}, {"id": 1, "x": 90.0, "y": 60.0}],
//!   "edges": [{"from": 0, "to": 1, "weight": 4}]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::model::Graph;
use super::node::{NodeId, Point};
use crate::error::{Error, Result};

/// A node as it appears in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// Serializable graph contents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Graph {
    /// Capture the graph's nodes and edges.
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .nodes()
                .iter()
                .map(|node| NodeRecord {
                    id: node.id(),
                    x: node.position().x,
                    y: node.position().y,
                })
                .collect(),
            edges: self.edges().to_vec(),
        }
    }

    /// Rebuild a graph from a snapshot.
    ///
    /// Node ids must be dense and listed in order (`0..N-1`). Edges go
    /// through the same validation as [`Graph::add_edge`]. Nothing is
    /// returned unless the whole snapshot is valid.
    pub fn from_snapshot(snapshot: &GraphSnapshot) -> Result<Self> {
        let mut graph = Graph::new();

        for (index, record) in snapshot.nodes.iter().enumerate() {
            if record.id.index() != index {
                return Err(Error::InvalidSnapshot {
                    reason: format!("node at position {index} has id {}", record.id),
                });
            }
            graph.add_node(Point::new(record.x, record.y));
        }

        for edge in &snapshot.edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }

        Ok(graph)
    }

    /// Serialize the graph as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        self.to_snapshot().to_json()
    }

    /// Parse and validate a graph from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_snapshot(&GraphSnapshot::from_json(json)?)
    }
}
