//! Graph Nodes
//!
//! This module defines the node types that live in the graph model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a node in the graph.
///
/// Ids are dense: the node with id `n` sits at index `n` of the node
/// collection, so the id doubles as the adjacency key and as the index into
/// per-run state tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the raw index value.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a node on the authoring surface.
///
/// The engine never interprets coordinates; they are carried so that a
/// renderer can draw the graph and a snapshot can restore it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node in the graph.
///
/// Nodes carry only identity and geometry. Tentative distances, visited flags
/// and predecessors belong to a run and live in
/// [`RunState`](crate::search::RunState).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Stable, never reused identifier.
    id: NodeId,

    /// Where the node was placed.
    position: Point,
}

impl Node {
    pub(crate) fn new(id: NodeId, position: Point) -> Self {
        Self { id, position }
    }

    /// Get the node's ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the node's position.
    pub fn position(&self) -> Point {
        self.position
    }
}
