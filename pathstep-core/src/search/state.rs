//! Run State
//!
//! Per-run algorithm state lives in a table keyed by node id, separate from
//! the graph. Each run builds a fresh table at Init, which is the reset: a
//! run can never observe distances or predecessors left behind by an earlier
//! or abandoned run.

use std::fmt;

use serde::Serialize;

use crate::graph::NodeId;

/// A tentative or final shortest-path distance.
///
/// `Infinite` orders after every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    Finite(u64),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    /// Extend this distance by an edge weight.
    ///
    /// Infinite stays infinite; finite sums saturate rather than wrap.
    pub fn extend(self, weight: u32) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(u64::from(weight))),
            Distance::Infinite => Distance::Infinite,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any.
    pub fn finite(&self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }
}

impl From<u64> for Distance {
    fn from(d: u64) -> Self {
        Distance::Finite(d)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => f.write_str("∞"),
        }
    }
}

/// Algorithm state of one node during one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NodeState {
    /// Best known distance from the source.
    pub distance: Distance,

    /// Whether the node has been finalized.
    pub visited: bool,

    /// The node this one was last improved from.
    pub previous: Option<NodeId>,
}

/// The run-scoped state table.
///
/// Only the stepper mutates it; consumers get shared access while a run is
/// in progress and ownership once it finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    source: NodeId,
    nodes: Vec<NodeState>,
}

impl RunState {
    /// Build the Init state: every node infinite, unvisited and without a
    /// predecessor, except the source at distance zero.
    pub(crate) fn init(node_count: usize, source: NodeId) -> Self {
        let mut nodes = vec![NodeState::default(); node_count];
        nodes[source.index()].distance = Distance::ZERO;
        Self { source, nodes }
    }

    /// The node the run started from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// State of `id`, if it names a node of the run's graph.
    pub fn get(&self, id: NodeId) -> Option<&NodeState> {
        self.nodes.get(id.index())
    }

    /// Distance of `id`; unknown ids are infinitely far away.
    pub fn distance(&self, id: NodeId) -> Distance {
        self.get(id).map_or(Distance::Infinite, |state| state.distance)
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|state| state.visited)
    }

    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|state| state.previous)
    }

    /// All distances, in node id order.
    pub fn distances(&self) -> Vec<Distance> {
        self.nodes.iter().map(|state| state.distance).collect()
    }

    /// Iterate over `(id, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeState)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, state)| (NodeId::from(index), state))
    }

    /// Number of nodes tracked by the table.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn mark_visited(&mut self, id: NodeId) {
        self.nodes[id.index()].visited = true;
    }

    pub(crate) fn improve(&mut self, id: NodeId, distance: Distance, previous: NodeId) {
        let state = &mut self.nodes[id.index()];
        debug_assert!(!state.visited, "improving finalized node {id}");
        debug_assert!(distance < state.distance, "distance of {id} must decrease");
        state.distance = distance;
        state.previous = Some(previous);
    }
}
