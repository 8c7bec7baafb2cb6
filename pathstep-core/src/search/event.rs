//! Algorithm Events
//!
//! Every decision the stepper makes is reported as an [`AlgorithmEvent`].
//! The `Display` impl renders the line a textual log would show for it.

use std::fmt;

use serde::Serialize;

use crate::graph::NodeId;

use super::state::Distance;

/// One observable step of a shortest-path run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmEvent {
    /// A node was popped and finalized at `distance`.
    NodeVisited { id: NodeId, distance: Distance },

    /// An edge out of the node being visited was compared against its
    /// destination.
    ///
    /// `current_distance` is the destination's tentative distance before the
    /// comparison; `candidate_distance` is the distance through `from`.
    EdgeExamined {
        from: NodeId,
        to: NodeId,
        weight: u32,
        current_distance: Distance,
        candidate_distance: Distance,
    },

    /// The destination of the last examined edge improved.
    DistanceUpdated {
        id: NodeId,
        old_distance: Distance,
        new_distance: Distance,
    },

    /// The destination of the last examined edge kept its distance.
    NoUpdate { id: NodeId },

    /// The queue ran dry; distances and predecessors are final.
    Done,
}

impl AlgorithmEvent {
    /// The node the event is about.
    ///
    /// For an examined edge this is the destination. `Done` concerns no node.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            AlgorithmEvent::NodeVisited { id, .. }
            | AlgorithmEvent::DistanceUpdated { id, .. }
            | AlgorithmEvent::NoUpdate { id } => Some(*id),
            AlgorithmEvent::EdgeExamined { to, .. } => Some(*to),
            AlgorithmEvent::Done => None,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, AlgorithmEvent::Done)
    }
}

impl fmt::Display for AlgorithmEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmEvent::NodeVisited { id, distance } => {
                write!(f, "Visiting Node {id} (Distance: {distance})")
            }
            AlgorithmEvent::EdgeExamined { to, weight, .. } => {
                write!(f, "→ Checking neighbor Node {to} via edge weight {weight}")
            }
            AlgorithmEvent::DistanceUpdated {
                id,
                old_distance,
                new_distance,
            } => write!(
                f,
                "✔ Updating distance of Node {id} from {old_distance} → {new_distance}"
            ),
            AlgorithmEvent::NoUpdate { id } => write!(f, "⛔ No update needed for Node {id}"),
            AlgorithmEvent::Done => f.write_str("✅ Dijkstra complete!"),
        }
    }
}
