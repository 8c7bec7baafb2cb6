//! Path Reconstruction
//!
//! Walks predecessor links from a target back to the source. The stepper
//! guarantees the links form an in-tree rooted at the source; the walk is
//! still bounded by the node count so a broken table surfaces as
//! [`Error::InternalInconsistency`] instead of a hang.

use crate::error::{Error, Result};
use crate::graph::{Graph, Node, NodeId};

use super::state::RunState;

impl RunState {
    /// Node ids on the shortest path from the source to `target`, both ends
    /// included.
    pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        if self.get(target).is_none() {
            return Err(Error::InvalidTarget {
                id: target,
                node_count: self.len(),
            });
        }

        let source = self.source();
        if target == source {
            return Ok(vec![source]);
        }
        if self.previous(target).is_none() {
            return Err(Error::Unreachable {
                origin: source,
                target,
            });
        }

        let mut path = vec![target];
        let mut current = target;
        while current != source {
            current = self.previous(current).ok_or_else(|| {
                Error::inconsistency(format!(
                    "predecessor chain of node {target} ends at node {current}, not at source {source}"
                ))
            })?;
            path.push(current);
            if path.len() > self.len() {
                return Err(Error::inconsistency(format!(
                    "predecessor chain of node {target} is longer than the graph; it contains a cycle"
                )));
            }
        }

        path.reverse();
        Ok(path)
    }
}

/// Nodes on the shortest path from the run's source to `target`.
///
/// `state` must come from a run over `graph`.
pub fn reconstruct_path<'g>(graph: &'g Graph, state: &RunState, target: NodeId) -> Result<Vec<&'g Node>> {
    if graph.node_count() != state.len() {
        return Err(Error::inconsistency(format!(
            "run state tracks {} nodes but the graph has {}",
            state.len(),
            graph.node_count()
        )));
    }

    state
        .path_to(target)?
        .into_iter()
        .map(|id| {
            graph
                .node(id)
                .ok_or_else(|| Error::inconsistency(format!("path names missing node {id}")))
        })
        .collect()
}
