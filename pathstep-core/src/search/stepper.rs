//! Shortest-Path Stepper
//!
//! Dijkstra's algorithm as a synchronous, pull-driven state machine.
//!
//! # Phases
//!
//! 1. Init runs inside [`run_shortest_path`]: source and target are
//!    validated, a fresh [`RunState`] is built (every node infinite,
//!    unvisited, without predecessor; the source at zero) and the source is
//!    queued. A run cannot start any other way, so stale state from an
//!    earlier or abandoned run is never reused.
//!
//! 2. Relaxing: each pull that finds no buffered events performs one
//!    iteration. The minimum entry is popped; if its node is already visited
//!    the entry is stale and is dropped without an event. Otherwise the node
//!    is visited and every outgoing edge to an unvisited destination is
//!    examined and either improves the destination or does not.
//!
//! 3. Done: the queue reports empty, a single `Done` event is emitted and
//!    the sequence ends.
//!
//! The stepper performs no I/O and never sleeps. Pacing belongs to the
//! consumer, which may stop pulling at any point; the graph is only borrowed,
//! so an abandoned run leaves it untouched.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Adjacency, Graph, NodeId};

use super::event::AlgorithmEvent;
use super::queue::PriorityQueue;
use super::state::{Distance, RunState};

/// Where a run is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nodes remain in the queue.
    Relaxing,
    /// The queue is exhausted; results are final.
    Done,
}

/// An in-progress shortest-path run.
///
/// Iterating yields the run's events in algorithm order. The sequence is
/// finite and cannot be restarted; call [`run_shortest_path`] again to
/// replay it.
#[derive(Debug)]
pub struct ShortestPath<'g> {
    graph: &'g Graph,

    /// Outgoing edge indices, captured at Init.
    adjacency: Adjacency,

    state: RunState,
    queue: PriorityQueue,
    target: NodeId,
    phase: Phase,

    /// Events produced by the current iteration and not yet pulled.
    pending: VecDeque<AlgorithmEvent>,
}

/// Start a shortest-path run from `source`.
///
/// `target` is validated here so that callers learn about a bad id before
/// any event is produced; the run itself always settles every node
/// reachable from `source`.
pub fn run_shortest_path(graph: &Graph, source: NodeId, target: NodeId) -> Result<ShortestPath<'_>> {
    ShortestPath::new(graph, source, target)
}

impl<'g> ShortestPath<'g> {
    /// Validate the endpoints and perform Init.
    pub fn new(graph: &'g Graph, source: NodeId, target: NodeId) -> Result<Self> {
        let node_count = graph.node_count();
        if !graph.contains(source) {
            return Err(Error::InvalidSource {
                id: source,
                node_count,
            });
        }
        if !graph.contains(target) {
            return Err(Error::InvalidTarget {
                id: target,
                node_count,
            });
        }

        let mut queue = PriorityQueue::with_capacity(node_count);
        queue.push(source, Distance::ZERO);

        debug!(%source, goal = %target, nodes = node_count, edges = graph.edge_count(), "starting shortest-path run");

        Ok(Self {
            graph,
            adjacency: graph.adjacency(),
            state: RunState::init(node_count, source),
            queue,
            target,
            phase: Phase::Relaxing,
            pending: VecDeque::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn source(&self) -> NodeId {
        self.state.source()
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The graph this run reads from.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Current per-node state. Final once the phase is [`Phase::Done`].
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Drain the remaining events and hand back the final state.
    pub fn finish(mut self) -> RunState {
        self.by_ref().for_each(drop);
        self.state
    }

    /// Stop the run where it is and hand back its state.
    ///
    /// The state is only final if the phase is already [`Phase::Done`].
    pub fn into_state(self) -> RunState {
        self.state
    }

    /// Perform one Relaxing iteration, buffering its events.
    fn relax_next(&mut self) {
        loop {
            let entry = match self.queue.pop_min() {
                Ok(entry) => entry,
                Err(_) => {
                    self.phase = Phase::Done;
                    self.pending.push_back(AlgorithmEvent::Done);
                    debug!(
                        source = %self.state.source(),
                        goal = %self.target,
                        goal_distance = %self.state.distance(self.target),
                        "shortest-path run complete"
                    );
                    return;
                }
            };

            let current = entry.node;
            if self.state.is_visited(current) {
                trace!(node = %current, distance = %entry.distance, "discarding stale queue entry");
                continue;
            }

            let distance = self.state.distance(current);
            debug_assert_eq!(entry.distance, distance, "first entry of a node must be its best");
            self.state.mark_visited(current);
            self.pending.push_back(AlgorithmEvent::NodeVisited {
                id: current,
                distance,
            });

            for &index in &self.adjacency[current.index()] {
                let edge = self.graph.edges()[index];
                if self.state.is_visited(edge.to) {
                    continue;
                }

                let current_distance = self.state.distance(edge.to);
                let candidate_distance = distance.extend(edge.weight);
                self.pending.push_back(AlgorithmEvent::EdgeExamined {
                    from: current,
                    to: edge.to,
                    weight: edge.weight,
                    current_distance,
                    candidate_distance,
                });

                if candidate_distance < current_distance {
                    self.state.improve(edge.to, candidate_distance, current);
                    self.queue.push(edge.to, candidate_distance);
                    self.pending.push_back(AlgorithmEvent::DistanceUpdated {
                        id: edge.to,
                        old_distance: current_distance,
                        new_distance: candidate_distance,
                    });
                } else {
                    self.pending.push_back(AlgorithmEvent::NoUpdate { id: edge.to });
                }
            }
            return;
        }
    }
}

impl Iterator for ShortestPath<'_> {
    type Item = AlgorithmEvent;

    fn next(&mut self) -> Option<AlgorithmEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                trace!(%event, "algorithm event");
                return Some(event);
            }
            if self.phase == Phase::Done {
                return None;
            }
            self.relax_next();
        }
    }
}

impl FusedIterator for ShortestPath<'_> {}
