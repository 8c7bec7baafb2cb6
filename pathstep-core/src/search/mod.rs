//! Shortest-Path Search
//!
//! This module implements the incremental Dijkstra engine and the path
//! reconstructor.
//!
//! # Concepts
//!
//! ## Runs
//!
//! A run is started with [`run_shortest_path`] and consumed as an iterator of
//! [`AlgorithmEvent`]s. Each run owns a fresh [`RunState`] table holding the
//! tentative distance, visited flag and predecessor of every node, and reads
//! the graph through a shared borrow.
//!
//! ## Determinism
//!
//! The priority queue breaks distance ties by node id and outgoing edges are
//! examined in insertion order, so two runs over the same graph with the same
//! endpoints produce identical event sequences.
//!
//! ## Reconstruction
//!
//! Once a run is done, [`reconstruct_path`] (or [`RunState::path_to`]) walks
//! the predecessor tree from a target back to the source.

mod event;
mod path;
mod queue;
mod state;
mod stepper;

pub use event::AlgorithmEvent;
pub use path::reconstruct_path;
pub use queue::{PriorityQueue, QueueEntry};
pub use state::{Distance, NodeState, RunState};
pub use stepper::{run_shortest_path, Phase, ShortestPath};
