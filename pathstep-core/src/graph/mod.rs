//! Graph Model
//!
//! This module holds the user-authored graph: nodes with opaque coordinates
//! and directed edges with positive integer weights.
//!
//! # Overview
//!
//! - Node ids are dense integers `0..N-1` equal to the node's index, so an id
//!   is also the key into adjacency lists and per-run state tables.
//! - Edges are stored in insertion order and may be parallel or self-loops.
//! - Mutation is validated for referential integrity and weight positivity
//!   only; any topology is legal.
//!
//! # Design Decisions
//!
//! 1. The graph holds no algorithm state. Distances, visited flags and
//!    predecessors live in a run-scoped table owned by the stepper, so a run
//!    borrows the graph immutably and can never leave it half-modified.
//!
//! 2. Adjacency is derived on demand rather than maintained alongside the
//!    edge list. A run snapshots it once at Init.

mod edge;
mod model;
mod node;
mod snapshot;

pub use edge::Edge;
pub use model::{random_weight, Adjacency, Graph, MAX_RANDOM_WEIGHT, MIN_RANDOM_WEIGHT};
pub use node::{Node, NodeId, Point};
pub use snapshot::{GraphSnapshot, NodeRecord};
