//! Pathstep Core
//!
//! This crate provides a steppable, replayable single-source shortest-path
//! engine for visualizing Dijkstra's algorithm. It implements:
//!
//! - A graph model of positioned nodes and directed, positively weighted edges
//! - A deterministic priority queue (ties broken by node id)
//! - An incremental Dijkstra stepper that exposes every decision as an event
//! - Path reconstruction from the final predecessor tree
//! - An async animation driver that paces events for a renderer or log
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Graph model, validation and JSON snapshots
//! - `search`: Priority queue, run state, stepper and path reconstruction
//! - `driver`: Event sinks and timed playback
//! - `error`: The crate-wide error type
//!
//! # Example
//!
//! ```rust
//! use pathstep_core::graph::{Graph, Point};
//! use pathstep_core::search::{reconstruct_path, run_shortest_path, Distance};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node(Point::new(0.0, 0.0));
//! let b = graph.add_node(Point::new(100.0, 0.0));
//! let c = graph.add_node(Point::new(50.0, 80.0));
//! graph.add_edge(a, b, 4)?;
//! graph.add_edge(a, c, 1)?;
//! graph.add_edge(c, b, 1)?;
//!
//! let mut run = run_shortest_path(&graph, a, b)?;
//! for event in run.by_ref() {
//!     println!("{event}");
//! }
//!
//! let state = run.finish();
//! assert_eq!(state.distance(b), Distance::Finite(2));
//!
//! let path: Vec<_> = reconstruct_path(&graph, &state, b)?
//!     .iter()
//!     .map(|node| node.id())
//!     .collect();
//! assert_eq!(path, vec![a, c, b]);
//! # Ok::<(), pathstep_core::Error>(())
//! ```

pub mod driver;
pub mod error;
pub mod graph;
pub mod search;

pub use error::{Error, Result};
