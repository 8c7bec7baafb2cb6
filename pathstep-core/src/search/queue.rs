//! Priority Queue
//!
//! A min-ordered queue of `(distance, node)` entries backed by a binary heap.
//!
//! # Ordering
//!
//! Entries with smaller distances come out first. Equal distances are broken
//! by the lower node id, which makes every run over the same graph pop nodes
//! in the same order and therefore produce the same event sequence.
//!
//! # Duplicates
//!
//! A node may be pushed several times at decreasing distances before it is
//! visited. The queue keeps every entry; the stepper discards the stale ones
//! when they surface after the node has been visited.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::graph::NodeId;

use super::state::Distance;

/// A queued node together with the distance it was pushed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub distance: Distance,
    pub node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue keyed by tentative distance, ties broken by node id.
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<Reverse<QueueEntry>>,
}

impl PriorityQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Insert `node` at `distance`. O(log n).
    pub fn push(&mut self, node: NodeId, distance: Distance) {
        self.heap.push(Reverse(QueueEntry { distance, node }));
    }

    /// Remove and return the entry with the smallest distance.
    ///
    /// Fails with [`Error::EmptyQueue`] if there is nothing left.
    pub fn pop_min(&mut self) -> Result<QueueEntry> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry)
            .ok_or(Error::EmptyQueue)
    }

    /// Look at the entry `pop_min` would return.
    pub fn peek_min(&self) -> Option<&QueueEntry> {
        self.heap.peek().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
