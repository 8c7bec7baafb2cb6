//! Graph Model
//!
//! The graph holds nodes and directed weighted edges. It validates referential
//! integrity and weights on mutation and nothing else: cycles, disconnected
//! components, parallel edges and self-loops are all legal.
//!
//! Edges are kept in insertion order. That order is observable: the stepper
//! examines a node's outgoing edges in the order they were added, and undo
//! removes the most recently added edge.

use rand::Rng;
use smallvec::SmallVec;
use tracing::debug;

use super::edge::Edge;
use super::node::{Node, NodeId, Point};
use crate::error::{Error, Result};

/// Outgoing edge indices per node, in insertion order.
///
/// Most authored graphs have a handful of edges per node, so the lists stay
/// inline.
pub type Adjacency = Vec<SmallVec<[usize; 4]>>;

/// Smallest weight handed out by [`random_weight`].
pub const MIN_RANDOM_WEIGHT: u32 = 1;

/// Largest weight handed out by [`random_weight`].
pub const MAX_RANDOM_WEIGHT: u32 = 9;

/// Draw a weight uniformly from `MIN_RANDOM_WEIGHT..=MAX_RANDOM_WEIGHT`.
pub fn random_weight<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(MIN_RANDOM_WEIGHT..=MAX_RANDOM_WEIGHT)
}

/// A weighted directed graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, indexed by id.
    nodes: Vec<Node>,

    /// All edges, in insertion order.
    edges: Vec<Edge>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its id.
    ///
    /// Ids are assigned sequentially and never reused.
    pub fn add_node(&mut self, position: Point) -> NodeId {
        let id = NodeId::from(self.nodes.len());
        self.nodes.push(Node::new(id, position));
        debug!(node = %id, x = position.x, y = position.y, "added node");
        id
    }

    /// Append a directed edge and return its index.
    ///
    /// Fails without modifying the graph if either endpoint is unknown or the
    /// weight is zero.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: u32) -> Result<usize> {
        self.check_node(from)?;
        self.check_node(to)?;
        check_weight(weight)?;

        let index = self.edges.len();
        self.edges.push(Edge::new(from, to, weight));
        debug!(%from, %to, weight, index, "added edge");
        Ok(index)
    }

    /// Remove the most recently added edge going from `from` to `to`.
    ///
    /// Returns the removed edge, or `None` if no such edge exists.
    pub fn remove_last_edge(&mut self, from: NodeId, to: NodeId) -> Option<Edge> {
        let index = self.edges.iter().rposition(|edge| edge.connects(from, to))?;
        let edge = self.edges.remove(index);
        debug!(%from, %to, index, "removed edge");
        Some(edge)
    }

    /// Remove the most recently added edge, whatever its endpoints.
    pub fn undo_last_edge(&mut self) -> Option<Edge> {
        let edge = self.edges.pop()?;
        debug!(from = %edge.from, to = %edge.to, "undid edge");
        Some(edge)
    }

    /// Replace the weight of the edge at `index`.
    pub fn set_weight(&mut self, index: usize, weight: u32) -> Result<()> {
        check_weight(weight)?;
        let edge_count = self.edges.len();
        let edge = self
            .edges
            .get_mut(index)
            .ok_or(Error::InvalidEdge { index, edge_count })?;
        edge.weight = weight;
        debug!(index, weight, "set edge weight");
        Ok(())
    }

    /// Give every edge a fresh random weight.
    pub fn randomize_weights<R: Rng>(&mut self, rng: &mut R) {
        for edge in &mut self.edges {
            edge.weight = random_weight(rng);
        }
        debug!(edges = self.edges.len(), "randomized edge weights");
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        debug!("cleared graph");
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// All nodes, in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges leaving `id`, in insertion order.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |edge| edge.from == id)
    }

    /// Build the outgoing edge index lists for every node.
    pub fn adjacency(&self) -> Adjacency {
        let mut adjacency: Adjacency = vec![SmallVec::new(); self.nodes.len()];
        for (index, edge) in self.edges.iter().enumerate() {
            adjacency[edge.from.index()].push(index);
        }
        adjacency
    }

    /// Check if `id` names a node of this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn check_node(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::InvalidReference {
                id,
                node_count: self.nodes.len(),
            })
        }
    }
}

fn check_weight(weight: u32) -> Result<()> {
    if weight == 0 {
        Err(Error::InvalidWeight { weight })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn three_nodes() -> (Graph, NodeId, NodeId, NodeId) {
        let mut graph = Graph::new();
        let a = graph.add_node(Point::new(0.0, 0.0));
        let b = graph.add_node(Point::new(10.0, 0.0));
        let c = graph.add_node(Point::new(0.0, 10.0));
        (graph, a, b, c)
    }

    #[test]
    fn node_ids_are_sequential() {
        let (graph, a, b, c) = three_nodes();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(c.index(), 2);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node(b).unwrap().position(), Point::new(10.0, 0.0));
    }

    #[test]
    fn add_edge_rejects_unknown_endpoints() {
        let (mut graph, a, _, _) = three_nodes();

        let err = graph.add_edge(a, NodeId::from(9), 1).unwrap_err();
        assert!(matches!(err, Error::InvalidReference { id, node_count: 3 } if id == NodeId::from(9)));

        let err = graph.add_edge(NodeId::from(5), a, 1).unwrap_err();
        assert!(matches!(err, Error::InvalidReference { .. }));

        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn add_edge_rejects_zero_weight() {
        let (mut graph, a, b, _) = three_nodes();
        let err = graph.add_edge(a, b, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { weight: 0 }));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn parallel_edges_and_self_loops_are_legal() {
        let (mut graph, a, b, _) = three_nodes();
        graph.add_edge(a, b, 2).unwrap();
        graph.add_edge(a, b, 5).unwrap();
        graph.add_edge(a, a, 1).unwrap();
        assert_eq!(graph.outgoing(a).count(), 3);
    }

    #[test]
    fn remove_last_edge_takes_most_recent_match() {
        let (mut graph, a, b, c) = three_nodes();
        graph.add_edge(a, b, 2).unwrap();
        graph.add_edge(a, c, 3).unwrap();
        graph.add_edge(a, b, 7).unwrap();

        let removed = graph.remove_last_edge(a, b).unwrap();
        assert_eq!(removed.weight, 7);

        let weights: Vec<_> = graph.edges().iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![2, 3]);
    }

    #[test]
    fn remove_last_edge_without_match_is_noop() {
        let (mut graph, a, b, _) = three_nodes();
        graph.add_edge(a, b, 2).unwrap();

        assert!(graph.remove_last_edge(b, a).is_none());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn undo_pops_latest_edge() {
        let (mut graph, a, b, c) = three_nodes();
        graph.add_edge(a, b, 2).unwrap();
        graph.add_edge(b, c, 3).unwrap();

        let undone = graph.undo_last_edge().unwrap();
        assert!(undone.connects(b, c));
        assert_eq!(graph.edge_count(), 1);

        graph.undo_last_edge();
        assert!(graph.undo_last_edge().is_none());
    }

    #[test]
    fn set_weight_validates() {
        let (mut graph, a, b, _) = three_nodes();
        let index = graph.add_edge(a, b, 2).unwrap();

        graph.set_weight(index, 8).unwrap();
        assert_eq!(graph.edges()[index].weight, 8);

        assert!(matches!(
            graph.set_weight(index, 0),
            Err(Error::InvalidWeight { weight: 0 })
        ));
        assert!(matches!(
            graph.set_weight(4, 3),
            Err(Error::InvalidEdge { index: 4, edge_count: 1 })
        ));
        assert_eq!(graph.edges()[index].weight, 8);
    }

    #[test]
    fn adjacency_keeps_insertion_order() {
        let (mut graph, a, b, c) = three_nodes();
        graph.add_edge(a, c, 1).unwrap();
        graph.add_edge(b, a, 1).unwrap();
        graph.add_edge(a, b, 1).unwrap();

        let adjacency = graph.adjacency();
        assert_eq!(adjacency.len(), 3);
        assert_eq!(adjacency[a.index()].as_slice(), &[0, 2]);
        assert_eq!(adjacency[b.index()].as_slice(), &[1]);
        assert!(adjacency[c.index()].is_empty());
    }

    #[test]
    fn randomized_weights_stay_in_range() {
        let (mut graph, a, b, c) = three_nodes();
        for _ in 0..20 {
            graph.add_edge(a, b, 1).unwrap();
            graph.add_edge(b, c, 1).unwrap();
        }

        let mut rng = StdRng::seed_from_u64(7);
        graph.randomize_weights(&mut rng);

        assert!(graph
            .edges()
            .iter()
            .all(|e| (MIN_RANDOM_WEIGHT..=MAX_RANDOM_WEIGHT).contains(&e.weight)));
    }

    #[test]
    fn clear_empties_the_graph() {
        let (mut graph, a, b, _) = three_nodes();
        graph.add_edge(a, b, 1).unwrap();
        graph.clear();

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.add_node(Point::default()), NodeId::from(0));
    }
}
