//! Directed graph backed by hash maps.
//!
//! [`Graph`] keeps two [adjacencies](Adjacency), successors and predecessors
//! of every node, as mirror images of each other. Edge insertion and removal
//! are O(1) and node removal is O(degree), so the graph can be edited in place
//! between repeated runs of
//! [`StrongComponents`](crate::algo::StrongComponents) without compacting
//! any index-based storage.
//!
//! # Examples
//!
//! ```
//! use depgraph::Graph;
//!
//! let mut graph = Graph::<u32>::new();
//!
//! graph.link(1, 2);
//! graph.link(2, 3);
//! graph.link(3, 2);
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//!
//! graph.remove_node(2);
//! assert!(!graph.contains_edge(1, 2));
//! assert_eq!(graph.successors(1).count(), 0);
//! ```

mod adjacency;

pub use adjacency::{Adjacency, Neighbors, Nodes};

use crate::{
    algo::StrongComponents,
    core::{
        marker::{Direction, Incoming, Outgoing},
        NodeId,
    },
};

/// Directed graph of node identities.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId = usize> {
    out: Adjacency<N>,
    inc: Adjacency<N>,
    edge_count: usize,
    node_bound: usize,
}

impl<N: NodeId> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            out: Adjacency::new(),
            inc: Adjacency::new(),
            edge_count: 0,
            node_bound: 0,
        }
    }

    /// Creates an empty graph with space for at least `node_count` nodes.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            out: Adjacency::with_capacity(node_count),
            inc: Adjacency::with_capacity(node_count),
            edge_count: 0,
            node_bound: 0,
        }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.out.len()
    }

    /// Returns the number of edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns an upper bound on the integer values of the node identities.
    ///
    /// It is one more than the largest identity inserted since the graph was
    /// created or [cleared](Graph::clear). Removing nodes does not lower it.
    pub fn node_bound(&self) -> usize {
        self.node_bound
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn contains_node(&self, node: N) -> bool {
        self.out.contains(&node)
    }

    pub fn contains_edge(&self, src: N, dst: N) -> bool {
        self.out.contains_neighbor(&src, &dst)
    }

    /// Returns an iterator over all nodes in unspecified order.
    pub fn nodes(&self) -> Nodes<'_, N> {
        self.out.nodes()
    }

    /// Returns an iterator over the nodes `node` has an edge to.
    pub fn successors(&self, node: N) -> Neighbors<'_, N> {
        self.out.neighbors(&node)
    }

    /// Returns an iterator over the nodes that have an edge to `node`.
    pub fn predecessors(&self, node: N) -> Neighbors<'_, N> {
        self.inc.neighbors(&node)
    }

    pub fn neighbors_directed(&self, node: N, dir: Direction) -> Neighbors<'_, N> {
        self.adjacency(dir).neighbors(&node)
    }

    pub fn out_degree(&self, node: N) -> usize {
        self.out.degree(&node)
    }

    pub fn in_degree(&self, node: N) -> usize {
        self.inc.degree(&node)
    }

    /// Returns read-only access to one half of the edge relation.
    pub fn adjacency(&self, dir: Direction) -> &Adjacency<N> {
        match dir {
            Outgoing => &self.out,
            Incoming => &self.inc,
        }
    }

    /// Adds the node if it is not present yet.
    ///
    /// Returns `true` if the node was added.
    pub fn add_node(&mut self, node: N) -> bool {
        if !self.out.insert_node(node) {
            return false;
        }

        self.inc.insert_node(node);
        self.node_bound = self.node_bound.max(node.as_usize().saturating_add(1));
        true
    }

    /// Removes the node together with all its incoming and outgoing edges.
    ///
    /// Returns `false` if the node was not present.
    pub fn remove_node(&mut self, node: N) -> bool {
        let successors = match self.out.remove_node(&node) {
            Some(successors) => successors,
            None => return false,
        };
        let predecessors = self.inc.remove_node(&node).unwrap_or_default();

        for succ in successors.iter().filter(|&&succ| succ != node) {
            self.inc.remove(succ, &node);
        }

        for pred in predecessors.iter().filter(|&&pred| pred != node) {
            self.out.remove(pred, &node);
        }

        // A self-loop is present in both sets, but it is a single edge.
        let self_loop = usize::from(successors.contains(&node));
        self.edge_count -= successors.len() + predecessors.len() - self_loop;

        true
    }

    /// Adds an edge from `src` to `dst`, adding the endpoints if they are not
    /// present. `src` and `dst` may be the same node.
    ///
    /// Returns `true` if the edge was added, `false` if it already existed.
    pub fn link(&mut self, src: N, dst: N) -> bool {
        self.add_node(src);
        self.add_node(dst);

        if !self.out.insert(src, dst) {
            return false;
        }

        self.inc.insert(dst, src);
        self.edge_count += 1;
        true
    }

    /// Removes the edge from `src` to `dst`. The endpoints stay in the graph.
    ///
    /// Returns `true` if the edge was removed.
    pub fn unlink(&mut self, src: N, dst: N) -> bool {
        if !self.out.remove(&src, &dst) {
            return false;
        }

        self.inc.remove(&dst, &src);
        self.edge_count -= 1;
        true
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.out.clear();
        self.inc.clear();
        self.edge_count = 0;
        self.node_bound = 0;
    }

    /// Removes all edges, the nodes stay in the graph.
    pub fn clear_edges(&mut self) {
        self.out.clear_neighbors();
        self.inc.clear_neighbors();
        self.edge_count = 0;
    }

    /// Computes the strongly connected components with default settings.
    ///
    /// The components are in dependency order: every component comes after
    /// all components it has an edge to. Use
    /// [`StrongComponents::on`](crate::algo::StrongComponents::on) for other
    /// options.
    pub fn strong_components(&self) -> StrongComponents<N> {
        StrongComponents::on(self).run()
    }
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        // The incoming half is fully determined by the outgoing one.
        self.out == other.out
    }
}

impl<N: NodeId> Eq for Graph<N> {}

impl<N: NodeId> Extend<(N, N)> for Graph<N> {
    fn extend<T: IntoIterator<Item = (N, N)>>(&mut self, iter: T) {
        for (src, dst) in iter {
            self.link(src, dst);
        }
    }
}

impl<N: NodeId> FromIterator<(N, N)> for Graph<N> {
    fn from_iter<T: IntoIterator<Item = (N, N)>>(iter: T) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
