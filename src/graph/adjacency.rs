use std::collections::{hash_map, hash_set};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::NodeId;

/// One direction of the edge relation: a mapping from a node to the set of its
/// neighbors in that direction.
///
/// A [`Graph`](super::Graph) owns two adjacencies, one for successors and one
/// for predecessors, and keeps them mirror images of each other. The mutating
/// methods are private to the graph module, so the pairing cannot be broken
/// from the outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency<N: NodeId> {
    map: FxHashMap<N, FxHashSet<N>>,
}

impl<N: NodeId> Adjacency<N> {
    pub(super) fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if the node has an entry.
    pub fn contains(&self, node: &N) -> bool {
        self.map.contains_key(node)
    }

    /// Returns `true` if `to` is a neighbor of `from`.
    pub fn contains_neighbor(&self, from: &N, to: &N) -> bool {
        self.map
            .get(from)
            .map(|neighbors| neighbors.contains(to))
            .unwrap_or(false)
    }

    /// Returns the number of neighbors of the node, zero if it is absent.
    pub fn degree(&self, node: &N) -> usize {
        self.map.get(node).map(FxHashSet::len).unwrap_or(0)
    }

    /// Returns an iterator over the neighbors of the node. The iterator is
    /// empty if the node is absent.
    pub fn neighbors(&self, node: &N) -> Neighbors<'_, N> {
        Neighbors {
            inner: self.map.get(node).map(|neighbors| neighbors.iter()),
        }
    }

    /// Returns an iterator over all nodes in unspecified order.
    pub fn nodes(&self) -> Nodes<'_, N> {
        Nodes {
            inner: self.map.keys(),
        }
    }

    pub(super) fn insert_node(&mut self, node: N) -> bool {
        match self.map.entry(node) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(FxHashSet::default());
                true
            }
        }
    }

    pub(super) fn remove_node(&mut self, node: &N) -> Option<FxHashSet<N>> {
        self.map.remove(node)
    }

    pub(super) fn insert(&mut self, from: N, to: N) -> bool {
        self.map.entry(from).or_default().insert(to)
    }

    pub(super) fn remove(&mut self, from: &N, to: &N) -> bool {
        self.map
            .get_mut(from)
            .map(|neighbors| neighbors.remove(to))
            .unwrap_or(false)
    }

    pub(super) fn clear(&mut self) {
        self.map.clear();
    }

    pub(super) fn clear_neighbors(&mut self) {
        for neighbors in self.map.values_mut() {
            neighbors.clear();
        }
    }
}

/// Iterator over neighbors of a node in one direction.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, N> {
    inner: Option<hash_set::Iter<'a, N>>,
}

impl<'a, N: NodeId> Iterator for Neighbors<'a, N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.inner {
            Some(ref inner) => inner.size_hint(),
            None => (0, Some(0)),
        }
    }
}

/// Iterator over nodes of a graph.
#[derive(Debug, Clone)]
pub struct Nodes<'a, N> {
    inner: hash_map::Keys<'a, N, FxHashSet<N>>,
}

impl<'a, N: NodeId> Iterator for Nodes<'a, N> {
    type Item = N;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, N: NodeId> ExactSizeIterator for Nodes<'a, N> {}
