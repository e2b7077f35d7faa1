use std::{
    collections::{BTreeSet, HashSet},
    hash::BuildHasher,
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use fixedbitset::FixedBitSet;

use crate::core::NodeId;

/// A set of visited nodes.
///
/// Besides the usual marking, the set supports unmarking a node, which lets a
/// two-pass traversal reuse one set: the first pass visits nodes, the second
/// pass treats visited nodes as not yet seen and unvisits them.
pub trait VisitSet<N: NodeId> {
    /// Marks the node as visited.
    ///
    /// Returns `true` when this is the first time the node is visited.
    fn visit(&mut self, id: N) -> bool;

    /// Removes the visited mark from the node.
    ///
    /// Returns `true` when the node was marked as visited.
    fn unvisit(&mut self, id: N) -> bool;

    /// Returns `true` if the node is marked as visited.
    fn is_visited(&self, id: &N) -> bool;

    /// Returns the number of visited nodes.
    fn visited_count(&self) -> usize;

    /// Resets the set of visited nodes to be empty.
    fn reset_visited(&mut self);
}

impl<N: NodeId> VisitSet<N> for BTreeSet<N> {
    fn visit(&mut self, id: N) -> bool {
        self.insert(id)
    }

    fn unvisit(&mut self, id: N) -> bool {
        self.remove(&id)
    }

    fn is_visited(&self, id: &N) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear();
    }
}

impl<N: NodeId, S: BuildHasher> VisitSet<N> for HashSet<N, S> {
    fn visit(&mut self, id: N) -> bool {
        self.insert(id)
    }

    fn unvisit(&mut self, id: N) -> bool {
        self.remove(&id)
    }

    fn is_visited(&self, id: &N) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl<N: NodeId> VisitSet<N> for FixedBitSet {
    fn visit(&mut self, id: N) -> bool {
        let bit = id.as_usize();
        if bit >= self.len() {
            self.grow(bit + 1);
        }
        !self.put(bit)
    }

    fn unvisit(&mut self, id: N) -> bool {
        let bit = id.as_usize();
        if self.contains(bit) {
            self.set(bit, false);
            true
        } else {
            false
        }
    }

    fn is_visited(&self, id: &N) -> bool {
        self.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl<N: NodeId> VisitSet<N> for TypedBitSet<N> {
    fn visit(&mut self, id: N) -> bool {
        (**self).visit(id)
    }

    fn unvisit(&mut self, id: N) -> bool {
        VisitSet::<N>::unvisit(&mut **self, id)
    }

    fn is_visited(&self, id: &N) -> bool {
        (**self).is_visited(id)
    }

    fn visited_count(&self) -> usize {
        VisitSet::<N>::visited_count(&**self)
    }

    fn reset_visited(&mut self) {
        VisitSet::<N>::reset_visited(&mut **self)
    }
}

/// Tiny [`FixedBitSet`] wrapper adding a generic type of the elements the set
/// holds.
pub struct TypedBitSet<T> {
    inner: FixedBitSet,
    ty: PhantomData<T>,
}

impl<T> TypedBitSet<T> {
    /// Creates a new empty bit set.
    pub fn new() -> Self {
        Self {
            inner: FixedBitSet::new(),
            ty: PhantomData,
        }
    }

    /// Creates a new empty bit set with given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FixedBitSet::with_capacity(capacity),
            ty: PhantomData,
        }
    }
}

impl<T> Default for TypedBitSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for TypedBitSet<T> {
    type Target = FixedBitSet;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for TypedBitSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
