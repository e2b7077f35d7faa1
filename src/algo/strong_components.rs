//! Find [strongly connected components] of a graph in dependency order.
//!
//! See available parameters [here](StrongComponentsBuilder#implementations).
//!
//! Every node of the graph belongs to exactly one component, and two nodes
//! belong to the same component if and only if each is reachable from the
//! other. A component with more than one node, or with a single node linked to
//! itself, is a cycle.
//!
//! The components are returned in *dependency order*: if a node in component
//! A has an edge to a node in component B, then B comes before A. Processing
//! the components from first to last is therefore a valid build order where
//! an edge `src -> dst` means "`src` depends on `dst`". The order among
//! components that do not depend on each other, as well as the order of nodes
//! within a component, is not specified and should not be relied upon.
//!
//! [strongly connected components]:
//!     https://en.wikipedia.org/wiki/Strongly_connected_component
//!
//! # Examples
//!
//! ```
//! use depgraph::{algo::StrongComponents, Graph};
//!
//! let mut graph = Graph::<u32>::new();
//!
//! // Edge direction in "depends on" relation.
//! graph.link(1, 2);
//! graph.link(2, 3);
//! graph.link(3, 2);
//! graph.link(3, 4);
//!
//! let components = StrongComponents::on(&graph).run();
//!
//! assert_eq!(components.len(), 3);
//! assert_eq!(components.iter().next(), Some(&[4][..]));
//! assert_eq!(components.iter().last(), Some(&[1][..]));
//!
//! let cycles = components.cycles().collect::<Vec<_>>();
//! assert_eq!(cycles.len(), 1);
//!
//! let mut cycle = cycles[0].to_vec();
//! cycle.sort();
//! assert_eq!(cycle, vec![2, 3]);
//!
//! // Break the cycle and get a plain topological order.
//! graph.unlink(3, 2);
//! let order = graph.strong_components().into_topo_order().unwrap();
//! assert_eq!(order, vec![4, 3, 2, 1]);
//! ```

use fixedbitset::FixedBitSet;

use crate::{
    core::{error::CycleError, NodeId},
    graph::Graph,
};

mod builder;
mod kosaraju;

pub use builder::StrongComponentsBuilder;

/// Strongly connected components of a graph in dependency order.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct StrongComponents<N> {
    components: Vec<Vec<N>>,
    cyclic: FixedBitSet,
    order: Order,
}

impl<N: NodeId> StrongComponents<N> {
    fn new(components: Vec<Vec<N>>, order: Order, graph: &Graph<N>) -> Self {
        let mut cyclic = FixedBitSet::with_capacity(components.len());

        for (i, component) in components.iter().enumerate() {
            let is_cyclic = match component.as_slice() {
                [node] => graph.contains_edge(*node, *node),
                _ => true,
            };
            cyclic.set(i, is_cyclic);
        }

        Self {
            components,
            cyclic,
            order,
        }
    }

    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components, i.e., the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the orientation the components are ordered in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Returns an iterator of the components.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            inner: self.components.iter(),
        }
    }

    /// Returns `true` if the component at given position forms a cycle.
    pub fn is_cyclic(&self, index: usize) -> bool {
        self.cyclic.contains(index)
    }

    /// Returns `true` if no component forms a cycle.
    pub fn is_acyclic(&self) -> bool {
        self.cyclic.count_ones(..) == 0
    }

    /// Returns an iterator of the components that form a cycle.
    pub fn cycles(&self) -> impl Iterator<Item = &[N]> + '_ {
        self.cyclic
            .ones()
            .map(move |index| self.components[index].as_slice())
    }

    /// Returns the components as [`Vec`].
    pub fn into_vec(self) -> Vec<Vec<N>> {
        self.components
    }

    /// Returns all nodes in the order of their components, `Err` with the
    /// first cyclic component if there is any.
    ///
    /// On an acyclic graph every component is a single node, so this is a
    /// topological sort in the orientation of [`order`](Self::order).
    pub fn into_topo_order(self) -> Result<Vec<N>, CycleError<N>> {
        if let Some(index) = self.cyclic.ones().next() {
            let mut components = self.components;
            return Err(CycleError::new(components.swap_remove(index)));
        }

        Ok(self.components.into_iter().flatten().collect())
    }
}

impl<N> IntoIterator for StrongComponents<N> {
    type Item = Vec<N>;
    type IntoIter = std::vec::IntoIter<Vec<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, N: NodeId> IntoIterator for &'a StrongComponents<N> {
    type Item = &'a [N];
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, N> {
    inner: std::slice::Iter<'a, Vec<N>>,
}

impl<'a, N> Iterator for Iter<'a, N> {
    type Item = &'a [N];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, N> DoubleEndedIterator for Iter<'a, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|component| component.as_slice())
    }
}

impl<'a, N> ExactSizeIterator for Iter<'a, N> {}

/// Orientation of the sequence of [`StrongComponents`].
///
/// An edge `src -> dst` is read as "`src` depends on `dst`".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// A component comes after all components it depends on.
    ///
    /// # Use cases
    ///
    /// * Build order, where dependencies must be processed first.
    #[default]
    DependenciesFirst,

    /// A component comes before all components it depends on.
    ///
    /// This is the order in which Kosaraju's algorithm naturally reports the
    /// components of the original graph.
    ///
    /// # Use cases
    ///
    /// * Teardown order, where dependents must be released first.
    DependentsFirst,
}

/// Representation of the visited markers used by the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marking {
    /// Chooses [`Dense`](Marking::Dense) if the
    /// [node bound](Graph::node_bound) is reasonably close to the node count,
    /// [`Sparse`](Marking::Sparse) otherwise.
    #[default]
    Auto,

    /// A bit set indexed by the node identity. The fastest option for compact
    /// identity ranges, but its size is proportional to the largest identity.
    Dense,

    /// A hash set of the node identities. Its size is proportional to the node
    /// count regardless of the identity values.
    Sparse,
}
