use rustc_hash::FxHashSet;

use crate::{
    common::TypedBitSet,
    core::{
        marker::{Incoming, Outgoing},
        NodeId,
    },
    graph::Graph,
};

use super::{kosaraju::kosaraju, Marking, Order, StrongComponents};

/// Dense markers are used as long as the node bound does not exceed the node
/// count more than this many times.
const DENSE_RATIO: usize = 32;

pub struct StrongComponentsBuilder<'a, N: NodeId> {
    graph: &'a Graph<N>,
    order: Order,
    marking: Marking,
}

impl<N: NodeId> StrongComponents<N> {
    /// Starts the configuration of the algorithm on given graph.
    ///
    /// Finish it with [`run`](StrongComponentsBuilder::run).
    pub fn on(graph: &Graph<N>) -> StrongComponentsBuilder<'_, N> {
        StrongComponentsBuilder {
            graph,
            order: Order::default(),
            marking: Marking::default(),
        }
    }
}

impl<'a, N: NodeId> StrongComponentsBuilder<'a, N> {
    /// Chooses the orientation of the resulting sequence.
    ///
    /// See [`Order`] for details.
    pub fn order(self, order: Order) -> Self {
        Self { order, ..self }
    }

    /// Chooses the representation of the visited markers.
    ///
    /// See [`Marking`] for details.
    pub fn marking(self, marking: Marking) -> Self {
        Self { marking, ..self }
    }

    /// Runs the algorithm.
    pub fn run(self) -> StrongComponents<N> {
        let graph = self.graph;

        // Kosaraju's algorithm emits the components in topological order of the
        // graph it runs the first pass on. Running it on the transposed graph
        // puts the sinks of the original graph, i.e. the dependencies, first.
        let (first, second) = match self.order {
            Order::DependenciesFirst => (Incoming, Outgoing),
            Order::DependentsFirst => (Outgoing, Incoming),
        };
        let first = graph.adjacency(first);
        let second = graph.adjacency(second);

        let components = if self.use_dense() {
            kosaraju(first, second, TypedBitSet::<N>::with_capacity(graph.node_bound()))
        } else {
            kosaraju(
                first,
                second,
                FxHashSet::<N>::with_capacity_and_hasher(graph.node_count(), Default::default()),
            )
        };

        StrongComponents::new(components, self.order, graph)
    }

    fn use_dense(&self) -> bool {
        match self.marking {
            Marking::Dense => true,
            Marking::Sparse => false,
            Marking::Auto => {
                self.graph.node_bound() <= self.graph.node_count().saturating_mul(DENSE_RATIO)
            }
        }
    }
}
