use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::{
    algo::{strong_components::Order, StrongComponents},
    core::{
        marker::{Direction, Incoming, Outgoing},
        NodeId,
    },
    graph::Graph,
};

pub fn create_path(node_count: usize) -> Graph<usize> {
    let mut graph = Graph::with_capacity(node_count);

    if node_count > 0 {
        graph.add_node(0);
    }

    for node in 1..node_count {
        graph.link(node - 1, node);
    }

    graph
}

pub fn create_cycle(node_count: usize) -> Graph<usize> {
    let mut graph = create_path(node_count);

    if node_count > 0 {
        graph.link(node_count - 1, 0);
    }

    graph
}

pub fn create_complete(node_count: usize) -> Graph<usize> {
    let mut graph = Graph::with_capacity(node_count);

    for u in 0..node_count {
        graph.add_node(u);

        for v in 0..node_count {
            if u != v {
                graph.link(u, v);
            }
        }
    }

    graph
}

/// Operations mutating a graph, used for fuzzing and property-based testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum MutOp<N> {
    AddNode(N),
    RemoveNode(N),
    Link(N, N),
    Unlink(N, N),
    Clear,
    ClearEdges,
}

impl<N: NodeId> MutOp<N> {
    /// Applies the operation on the graph. Returns whether the graph changed.
    pub fn apply(self, graph: &mut Graph<N>) -> bool {
        match self {
            MutOp::AddNode(node) => graph.add_node(node),
            MutOp::RemoveNode(node) => graph.remove_node(node),
            MutOp::Link(src, dst) => graph.link(src, dst),
            MutOp::Unlink(src, dst) => graph.unlink(src, dst),
            MutOp::Clear => {
                let changed = !graph.is_empty();
                graph.clear();
                changed
            }
            MutOp::ClearEdges => {
                let changed = graph.edge_count() > 0;
                graph.clear_edges();
                changed
            }
        }
    }
}

fn dir_name(dir: Direction) -> &'static str {
    match dir {
        Outgoing => "outgoing",
        Incoming => "incoming",
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError<N> {
    #[error("outgoing adjacency has {0} nodes but incoming adjacency has {1}")]
    NodeCountMismatch(usize, usize),
    #[error("node {0:?} is missing in {} adjacency", dir_name(*.1))]
    NodeMissing(N, Direction),
    #[error("edge {0:?} -> {1:?} is not mirrored in {} adjacency", dir_name(*.2))]
    EdgeNotMirrored(N, N, Direction),
    #[error("edge {0:?} -> {1:?} points to a node that is not in the graph")]
    DanglingEdge(N, N),
    #[error("sum of {} degrees ({0}) is not equal to edge count ({1})", dir_name(*.2))]
    EdgeCountMismatch(usize, usize, Direction),
    #[error("node {0:?} is not below the node bound ({1})")]
    NodeBoundInvalid(N, usize),
}

/// Verifies that the two halves of the graph mirror each other and that the
/// counters agree with the actual content.
pub fn check_consistency<N: NodeId>(graph: &Graph<N>) -> Result<(), ConsistencyCheckError<N>> {
    let out = graph.adjacency(Outgoing);
    let inc = graph.adjacency(Incoming);

    if out.len() != inc.len() {
        return Err(ConsistencyCheckError::NodeCountMismatch(
            out.len(),
            inc.len(),
        ));
    }

    for (this, other, dir) in [(out, inc, Outgoing), (inc, out, Incoming)] {
        let mut degree_sum = 0;

        for node in this.nodes() {
            if !other.contains(&node) {
                return Err(ConsistencyCheckError::NodeMissing(node, dir.opposite()));
            }

            if node.as_usize() >= graph.node_bound() {
                return Err(ConsistencyCheckError::NodeBoundInvalid(
                    node,
                    graph.node_bound(),
                ));
            }

            for neighbor in this.neighbors(&node) {
                let (src, dst) = match dir {
                    Outgoing => (node, neighbor),
                    Incoming => (neighbor, node),
                };

                if !this.contains(&neighbor) {
                    return Err(ConsistencyCheckError::DanglingEdge(src, dst));
                }

                if !other.contains_neighbor(&neighbor, &node) {
                    return Err(ConsistencyCheckError::EdgeNotMirrored(
                        src,
                        dst,
                        dir.opposite(),
                    ));
                }

                degree_sum += 1;
            }
        }

        if degree_sum != graph.edge_count() {
            return Err(ConsistencyCheckError::EdgeCountMismatch(
                degree_sum,
                graph.edge_count(),
                dir,
            ));
        }
    }

    Ok(())
}

/// Computes the set of nodes reachable from every node by brute force.
pub fn reachability<N: NodeId>(graph: &Graph<N>) -> FxHashMap<N, FxHashSet<N>> {
    graph
        .nodes()
        .map(|root| {
            let mut reached = FxHashSet::default();
            let mut stack = vec![root];
            reached.insert(root);

            while let Some(node) = stack.pop() {
                stack.extend(graph.successors(node).filter(|&next| reached.insert(next)));
            }

            (root, reached)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComponentsCheckError<N> {
    #[error("component at position {0} is empty")]
    EmptyComponent(usize),
    #[error("node {0:?} is in more than one component")]
    Duplicate(N),
    #[error("node {0:?} is not in any component")]
    Missing(N),
    #[error("node {0:?} is in a component but not in the graph")]
    Unknown(N),
    #[error("nodes {0:?} and {1:?} share a component but are not mutually reachable")]
    NotStronglyConnected(N, N),
    #[error("nodes {0:?} and {1:?} are mutually reachable but in different components")]
    NotMaximal(N, N),
    #[error("edge {0:?} -> {1:?} violates the order of components")]
    OrderViolated(N, N),
    #[error("cyclic flag of component at position {0} is wrong")]
    CyclicFlagInvalid(usize),
}

/// Verifies the strongly connected components against a brute-force
/// reachability computation. Intended for small graphs only.
pub fn check_strong_components<N: NodeId>(
    graph: &Graph<N>,
    components: &StrongComponents<N>,
) -> Result<(), ComponentsCheckError<N>> {
    let mut position = FxHashMap::default();

    for (i, component) in components.iter().enumerate() {
        if component.is_empty() {
            return Err(ComponentsCheckError::EmptyComponent(i));
        }

        for &node in component {
            if !graph.contains_node(node) {
                return Err(ComponentsCheckError::Unknown(node));
            }

            if position.insert(node, i).is_some() {
                return Err(ComponentsCheckError::Duplicate(node));
            }
        }
    }

    if let Some(node) = graph.nodes().find(|node| !position.contains_key(node)) {
        return Err(ComponentsCheckError::Missing(node));
    }

    let reachable = reachability(graph);
    let mutual = |u: &N, v: &N| reachable[u].contains(v) && reachable[v].contains(u);

    // Sorted for deterministic error reporting.
    let nodes = graph.nodes().collect::<BTreeSet<_>>();

    for u in nodes.iter() {
        for v in nodes.iter() {
            let same = position[u] == position[v];
            match (same, mutual(u, v)) {
                (true, false) => return Err(ComponentsCheckError::NotStronglyConnected(*u, *v)),
                (false, true) => return Err(ComponentsCheckError::NotMaximal(*u, *v)),
                _ => {}
            }
        }

        for v in graph.successors(*u) {
            let (src, dst) = (position[u], position[&v]);
            let valid = match components.order() {
                Order::DependenciesFirst => dst <= src,
                Order::DependentsFirst => src <= dst,
            };

            if !valid {
                return Err(ComponentsCheckError::OrderViolated(*u, v));
            }
        }
    }

    for (i, component) in components.iter().enumerate() {
        let expected = component.len() > 1 || graph.contains_edge(component[0], component[0]);
        if components.is_cyclic(i) != expected {
            return Err(ComponentsCheckError::CyclicFlagInvalid(i));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn generators() {
        let path = create_path(4);
        assert_eq!(path.node_count(), 4);
        assert_eq!(path.edge_count(), 3);
        check_consistency(&path).unwrap();

        let cycle = create_cycle(4);
        assert_eq!(cycle.edge_count(), 4);
        assert!(cycle.contains_edge(3, 0));
        check_consistency(&cycle).unwrap();

        let complete = create_complete(4);
        assert_eq!(complete.edge_count(), 12);
        check_consistency(&complete).unwrap();

        assert!(create_cycle(0).is_empty());
        assert_eq!(create_path(1).node_count(), 1);
    }

    #[test]
    fn reachability_is_reflexive_and_transitive() {
        let graph = create_path(3);
        let reachable = reachability(&graph);

        assert_eq!(reachable[&0], FxHashSet::from_iter([0, 1, 2]));
        assert_eq!(reachable[&2], FxHashSet::from_iter([2]));
    }

    #[test]
    fn complete_graph_is_one_component() {
        let graph = create_complete(5);
        let components = graph.strong_components();

        assert_eq!(components.len(), 1);
        check_strong_components(&graph, &components).unwrap();
    }

    #[test]
    fn accepts_both_orientations() {
        let graph = create_path(3);

        let dependents_first = StrongComponents::on(&graph)
            .order(Order::DependentsFirst)
            .run();
        check_strong_components(&graph, &dependents_first).unwrap();

        let dependencies_first = graph.strong_components();
        assert_eq!(dependencies_first.order(), Order::DependenciesFirst);
        check_strong_components(&graph, &dependencies_first).unwrap();
    }

    #[test]
    fn consistent_after_edits() {
        let mut graph = create_path(3);
        let mut other = graph.clone();

        graph.remove_node(1);
        other.unlink(0, 1);

        assert_ne!(graph, other);
        check_consistency(&graph).unwrap();
        check_consistency(&other).unwrap();
    }

    #[test]
    fn mut_op_apply() {
        let mut graph = Graph::<u8>::new();

        assert!(MutOp::Link(1, 2).apply(&mut graph));
        assert!(!MutOp::AddNode(1).apply(&mut graph));
        assert!(MutOp::ClearEdges.apply(&mut graph));
        assert!(!MutOp::Unlink(1, 2).apply(&mut graph));
        assert!(MutOp::RemoveNode(2).apply(&mut graph));
        assert!(MutOp::Clear.apply(&mut graph));
        assert!(!MutOp::Clear.apply(&mut graph));

        assert_matches!(check_consistency(&graph), Ok(()));
    }
}
