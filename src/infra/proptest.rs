use proptest::{collection::vec, prelude::*};

use crate::graph::Graph;

use super::testing::MutOp;

/// Strategy for directed graphs with node identities in `0..node_bound` and at
/// most `max_edge_count` edges. Self-loops are allowed. Some nodes may be
/// isolated.
///
/// `node_bound` must be positive.
pub fn graph_directed(
    node_bound: u32,
    max_edge_count: usize,
) -> impl Strategy<Value = Graph<u32>> {
    (
        vec(0..node_bound, 0..=node_bound as usize),
        vec((0..node_bound, 0..node_bound), 0..=max_edge_count),
    )
        .prop_map(|(nodes, edges)| {
            let mut graph = Graph::with_capacity(nodes.len());

            for node in nodes {
                graph.add_node(node);
            }

            graph.extend(edges);
            graph
        })
}

/// Strategy for a single mutation on nodes in `0..node_bound`. Edge insertions
/// are the most frequent so that the graphs grow cycles.
///
/// `node_bound` must be positive.
pub fn mut_op(node_bound: u32) -> impl Strategy<Value = MutOp<u32>> {
    prop_oneof![
        2 => (0..node_bound).prop_map(MutOp::AddNode),
        2 => (0..node_bound).prop_map(MutOp::RemoveNode),
        8 => (0..node_bound, 0..node_bound).prop_map(|(src, dst)| MutOp::Link(src, dst)),
        4 => (0..node_bound, 0..node_bound).prop_map(|(src, dst)| MutOp::Unlink(src, dst)),
        1 => Just(MutOp::ClearEdges),
    ]
}

/// Strategy for sequences of mutations, see [`mut_op`].
pub fn mut_ops(node_bound: u32, max_len: usize) -> impl Strategy<Value = Vec<MutOp<u32>>> {
    vec(mut_op(node_bound), 0..=max_len)
}

#[cfg(test)]
mod tests {
    use crate::infra::testing::check_consistency;

    use super::*;

    proptest! {
        #[test]
        fn generated_graph_is_consistent(graph in graph_directed(16, 48)) {
            prop_assert!(graph.node_count() <= 16);
            prop_assert!(graph.edge_count() <= 48);
            prop_assert!(check_consistency(&graph).is_ok());
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_mut_ops_keep_graph_consistent(ops in mut_ops(12, 96)) {
            let mut graph = Graph::new();

            for op in ops {
                op.apply(&mut graph);
                prop_assert_eq!(check_consistency(&graph), Ok(()));
            }
        }
    }
}
