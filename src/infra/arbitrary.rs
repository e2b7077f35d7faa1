use std::fmt;

use arbitrary::Arbitrary;

use crate::{core::NodeId, graph::Graph};

use super::testing::MutOp;

/// Sequence of graph mutations generated from fuzzer input.
#[derive(Arbitrary)]
pub struct MutOpsSeq<N>(pub Vec<MutOp<N>>);

impl<N> IntoIterator for MutOpsSeq<N> {
    type Item = MutOp<N>;
    type IntoIter = std::vec::IntoIter<MutOp<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<N: NodeId> MutOpsSeq<N> {
    /// Applies the operations on the graph while printing them as Rust code,
    /// which can be pasted into a regression test.
    pub fn replay(self, graph: &mut Graph<N>) {
        println!("let mut graph = Graph::new();");
        println!();

        for op in self {
            match &op {
                MutOp::AddNode(node) => println!("graph.add_node({node:?});"),
                MutOp::RemoveNode(node) => println!("graph.remove_node({node:?});"),
                MutOp::Link(src, dst) => println!("graph.link({src:?}, {dst:?});"),
                MutOp::Unlink(src, dst) => println!("graph.unlink({src:?}, {dst:?});"),
                MutOp::Clear => println!("graph.clear();"),
                MutOp::ClearEdges => println!("graph.clear_edges();"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<N: fmt::Debug> fmt::Debug for MutOpsSeq<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")?;
        writeln!(f)?;
        writeln!(f, "// use `cargo test fuzz_replay_mut_ops_seq`")
    }
}

#[cfg(test)]
mod tests {
    use arbitrary::Unstructured;

    use crate::infra::testing::{check_consistency, check_strong_components};

    use super::*;

    #[test]
    fn arbitrary_ops_keep_graph_consistent() {
        let data = (0..=255u8).cycle().take(4096).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);
        let ops = MutOpsSeq::<u8>::arbitrary(&mut u).unwrap();

        let mut graph = Graph::new();

        for op in ops {
            op.apply(&mut graph);
            check_consistency(&graph).unwrap();
        }

        check_strong_components(&graph, &graph.strong_components()).unwrap();
    }

    #[test]
    fn fuzz_replay_mut_ops_seq() {
        let ops = MutOpsSeq(vec![
            MutOp::Link(0u8, 1),
            MutOp::Link(1, 0),
            MutOp::Link(1, 1),
            MutOp::RemoveNode(1),
            MutOp::Link(2, 0),
            MutOp::Unlink(2, 0),
        ]);

        let mut graph = Graph::new();
        ops.replay(&mut graph);

        check_consistency(&graph).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }
}
