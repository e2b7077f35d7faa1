use std::{
    collections::BTreeSet,
    fmt::Debug,
    io::{self, Cursor, Write},
};

use crate::{algo::StrongComponents, core::NodeId, graph::Graph};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Writes a graph in [DOT](https://graphviz.org/doc/info/lang.html) format.
///
/// Nodes and edges are written sorted by identity, so the output is stable
/// across runs.
pub struct Dot<N> {
    name: String,
    get_node_label: Box<dyn Fn(&N) -> String>,
}

impl<N: NodeId> Dot<N> {
    pub fn new<F>(name: Option<String>, get_node_label: F) -> Self
    where
        F: Fn(&N) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_node_label: Box::new(get_node_label),
        }
    }

    pub fn with_debug(name: Option<String>) -> Self
    where
        N: Debug,
    {
        Self::new(name, |node| format!("{node:?}"))
    }

    pub fn to_string(&self, graph: &Graph<N>) -> String {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }

    /// Writes the graph with the nodes of every cyclic component grouped in a
    /// cluster subgraph.
    pub fn export_clustered<W: Write>(
        &self,
        graph: &Graph<N>,
        components: &StrongComponents<N>,
        out: &mut W,
    ) -> io::Result<()> {
        self.write_header(out)?;

        let mut clustered = BTreeSet::new();

        for (i, component) in components.iter().enumerate() {
            if !components.is_cyclic(i) {
                continue;
            }

            writeln!(out, "    subgraph cluster_{i} {{")?;
            for node in component.iter().collect::<BTreeSet<_>>() {
                write!(out, "    ")?;
                self.write_node(node, out)?;
                clustered.insert(*node);
            }
            writeln!(out, "    }}")?;
        }

        for node in sorted(graph.nodes()) {
            if !clustered.contains(&node) {
                self.write_node(&node, out)?;
            }
        }

        self.write_edges(graph, out)?;
        out.write_all(b"}\n")
    }

    fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(b"digraph ")?;
        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")
    }

    fn write_node<W: Write>(&self, node: &N, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "    n{} [label={:?}];",
            node.as_usize(),
            (self.get_node_label)(node)
        )
    }

    fn write_edges<W: Write>(&self, graph: &Graph<N>, out: &mut W) -> io::Result<()> {
        for src in sorted(graph.nodes()) {
            for dst in sorted(graph.successors(src)) {
                writeln!(out, "    n{} -> n{};", src.as_usize(), dst.as_usize())?;
            }
        }

        Ok(())
    }
}

impl<N: NodeId> Export<Graph<N>> for Dot<N> {
    fn export<W: Write>(&self, graph: &Graph<N>, out: &mut W) -> io::Result<()> {
        self.write_header(out)?;

        for node in sorted(graph.nodes()) {
            self.write_node(&node, out)?;
        }

        self.write_edges(graph, out)?;
        out.write_all(b"}\n")
    }
}

fn sorted<N: NodeId>(iter: impl Iterator<Item = N>) -> BTreeSet<N> {
    iter.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_plain() {
        let graph: Graph<u32> = [(2, 1), (1, 0)].into_iter().collect();
        let dot = Dot::with_debug(Some(String::from("deps")));

        assert_eq!(
            dot.to_string(&graph),
            "digraph deps {\n    n0 [label=\"0\"];\n    n1 [label=\"1\"];\n    n2 [label=\"2\"];\n    n1 -> n0;\n    n2 -> n1;\n}\n"
        );
    }

    #[test]
    fn export_clustered() {
        let graph: Graph<u32> = [(0, 1), (1, 0), (1, 2)].into_iter().collect();
        let components = graph.strong_components();
        let dot = Dot::new(None, |node: &u32| format!("pkg{node}"));

        let mut out = Vec::new();
        dot.export_clustered(&graph, &components, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("digraph G {\n"));
        assert!(out.contains("    subgraph cluster_1 {\n        n0 [label=\"pkg0\"];\n        n1 [label=\"pkg1\"];\n    }\n"));
        assert!(out.contains("    n2 [label=\"pkg2\"];\n"));
        assert!(out.contains("    n1 -> n2;\n"));
        assert!(out.ends_with("}\n"));
    }
}
