#![allow(dead_code)]

use fastrand::Rng;
use petgraph::{graph::NodeIndex, stable_graph::StableGraph};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(node_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: node_bound,
            p,
        }
    }

    /// Returns the next edge of an Erdős–Rényi graph, randomly oriented.
    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            if rng.bool() {
                Some((*v, *w))
            } else {
                Some((*w, *v))
            }
        } else {
            None
        }
    }
}

pub fn depgraph_random(node_count: usize, density: f32, rng: &mut Rng) -> depgraph::Graph {
    let mut graph = depgraph::Graph::with_capacity(node_count);

    for node in 0..node_count {
        graph.add_node(node);
    }

    let mut edges = RandomEdges::new(node_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.link(u, v);
    }

    graph
}

pub fn petgraph_random(node_count: usize, density: f32, rng: &mut Rng) -> StableGraph<(), ()> {
    let mut graph = StableGraph::with_capacity(node_count, 0);

    for _ in 0..node_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(node_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}
