//! Directed graph for live dependency structures.
//!
//! The [`Graph`] is backed by hash maps holding both successors and
//! predecessors of each node, which makes removal of edges and nodes cheap.
//! It is meant for workloads where the graph is edited in small batches and
//! its [strongly connected components](algo::StrongComponents) are recomputed
//! after each batch, for example the dependency graph of an incremental build
//! system or a package resolver.
//!
//! Nodes are plain integer identities chosen by the caller (see
//! [`NodeId`](core::NodeId)), no other data is stored in the graph. An edge
//! `src -> dst` reads as "`src` depends on `dst`".
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
//!
//! // Dependencies come first.
//! assert_eq!(
//!     graph.strong_components().into_vec(),
//!     vec![vec![3], vec![2], vec![1]]
//! );
//!
//! graph.link(3, 1);
//! assert_eq!(graph.strong_components().len(), 1);
//!
//! graph.remove_node(2);
//! assert_eq!(graph.strong_components().len(), 2);
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod graph;
pub mod infra;

pub use crate::{
    algo::StrongComponents,
    core::{error::CycleError, NodeId},
    graph::Graph,
};
