//! Core traits and types shared by the graph and the algorithms.

pub mod error;
pub mod id;
pub mod marker;

pub use id::NodeId;
