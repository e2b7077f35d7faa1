use thiserror::Error;

use super::NodeId;

/// The graph contains a cycle, so its nodes cannot be ordered such that every
/// node comes after all its dependencies.
///
/// Carries the nodes of one strongly connected component that forms the
/// cycle. A single node means a self-loop.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("graph contains a cycle through {} node(s)", .nodes.len())]
pub struct CycleError<N> {
    pub nodes: Vec<N>,
}

impl<N: NodeId> CycleError<N> {
    pub fn new(nodes: Vec<N>) -> Self {
        Self { nodes }
    }

    /// Returns `true` if the cycle is formed by a node linked to itself.
    pub fn is_self_loop(&self) -> bool {
        self.nodes.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reports_cycle_length() {
        let error = CycleError::new(vec![1u32, 2, 3]);
        assert_eq!(error.to_string(), "graph contains a cycle through 3 node(s)");
        assert!(!error.is_self_loop());
    }

    #[test]
    fn single_node_is_self_loop() {
        assert!(CycleError::new(vec![7usize]).is_self_loop());
    }
}
