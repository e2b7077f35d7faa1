use crate::{
    common::VisitSet,
    core::NodeId,
    graph::{Adjacency, Neighbors},
};

/// Kosaraju's algorithm over a pair of mirrored adjacencies.
///
/// The first pass runs DFS over `first` and collects nodes in post-order. The
/// second pass runs DFS over `second`, starting from the nodes in reversed
/// post-order, and every run yields one component. The components come out in
/// topological order of the graph described by `first`.
///
/// Both passes share `visited`. The first pass marks every node, the second
/// one treats a marked node as not yet seen and unmarks it.
pub fn kosaraju<N, S>(first: &Adjacency<N>, second: &Adjacency<N>, mut visited: S) -> Vec<Vec<N>>
where
    N: NodeId,
    S: VisitSet<N>,
{
    let mut finished = Vec::with_capacity(first.len());
    let mut stack: Vec<(N, Neighbors<'_, N>)> = Vec::new();

    for root in first.nodes() {
        if !visited.visit(root) {
            continue;
        }

        stack.push((root, first.neighbors(&root)));

        while let Some((node, neighbors)) = stack.last_mut() {
            let node = *node;

            match neighbors.find(|&next| visited.visit(next)) {
                Some(next) => stack.push((next, first.neighbors(&next))),
                None => {
                    stack.pop();
                    finished.push(node);
                }
            }
        }
    }

    let mut components = Vec::new();
    let mut stack = Vec::new();

    for &root in finished.iter().rev() {
        if !visited.unvisit(root) {
            continue;
        }

        let mut component = Vec::new();
        stack.push(root);

        while let Some(node) = stack.pop() {
            component.push(node);
            stack.extend(second.neighbors(&node).filter(|&next| visited.unvisit(next)));
        }

        components.push(component);
    }

    debug_assert_eq!(visited.visited_count(), 0);

    components
}
