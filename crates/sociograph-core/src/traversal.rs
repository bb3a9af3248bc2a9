//! # Traversal
//!
//! Breadth-first and depth-first discovery order over the friendship graph.
//!
//! Neighbors are visited in lexicographic order of name (the adjacency maps
//! are `BTreeMap`s), so both traversals are reproducible.

use crate::graph::GraphStore;
use crate::{GraphError, VertexId};
use std::collections::{BTreeSet, VecDeque};

/// Vertices reachable from `start`, in breadth-first discovery order.
///
/// A vertex is marked visited when it is enqueued, so it is enqueued at
/// most once.
pub fn bfs<G: GraphStore + ?Sized>(
    graph: &G,
    start: &VertexId,
) -> Result<Vec<VertexId>, GraphError> {
    if !graph.has_vertex(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }

    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current)?.keys() {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
            }
        }
        order.push(current);
    }

    Ok(order)
}

/// Vertices reachable from `start`, in depth-first pre-order.
///
/// Uses an explicit stack instead of recursion. Neighbors are pushed in
/// reverse order so they pop in lexicographic order, which gives the same
/// sequence as the recursive definition. A vertex is marked visited when it
/// is first popped; later duplicates on the stack are skipped.
pub fn dfs<G: GraphStore + ?Sized>(
    graph: &G,
    start: &VertexId,
) -> Result<Vec<VertexId>, GraphError> {
    if !graph.has_vertex(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }

    let mut visited = BTreeSet::new();
    let mut stack = vec![start.clone()];
    let mut order = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }

        stack.extend(
            graph
                .neighbors(&current)?
                .keys()
                .rev()
                .filter(|neighbor| !visited.contains(*neighbor))
                .cloned(),
        );
        order.push(current);
    }

    Ok(order)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bio, EdgeWeight, Graph};

    fn id(s: &str) -> VertexId {
        VertexId::new(s)
    }

    fn names(order: &[VertexId]) -> Vec<&str> {
        order.iter().map(VertexId::as_str).collect()
    }

    /// A-B, A-C, B-D, C-D plus an isolated E.
    fn diamond() -> Graph {
        let mut graph = Graph::new();
        for name in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(id(name), Bio::default());
        }
        for (a, b) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
            graph.add_edge(&id(a), &id(b), EdgeWeight::new(1)).expect("edge");
        }
        graph
    }

    #[test]
    fn bfs_visits_level_by_level() {
        let graph = diamond();
        let order = bfs(&graph, &id("A")).expect("bfs");
        assert_eq!(names(&order), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn dfs_goes_deep_first() {
        let graph = diamond();
        let order = dfs(&graph, &id("A")).expect("dfs");
        assert_eq!(names(&order), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn traversals_skip_other_components() {
        let graph = diamond();
        assert_eq!(names(&bfs(&graph, &id("E")).expect("bfs")), vec!["E"]);
        assert_eq!(names(&dfs(&graph, &id("E")).expect("dfs")), vec!["E"]);
    }

    #[test]
    fn traversals_of_missing_vertex_fail() {
        let graph = diamond();
        assert_eq!(bfs(&graph, &id("Z")), Err(GraphError::VertexNotFound(id("Z"))));
        assert_eq!(dfs(&graph, &id("Z")), Err(GraphError::VertexNotFound(id("Z"))));
    }

    #[test]
    fn dfs_handles_long_chain_without_recursion() {
        let mut graph = Graph::new();
        let chain: Vec<VertexId> = (0..20_000).map(|i| id(&format!("v{i:05}"))).collect();
        for vertex in &chain {
            graph.add_vertex(vertex.clone(), Bio::default());
        }
        for pair in chain.windows(2) {
            graph.add_edge(&pair[0], &pair[1], EdgeWeight::new(1)).expect("edge");
        }

        let order = dfs(&graph, &chain[0]).expect("dfs");
        assert_eq!(order, chain);
    }

    #[test]
    fn same_vertex_set_for_both_traversals() {
        let graph = diamond();
        let from_bfs: BTreeSet<_> = bfs(&graph, &id("D")).expect("bfs").into_iter().collect();
        let from_dfs: BTreeSet<_> = dfs(&graph, &id("D")).expect("dfs").into_iter().collect();
        assert_eq!(from_bfs, from_dfs);
        assert_eq!(from_bfs.len(), 4);
    }
}
