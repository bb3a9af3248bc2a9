//! # Graph Metrics
//!
//! Read-only structural summary of a graph.

use crate::graph::{Graph, GraphStore};
use crate::traversal;
use crate::{GraphError, TotalWeight};
use serde::Serialize;
use std::collections::BTreeSet;

/// Counts describing the shape of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphMetrics {
    /// Number of users.
    pub vertex_count: usize,
    /// Number of undirected friendships.
    pub edge_count: usize,
    /// Users with no friends.
    pub isolated_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Sum of all friendship weights.
    pub total_weight: TotalWeight,
}

impl GraphMetrics {
    /// Compute metrics for `graph`.
    pub fn from_graph(graph: &Graph) -> Result<Self, GraphError> {
        let mut isolated_count = 0;
        let mut component_count = 0;
        let mut seen = BTreeSet::new();

        for vertex in graph.vertices() {
            if graph.neighbors(&vertex.id)?.is_empty() {
                isolated_count += 1;
            }
            if seen.contains(&vertex.id) {
                continue;
            }
            component_count += 1;
            seen.extend(traversal::bfs(graph, &vertex.id)?);
        }

        let total_weight = graph
            .edges()
            .fold(TotalWeight::ZERO, |total, (_, _, w)| total.plus(w));

        Ok(Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            isolated_count,
            component_count,
            total_weight,
        })
    }
}
