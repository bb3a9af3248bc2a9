//! # Shortest Path
//!
//! Dijkstra's label-setting search over non-negative edge weights.
//!
//! Tentative distances are [`TotalWeight`]s, wide enough that no sum of
//! `u64` edge weights along a simple path can overflow. The frontier is a
//! `BinaryHeap` of `Reverse((distance, vertex))`, so the
//! smallest tentative distance pops first and equal distances pop in
//! lexicographic order of vertex name. A predecessor is only replaced by a
//! strictly shorter distance. Together with the lexicographic neighbor order
//! this makes the returned path reproducible when several shortest paths
//! exist; which of them is returned follows from that tie-break and nothing
//! else.

use crate::graph::GraphStore;
use crate::{GraphError, Path, TotalWeight, VertexId};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

/// Find the minimum-weight path from `source` to `target`.
///
/// Returns `Ok(None)` when `target` is unreachable. Complexity is
/// O((V + E) log V).
pub fn shortest_path<G: GraphStore + ?Sized>(
    graph: &G,
    source: &VertexId,
    target: &VertexId,
) -> Result<Option<Path>, GraphError> {
    if !graph.has_vertex(source) {
        return Err(GraphError::VertexNotFound(source.clone()));
    }
    if !graph.has_vertex(target) {
        return Err(GraphError::VertexNotFound(target.clone()));
    }

    if source == target {
        return Ok(Some(Path {
            vertices: vec![source.clone()],
            total_weight: TotalWeight::ZERO,
        }));
    }

    // Absent from `dist` means +inf.
    let mut dist: BTreeMap<VertexId, TotalWeight> = BTreeMap::new();
    let mut prev: BTreeMap<VertexId, VertexId> = BTreeMap::new();
    let mut frontier = BinaryHeap::new();

    dist.insert(source.clone(), TotalWeight::ZERO);
    frontier.push(Reverse((TotalWeight::ZERO, source.clone())));

    while let Some(Reverse((distance, current))) = frontier.pop() {
        // Stale entry: a shorter route to `current` was settled already.
        if dist.get(&current).is_some_and(|best| distance > *best) {
            continue;
        }

        if &current == target {
            return Ok(reconstruct(&prev, source, target).map(|vertices| Path {
                vertices,
                total_weight: distance,
            }));
        }

        for (neighbor, weight) in graph.neighbors(&current)? {
            let candidate = distance.plus(*weight);
            if dist.get(neighbor).is_none_or(|best| candidate < *best) {
                dist.insert(neighbor.clone(), candidate);
                prev.insert(neighbor.clone(), current.clone());
                frontier.push(Reverse((candidate, neighbor.clone())));
            }
        }
    }

    Ok(None)
}

/// Sum of edge weights along consecutive pairs of `vertices`.
///
/// Returns `None` if two consecutive vertices are not adjacent.
pub fn path_weight<G: GraphStore + ?Sized>(
    graph: &G,
    vertices: &[VertexId],
) -> Option<TotalWeight> {
    vertices.windows(2).try_fold(TotalWeight::ZERO, |total, pair| {
        let weight = graph.neighbors(&pair[0]).ok()?.get(&pair[1])?;
        Some(total.plus(*weight))
    })
}

/// Walk predecessor links from `target` back to `source`.
fn reconstruct(
    prev: &BTreeMap<VertexId, VertexId>,
    source: &VertexId,
    target: &VertexId,
) -> Option<Vec<VertexId>> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while current != source {
        current = prev.get(current)?;
        path.push(current.clone());
    }
    path.reverse();
    Some(path)
}

// =============================================================================
// TESTS
// =============================================================================
