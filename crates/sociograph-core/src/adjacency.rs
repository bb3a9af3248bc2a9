//! # Adjacency Structure
//!
//! Weighted undirected edges, stored as two directed entries per edge.
//!
//! Invariant: `edges[a][b] == edges[b][a]` for every stored pair, and
//! `a != b`. Every write here updates both directions together. The
//! structure does not know which vertices exist; [`crate::Graph`] checks
//! endpoints against the vertex store before calling in.

use crate::{EdgeWeight, GraphError, Insertion, VertexId};
use std::collections::BTreeMap;

/// Adjacency list: vertex -> (neighbor -> weight).
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    edges: BTreeMap<VertexId, BTreeMap<VertexId, EdgeWeight>>,
}

impl Adjacency {
    /// Create an empty adjacency structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `id` an empty neighbor map if it has none.
    pub(crate) fn register(&mut self, id: &VertexId) {
        self.edges.entry(id.clone()).or_default();
    }

    /// Drop `id` and every edge incident to it. Returns the removed
    /// neighbor map.
    pub(crate) fn unregister(&mut self, id: &VertexId) -> BTreeMap<VertexId, EdgeWeight> {
        let neighbors = self.edges.remove(id).unwrap_or_default();
        for neighbor in neighbors.keys() {
            if let Some(targets) = self.edges.get_mut(neighbor) {
                targets.remove(id);
            }
        }
        neighbors
    }

    /// Insert `a -- b` with weight `w` in both directions.
    ///
    /// Both endpoints must already be registered.
    pub(crate) fn link(
        &mut self,
        a: &VertexId,
        b: &VertexId,
        weight: EdgeWeight,
    ) -> Result<Insertion, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoopRejected(a.clone()));
        }
        if self.contains(a, b) {
            return Ok(Insertion::AlreadyExists);
        }
        self.edges.entry(a.clone()).or_default().insert(b.clone(), weight);
        self.edges.entry(b.clone()).or_default().insert(a.clone(), weight);
        Ok(Insertion::Inserted)
    }

    /// Remove `a -- b` in both directions and return its weight.
    ///
    /// All checks happen before the first write.
    pub(crate) fn unlink(&mut self, a: &VertexId, b: &VertexId) -> Result<EdgeWeight, GraphError> {
        let forward = self.weight(a, b);
        let backward = self.weight(b, a);

        match (forward, backward) {
            (Some(w), Some(w_back)) if w == w_back => {
                if let Some(targets) = self.edges.get_mut(a) {
                    targets.remove(b);
                }
                if let Some(targets) = self.edges.get_mut(b) {
                    targets.remove(a);
                }
                Ok(w)
            }
            (None, None) => Err(GraphError::EdgeNotFound(a.clone(), b.clone())),
            _ => Err(GraphError::InconsistentAdjacency(a.clone(), b.clone())),
        }
    }

    /// True if `b` is a neighbor of `a`.
    #[must_use]
    pub fn contains(&self, a: &VertexId, b: &VertexId) -> bool {
        self.edges
            .get(a)
            .is_some_and(|targets| targets.contains_key(b))
    }

    /// Weight of the directed entry `a -> b`, if present.
    #[must_use]
    pub fn weight(&self, a: &VertexId, b: &VertexId) -> Option<EdgeWeight> {
        self.edges.get(a)?.get(b).copied()
    }

    /// Neighbor map of `a`, if `a` is registered.
    #[must_use]
    pub fn neighbors_of(&self, a: &VertexId) -> Option<&BTreeMap<VertexId, EdgeWeight>> {
        self.edges.get(a)
    }

    /// Every undirected edge once, as `(a, b, w)` with `a < b`.
    pub fn undirected(&self) -> impl Iterator<Item = (&VertexId, &VertexId, EdgeWeight)> + '_ {
        self.edges.iter().flat_map(|(from, targets)| {
            targets
                .iter()
                .filter(move |(to, _)| from < *to)
                .map(move |(to, weight)| (from, to, *weight))
        })
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// True if every directed entry has a matching reverse entry.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.edges.iter().all(|(from, targets)| {
            targets
                .iter()
                .all(|(to, weight)| from != to && self.weight(to, from) == Some(*weight))
        })
    }

    #[cfg(test)]
    pub(crate) fn insert_directed(&mut self, a: &VertexId, b: &VertexId, weight: EdgeWeight) {
        self.edges.entry(a.clone()).or_default().insert(b.clone(), weight);
    }
}

// =============================================================================
// TESTS
// =============================================================================
