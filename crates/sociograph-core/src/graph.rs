//! # Graph Engine
//!
//! Composes the vertex store and the adjacency structure into the social
//! graph, and defines the `GraphStore` trait the algorithms run against.
//!
//! All data structures use `BTreeMap` for deterministic ordering.

use crate::adjacency::Adjacency;
use crate::store::VertexStore;
use crate::{Bio, EdgeWeight, GraphError, Insertion, Message, Path, Vertex, VertexId};
use crate::{path, traversal};
use std::collections::BTreeMap;

// =============================================================================
// GRAPHSTORE TRAIT
// =============================================================================

/// The GraphStore trait defines the core graph operations.
///
/// Every mutation either applies completely or not at all. Queries are
/// pure: they never print, log or mutate.
pub trait GraphStore {
    /// Insert a user. Returns `AlreadyExists` (and changes nothing) if the
    /// name is taken.
    fn add_vertex(&mut self, id: VertexId, bio: Bio) -> Insertion;

    /// Remove a user and every friendship incident to it.
    fn remove_vertex(&mut self, id: &VertexId) -> Result<Vertex, GraphError>;

    /// Insert a friendship `a -- b`. Returns `AlreadyExists` and keeps the
    /// original weight if the pair is already connected.
    fn add_edge(
        &mut self,
        a: &VertexId,
        b: &VertexId,
        weight: EdgeWeight,
    ) -> Result<Insertion, GraphError>;

    /// Remove the friendship `a -- b`. Returns its weight.
    fn remove_edge(&mut self, a: &VertexId, b: &VertexId) -> Result<EdgeWeight, GraphError>;

    /// Append a message to a user's inbox.
    fn deliver(&mut self, to: &VertexId, message: Message) -> Result<(), GraphError>;

    /// Membership test.
    fn has_vertex(&self, id: &VertexId) -> bool;

    /// Look up a user record.
    fn get_vertex(&self, id: &VertexId) -> Result<&Vertex, GraphError>;

    /// True iff `a` and `b` are friends.
    fn are_adjacent(&self, a: &VertexId, b: &VertexId) -> bool;

    /// Neighbor -> weight map of `id`, in lexicographic order.
    fn neighbors(&self, id: &VertexId) -> Result<&BTreeMap<VertexId, EdgeWeight>, GraphError>;

    /// Total number of users.
    fn vertex_count(&self) -> usize;

    /// Total number of undirected friendships.
    fn edge_count(&self) -> usize;

    /// Minimum-weight path from `source` to `target`, or `None` if the
    /// target is unreachable.
    fn shortest_path(
        &self,
        source: &VertexId,
        target: &VertexId,
    ) -> Result<Option<Path>, GraphError> {
        path::shortest_path(self, source, target)
    }

    /// Breadth-first discovery order from `start`.
    fn bfs(&self, start: &VertexId) -> Result<Vec<VertexId>, GraphError> {
        traversal::bfs(self, start)
    }

    /// Depth-first pre-order from `start`.
    fn dfs(&self, start: &VertexId) -> Result<Vec<VertexId>, GraphError> {
        traversal::dfs(self, start)
    }
}

// =============================================================================
// GRAPH IMPLEMENTATION
// =============================================================================

/// The in-memory social graph.
///
/// Invariants:
/// - every vertex has an adjacency entry, possibly empty
/// - every adjacency entry names a vertex in the store
/// - `w(a, b) == w(b, a)` and no self-loops
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: VertexStore,
    adjacency: Adjacency,
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All users in lexicographic order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Every friendship once, as `(a, b, w)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (&VertexId, &VertexId, EdgeWeight)> + '_ {
        self.adjacency.undirected()
    }

    /// Weight of the friendship `a -- b`, if any.
    #[must_use]
    pub fn edge_weight(&self, a: &VertexId, b: &VertexId) -> Option<EdgeWeight> {
        self.adjacency.weight(a, b)
    }

    /// Verify the structural invariants.
    ///
    /// The engine maintains them on every call; this exists for tests and
    /// for callers that want to assert it after bulk construction.
    pub fn check_invariants(&self) -> Result<(), GraphError> {
        for vertex in self.vertices.iter() {
            let neighbors = self
                .adjacency
                .neighbors_of(&vertex.id)
                .ok_or_else(|| GraphError::VertexNotFound(vertex.id.clone()))?;
            for (neighbor, weight) in neighbors {
                self.vertices.require(neighbor)?;
                if neighbor == &vertex.id {
                    return Err(GraphError::SelfLoopRejected(neighbor.clone()));
                }
                if self.adjacency.weight(neighbor, &vertex.id) != Some(*weight) {
                    return Err(GraphError::InconsistentAdjacency(
                        vertex.id.clone(),
                        neighbor.clone(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl GraphStore for Graph {
    fn add_vertex(&mut self, id: VertexId, bio: Bio) -> Insertion {
        self.adjacency.register(&id);
        self.vertices.insert(id, bio)
    }

    fn remove_vertex(&mut self, id: &VertexId) -> Result<Vertex, GraphError> {
        self.vertices.require(id)?;
        self.adjacency.unregister(id);
        self.vertices.remove(id)
    }

    fn add_edge(
        &mut self,
        a: &VertexId,
        b: &VertexId,
        weight: EdgeWeight,
    ) -> Result<Insertion, GraphError> {
        self.vertices.require(a)?;
        self.vertices.require(b)?;
        self.adjacency.link(a, b, weight)
    }

    fn remove_edge(&mut self, a: &VertexId, b: &VertexId) -> Result<EdgeWeight, GraphError> {
        self.vertices.require(a)?;
        self.vertices.require(b)?;
        self.adjacency.unlink(a, b)
    }

    fn deliver(&mut self, to: &VertexId, message: Message) -> Result<(), GraphError> {
        self.vertices.deliver(to, message)
    }

    fn has_vertex(&self, id: &VertexId) -> bool {
        self.vertices.contains(id)
    }

    fn get_vertex(&self, id: &VertexId) -> Result<&Vertex, GraphError> {
        self.vertices.get(id)
    }

    fn are_adjacent(&self, a: &VertexId, b: &VertexId) -> bool {
        self.adjacency.contains(a, b)
    }

    fn neighbors(&self, id: &VertexId) -> Result<&BTreeMap<VertexId, EdgeWeight>, GraphError> {
        self.vertices.require(id)?;
        self.adjacency
            .neighbors_of(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }
}

// =============================================================================
// TESTS
// =============================================================================
