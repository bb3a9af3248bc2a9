//! # Vertex Store
//!
//! Owns the set of valid users. Leaf dependency of the engine: the
//! adjacency structure and the graph consult it for validity checks.

use crate::{Bio, GraphError, Insertion, Message, Vertex, VertexId};
use std::collections::BTreeMap;

/// The set of users, keyed by name.
///
/// Mutation is crate-private; outside the crate the store is only reachable
/// read-only through [`crate::Graph`].
#[derive(Debug, Clone, Default)]
pub struct VertexStore {
    vertices: BTreeMap<VertexId, Vertex>,
}

impl VertexStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex unless the name is already taken.
    pub(crate) fn insert(&mut self, id: VertexId, bio: Bio) -> Insertion {
        if self.vertices.contains_key(&id) {
            return Insertion::AlreadyExists;
        }
        self.vertices.insert(id.clone(), Vertex::new(id, bio));
        Insertion::Inserted
    }

    /// Remove a vertex and return its record.
    pub(crate) fn remove(&mut self, id: &VertexId) -> Result<Vertex, GraphError> {
        self.vertices
            .remove(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))
    }

    /// Append a message to a vertex's inbox.
    pub(crate) fn deliver(&mut self, id: &VertexId, message: Message) -> Result<(), GraphError> {
        let vertex = self
            .vertices
            .get_mut(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))?;
        vertex.inbox.push(message);
        Ok(())
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, id: &VertexId) -> bool {
        self.vertices.contains_key(id)
    }

    /// Look up a vertex record.
    pub fn get(&self, id: &VertexId) -> Result<&Vertex, GraphError> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))
    }

    /// Fail with `VertexNotFound` unless `id` is present.
    pub fn require(&self, id: &VertexId) -> Result<(), GraphError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(id.clone()))
        }
    }

    /// All vertices in lexicographic order of name.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the store holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
