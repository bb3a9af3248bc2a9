//! # Core Type Definitions
//!
//! This module contains all core types for the Sociograph engine:
//! - Vertex identifiers and metadata (`VertexId`, `Bio`, `Message`, `Vertex`)
//! - Edge weights and their sums (`EdgeWeight`, `TotalWeight`)
//! - Operation outcomes (`Insertion`, `Path`)
//! - Error types (`GraphError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` where they key a `BTreeMap`/`BTreeSet`
//! - Accumulate weights in a type twice as wide as a single weight

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique identifier of a user in the graph (the user name).
///
/// Ordering is lexicographic on the underlying string; every neighbor map
/// and traversal frontier relies on it for reproducible output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub String);

impl VertexId {
    /// Create a new vertex identifier from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// =============================================================================
// EDGE WEIGHT
// =============================================================================

/// Weight of an undirected edge.
///
/// Unsigned, so non-negativity holds by construction. Any `u64` is a valid
/// weight; sums of weights are kept in [`TotalWeight`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EdgeWeight(pub u64);

impl EdgeWeight {
    /// The zero weight (length of the trivial path).
    pub const ZERO: Self = Self(0);

    /// Create a new edge weight with the given value.
    #[must_use]
    pub const fn new(weight: u64) -> Self {
        Self(weight)
    }

    /// Get the raw weight value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sum of edge weights along a path or across a graph.
///
/// A `u128` holds the exact sum of up to 2^64 maximal `u64` weights, so
/// comparisons between path lengths are never distorted by clamping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct TotalWeight(pub u128);

impl TotalWeight {
    /// The empty sum.
    pub const ZERO: Self = Self(0);

    /// Create a total from a raw value.
    #[must_use]
    pub const fn new(total: u128) -> Self {
        Self(total)
    }

    /// Extend the sum by one edge.
    #[must_use]
    pub fn plus(self, weight: EdgeWeight) -> Self {
        Self(self.0.saturating_add(u128::from(weight.0)))
    }

    /// Get the raw total.
    #[must_use]
    pub const fn value(self) -> u128 {
        self.0
    }
}

impl From<EdgeWeight> for TotalWeight {
    fn from(weight: EdgeWeight) -> Self {
        Self(u128::from(weight.0))
    }
}

impl fmt::Display for TotalWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// VERTEX
// =============================================================================

/// Free-text profile description of a user. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bio(pub String);

impl Bio {
    /// Create a new bio from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the bio as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A text message delivered to a user's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The sender.
    pub from: VertexId,
    /// The message text.
    pub body: String,
}

impl Message {
    /// Create a new message.
    #[must_use]
    pub fn new(from: VertexId, body: impl Into<String>) -> Self {
        Self {
            from,
            body: body.into(),
        }
    }
}

/// A user record stored in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// The unique user name.
    pub id: VertexId,
    /// Profile text.
    pub bio: Bio,
    /// Messages received, oldest first.
    pub inbox: Vec<Message>,
}

impl Vertex {
    /// Create a new vertex with an empty inbox.
    #[must_use]
    pub fn new(id: VertexId, bio: Bio) -> Self {
        Self {
            id,
            bio,
            inbox: Vec::new(),
        }
    }
}

// =============================================================================
// OPERATION OUTCOMES
// =============================================================================

/// Result of an add operation.
///
/// Adding something that already exists is not an error: the graph is left
/// untouched and the caller is told so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Insertion {
    /// The vertex or edge was created.
    Inserted,
    /// It was already present; nothing changed.
    AlreadyExists,
}

impl Insertion {
    /// True if the operation created something new.
    #[must_use]
    pub const fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// A shortest path between two vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Vertices from source to target, both inclusive.
    pub vertices: Vec<VertexId>,
    /// Exact sum of the edge weights along the path.
    pub total_weight: TotalWeight,
}

impl Path {
    /// Number of edges on the path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the graph engine.
///
/// - No silent failures
/// - Use `Result<T, GraphError>` for fallible operations
/// - A failed call never leaves a partial mutation behind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The operation referenced a vertex that does not exist.
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// Removal was requested on an edge that does not exist.
    #[error("Edge not found: {0} -- {1}")]
    EdgeNotFound(VertexId, VertexId),

    /// An edge from a vertex to itself was requested.
    #[error("Self-loop rejected: {0}")]
    SelfLoopRejected(VertexId),

    /// The edge exists in only one direction. The symmetry invariant is
    /// broken; this indicates a bug in the engine, not bad input.
    #[error("Inconsistent adjacency between {0} and {1}")]
    InconsistentAdjacency(VertexId, VertexId),

    /// A declarative graph description could not be applied.
    #[error("Invalid graph spec: {0}")]
    InvalidSpec(String),
}

// =============================================================================
// TESTS
// =============================================================================
