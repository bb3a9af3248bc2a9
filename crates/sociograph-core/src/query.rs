//! # Query Module
//!
//! Structured query values for read-only graph interaction.
//!
//! - Map caller requests to a single engine operation
//! - Execute against any `GraphStore`
//! - Serializable outcomes for machine-readable output

use crate::graph::GraphStore;
use crate::{Bio, EdgeWeight, GraphError, Path, VertexId};
use serde::Serialize;

/// Query operation types supported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryType {
    /// Lookup a user by name.
    Lookup(VertexId),

    /// Friends of a user with their weights.
    Neighbors(VertexId),

    /// Whether two users are friends.
    Adjacent(VertexId, VertexId),

    /// Minimum-weight path between two users.
    ShortestPath { source: VertexId, target: VertexId },

    /// Breadth-first traversal order.
    Bfs(VertexId),

    /// Depth-first traversal order.
    Dfs(VertexId),
}

/// A structured query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The type of query operation.
    pub query_type: QueryType,
}

/// Result of executing a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// A user record (inbox omitted).
    User {
        name: VertexId,
        bio: Bio,
        friends: Vec<(VertexId, EdgeWeight)>,
    },
    /// A neighbor list.
    Neighbors {
        name: VertexId,
        friends: Vec<(VertexId, EdgeWeight)>,
    },
    /// A yes/no answer.
    Adjacent { a: VertexId, b: VertexId, adjacent: bool },
    /// A path, or `None` when the target is unreachable.
    Path {
        source: VertexId,
        target: VertexId,
        path: Option<Path>,
    },
    /// A traversal order.
    Traversal { start: VertexId, order: Vec<VertexId> },
}

impl Query {
    /// Create a new query.
    #[must_use]
    pub fn new(query_type: QueryType) -> Self {
        Self { query_type }
    }

    /// Lookup helper.
    #[must_use]
    pub fn lookup(name: impl Into<VertexId>) -> Self {
        Self::new(QueryType::Lookup(name.into()))
    }

    /// Neighbors helper.
    #[must_use]
    pub fn neighbors(name: impl Into<VertexId>) -> Self {
        Self::new(QueryType::Neighbors(name.into()))
    }

    /// Adjacency helper.
    #[must_use]
    pub fn adjacent(a: impl Into<VertexId>, b: impl Into<VertexId>) -> Self {
        Self::new(QueryType::Adjacent(a.into(), b.into()))
    }

    /// Shortest path helper.
    #[must_use]
    pub fn shortest_path(source: impl Into<VertexId>, target: impl Into<VertexId>) -> Self {
        Self::new(QueryType::ShortestPath {
            source: source.into(),
            target: target.into(),
        })
    }

    /// BFS helper.
    #[must_use]
    pub fn bfs(start: impl Into<VertexId>) -> Self {
        Self::new(QueryType::Bfs(start.into()))
    }

    /// DFS helper.
    #[must_use]
    pub fn dfs(start: impl Into<VertexId>) -> Self {
        Self::new(QueryType::Dfs(start.into()))
    }

    /// Run the query. Never mutates the graph.
    pub fn execute<G: GraphStore + ?Sized>(&self, graph: &G) -> Result<QueryOutcome, GraphError> {
        match &self.query_type {
            QueryType::Lookup(name) => {
                let vertex = graph.get_vertex(name)?;
                Ok(QueryOutcome::User {
                    name: vertex.id.clone(),
                    bio: vertex.bio.clone(),
                    friends: friend_list(graph, name)?,
                })
            }
            QueryType::Neighbors(name) => Ok(QueryOutcome::Neighbors {
                name: name.clone(),
                friends: friend_list(graph, name)?,
            }),
            QueryType::Adjacent(a, b) => {
                if !graph.has_vertex(a) {
                    return Err(GraphError::VertexNotFound(a.clone()));
                }
                if !graph.has_vertex(b) {
                    return Err(GraphError::VertexNotFound(b.clone()));
                }
                Ok(QueryOutcome::Adjacent {
                    a: a.clone(),
                    b: b.clone(),
                    adjacent: graph.are_adjacent(a, b),
                })
            }
            QueryType::ShortestPath { source, target } => Ok(QueryOutcome::Path {
                source: source.clone(),
                target: target.clone(),
                path: graph.shortest_path(source, target)?,
            }),
            QueryType::Bfs(start) => Ok(QueryOutcome::Traversal {
                start: start.clone(),
                order: graph.bfs(start)?,
            }),
            QueryType::Dfs(start) => Ok(QueryOutcome::Traversal {
                start: start.clone(),
                order: graph.dfs(start)?,
            }),
        }
    }
}

fn friend_list<G: GraphStore + ?Sized>(
    graph: &G,
    name: &VertexId,
) -> Result<Vec<(VertexId, EdgeWeight)>, GraphError> {
    Ok(graph
        .neighbors(name)?
        .iter()
        .map(|(friend, weight)| (friend.clone(), *weight))
        .collect())
}

// =============================================================================
// TESTS
// =============================================================================
