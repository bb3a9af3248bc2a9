//! # sociograph-core
//!
//! The deterministic social graph engine - THE ENGINE.
//!
//! Users are vertices, friendships are weighted undirected edges. The engine
//! answers reachability, shortest path (Dijkstra) and traversal order (BFS,
//! DFS) queries, and keeps its invariants under any sequence of mutations.
//!
//! ## Layers
//!
//! - `store` → the set of valid users
//! - `adjacency` → symmetric weighted edges between them
//! - `graph` → the two composed behind the `GraphStore` trait
//! - `path`, `traversal` → algorithms written against `GraphStore`
//!
//! ## Architectural Constraints
//!
//! - No async, no I/O, no logging: queries return values only
//! - `BTreeMap` everywhere: neighbors iterate in lexicographic order, so
//!   traversal and path output is reproducible
//! - A failed call changes nothing

// =============================================================================
// MODULES
// =============================================================================

pub mod adjacency;
pub mod builder;
pub mod graph;
pub mod metrics;
pub mod path;
pub mod primitives;
pub mod query;
pub mod store;
pub mod traversal;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Bio, EdgeWeight, GraphError, Insertion, Message, Path, TotalWeight, Vertex, VertexId,
};

// =============================================================================
// RE-EXPORTS: Graph Engine
// =============================================================================

pub use builder::{FriendshipSpec, GraphSpec, UserSpec};
pub use graph::{Graph, GraphStore};
pub use metrics::GraphMetrics;
pub use primitives::DEFAULT_EDGE_WEIGHT;
pub use query::{Query, QueryOutcome, QueryType};
