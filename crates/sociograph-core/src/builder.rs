//! # Graph Builder
//!
//! Declarative description of a social graph and its conversion to and from
//! [`Graph`]. Callers assemble a graph from a list of users and friendships
//! instead of replaying mutation calls by hand.

use crate::graph::{Graph, GraphStore};
use crate::primitives::DEFAULT_EDGE_WEIGHT;
use crate::{Bio, EdgeWeight, GraphError, VertexId};
use serde::{Deserialize, Serialize};

/// A user entry in a [`GraphSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSpec {
    /// Unique user name.
    pub name: String,
    /// Free-form profile text; empty when omitted.
    #[serde(default)]
    pub bio: String,
}

/// A friendship entry in a [`GraphSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipSpec {
    /// One end of the friendship.
    pub a: String,
    /// The other end; must differ from `a`.
    pub b: String,
    /// Edge weight; `DEFAULT_EDGE_WEIGHT` when omitted.
    #[serde(default = "default_weight")]
    pub weight: u64,
}

fn default_weight() -> u64 {
    DEFAULT_EDGE_WEIGHT.value()
}

/// Users and friendships, in the order they are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Users, added before any friendship.
    #[serde(default)]
    pub users: Vec<UserSpec>,
    /// Friendships between listed users.
    #[serde(default)]
    pub friendships: Vec<FriendshipSpec>,
}

impl GraphSpec {
    /// Create an empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user.
    #[must_use]
    pub fn user(mut self, name: impl Into<String>, bio: impl Into<String>) -> Self {
        self.users.push(UserSpec {
            name: name.into(),
            bio: bio.into(),
        });
        self
    }

    /// Append a friendship.
    #[must_use]
    pub fn friendship(mut self, a: impl Into<String>, b: impl Into<String>, weight: u64) -> Self {
        self.friendships.push(FriendshipSpec {
            a: a.into(),
            b: b.into(),
            weight,
        });
        self
    }

    /// Build the graph: all users first, then all friendships.
    ///
    /// Repeated users and friendships are skipped, keeping the first entry.
    /// A friendship naming an unknown user, or a user befriending itself,
    /// fails the whole build.
    pub fn build(&self) -> Result<Graph, GraphError> {
        let mut graph = Graph::new();

        for user in &self.users {
            graph.add_vertex(VertexId::new(&user.name), Bio::new(&user.bio));
        }

        for friendship in &self.friendships {
            let a = VertexId::new(&friendship.a);
            let b = VertexId::new(&friendship.b);
            graph
                .add_edge(&a, &b, EdgeWeight::new(friendship.weight))
                .map_err(|e| {
                    GraphError::InvalidSpec(format!(
                        "friendship {} -- {}: {}",
                        friendship.a, friendship.b, e
                    ))
                })?;
        }

        Ok(graph)
    }
}

impl Graph {
    /// Build a graph from a declarative spec. See [`GraphSpec::build`].
    pub fn from_spec(spec: &GraphSpec) -> Result<Self, GraphError> {
        spec.build()
    }
}

impl From<&Graph> for GraphSpec {
    /// Canonical spec of a graph: users and friendships sorted by name.
    /// Inboxes are not part of the spec.
    fn from(graph: &Graph) -> Self {
        Self {
            users: graph
                .vertices()
                .map(|v| UserSpec {
                    name: v.id.as_str().to_string(),
                    bio: v.bio.as_str().to_string(),
                })
                .collect(),
            friendships: graph
                .edges()
                .map(|(a, b, w)| FriendshipSpec {
                    a: a.as_str().to_string(),
                    b: b.as_str().to_string(),
                    weight: w.value(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> VertexId {
        VertexId::new(s)
    }

    #[test]
    fn build_applies_users_then_friendships() {
        // Friendship listed against users added later in the list still works.
        let spec = GraphSpec::new()
            .user("Keam", "Hello I'm keam!")
            .friendship("Keam", "Nika", 1)
            .user("Nika", "Hello I'm Nika!");

        let graph = spec.build().expect("build");

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_weight(&id("Nika"), &id("Keam")), Some(EdgeWeight::new(1)));
    }

    #[test]
    fn duplicates_keep_first_entry() {
        let spec = GraphSpec::new()
            .user("A", "first")
            .user("A", "second")
            .user("B", "")
            .friendship("A", "B", 4)
            .friendship("B", "A", 9);

        let graph = spec.build().expect("build");

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.get_vertex(&id("A")).expect("get").bio.as_str(), "first");
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&id("A"), &id("B")), Some(EdgeWeight::new(4)));
    }

    #[test]
    fn unknown_user_fails_build() {
        let spec = GraphSpec::new().user("A", "").friendship("A", "Ghost", 1);
        let result = spec.build();
        assert!(matches!(result, Err(GraphError::InvalidSpec(msg)) if msg.contains("Ghost")));
    }

    #[test]
    fn self_friendship_fails_build() {
        let spec = GraphSpec::new().user("A", "").friendship("A", "A", 1);
        assert!(matches!(spec.build(), Err(GraphError::InvalidSpec(_))));
    }

    #[test]
    fn weight_defaults_when_omitted() {
        let json = r#"{
            "users": [{"name": "A"}, {"name": "B"}],
            "friendships": [{"a": "A", "b": "B"}]
        }"#;
        let spec: GraphSpec = serde_json::from_str(json).expect("parse");

        assert_eq!(spec.friendships[0].weight, DEFAULT_EDGE_WEIGHT.value());
        assert_eq!(spec.users[0].bio, "");
    }

    #[test]
    fn spec_from_graph_is_canonical() {
        let spec = GraphSpec::new()
            .user("C", "c")
            .user("A", "a")
            .user("B", "b")
            .friendship("C", "A", 2)
            .friendship("B", "A", 1);
        let graph = Graph::from_spec(&spec).expect("build");

        let canonical = GraphSpec::from(&graph);

        let names: Vec<_> = canonical.users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(
            canonical.friendships,
            vec![
                FriendshipSpec { a: "A".into(), b: "B".into(), weight: 1 },
                FriendshipSpec { a: "A".into(), b: "C".into(), weight: 2 },
            ]
        );
    }
}
