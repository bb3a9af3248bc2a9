//! # Display
//!
//! Text rendering of engine results. Every function returns a `String`;
//! printing is left to the CLI.

use sociograph_core::{EdgeWeight, Graph, GraphError, GraphMetrics, GraphStore, Path, VertexId};
use std::collections::BTreeMap;

fn friends_str(neighbors: &BTreeMap<VertexId, EdgeWeight>) -> String {
    if neighbors.is_empty() {
        return "No one".to_string();
    }
    neighbors
        .iter()
        .map(|(friend, weight)| format!("{}({})", friend, weight))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line: `<name> follows --> a(w), b(w)`.
pub fn format_friend_list(graph: &Graph, name: &VertexId) -> Result<String, GraphError> {
    let neighbors = graph.neighbors(name)?;
    Ok(format!(
        "{:<12} follows --> {}",
        name.as_str(),
        friends_str(neighbors)
    ))
}

/// The whole network, one user per line.
pub fn format_network(graph: &Graph) -> Result<String, GraphError> {
    let mut out = String::from("\tSocial Network Connections:\n");
    for vertex in graph.vertices() {
        out.push_str(&format_friend_list(graph, &vertex.id)?);
        out.push('\n');
    }
    Ok(out)
}

/// Bio, friend list and inbox of one user.
pub fn format_user_info(graph: &Graph, name: &VertexId) -> Result<String, GraphError> {
    let vertex = graph.get_vertex(name)?;
    let mut out = format!("User: {}, Bio: {}\n", vertex.id, vertex.bio.as_str());
    out.push_str(&format_friend_list(graph, name)?);
    out.push('\n');
    for message in &vertex.inbox {
        out.push_str(&format!("  From {}: {}\n", message.from, message.body));
    }
    Ok(out)
}

/// Presence check for a user name.
pub fn format_search(graph: &Graph, name: &VertexId) -> String {
    if graph.has_vertex(name) {
        format!("{:<12} --> Hello I'm here!", name.as_str())
    } else {
        format!("{:<12} --> Hello I'm not here!!", name.as_str())
    }
}

/// Shortest path result, or a no-path notice.
pub fn format_path(source: &VertexId, target: &VertexId, path: Option<&Path>) -> String {
    match path {
        Some(path) => {
            let hops: Vec<&str> = path.vertices.iter().map(VertexId::as_str).collect();
            format!(
                "Shortest path {} --> {}: {} (total weight {})",
                source,
                target,
                hops.join(" -> "),
                path.total_weight
            )
        }
        None => format!("No path between {} and {}", source, target),
    }
}

/// `<label> traversal: a b c`.
pub fn format_traversal(label: &str, order: &[VertexId]) -> String {
    let names: Vec<&str> = order.iter().map(VertexId::as_str).collect();
    format!("{} traversal: {}", label, names.join(" "))
}

/// Multi-line graph summary.
pub fn format_metrics(metrics: &GraphMetrics) -> String {
    format!(
        "Users:        {}\nFriendships:  {}\nIsolated:     {}\nComponents:   {}\nTotal weight: {}\n",
        metrics.vertex_count,
        metrics.edge_count,
        metrics.isolated_count,
        metrics.component_count,
        metrics.total_weight
    )
}
