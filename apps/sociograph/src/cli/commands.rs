//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands. Each
//! command returns its output as text so it can be printed or inspected.

use super::Commands;
use crate::display;
use crate::error::AppError;
use crate::messaging::send_message;
use sociograph_core::{EdgeWeight, Graph, GraphMetrics, GraphSpec, GraphStore, Query, VertexId};

/// Settings shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunContext {
    /// Emit JSON instead of text.
    pub json_mode: bool,
    /// Weight of friendships created by `message`.
    pub default_weight: EdgeWeight,
}

impl Default for RunContext {
    fn default() -> Self {
        Self {
            json_mode: false,
            default_weight: sociograph_core::DEFAULT_EDGE_WEIGHT,
        }
    }
}

/// Run one command against `graph`.
pub fn run(command: &Commands, graph: &mut Graph, ctx: &RunContext) -> Result<String, AppError> {
    match command {
        Commands::Demo => cmd_demo(graph, ctx),
        Commands::Network => cmd_network(graph, ctx),
        Commands::User { name } => cmd_query(graph, ctx, &Query::lookup(name.as_str())),
        Commands::Friends { name } => cmd_query(graph, ctx, &Query::neighbors(name.as_str())),
        Commands::Adjacent { a, b } => {
            cmd_query(graph, ctx, &Query::adjacent(a.as_str(), b.as_str()))
        }
        Commands::Search { name } => Ok(cmd_search(graph, ctx, &VertexId::new(name))),
        Commands::Path { from, to } => {
            cmd_query(graph, ctx, &Query::shortest_path(from.as_str(), to.as_str()))
        }
        Commands::Bfs { start } => cmd_query(graph, ctx, &Query::bfs(start.as_str())),
        Commands::Dfs { start } => cmd_query(graph, ctx, &Query::dfs(start.as_str())),
        Commands::Message { from, to, text } => cmd_message(graph, ctx, from, to, text),
        Commands::Remove { name } => cmd_remove(graph, ctx, name),
        Commands::Unfriend { a, b } => cmd_unfriend(graph, ctx, a, b),
        Commands::Status => cmd_status(graph, ctx),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map(|s| s + "\n")
        .map_err(|e| AppError::Io(format!("JSON encoding failed: {}", e)))
}

// =============================================================================
// QUERY COMMANDS
// =============================================================================

/// Show the full network.
pub fn cmd_network(graph: &Graph, ctx: &RunContext) -> Result<String, AppError> {
    if ctx.json_mode {
        return to_json(&GraphSpec::from(graph));
    }
    Ok(display::format_network(graph)?)
}

/// Execute a read-only query and render its outcome.
pub fn cmd_query(graph: &Graph, ctx: &RunContext, query: &Query) -> Result<String, AppError> {
    use sociograph_core::{QueryOutcome, QueryType};

    let outcome = query.execute(graph)?;
    if ctx.json_mode {
        return to_json(&outcome);
    }

    let text = match (&query.query_type, &outcome) {
        (QueryType::Lookup(name), _) => display::format_user_info(graph, name)?,
        (_, QueryOutcome::Path { source, target, path }) => {
            display::format_path(source, target, path.as_ref()) + "\n"
        }
        (QueryType::Bfs(_), QueryOutcome::Traversal { order, .. }) => {
            display::format_traversal("BFS", order) + "\n"
        }
        (QueryType::Dfs(_), QueryOutcome::Traversal { order, .. }) => {
            display::format_traversal("DFS", order) + "\n"
        }
        (_, QueryOutcome::Neighbors { name, .. }) => {
            display::format_friend_list(graph, name)? + "\n"
        }
        (_, QueryOutcome::Adjacent { a, b, adjacent }) => {
            if *adjacent {
                format!("Yes, {} and {} are friends.\n", a, b)
            } else {
                format!("No, {} and {} are not friends.\n", a, b)
            }
        }
        (_, other) => to_json(other)?,
    };
    Ok(text)
}

/// Check whether a user exists.
pub fn cmd_search(graph: &Graph, ctx: &RunContext, name: &VertexId) -> String {
    if ctx.json_mode {
        return format!(
            "{}\n",
            serde_json::json!({ "name": name, "found": graph.has_vertex(name) })
        );
    }
    display::format_search(graph, name) + "\n"
}

/// Show graph metrics.
pub fn cmd_status(graph: &Graph, ctx: &RunContext) -> Result<String, AppError> {
    let metrics = GraphMetrics::from_graph(graph)?;
    if ctx.json_mode {
        return to_json(&metrics);
    }
    Ok(format!(
        "Sociograph Network Status\n=========================\n{}",
        display::format_metrics(&metrics)
    ))
}

// =============================================================================
// MUTATING COMMANDS
// =============================================================================

/// Send a message.
pub fn cmd_message(
    graph: &mut Graph,
    ctx: &RunContext,
    from: &str,
    to: &str,
    text: &str,
) -> Result<String, AppError> {
    let sender = VertexId::new(from);
    let receiver = VertexId::new(to);
    let delivery = send_message(graph, &sender, &receiver, text, ctx.default_weight)?;

    if ctx.json_mode {
        return to_json(&serde_json::json!({
            "from": sender,
            "to": receiver,
            "befriended": delivery.befriended,
        }));
    }

    let mut out = String::new();
    if delivery.befriended {
        out.push_str(&format!(
            "Friendship automatically added between {} and {}.\n",
            sender, receiver
        ));
    }
    out.push_str(&format!("Message sent from {} to {}: {}\n", sender, receiver, text));
    Ok(out)
}

/// Remove a user, then show the network.
pub fn cmd_remove(graph: &mut Graph, ctx: &RunContext, name: &str) -> Result<String, AppError> {
    let id = VertexId::new(name);
    let removed = graph.remove_vertex(&id)?;
    tracing::info!("Removed user {}", removed.id);

    if ctx.json_mode {
        return cmd_network(graph, ctx);
    }
    Ok(format!(
        "User {} --> removed successfully.\n{}",
        removed.id,
        display::format_network(graph)?
    ))
}

/// Remove a friendship, then show the network.
pub fn cmd_unfriend(
    graph: &mut Graph,
    ctx: &RunContext,
    a: &str,
    b: &str,
) -> Result<String, AppError> {
    let a = VertexId::new(a);
    let b = VertexId::new(b);
    graph.remove_edge(&a, &b)?;
    tracing::info!("Removed friendship {} -- {}", a, b);

    if ctx.json_mode {
        return cmd_network(graph, ctx);
    }
    Ok(format!(
        "Removed connection: {} -- {}\n{}",
        a,
        b,
        display::format_network(graph)?
    ))
}

// =============================================================================
// DEMO COMMAND
// =============================================================================

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{:=^52}\n", format!(" {} ", title)));
}

/// The scripted walk-through: display, query, message, then mutate.
pub fn cmd_demo(graph: &mut Graph, ctx: &RunContext) -> Result<String, AppError> {
    let text_ctx = RunContext {
        json_mode: false,
        ..*ctx
    };
    let mut out = String::new();

    section(&mut out, "Display network");
    out.push_str(&display::format_network(graph)?);

    section(&mut out, "Shortest path");
    out.push_str(&cmd_query(graph, &text_ctx, &Query::shortest_path("Lymeng", "Srun"))?);

    section(&mut out, "Search a user");
    out.push_str(&cmd_search(graph, &text_ctx, &VertexId::new("Hong")));
    out.push_str(&cmd_search(graph, &text_ctx, &VertexId::new("Panha")));

    section(&mut out, "BFS & DFS");
    out.push_str(&cmd_query(graph, &text_ctx, &Query::bfs("Lymeng"))?);
    out.push_str(&cmd_query(graph, &text_ctx, &Query::dfs("Lida"))?);

    section(&mut out, "Send message");
    out.push_str(&cmd_message(
        graph,
        &text_ctx,
        "Lida",
        "Sambat",
        "Hi, CEO handsome boys & beautiful girls",
    )?);

    section(&mut out, "User information");
    out.push_str(&cmd_query(graph, &text_ctx, &Query::lookup("Lymeng"))?);
    out.push_str(&cmd_query(graph, &text_ctx, &Query::lookup("Thina"))?);

    section(&mut out, "Remove user");
    let removed = graph.remove_vertex(&VertexId::new("Thina"))?;
    out.push_str(&format!("User {} --> removed successfully.\n", removed.id));

    section(&mut out, "Remove friendship");
    graph.remove_edge(&VertexId::new("Lymeng"), &VertexId::new("Khim"))?;
    out.push_str("Removed connection: Lymeng -- Khim\n");

    section(&mut out, "Display network");
    out.push_str(&display::format_network(graph)?);

    Ok(out)
}
