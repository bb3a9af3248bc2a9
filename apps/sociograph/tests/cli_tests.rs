//! Integration tests for CLI command execution against the demo network.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use sociograph::AppError;
use sociograph::cli::{Cli, Commands, RunContext, run};
use sociograph::config::AppConfig;
use sociograph::dataset;
use sociograph_core::{EdgeWeight, Graph, GraphError, GraphSpec, GraphStore, VertexId};

fn demo() -> Graph {
    dataset::load_graph(None).unwrap()
}

fn text() -> RunContext {
    RunContext::default()
}

fn json() -> RunContext {
    RunContext {
        json_mode: true,
        ..RunContext::default()
    }
}

fn id(s: &str) -> VertexId {
    VertexId::new(s)
}

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn test_parse_path_command() {
    let cli = Cli::try_parse_from(["sociograph", "path", "Lymeng", "Srun"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Path {
            from: "Lymeng".to_string(),
            to: "Srun".to_string(),
        })
    );
    assert!(!cli.json_mode);
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["sociograph", "status", "--json", "-q", "-w", "4"]).unwrap();
    assert!(cli.json_mode);
    assert!(cli.quiet);
    assert_eq!(cli.default_weight, Some(4));
}

#[test]
fn test_no_subcommand_is_allowed() {
    let cli = Cli::try_parse_from(["sociograph"]).unwrap();
    assert_eq!(cli.command, None);
}

#[test]
fn test_overrides_replace_config_values() {
    let cli =
        Cli::try_parse_from(["sociograph", "-d", "people.json", "-w", "9", "network"]).unwrap();
    let config = cli.apply_overrides(AppConfig::default());
    assert_eq!(config.default_weight(), EdgeWeight::new(9));
    assert_eq!(config.dataset.unwrap().to_str(), Some("people.json"));
}

// =============================================================================
// QUERY COMMANDS
// =============================================================================

#[test]
fn test_path_command_text() {
    let mut graph = demo();
    let command = Commands::Path {
        from: "Lymeng".to_string(),
        to: "Srun".to_string(),
    };
    let out = run(&command, &mut graph, &text()).unwrap();
    assert_eq!(
        out,
        "Shortest path Lymeng --> Srun: Lymeng -> Chamrong -> Hong -> Srun (total weight 7)\n"
    );
}

#[test]
fn test_path_command_json() {
    let mut graph = demo();
    let command = Commands::Path {
        from: "Lymeng".to_string(),
        to: "Srun".to_string(),
    };
    let out = run(&command, &mut graph, &json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["kind"], "path");
    assert_eq!(value["path"]["total_weight"], 7);
    assert_eq!(
        value["path"]["vertices"],
        serde_json::json!(["Lymeng", "Chamrong", "Hong", "Srun"])
    );
}

#[test]
fn test_bfs_visits_neighbors_in_name_order() {
    let mut graph = demo();
    let out = run(
        &Commands::Bfs {
            start: "Lymeng".to_string(),
        },
        &mut graph,
        &text(),
    )
    .unwrap();
    assert!(out.starts_with("BFS traversal: Lymeng Chamrong Chinmi Khim Lida Nut Thina Vin "));
}

#[test]
fn test_dfs_goes_deep_first() {
    let mut graph = demo();
    let out = run(
        &Commands::Dfs {
            start: "Lida".to_string(),
        },
        &mut graph,
        &text(),
    )
    .unwrap();
    // Hong is Lida's smallest neighbor; Chamrong is Hong's.
    assert!(out.starts_with("DFS traversal: Lida Hong Chamrong "));
}

#[test]
fn test_traversals_cover_the_same_users() {
    let mut graph = demo();
    let bfs = run(&Commands::Bfs { start: "Keam".to_string() }, &mut graph, &json()).unwrap();
    let dfs = run(&Commands::Dfs { start: "Keam".to_string() }, &mut graph, &json()).unwrap();

    let order = |s: &str| -> Vec<String> {
        let value: serde_json::Value = serde_json::from_str(s).unwrap();
        let mut names: Vec<String> = value["order"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        names.sort();
        names
    };
    assert_eq!(order(&bfs), order(&dfs));
}

#[test]
fn test_unknown_user_is_vertex_not_found() {
    let mut graph = demo();
    let result = run(
        &Commands::User {
            name: "Panha".to_string(),
        },
        &mut graph,
        &text(),
    );
    assert!(matches!(
        result,
        Err(AppError::Graph(GraphError::VertexNotFound(v))) if v == id("Panha")
    ));
}

#[test]
fn test_friends_command_text_and_json() {
    let mut graph = demo();
    let command = Commands::Friends {
        name: "Lymeng".to_string(),
    };

    let out = run(&command, &mut graph, &text()).unwrap();
    assert_eq!(
        out,
        "Lymeng       follows --> Chamrong(3), Chinmi(3), Khim(4), Lida(3), Nut(2), Thina(5), Vin(5)\n"
    );

    let out = run(&command, &mut graph, &json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["kind"], "neighbors");
    assert_eq!(value["friends"][0], serde_json::json!(["Chamrong", 3]));
    assert_eq!(value["friends"].as_array().unwrap().len(), 7);
}

#[test]
fn test_friends_of_unknown_user_fails() {
    let mut graph = demo();
    let result = run(
        &Commands::Friends {
            name: "Panha".to_string(),
        },
        &mut graph,
        &text(),
    );
    assert!(matches!(
        result,
        Err(AppError::Graph(GraphError::VertexNotFound(v))) if v == id("Panha")
    ));
}

#[test]
fn test_adjacent_command_text_and_json() {
    let mut graph = demo();
    let friends = Commands::Adjacent {
        a: "Nut".to_string(),
        b: "Lymeng".to_string(),
    };
    let strangers = Commands::Adjacent {
        a: "Keam".to_string(),
        b: "Nut".to_string(),
    };

    assert_eq!(
        run(&friends, &mut graph, &text()).unwrap(),
        "Yes, Nut and Lymeng are friends.\n"
    );
    assert_eq!(
        run(&strangers, &mut graph, &text()).unwrap(),
        "No, Keam and Nut are not friends.\n"
    );

    let value: serde_json::Value =
        serde_json::from_str(&run(&strangers, &mut graph, &json()).unwrap()).unwrap();
    assert_eq!(value["kind"], "adjacent");
    assert_eq!(value["adjacent"], false);
}

#[test]
fn test_parse_friends_and_adjacent() {
    let cli = Cli::try_parse_from(["sociograph", "friends", "Hong"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Friends {
            name: "Hong".to_string(),
        })
    );
    let cli = Cli::try_parse_from(["sociograph", "adjacent", "Hong", "Srun", "--json"]).unwrap();
    assert!(cli.json_mode);
    assert_eq!(
        cli.command,
        Some(Commands::Adjacent {
            a: "Hong".to_string(),
            b: "Srun".to_string(),
        })
    );
}

#[test]
fn test_path_total_beyond_u64_is_exact() {
    let mut graph = GraphSpec::new()
        .user("A", "")
        .user("B", "")
        .user("C", "")
        .user("D", "")
        .friendship("A", "B", u64::MAX)
        .friendship("B", "C", u64::MAX)
        .friendship("A", "D", u64::MAX)
        .friendship("D", "C", 1)
        .build()
        .unwrap();
    let command = Commands::Path {
        from: "A".to_string(),
        to: "C".to_string(),
    };

    let out = run(&command, &mut graph, &text()).unwrap();
    assert_eq!(
        out,
        "Shortest path A --> C: A -> D -> C (total weight 18446744073709551616)\n"
    );
}

#[test]
fn test_search_reports_presence() {
    let mut graph = demo();
    let hit = run(&Commands::Search { name: "Hong".to_string() }, &mut graph, &text()).unwrap();
    let miss = run(&Commands::Search { name: "Panha".to_string() }, &mut graph, &json()).unwrap();

    assert_eq!(hit, "Hong         --> Hello I'm here!\n");
    let value: serde_json::Value = serde_json::from_str(&miss).unwrap();
    assert_eq!(value["found"], false);
}

#[test]
fn test_status_counts_demo_network() {
    let mut graph = demo();
    let out = run(&Commands::Status, &mut graph, &json()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["vertex_count"], 19);
    assert_eq!(value["edge_count"], 31);
}

// =============================================================================
// MUTATING COMMANDS
// =============================================================================

#[test]
fn test_message_befriends_strangers() {
    let mut graph = demo();
    let command = Commands::Message {
        from: "Lida".to_string(),
        to: "Sambat".to_string(),
        text: "Hi".to_string(),
    };
    let out = run(&command, &mut graph, &text()).unwrap();

    assert!(out.starts_with("Friendship automatically added between Lida and Sambat.\n"));
    assert!(graph.are_adjacent(&id("Sambat"), &id("Lida")));
    assert_eq!(graph.get_vertex(&id("Sambat")).unwrap().inbox.len(), 1);

    let again = run(&command, &mut graph, &text()).unwrap();
    assert_eq!(again, "Message sent from Lida to Sambat: Hi\n");
}

#[test]
fn test_message_uses_context_weight() {
    let mut graph = demo();
    let ctx = RunContext {
        json_mode: true,
        default_weight: EdgeWeight::new(6),
    };
    let command = Commands::Message {
        from: "Keam".to_string(),
        to: "Nut".to_string(),
        text: "hello".to_string(),
    };
    let out = run(&command, &mut graph, &ctx).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["befriended"], true);
    assert_eq!(graph.edge_weight(&id("Keam"), &id("Nut")), Some(EdgeWeight::new(6)));
}

#[test]
fn test_self_message_rejected() {
    let mut graph = demo();
    let command = Commands::Message {
        from: "Lida".to_string(),
        to: "Lida".to_string(),
        text: "me".to_string(),
    };
    assert!(matches!(
        run(&command, &mut graph, &text()),
        Err(AppError::SelfMessage(_))
    ));
}

#[test]
fn test_remove_cascades_friendships() {
    let mut graph = demo();
    let out = run(&Commands::Remove { name: "Thina".to_string() }, &mut graph, &text()).unwrap();

    assert!(out.starts_with("User Thina --> removed successfully.\n"));
    assert!(!out.contains("Thina("));
    assert!(!graph.has_vertex(&id("Thina")));
    assert!(graph.check_invariants().is_ok());
}

#[test]
fn test_unfriend_and_missing_edge() {
    let mut graph = demo();
    let command = Commands::Unfriend {
        a: "Lymeng".to_string(),
        b: "Khim".to_string(),
    };
    run(&command, &mut graph, &text()).unwrap();
    assert!(!graph.are_adjacent(&id("Khim"), &id("Lymeng")));

    assert!(matches!(
        run(&command, &mut graph, &text()),
        Err(AppError::Graph(GraphError::EdgeNotFound(_, _)))
    ));
}

// =============================================================================
// DEMO SCRIPT
// =============================================================================

#[test]
fn test_demo_script_runs_to_completion() {
    let mut graph = demo();
    let out = run(&Commands::Demo, &mut graph, &text()).unwrap();

    assert!(out.contains("Lymeng -> Chamrong -> Hong -> Srun (total weight 7)"));
    assert!(out.contains("Panha        --> Hello I'm not here!!"));
    assert!(out.contains("User Thina --> removed successfully."));
    assert!(out.contains("Removed connection: Lymeng -- Khim"));

    assert_eq!(graph.vertex_count(), 18);
    assert!(!graph.are_adjacent(&id("Lymeng"), &id("Khim")));
    assert!(graph.are_adjacent(&id("Lida"), &id("Sambat")));
    assert_eq!(graph.get_vertex(&id("Sambat")).unwrap().inbox.len(), 1);
}
