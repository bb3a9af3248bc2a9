//! # Sociograph CLI Module
//!
//! This module implements the CLI interface for Sociograph.
//!
//! ## Available Commands
//!
//! - `demo` - Run the scripted walk-through on the demo network
//! - `network` - Show every user and their friends
//! - `user` - Show one user's bio, friends and inbox
//! - `friends` - One user's friend list
//! - `adjacent` - Whether two users are friends
//! - `search` - Check whether a user exists
//! - `path` - Shortest (minimum-weight) path between two users
//! - `bfs` / `dfs` - Traversal order from a user
//! - `message` - Send a message (befriends on first contact)
//! - `remove` / `unfriend` - Remove a user or a friendship
//! - `status` - Graph metrics
//!
//! Every invocation builds the graph in memory from the dataset; changes
//! made by `message`, `remove` and `unfriend` last only for that run.

mod commands;

use crate::config::AppConfig;
use crate::dataset;
use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Sociograph - weighted social network explorer
///
/// Loads a network of users and friendships and answers path and traversal
/// queries over it.
#[derive(Parser, Debug)]
#[command(name = "sociograph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Dataset file (TOML or JSON); defaults to the built-in demo network
    #[arg(short = 'd', long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Weight of friendships created by `message`
    #[arg(short = 'w', long, global = true)]
    pub default_weight: Option<u64>,

    /// Output in JSON format (for programmatic access)
    #[arg(long = "json", global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the scripted walk-through
    Demo,

    /// Show the full network
    Network,

    /// Show a user's bio, friends and inbox
    User {
        /// User name
        name: String,
    },

    /// Show a user's friends and their weights
    Friends {
        /// User name
        name: String,
    },

    /// Check whether two users are friends
    Adjacent {
        /// First user
        a: String,
        /// Second user
        b: String,
    },

    /// Check whether a user exists
    Search {
        /// User name
        name: String,
    },

    /// Shortest path between two users
    Path {
        /// Start user
        from: String,
        /// Target user
        to: String,
    },

    /// Breadth-first traversal order
    Bfs {
        /// Start user
        start: String,
    },

    /// Depth-first traversal order
    Dfs {
        /// Start user
        start: String,
    },

    /// Send a message, befriending the users first if needed
    Message {
        /// Sender
        from: String,
        /// Receiver
        to: String,
        /// Message text
        text: String,
    },

    /// Remove a user and all their friendships
    Remove {
        /// User name
        name: String,
    },

    /// Remove a friendship
    Unfriend {
        /// First user
        a: String,
        /// Second user
        b: String,
    },

    /// Show graph metrics
    Status,
}

impl Cli {
    /// Merge CLI flags over the loaded configuration.
    #[must_use]
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = &self.dataset {
            config.dataset = Some(path.clone());
        }
        if let Some(weight) = self.default_weight {
            config.default_weight = weight;
        }
        config
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments and resolved configuration.
pub fn execute(cli: Cli, config: &AppConfig) -> Result<(), AppError> {
    let mut graph = dataset::load_graph(config.dataset.as_deref())?;
    let context = RunContext {
        json_mode: cli.json_mode,
        default_weight: config.default_weight(),
    };

    // No subcommand - show the network by default
    let command = cli.command.unwrap_or(Commands::Network);
    let output = run(&command, &mut graph, &context)?;
    print!("{}", output);
    Ok(())
}
