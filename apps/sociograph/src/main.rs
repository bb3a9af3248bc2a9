//! # Sociograph - Social Network Explorer
//!
//! The main binary for Sociograph.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                apps/sociograph (THE BINARY)            │
//! │                                                       │
//! │  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐  │
//! │  │   CLI       │   │  Messaging  │   │  Dataset    │  │
//! │  │  (clap)     │   │  workflow   │   │ (toml/json) │  │
//! │  └──────┬──────┘   └──────┬──────┘   └──────┬──────┘  │
//! │         └─────────────────┼─────────────────┘         │
//! │                           ▼                           │
//! │                  ┌─────────────────┐                  │
//! │                  │ sociograph-core │                  │
//! │                  │   (THE LOGIC)   │                  │
//! │                  └─────────────────┘                  │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! sociograph demo
//! sociograph path Lymeng Srun
//! sociograph --dataset people.json bfs Alice
//! ```

use clap::Parser;
use sociograph::cli;
use sociograph::config::{AppConfig, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => cli.apply_overrides(config),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format, cli.verbose);

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli, &config) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing. `RUST_LOG` wins over the default filter.
fn init_tracing(format: LogFormat, verbose: bool) {
    let default_filter = if verbose {
        "sociograph=debug,sociograph_core=debug"
    } else {
        "sociograph=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  ┌─┐┌─┐┌─┐┬┌─┐┌─┐┬─┐┌─┐┌─┐┬ ┬
  └─┐│ ││  ││ ││ ┬├┬┘├─┤├─┘├─┤
  └─┘└─┘└─┘┴└─┘└─┘┴└─┴ ┴┴  ┴ ┴

  Social Network Explorer v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
