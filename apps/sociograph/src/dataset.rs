//! # Dataset Loading
//!
//! Reads a `GraphSpec` from TOML or JSON and builds the in-memory graph.
//! Without a dataset file the built-in demo network is used.

use crate::error::AppError;
use sociograph_core::{Graph, GraphSpec};
use std::path::Path;

/// Maximum dataset file size (16 MB).
const MAX_DATASET_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// The built-in demo network: 19 users, 31 friendships.
const DEMO_DATASET: &str = include_str!("../data/demo.toml");

/// Parse the built-in demo network.
pub fn demo_spec() -> Result<GraphSpec, AppError> {
    parse_toml(DEMO_DATASET)
}

/// Parse a spec from TOML text.
pub fn parse_toml(text: &str) -> Result<GraphSpec, AppError> {
    toml::from_str(text).map_err(|e| AppError::Dataset(format!("Invalid TOML: {}", e)))
}

/// Parse a spec from JSON text.
pub fn parse_json(text: &str) -> Result<GraphSpec, AppError> {
    serde_json::from_str(text).map_err(|e| AppError::Dataset(format!("Invalid JSON: {}", e)))
}

/// Read a spec from a file. `.json` files are parsed as JSON, everything
/// else as TOML.
pub fn load_spec(path: &Path) -> Result<GraphSpec, AppError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| AppError::Io(format!("Cannot read '{}': {}", path.display(), e)))?;
    if !metadata.is_file() {
        return Err(AppError::Io(format!(
            "'{}' is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > MAX_DATASET_FILE_SIZE {
        return Err(AppError::Dataset(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_DATASET_FILE_SIZE
        )));
    }

    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("Cannot read '{}': {}", path.display(), e)))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    tracing::debug!("Loading dataset {:?} (json: {})", path, is_json);

    if is_json {
        parse_json(&text)
    } else {
        parse_toml(&text)
    }
}

/// Build the graph from `path`, or from the demo network when `None`.
pub fn load_graph(path: Option<&Path>) -> Result<Graph, AppError> {
    let spec = match path {
        Some(p) => load_spec(p)?,
        None => demo_spec()?,
    };
    let graph = Graph::from_spec(&spec)?;
    tracing::debug!(
        "Built graph with {} users and {} friendships",
        spec.users.len(),
        spec.friendships.len()
    );
    Ok(graph)
}
