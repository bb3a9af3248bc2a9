//! Application error type.

use sociograph_core::{GraphError, VertexId};
use thiserror::Error;

/// Errors surfaced by the CLI and the messaging workflow.
#[derive(Debug, Error)]
pub enum AppError {
    /// An engine call failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A user tried to message themselves.
    #[error("{0} cannot send a message to themselves")]
    SelfMessage(VertexId),

    /// A dataset file could not be read or parsed.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// The configuration file or environment is invalid.
    #[error("Config error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}
