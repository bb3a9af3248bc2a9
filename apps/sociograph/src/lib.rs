//! # Sociograph
//!
//! Presentation and messaging layer over `sociograph-core`: dataset
//! loading, configuration, the messaging workflow, text rendering and the
//! command-line interface.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod display;
pub mod error;
pub mod messaging;

pub use config::{AppConfig, LogFormat};
pub use error::AppError;
pub use messaging::{Delivery, send_message};
