//! # Configuration
//!
//! `sociograph.toml` settings with environment overrides.
//!
//! Precedence, highest first:
//! 1. CLI flags (applied by the caller)
//! 2. Environment: `SOCIOGRAPH_DEFAULT_WEIGHT`, `SOCIOGRAPH_LOG_FORMAT`,
//!    `SOCIOGRAPH_DATASET`
//! 3. Config file
//! 4. Defaults

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sociograph_core::{DEFAULT_EDGE_WEIGHT, EdgeWeight};
use std::path::{Path, PathBuf};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "unknown log format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Weight of friendships created by the messaging workflow.
    pub default_weight: u64,
    /// Log output format.
    pub log_format: LogFormat,
    /// Dataset to load instead of the built-in demo network.
    pub dataset: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_EDGE_WEIGHT.value(),
            log_format: LogFormat::Text,
            dataset: None,
        }
    }
}

impl AppConfig {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Read settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Cannot read config '{}': {}", path.display(), e)))?;
        Self::from_toml(&text)
    }

    /// Load settings: the file if given, then process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment lookup.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("SOCIOGRAPH_DEFAULT_WEIGHT") {
            self.default_weight = raw.trim().parse().map_err(|_| {
                AppError::Config(format!(
                    "SOCIOGRAPH_DEFAULT_WEIGHT must be a non-negative integer, got '{}'",
                    raw
                ))
            })?;
        }
        if let Some(raw) = lookup("SOCIOGRAPH_LOG_FORMAT") {
            self.log_format = LogFormat::parse(&raw)?;
        }
        if let Some(raw) = lookup("SOCIOGRAPH_DATASET") {
            self.dataset = Some(PathBuf::from(raw));
        }
        Ok(self)
    }

    /// The default weight as an engine value.
    #[must_use]
    pub fn default_weight(&self) -> EdgeWeight {
        EdgeWeight::new(self.default_weight)
    }
}
