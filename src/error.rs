//! Error types for Stagehand
//!
//! Defines the error enum covering all failure modes across the tool.
//! Uses thiserror for ergonomic error handling.
//!
//! The three configuration variants mirror the diagnostic categories the
//! deployment tooling reports at startup: the file could not be read or
//! parsed at all, the file parsed but violated the schema, or the file was
//! schema-valid but lacked the reserved `prod` stage.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stagehand operations
pub type Result<T> = std::result::Result<T, StagehandError>;

/// Error type for Stagehand operations
#[derive(Error, Debug)]
pub enum StagehandError {
    /// Configuration file absent, unreadable, or not syntactically valid JSON
    #[error("Missing project configuration file: {0}")]
    MissingConfigFile(PathBuf),

    /// Configuration parsed but failed schema validation
    #[error("Malformed project configuration file:\n  - {}", .violations.join("\n  - "))]
    MalformedConfig { violations: Vec<String> },

    /// Configuration is schema-valid but has no `prod` account
    #[error("Missing prod account in configuration file")]
    MissingDefaultStage,

    /// Other configuration errors (init, save)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Development bootstrapper errors
    #[error("Develop runner error: {0}")]
    Develop(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),

    /// Anyhow errors (for more context)
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}
