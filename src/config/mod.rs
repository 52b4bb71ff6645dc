//! Configuration system
//!
//! Loads and validates config/project-config.json, the per-project file
//! describing deployment accounts and stages:
//! - One account entry per deployment stage (dev, prod, ...)
//! - Repository coordinates, required only when the project has a pipeline
//! - Artifact repository and corporate auth toggles
//!
//! Loading is a fail-fast gate: the library returns structured errors and
//! the binary turns them into a diagnostic plus exit status 1 before any
//! deployment action runs.

mod project_config;
pub mod validation;

pub use project_config::{AccountConfig, PipelineSource, PresetStage, ProjectConfig};
pub use validation::{validate_config, validate_config_result, ValidationError};
