//! Stagehand - Project Configuration Gate for Multi-Account Deployments
//!
//! Stagehand is the tooling front door for a multi-account cloud project.
//! Before any deployment action runs, it loads config/project-config.json,
//! validates it against the project schema, and refuses to continue on any
//! violation. It also carries the dev-loop bootstrapper that keeps the
//! project's TypeScript CLI running against fresh sources.
//!
//! # Architecture
//!
//! - **config**: Project configuration loading and validation
//! - **develop**: Runner-cache clearing and dev entry-point launch
//! - **error**: Error types shared across the tool
//! - **style**: Terminal output styling
//! - **logging**: tracing subscriber setup

pub mod config;
pub mod develop;
pub mod error;
pub mod logging;
pub mod style;

// Re-exports
pub use error::{Result, StagehandError};
