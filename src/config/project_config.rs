//! Project configuration file handling
//!
//! Loads and manages the config/project-config.json file describing the
//! deployment accounts for each stage of a multi-account project.

use super::validation;
use crate::{Result, StagehandError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Stages with reserved semantics
///
/// Deployments default to `prod` when no stage is given on the command
/// line, so a `prod` account must always be present in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetStage {
    Dev,
    Prod,
}

impl PresetStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetStage::Dev => "dev",
            PresetStage::Prod => "prod",
        }
    }
}

/// A single deployment account, keyed by stage name in the configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountConfig {
    /// Cloud account number (exactly 12 characters)
    pub account_number: String,

    /// Deployment region for this account
    pub region: String,

    /// Secret id used for corporate auth against this account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_secret_id: Option<String>,
}

/// Repository coordinates for a project with a pipeline
///
/// Borrowed view returned by [`ProjectConfig::pipeline`]; only available
/// once validation has established that both fields are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSource<'a> {
    pub group: &'a str,
    pub project: &'a str,
}

/// Project configuration
///
/// Represents the complete config/project-config.json file. The shape is
/// discriminated on `has_pipeline`: when true, `repo_group` and
/// `repo_project` are required; when false they are optional. The
/// requiredness rules live in [`validation::validate_config`] so the
/// deserialized struct stays a plain data carrier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Project identifier (5-15 chars, ASCII alphabetic plus hyphen)
    pub project_id: String,

    /// Whether builds resolve dependencies through the artifact repository
    pub use_artifact_repository: bool,

    /// Whether deployments authenticate through corporate auth
    pub use_corporate_auth: bool,

    /// Discriminator: does this project deploy through a pipeline?
    pub has_pipeline: bool,

    /// Repository group (required when `has_pipeline` is true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_group: Option<String>,

    /// Repository project (required when `has_pipeline` is true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_project: Option<String>,

    /// Deployment accounts, keyed by stage name; must contain "prod"
    pub accounts: HashMap<String, AccountConfig>,
}

impl ProjectConfig {
    /// Load the configuration from the default path (config/project-config.json)
    pub fn load_default() -> Result<Self> {
        Self::load(Self::default_path())
    }

    /// Load and validate a configuration file
    ///
    /// If this returns `Ok`, the value satisfies the full schema and the
    /// prod-account invariant. Failures map onto the three diagnostic
    /// categories:
    /// - file unreadable or not syntactically valid JSON: [`StagehandError::MissingConfigFile`]
    /// - schema violations: [`StagehandError::MalformedConfig`]
    /// - no "prod" key in `accounts`: [`StagehandError::MissingDefaultStage`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        tracing::info!(path = %path.display(), "Loading project configuration");

        let content = fs::read_to_string(path).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "Configuration file unreadable");
            StagehandError::MissingConfigFile(path.to_path_buf())
        })?;

        // Syntax errors are reported the same way as a missing file: either
        // way there is no configuration to validate.
        let raw: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "Configuration file is not valid JSON");
            StagehandError::MissingConfigFile(path.to_path_buf())
        })?;

        let config: Self = serde_json::from_value(raw).map_err(|e| {
            StagehandError::MalformedConfig {
                violations: vec![e.to_string()],
            }
        })?;

        validation::validate_config_result(&config)?;

        // Deployments fall back to prod when no stage is requested, so the
        // prod account is not optional.
        if !config.accounts.contains_key(PresetStage::Prod.as_str()) {
            return Err(StagehandError::MissingDefaultStage);
        }

        tracing::debug!(
            project = %config.project_id,
            accounts = config.accounts.len(),
            has_pipeline = config.has_pipeline,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Save the configuration to a specific path
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        tracing::info!(path = %path.display(), "Saving project configuration");

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get the default config path (config/project-config.json, relative to
    /// the project root)
    pub fn default_path() -> PathBuf {
        let mut path = PathBuf::from("config");
        path.push("project-config.json");
        path
    }

    /// A minimal valid configuration, used by `stagehand init`
    pub fn starter() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            PresetStage::Prod.as_str().to_string(),
            AccountConfig {
                account_number: "000000000000".to_string(),
                region: "us-east-1".to_string(),
                auth_secret_id: None,
            },
        );

        Self {
            project_id: "my-project".to_string(),
            use_artifact_repository: false,
            use_corporate_auth: false,
            has_pipeline: false,
            repo_group: None,
            repo_project: None,
            accounts,
        }
    }

    /// Get the account for a stage by name
    pub fn account(&self, stage: &str) -> Option<&AccountConfig> {
        self.accounts.get(stage)
    }

    /// All stage names, sorted for stable output
    pub fn stage_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.accounts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Repository coordinates when the project deploys through a pipeline
    ///
    /// Returns `None` for projects without a pipeline. For a config that
    /// passed [`ProjectConfig::load`] with `has_pipeline` set, both fields
    /// are guaranteed present.
    pub fn pipeline(&self) -> Option<PipelineSource<'_>> {
        if !self.has_pipeline {
            return None;
        }
        match (self.repo_group.as_deref(), self.repo_project.as_deref()) {
            (Some(group), Some(project)) => Some(PipelineSource { group, project }),
            _ => None,
        }
    }
}
