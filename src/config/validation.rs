//! Configuration validation
//!
//! Validates the project configuration for correctness:
//! - Project id length and character set
//! - Repository fields required when the project has a pipeline
//! - Account number lengths
//!
//! Field names in violations use the JSON spelling (camelCase) since that
//! is what the user sees in the file they have to fix.

use super::project_config::ProjectConfig;
use crate::StagehandError;

const PROJECT_ID_MIN: usize = 5;
const PROJECT_ID_MAX: usize = 15;
const REPO_FIELD_MIN: usize = 5;
const REPO_FIELD_MAX: usize = 75;
const ACCOUNT_NUMBER_LEN: usize = 12;

/// Validation error details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// Validate a project configuration
///
/// Collects every violation rather than stopping at the first, so a user
/// editing the file gets the complete picture in one pass. The prod-account
/// invariant is checked separately by the loader since it has its own
/// diagnostic category.
pub fn validate_config(config: &ProjectConfig) -> ValidationResult {
    let mut errors = Vec::new();

    // Project id: length bounds plus character set
    let id_len = config.project_id.chars().count();
    if !(PROJECT_ID_MIN..=PROJECT_ID_MAX).contains(&id_len) {
        errors.push(ValidationError::new(
            "projectId",
            format!(
                "Must be {}-{} characters, got {}",
                PROJECT_ID_MIN, PROJECT_ID_MAX, id_len
            ),
        ));
    }

    if !config
        .project_id
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == '-')
    {
        errors.push(ValidationError::new(
            "projectId",
            "Name should contain only alphabets except '-'",
        ));
    }

    // Repository fields, conditional on the discriminator
    if config.has_pipeline {
        check_required_repo_field(&mut errors, "repoGroup", config.repo_group.as_deref());
        check_required_repo_field(&mut errors, "repoProject", config.repo_project.as_deref());
    } else {
        // Optional without a pipeline, but still bounded when present
        if let Some(value) = config.repo_group.as_deref() {
            check_repo_field_length(&mut errors, "repoGroup", value);
        }
        if let Some(value) = config.repo_project.as_deref() {
            check_repo_field_length(&mut errors, "repoProject", value);
        }
    }

    // Account numbers
    for (stage, account) in &config.accounts {
        if account.account_number.chars().count() != ACCOUNT_NUMBER_LEN {
            errors.push(ValidationError::new(
                format!("accounts.{}.accountNumber", stage),
                format!("Must be exactly {} characters", ACCOUNT_NUMBER_LEN),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_required_repo_field(errors: &mut Vec<ValidationError>, field: &str, value: Option<&str>) {
    match value {
        Some(value) => check_repo_field_length(errors, field, value),
        None => errors.push(ValidationError::new(
            field,
            "Required when hasPipeline is true",
        )),
    }
}

fn check_repo_field_length(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    let len = value.chars().count();
    if !(REPO_FIELD_MIN..=REPO_FIELD_MAX).contains(&len) {
        errors.push(ValidationError::new(
            field,
            format!(
                "Must be {}-{} characters, got {}",
                REPO_FIELD_MIN, REPO_FIELD_MAX, len
            ),
        ));
    }
}

/// Validate configuration and return a crate Result
pub fn validate_config_result(config: &ProjectConfig) -> crate::Result<()> {
    validate_config(config).map_err(|errors| StagehandError::MalformedConfig {
        violations: errors.iter().map(ToString::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccountConfig;

    fn base_config() -> ProjectConfig {
        ProjectConfig::starter()
    }

    #[test]
    fn test_valid_config() {
        let config = base_config();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_project_id_disallowed_character() {
        let mut config = base_config();
        config.project_id = "my@project".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "projectId");
        assert!(errors[0].message.contains("only alphabets"));
    }

    #[test]
    fn test_project_id_too_short() {
        let mut config = base_config();
        config.project_id = "abc".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "projectId"));
    }

    #[test]
    fn test_project_id_too_long() {
        let mut config = base_config();
        config.project_id = "a".repeat(16);

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_pipeline_requires_repo_fields() {
        let mut config = base_config();
        config.has_pipeline = true;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "repoGroup"));
        assert!(errors.iter().any(|e| e.field == "repoProject"));
    }

    #[test]
    fn test_pipeline_repo_field_bounds() {
        let mut config = base_config();
        config.has_pipeline = true;
        config.repo_group = Some("abc".to_string());
        config.repo_project = Some("a".repeat(76));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_repo_fields_optional_without_pipeline() {
        let mut config = base_config();
        config.repo_group = None;
        config.repo_project = None;

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_repo_fields_still_bounded_without_pipeline() {
        let mut config = base_config();
        config.repo_group = Some("abc".to_string());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "repoGroup");
    }

    #[test]
    fn test_account_number_length() {
        let mut config = base_config();
        config.accounts.insert(
            "dev".to_string(),
            AccountConfig {
                account_number: "12345".to_string(),
                region: "us-east-1".to_string(),
                auth_secret_id: None,
            },
        );

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "accounts.dev.accountNumber");
    }

    #[test]
    fn test_violations_accumulate() {
        let mut config = base_config();
        config.project_id = "x!".to_string();
        config.has_pipeline = true;

        let errors = validate_config(&config).unwrap_err();
        // Length, charset, and both missing repo fields
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_validate_config_result_maps_to_malformed() {
        let mut config = base_config();
        config.project_id = "my@project".to_string();

        let err = validate_config_result(&config).unwrap_err();
        match err {
            StagehandError::MalformedConfig { violations } => {
                assert_eq!(violations.len(), 1);
                assert!(violations[0].starts_with("projectId:"));
            }
            other => panic!("expected MalformedConfig, got {:?}", other),
        }
    }
}
