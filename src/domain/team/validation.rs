//! Team name validation

use thiserror::Error;

/// Errors that can occur while deriving a team name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TeamValidationError {
    #[error("Organization name cannot be empty")]
    EmptyOrganizationName,

    /// The name is a URL dot-segment and cannot address a Concourse team
    #[error("Team name '{0}' cannot be addressed on the Concourse server")]
    UnaddressableName(String),
}

/// Validate an organization name before it becomes a team name
pub fn validate_organization_name(name: &str) -> Result<(), TeamValidationError> {
    if name.is_empty() {
        return Err(TeamValidationError::EmptyOrganizationName);
    }

    Ok(())
}
