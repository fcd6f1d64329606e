//! Team client errors

use thiserror::Error;

use super::validation::TeamValidationError;

/// Outcome classification for failed team operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TeamClientError {
    /// Tenant details cannot produce a team name
    #[error("Invalid tenant details: {0}")]
    Validation(#[from] TeamValidationError),

    /// The administrator token could not be obtained
    #[error("Failed to authenticate against Concourse: {message}")]
    Auth { message: String },

    /// The team is already present on the Concourse server
    #[error("Team {team} already exists")]
    TeamAlreadyExists { team: String },

    /// Create-or-update reported something other than a fresh create
    #[error("Unable to provision team {team}: created={created}, updated={updated}")]
    UnexpectedState {
        team: String,
        created: bool,
        updated: bool,
    },

    /// The request never produced an HTTP response
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a failure
    #[error("Concourse server error: {message}")]
    Server { status: Option<u16>, message: String },
}

impl TeamClientError {
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn already_exists(team: impl Into<String>) -> Self {
        Self::TeamAlreadyExists { team: team.into() }
    }

    pub fn unexpected_state(team: impl Into<String>, created: bool, updated: bool) -> Self {
        Self::UnexpectedState {
            team: team.into(),
            created,
            updated,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn server(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TeamClientError::already_exists("acme").to_string(),
            "Team acme already exists"
        );
        assert_eq!(
            TeamClientError::unexpected_state("acme", true, true).to_string(),
            "Unable to provision team acme: created=true, updated=true"
        );
        assert_eq!(
            TeamClientError::from(TeamValidationError::EmptyOrganizationName).to_string(),
            "Invalid tenant details: Organization name cannot be empty"
        );
    }
}
