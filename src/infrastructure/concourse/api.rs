use async_trait::async_trait;
use thiserror::Error;

use crate::domain::team::{
    AdminCredentials, AuthMethod, AuthToken, SaveTeamOutcome, TeamAuthConfig, TeamName,
};

/// Failures of a single Concourse API call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConcourseApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Resource not found")]
    NotFound,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// `.` and `..` are path dot-segments and cannot name a team in a URL
    #[error("Team name '{0}' cannot be used as a URL path segment")]
    UnaddressableTeam(String),
}

/// The Concourse team endpoints the broker relies on (for mocking)
#[async_trait]
pub trait ConcourseApi: Send + Sync + std::fmt::Debug {
    /// Exchange administrator credentials for a token scoped to `team`
    async fn auth_token(
        &self,
        team: &str,
        credentials: &AdminCredentials,
    ) -> Result<AuthToken, ConcourseApiError>;

    async fn list_auth_methods(
        &self,
        token: &AuthToken,
        team: &TeamName,
    ) -> Result<Vec<AuthMethod>, ConcourseApiError>;

    async fn create_or_update_team(
        &self,
        token: &AuthToken,
        team: &TeamName,
        auth: &TeamAuthConfig,
    ) -> Result<SaveTeamOutcome, ConcourseApiError>;

    async fn destroy_team(&self, token: &AuthToken, team: &TeamName)
        -> Result<(), ConcourseApiError>;
}
