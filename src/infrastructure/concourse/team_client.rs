use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use super::api::{ConcourseApi, ConcourseApiError};
use crate::domain::team::{
    AdminCredentials, AuthMethod, AuthToken, PlatformAuth, TeamClient, TeamClientError, TeamName,
    TeamValidationError,
};
use crate::domain::tenant::TenantDetails;

/// Team that owns the administrator account
pub const DEFAULT_ADMIN_TEAM: &str = "main";

/// What the auth-method listing says about a team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TeamPresence {
    Absent,
    Present { auth_methods: usize },
}

/// Team client backed by a Concourse server.
///
/// Every call fetches its own administrator token and drops it on return;
/// no token outlives the operation that requested it.
#[derive(Debug)]
pub struct ConcourseTeamClient<A: ConcourseApi> {
    api: A,
    credentials: AdminCredentials,
    admin_team: String,
    platform_auth: PlatformAuth,
}

impl<A: ConcourseApi> ConcourseTeamClient<A> {
    pub fn new(api: A, credentials: AdminCredentials, platform_auth: PlatformAuth) -> Self {
        Self::with_admin_team(api, credentials, platform_auth, DEFAULT_ADMIN_TEAM)
    }

    pub fn with_admin_team(
        api: A,
        credentials: AdminCredentials,
        platform_auth: PlatformAuth,
        admin_team: impl Into<String>,
    ) -> Self {
        Self {
            api,
            credentials,
            admin_team: admin_team.into(),
            platform_auth,
        }
    }

    async fn authenticate(&self, operation: &str) -> Result<AuthToken, TeamClientError> {
        self.api
            .auth_token(&self.admin_team, &self.credentials)
            .await
            .map_err(|e| {
                error!(operation, admin_team = %self.admin_team, error = %e, "Failed to obtain Concourse auth token");
                TeamClientError::auth(e.to_string())
            })
    }

    async fn presence(
        &self,
        token: &AuthToken,
        team: &TeamName,
    ) -> Result<TeamPresence, TeamClientError> {
        let listing = self.api.list_auth_methods(token, team).await;
        classify_presence(team, listing)
    }
}

/// Read the auth-method listing as an existence check.
///
/// A listing with methods, or any 4xx other than 404, means the team is
/// there. An empty listing or a 404 means it is not.
fn classify_presence(
    team: &TeamName,
    listing: Result<Vec<AuthMethod>, ConcourseApiError>,
) -> Result<TeamPresence, TeamClientError> {
    match listing {
        Ok(methods) if methods.is_empty() => Ok(TeamPresence::Absent),
        Ok(methods) => Ok(TeamPresence::Present {
            auth_methods: methods.len(),
        }),
        Err(ConcourseApiError::NotFound) => Ok(TeamPresence::Absent),
        Err(ConcourseApiError::Status { status, .. }) if status < 500 => {
            Ok(TeamPresence::Present { auth_methods: 0 })
        }
        Err(e) => {
            error!(team = %team, error = %e, "Failed to check for existing team");
            Err(classify_request_error(e))
        }
    }
}

/// Map a failed team request onto the client's error taxonomy
fn classify_request_error(error: ConcourseApiError) -> TeamClientError {
    match error {
        ConcourseApiError::Transport(message) => TeamClientError::network(message),
        ConcourseApiError::NotFound => TeamClientError::server(Some(404), "team not found"),
        ConcourseApiError::Status { status, body } => {
            TeamClientError::server(Some(status), format!("HTTP {}: {}", status, body))
        }
        ConcourseApiError::Decode(message) => TeamClientError::server(None, message),
        ConcourseApiError::UnaddressableTeam(name) => {
            TeamValidationError::UnaddressableName(name).into()
        }
    }
}

#[async_trait]
impl<A: ConcourseApi> TeamClient for ConcourseTeamClient<A> {
    async fn create_team(&self, details: &TenantDetails) -> Result<(), TeamClientError> {
        let team = details.team_name()?;
        let token = self.authenticate("create-team").await?;

        if let TeamPresence::Present { auth_methods } = self.presence(&token, &team).await? {
            warn!(team = %team, auth_methods, "Team already exists");
            return Err(TeamClientError::already_exists(team.as_str()));
        }

        debug!(team = %team, space_guid = %details.space_guid, "Creating team");

        let auth = self.platform_auth.scoped_to_space(details.space_guid.as_str());
        let outcome = self
            .api
            .create_or_update_team(&token, &team, &auth)
            .await
            .map_err(|e| {
                error!(team = %team, error = %e, "Failed to create team");
                classify_request_error(e)
            })?;

        if !outcome.is_fresh_create() {
            error!(
                team = %team,
                created = outcome.created,
                updated = outcome.updated,
                saved_team_id = outcome.team.id,
                organization_guid = %details.organization_guid,
                space_guid = %details.space_guid,
                "Create-or-update did not report a fresh team"
            );
            return Err(TeamClientError::unexpected_state(
                team.as_str(),
                outcome.created,
                outcome.updated,
            ));
        }

        info!(team = %team, space_guid = %details.space_guid, "Created team");
        Ok(())
    }

    async fn delete_team(&self, details: &TenantDetails) -> Result<(), TeamClientError> {
        let team = details.team_name()?;
        let token = self.authenticate("delete-team").await?;

        self.api.destroy_team(&token, &team).await.map_err(|e| {
            error!(team = %team, error = %e, "Failed to delete team");
            classify_request_error(e)
        })?;

        info!(team = %team, "Deleted team");
        Ok(())
    }
}
