use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode, Url};
use serde::Serialize;
use tracing::debug;

use super::api::{ConcourseApi, ConcourseApiError};
use crate::domain::team::{
    AdminCredentials, AuthMethod, AuthToken, SaveTeamOutcome, SavedTeam, TeamAuthConfig,
    TeamName,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport settings for [`ConcourseHttpClient`]
#[derive(Debug, Clone)]
pub struct ConcourseHttpOptions {
    pub timeout: Duration,
    pub skip_ssl_validation: bool,
}

impl Default for ConcourseHttpOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            skip_ssl_validation: false,
        }
    }
}

/// Request body of `PUT /api/v1/teams/{team}`
#[derive(Serialize)]
struct SetTeamRequest<'a> {
    name: &'a str,
    uaa_auth: &'a TeamAuthConfig,
}

/// Concourse v1 API client using reqwest
#[derive(Debug, Clone)]
pub struct ConcourseHttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ConcourseHttpClient {
    pub fn new(base_url: &str) -> Result<Self, ConcourseApiError> {
        Self::with_options(base_url, &ConcourseHttpOptions::default())
    }

    pub fn with_options(
        base_url: &str,
        options: &ConcourseHttpOptions,
    ) -> Result<Self, ConcourseApiError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ConcourseApiError::Transport(format!("Invalid Concourse URL '{}': {}", base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ConcourseApiError::Transport(format!(
                "Concourse URL '{}' cannot be used as a base URL",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.skip_ssl_validation)
            .build()
            .map_err(|e| {
                ConcourseApiError::Transport(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, base_url })
    }

    /// `{base}/api/v1/teams/{team}/{suffix...}` with the team name encoded as one segment.
    ///
    /// URL parsing resolves `.` and `..` as dot-segments, so those two names are
    /// refused instead of addressing another resource.
    fn team_url(&self, team: &str, suffix: &[&str]) -> Result<Url, ConcourseApiError> {
        if is_dot_segment(team) {
            return Err(ConcourseApiError::UnaddressableTeam(team.to_string()));
        }

        let mut url = self.base_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v1", "teams"])
                .push(team)
                .extend(suffix);
        }

        Ok(url)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ConcourseApiError> {
        request
            .send()
            .await
            .map_err(|e| ConcourseApiError::Transport(e.to_string()))
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

async fn status_error(response: reqwest::Response) -> ConcourseApiError {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return ConcourseApiError::NotFound;
    }

    let body = response.text().await.unwrap_or_default();
    ConcourseApiError::Status {
        status: status.as_u16(),
        body,
    }
}

async fn parse_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ConcourseApiError> {
    response
        .json()
        .await
        .map_err(|e| ConcourseApiError::Decode(e.to_string()))
}

#[async_trait]
impl ConcourseApi for ConcourseHttpClient {
    async fn auth_token(
        &self,
        team: &str,
        credentials: &AdminCredentials,
    ) -> Result<AuthToken, ConcourseApiError> {
        let url = self.team_url(team, &["auth", "token"])?;
        debug!(team = %team, "Requesting Concourse auth token");

        let response = self
            .send(
                self.client
                    .get(url)
                    .basic_auth(&credentials.username, Some(&credentials.password)),
            )
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        parse_json(response).await
    }

    async fn list_auth_methods(
        &self,
        token: &AuthToken,
        team: &TeamName,
    ) -> Result<Vec<AuthMethod>, ConcourseApiError> {
        let url = self.team_url(team.as_str(), &["auth", "methods"])?;

        let response = self
            .send(
                self.client
                    .get(url)
                    .header(header::AUTHORIZATION, token.authorization_header()),
            )
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        parse_json(response).await
    }

    async fn create_or_update_team(
        &self,
        token: &AuthToken,
        team: &TeamName,
        auth: &TeamAuthConfig,
    ) -> Result<SaveTeamOutcome, ConcourseApiError> {
        let url = self.team_url(team.as_str(), &[])?;
        let body = SetTeamRequest {
            name: team.as_str(),
            uaa_auth: auth,
        };

        let response = self
            .send(
                self.client
                    .put(url)
                    .header(header::AUTHORIZATION, token.authorization_header())
                    .json(&body),
            )
            .await?;

        let (created, updated) = match response.status() {
            StatusCode::CREATED => (true, false),
            StatusCode::OK => (false, true),
            _ => return Err(status_error(response).await),
        };

        let saved: SavedTeam = parse_json(response).await?;

        Ok(SaveTeamOutcome {
            team: saved,
            created,
            updated,
        })
    }

    async fn destroy_team(
        &self,
        token: &AuthToken,
        team: &TeamName,
    ) -> Result<(), ConcourseApiError> {
        let url = self.team_url(team.as_str(), &[])?;

        let response = self
            .send(
                self.client
                    .delete(url)
                    .header(header::AUTHORIZATION, token.authorization_header()),
            )
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        Ok(())
    }
}
