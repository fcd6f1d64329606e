//! Team entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_organization_name, TeamValidationError};

/// Name of a Concourse team, one per platform organization
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    /// Derive the team name for an organization.
    ///
    /// The organization name is used as-is, so distinct organizations always
    /// get distinct teams. Two organizations sharing a display name share a
    /// team.
    pub fn for_organization(organization_name: &str) -> Result<Self, TeamValidationError> {
        validate_organization_name(organization_name)?;
        Ok(Self(organization_name.to_string()))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TeamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Concourse administrator credentials, used only to obtain bootstrap tokens
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Short-lived token returned by the Concourse auth endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    #[serde(rename = "type")]
    pub token_type: String,
    pub value: String,
}

impl AuthToken {
    pub fn new(token_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            token_type: token_type.into(),
            value: value.into(),
        }
    }

    /// Value for the `Authorization` header of an authorized request
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.value)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("token_type", &self.token_type)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// One login method configured on a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthMethod {
    #[serde(rename = "type")]
    pub method_type: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub auth_url: String,
}

/// Platform OAuth client that provisioned teams delegate login to
#[derive(Clone, PartialEq, Eq)]
pub struct PlatformAuth {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub cf_url: String,
    pub cf_ca_cert: String,
}

impl PlatformAuth {
    /// Build the team authorization restricted to a single space
    pub fn scoped_to_space(&self, space_guid: impl Into<String>) -> TeamAuthConfig {
        TeamAuthConfig {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            auth_url: self.auth_url.clone(),
            token_url: self.token_url.clone(),
            cf_spaces: vec![space_guid.into()],
            cf_ca_cert: self.cf_ca_cert.clone(),
            cf_url: self.cf_url.clone(),
        }
    }
}

impl std::fmt::Debug for PlatformAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformAuth")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("cf_url", &self.cf_url)
            .finish()
    }
}

/// The `uaa_auth` block sent when a team is created
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub cf_spaces: Vec<String>,
    pub cf_ca_cert: String,
    pub cf_url: String,
}

impl std::fmt::Debug for TeamAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("cf_spaces", &self.cf_spaces)
            .field("cf_url", &self.cf_url)
            .finish()
    }
}

/// Team as returned by the create-or-update endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTeam {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}

/// Result of a create-or-update call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTeamOutcome {
    pub team: SavedTeam,
    pub created: bool,
    pub updated: bool,
}

impl SaveTeamOutcome {
    /// Only a brand new team counts as a provisioned one
    pub fn is_fresh_create(&self) -> bool {
        self.created && !self.updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn platform_auth() -> PlatformAuth {
        PlatformAuth {
            client_id: "concourse".to_string(),
            client_secret: "secret".to_string(),
            auth_url: "https://login.example.com/oauth/authorize".to_string(),
            token_url: "https://uaa.example.com/oauth/token".to_string(),
            cf_url: "https://api.example.com".to_string(),
            cf_ca_cert: String::new(),
        }
    }

    #[test]
    fn test_team_name_for_organization() {
        let name = TeamName::for_organization("acme").unwrap();
        assert_eq!(name.as_str(), "acme");
        assert_eq!(name.to_string(), "acme");
    }

    #[test]
    fn test_team_name_rejects_empty_organization() {
        assert_eq!(
            TeamName::for_organization(""),
            Err(TeamValidationError::EmptyOrganizationName)
        );
    }

    #[test]
    fn test_auth_token_header() {
        let token = AuthToken::new("Bearer", "abc123");
        assert_eq!(token.authorization_header(), "Bearer abc123");
    }

    #[test]
    fn test_auth_token_wire_format() {
        let token: AuthToken =
            serde_json::from_str(r#"{"type":"Bearer","value":"abc123"}"#).unwrap();
        assert_eq!(token, AuthToken::new("Bearer", "abc123"));
    }

    #[test]
    fn test_secrets_are_redacted_in_debug() {
        let credentials = AdminCredentials::new("admin", "hunter2");
        let token = AuthToken::new("Bearer", "abc123");
        let auth = platform_auth();

        assert!(!format!("{:?}", credentials).contains("hunter2"));
        assert!(!format!("{:?}", token).contains("abc123"));
        assert!(!format!("{:?}", auth).contains("\"secret\""));
        assert!(!format!("{:?}", auth.scoped_to_space("s1")).contains("\"secret\""));
    }

    #[test]
    fn test_scoped_to_space_authorizes_exactly_one_space() {
        let config = platform_auth().scoped_to_space("s1");

        assert_eq!(config.cf_spaces, vec!["s1".to_string()]);
        assert_eq!(config.client_id, "concourse");
        assert_eq!(config.cf_url, "https://api.example.com");
        assert_eq!(config.cf_ca_cert, "");
    }

    #[test]
    fn test_team_auth_config_wire_format() {
        let json = serde_json::to_value(platform_auth().scoped_to_space("s1")).unwrap();

        assert_eq!(json["cf_spaces"], serde_json::json!(["s1"]));
        assert_eq!(json["token_url"], "https://uaa.example.com/oauth/token");
        assert_eq!(json["cf_ca_cert"], "");
    }

    #[test]
    fn test_auth_method_defaults() {
        let method: AuthMethod = serde_json::from_str(r#"{"type":"basic"}"#).unwrap();
        assert_eq!(method.method_type, "basic");
        assert!(method.display_name.is_empty());
    }

    #[test]
    fn test_only_created_without_update_is_fresh() {
        let team = SavedTeam {
            id: 1,
            name: "acme".to_string(),
        };
        let outcome = |created, updated| SaveTeamOutcome {
            team: team.clone(),
            created,
            updated,
        };

        assert!(outcome(true, false).is_fresh_create());
        assert!(!outcome(true, true).is_fresh_create());
        assert!(!outcome(false, true).is_fresh_create());
        assert!(!outcome(false, false).is_fresh_create());
    }

    proptest! {
        #[test]
        fn distinct_organizations_get_distinct_teams(a in ".{1,40}", b in ".{1,40}") {
            prop_assume!(a != b);
            let first = TeamName::for_organization(&a).unwrap();
            let second = TeamName::for_organization(&b).unwrap();
            prop_assert_ne!(first, second);
        }

        #[test]
        fn derivation_is_total_for_non_empty_names(name in ".{1,64}") {
            let derived = TeamName::for_organization(&name);
            prop_assert!(derived.is_ok());
        }

        #[test]
        fn derivation_is_deterministic(name in "[a-zA-Z0-9 _-]{1,32}") {
            prop_assert_eq!(
                TeamName::for_organization(&name).unwrap(),
                TeamName::for_organization(&name).unwrap()
            );
        }
    }
}
