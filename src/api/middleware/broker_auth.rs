//! Broker basic-auth middleware

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::OsbError;

/// Username/password the platform must present on every `/v2` call
#[derive(Clone, PartialEq, Eq)]
pub struct BrokerCredentials {
    pub username: String,
    pub password: String,
}

impl BrokerCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        constant_time_eq(self.username.as_bytes(), username.as_bytes())
            & constant_time_eq(self.password.as_bytes(), password.as_bytes())
    }
}

impl std::fmt::Debug for BrokerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Extractor that requires the broker's basic-auth credentials
#[derive(Debug, Clone)]
pub struct RequireBrokerAuth;

impl FromRequestParts<AppState> for RequireBrokerAuth {
    type Rejection = OsbError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let (username, password) = extract_basic_auth(&parts.headers)?;

        if !state.broker_credentials.matches(&username, &password) {
            warn!(username = %username, "Rejected broker credentials");
            return Err(OsbError::unauthorized("Invalid broker credentials"));
        }

        debug!(username = %username, "Broker request authenticated");
        Ok(RequireBrokerAuth)
    }
}

fn extract_basic_auth(headers: &HeaderMap) -> Result<(String, String), OsbError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| OsbError::unauthorized("Basic authentication required"))?
        .to_str()
        .map_err(|_| OsbError::unauthorized("Invalid Authorization header encoding"))?;

    let encoded = value
        .strip_prefix("Basic ")
        .ok_or_else(|| OsbError::unauthorized("Basic authentication required"))?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or_else(|| OsbError::unauthorized("Malformed basic credentials"))?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| OsbError::unauthorized("Malformed basic credentials"))?;

    Ok((username.to_string(), password.to_string()))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
