//! Service broker error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::BrokerError;

/// Error body expected by the platform: `{"description": "..."}` or `{}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsbErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Broker API error with status code
#[derive(Debug)]
pub struct OsbError {
    pub status: StatusCode,
    pub response: OsbErrorResponse,
}

impl OsbError {
    /// Create a new error with a description
    pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            status,
            response: OsbErrorResponse {
                description: Some(description.into()),
            },
        }
    }

    /// Create a new error with an empty `{}` body
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            response: OsbErrorResponse::default(),
        }
    }

    pub fn bad_request(description: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, description)
    }

    pub fn unauthorized(description: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, description)
    }

    /// The instance (or its team) already exists
    pub fn conflict() -> Self {
        Self::empty(StatusCode::CONFLICT)
    }

    pub fn unprocessable(description: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, description)
    }

    pub fn internal(description: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, description)
    }
}

impl IntoResponse for OsbError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<BrokerError> for OsbError {
    fn from(err: BrokerError) -> Self {
        match err {
            BrokerError::Conflict { .. } => Self::conflict(),
            BrokerError::Internal { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for OsbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.response.description {
            Some(description) => write!(f, "{}: {}", self.status, description),
            None => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for OsbError {}
