//! Unauthenticated probes; neither contacts the Concourse server

use axum::{extract::State, http::StatusCode};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Service offerings advertised in the catalog
    pub services: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        services: state.catalog.services.len(),
    })
}

/// GET /live
pub async fn live_check() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok",
            version: "1.0.0",
            services: 1,
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status":"ok","version":"1.0.0","services":1}"#
        );
    }
}
