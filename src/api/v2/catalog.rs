//! Catalog endpoint

use axum::extract::State;

use crate::api::middleware::RequireBrokerAuth;
use crate::api::state::AppState;
use crate::api::types::Json;
use crate::domain::Catalog;

/// GET /v2/catalog
pub async fn get_catalog(State(state): State<AppState>, _auth: RequireBrokerAuth) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}
