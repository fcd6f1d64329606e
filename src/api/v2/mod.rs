//! Open Service Broker v2 API

pub mod catalog;
pub mod service_bindings;
pub mod service_instances;

use axum::{
    routing::{get, put},
    Router,
};

use super::state::AppState;

/// Create the `/v2` router
pub fn create_v2_router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog::get_catalog))
        .route(
            "/service_instances/{instance_id}",
            put(service_instances::provision).delete(service_instances::deprovision),
        )
        .route(
            "/service_instances/{instance_id}/service_bindings/{binding_id}",
            put(service_bindings::bind).delete(service_bindings::unbind),
        )
}
