//! Service binding endpoints; instances of this broker cannot be bound

use axum::extract::Path;
use tracing::debug;

use crate::api::middleware::RequireBrokerAuth;
use crate::api::types::OsbError;

const NOT_BINDABLE: &str = "Service instances of this broker are not bindable";

/// PUT /v2/service_instances/{instance_id}/service_bindings/{binding_id}
pub async fn bind(
    _auth: RequireBrokerAuth,
    Path((instance_id, binding_id)): Path<(String, String)>,
) -> OsbError {
    debug!(instance_id = %instance_id, binding_id = %binding_id, "Bind requested");
    OsbError::bad_request(NOT_BINDABLE)
}

/// DELETE /v2/service_instances/{instance_id}/service_bindings/{binding_id}
pub async fn unbind(
    _auth: RequireBrokerAuth,
    Path((instance_id, binding_id)): Path<(String, String)>,
) -> OsbError {
    debug!(instance_id = %instance_id, binding_id = %binding_id, "Unbind requested");
    OsbError::bad_request(NOT_BINDABLE)
}
