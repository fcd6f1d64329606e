//! Service instance endpoints (provision / deprovision)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::api::middleware::RequireBrokerAuth;
use crate::api::state::AppState;
use crate::api::types::{Json, OsbError};
use crate::domain::TenantDetails;

/// Platform context sent alongside a provision request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvisionContext {
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub organization_guid: Option<String>,
    #[serde(default)]
    pub space_guid: Option<String>,
}

/// Body of `PUT /v2/service_instances/{instance_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ProvisionRequest {
    pub service_id: String,
    pub plan_id: String,
    #[serde(default)]
    pub organization_guid: Option<String>,
    #[serde(default)]
    pub space_guid: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub context: Option<ProvisionContext>,
}

impl ProvisionRequest {
    /// Tenant identity, preferring the platform context over top-level fields
    pub fn tenant_details(&self) -> Result<TenantDetails, OsbError> {
        let context = self.context.clone().unwrap_or_default();

        tenant_details(
            context.organization_name.or_else(|| self.organization_name.clone()),
            context.organization_guid.or_else(|| self.organization_guid.clone()),
            context.space_guid.or_else(|| self.space_guid.clone()),
        )
    }
}

/// Query of `DELETE /v2/service_instances/{instance_id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeprovisionParams {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub plan_id: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub organization_guid: Option<String>,
    #[serde(default)]
    pub space_guid: Option<String>,
}

impl DeprovisionParams {
    pub fn tenant_details(&self) -> Result<TenantDetails, OsbError> {
        tenant_details(
            self.organization_name.clone(),
            self.organization_guid.clone(),
            self.space_guid.clone(),
        )
    }
}

fn tenant_details(
    organization_name: Option<String>,
    organization_guid: Option<String>,
    space_guid: Option<String>,
) -> Result<TenantDetails, OsbError> {
    let organization_name = organization_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| OsbError::unprocessable("organization_name is required"))?;

    Ok(TenantDetails::new(
        organization_name,
        organization_guid.unwrap_or_default(),
        space_guid.unwrap_or_default(),
    ))
}

/// PUT /v2/service_instances/{instance_id}
pub async fn provision(
    State(state): State<AppState>,
    _auth: RequireBrokerAuth,
    Path(instance_id): Path<String>,
    Json(request): Json<ProvisionRequest>,
) -> Result<(StatusCode, Json<Value>), OsbError> {
    debug!(
        instance_id = %instance_id,
        service_id = %request.service_id,
        plan_id = %request.plan_id,
        "Provision requested"
    );

    let details = request.tenant_details()?;

    if details.space_guid.is_empty() {
        return Err(OsbError::unprocessable("space_guid is required"));
    }

    let team = details
        .team_name()
        .map_err(|e| OsbError::unprocessable(e.to_string()))?;

    let _guard = state.team_locks.lock(&team).await;
    state.provisioning.provision(&instance_id, &details).await?;

    Ok((StatusCode::CREATED, Json(json!({}))))
}

/// DELETE /v2/service_instances/{instance_id}
pub async fn deprovision(
    State(state): State<AppState>,
    _auth: RequireBrokerAuth,
    Path(instance_id): Path<String>,
    Query(params): Query<DeprovisionParams>,
) -> Result<(StatusCode, Json<Value>), OsbError> {
    debug!(
        instance_id = %instance_id,
        service_id = ?params.service_id,
        plan_id = ?params.plan_id,
        "Deprovision requested"
    );

    let details = params.tenant_details()?;
    let team = details
        .team_name()
        .map_err(|e| OsbError::unprocessable(e.to_string()))?;

    let _guard = state.team_locks.lock(&team).await;
    state.provisioning.deprovision(&instance_id, &details).await?;

    Ok((StatusCode::OK, Json(json!({}))))
}
