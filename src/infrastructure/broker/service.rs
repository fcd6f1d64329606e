//! Provisioning service - maps team client results onto broker outcomes

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::domain::broker::{BrokerError, DeprovisionOutcome, ProvisionOutcome};
use crate::domain::team::{TeamClient, TeamClientError};
use crate::domain::tenant::TenantDetails;

const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Provision and deprovision on top of a [`TeamClient`].
///
/// Holds no state of its own and never retries.
#[derive(Clone)]
pub struct ProvisioningService {
    team_client: Arc<dyn TeamClient>,
    operation_timeout: Duration,
}

impl ProvisioningService {
    pub fn new(team_client: Arc<dyn TeamClient>) -> Self {
        Self::with_timeout(team_client, DEFAULT_OPERATION_TIMEOUT)
    }

    pub fn with_timeout(team_client: Arc<dyn TeamClient>, operation_timeout: Duration) -> Self {
        Self {
            team_client,
            operation_timeout,
        }
    }

    /// Create the team backing a new service instance
    pub async fn provision(
        &self,
        instance_id: &str,
        details: &TenantDetails,
    ) -> Result<ProvisionOutcome, BrokerError> {
        info!(
            instance_id = %instance_id,
            organization = %details.organization_name,
            space_guid = %details.space_guid,
            "Provisioning service instance"
        );

        match self
            .with_deadline(self.team_client.create_team(details))
            .await
        {
            Ok(()) => Ok(ProvisionOutcome::Created),
            Err(TeamClientError::TeamAlreadyExists { team }) => {
                warn!(instance_id = %instance_id, team = %team, "Instance conflicts with existing team");
                Err(BrokerError::conflict(team))
            }
            Err(e) => {
                error!(instance_id = %instance_id, error = %e, "Provisioning failed");
                Err(BrokerError::internal(e.to_string()))
            }
        }
    }

    /// Destroy the team backing a service instance
    pub async fn deprovision(
        &self,
        instance_id: &str,
        details: &TenantDetails,
    ) -> Result<DeprovisionOutcome, BrokerError> {
        info!(
            instance_id = %instance_id,
            organization = %details.organization_name,
            "Deprovisioning service instance"
        );

        self.with_deadline(self.team_client.delete_team(details))
            .await
            .map(|()| DeprovisionOutcome::Gone)
            .map_err(|e| {
                error!(instance_id = %instance_id, error = %e, "Deprovisioning failed");
                BrokerError::internal(e.to_string())
            })
    }

    /// Bound a team client call; the call is dropped when the deadline passes
    async fn with_deadline<T>(
        &self,
        operation: impl Future<Output = Result<T, TeamClientError>>,
    ) -> Result<T, TeamClientError> {
        tokio::time::timeout(self.operation_timeout, operation)
            .await
            .unwrap_or_else(|_| {
                Err(TeamClientError::network(format!(
                    "deadline of {}s exceeded",
                    self.operation_timeout.as_secs()
                )))
            })
    }
}

impl std::fmt::Debug for ProvisioningService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisioningService")
            .field("operation_timeout", &self.operation_timeout)
            .finish_non_exhaustive()
    }
}
