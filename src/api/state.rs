//! Application state for shared services

use std::sync::Arc;

use crate::api::locks::TeamLocks;
use crate::api::middleware::BrokerCredentials;
use crate::domain::Catalog;
use crate::infrastructure::broker::ProvisioningService;

/// Application state shared by every request handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub provisioning: Arc<ProvisioningService>,
    pub catalog: Arc<Catalog>,
    pub broker_credentials: Arc<BrokerCredentials>,
    pub team_locks: TeamLocks,
}

impl AppState {
    pub fn new(
        provisioning: ProvisioningService,
        catalog: Catalog,
        broker_credentials: BrokerCredentials,
    ) -> Self {
        Self {
            provisioning: Arc::new(provisioning),
            catalog: Arc::new(catalog),
            broker_credentials: Arc::new(broker_credentials),
            team_locks: TeamLocks::new(),
        }
    }
}
