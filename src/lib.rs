//! Concourse Team Broker
//!
//! A service broker that hands each platform organization its own Concourse team:
//! - Provisioning creates a team whose login is delegated to the platform's UAA,
//!   restricted to the requesting space
//! - Deprovisioning destroys the team
//! - The Concourse server is the only system of record; the broker keeps no state

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::api::middleware::BrokerCredentials;
use crate::api::state::AppState;
use crate::infrastructure::broker::{load_catalog, ProvisioningService};
use crate::infrastructure::concourse::{ConcourseHttpClient, ConcourseTeamClient};

/// Wire the broker's services from a validated configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let http = ConcourseHttpClient::with_options(
        &config.concourse.url,
        &config.concourse.http_options(),
    )
    .context("Failed to create Concourse HTTP client")?;

    let team_client = ConcourseTeamClient::with_admin_team(
        http,
        config.concourse.admin_credentials(),
        config.uaa.platform_auth(),
        &config.concourse.admin_team,
    );

    let provisioning =
        ProvisioningService::with_timeout(Arc::new(team_client), config.concourse.operation_timeout());

    let catalog = load_catalog(&config.broker.catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", config.broker.catalog_path))?;

    info!(
        concourse_url = %config.concourse.url,
        admin_team = %config.concourse.admin_team,
        services = catalog.services.len(),
        "Broker services initialized"
    );

    Ok(AppState::new(
        provisioning,
        catalog,
        BrokerCredentials::new(&config.broker.username, &config.broker.password),
    ))
}
