//! Team client trait

use async_trait::async_trait;

use super::error::TeamClientError;
use crate::domain::tenant::TenantDetails;

#[cfg(test)]
use mockall::automock;

/// Capabilities every Concourse team client provides.
///
/// Implementations keep no state between calls: each call authenticates on
/// its own and discards the token when it returns.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamClient: Send + Sync {
    /// Create the tenant organization's team, restricted to the tenant's space
    async fn create_team(&self, details: &TenantDetails) -> Result<(), TeamClientError>;

    /// Destroy the tenant organization's team
    async fn delete_team(&self, details: &TenantDetails) -> Result<(), TeamClientError>;
}
