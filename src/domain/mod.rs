//! Domain layer - Core business logic and entities

pub mod broker;
pub mod error;
pub mod team;
pub mod tenant;

pub use broker::{BrokerError, Catalog, DeprovisionOutcome, ProvisionOutcome};
pub use error::DomainError;
pub use team::{TeamClient, TeamClientError, TeamName};
pub use tenant::TenantDetails;
