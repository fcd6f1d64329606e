//! Broker domain module - catalog and provisioning outcomes

mod catalog;
mod outcome;

pub use catalog::{Catalog, Plan, Service};
pub use outcome::{BrokerError, DeprovisionOutcome, ProvisionOutcome};
