//! Service broker infrastructure

mod catalog;
mod service;

pub use catalog::{load_catalog, parse_catalog};
pub use service::ProvisioningService;
