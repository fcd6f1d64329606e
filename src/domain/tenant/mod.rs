//! Tenant domain module
//!
//! A tenant is the platform organization/space pair that asked for a service
//! instance. Tenant details arrive with every broker request and are never
//! stored; the Concourse server is the system of record for teams.

mod entity;

pub use entity::TenantDetails;
