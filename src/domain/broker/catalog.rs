//! Service catalog advertised to the platform

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Body of `GET /v2/catalog`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub services: Vec<Service>,
}

/// One service offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bindable: bool,
    pub plans: Vec<Plan>,
    /// Tags, metadata and other fields passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One plan of a service offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// Check the catalog is something the platform will accept
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.services.is_empty() {
            return Err(DomainError::catalog("catalog has no services"));
        }

        for service in &self.services {
            if service.id.is_empty() || service.name.is_empty() {
                return Err(DomainError::catalog("service requires an id and a name"));
            }

            if service.plans.is_empty() {
                return Err(DomainError::catalog(format!(
                    "service '{}' has no plans",
                    service.name
                )));
            }

            if service
                .plans
                .iter()
                .any(|plan| plan.id.is_empty() || plan.name.is_empty())
            {
                return Err(DomainError::catalog(format!(
                    "service '{}' has a plan without an id or a name",
                    service.name
                )));
            }
        }

        Ok(())
    }
}
