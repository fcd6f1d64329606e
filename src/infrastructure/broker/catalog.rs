//! Catalog loading

use std::path::Path;

use tracing::info;

use crate::domain::broker::{Catalog, Service};
use crate::domain::DomainError;

/// Load the catalog from a JSON file holding a single service object
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, DomainError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        DomainError::catalog(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let catalog = parse_catalog(&content)?;
    info!(path = %path.display(), services = catalog.services.len(), "Loaded service catalog");

    Ok(catalog)
}

/// Parse and validate a single-service catalog document
pub fn parse_catalog(content: &str) -> Result<Catalog, DomainError> {
    let service: Service = serde_json::from_str(content)
        .map_err(|e| DomainError::catalog(format!("Invalid service definition: {}", e)))?;

    let catalog = Catalog::new(vec![service]);
    catalog.validate()?;

    Ok(catalog)
}
