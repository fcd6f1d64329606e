//! Check-config command - validates settings and the catalog, then exits

use anyhow::Context;

use crate::config::AppConfig;
use crate::infrastructure::broker::load_catalog;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate()?;

    let catalog = load_catalog(&config.broker.catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", config.broker.catalog_path))?;

    println!("{}", summary(&config, catalog.services.len()));
    Ok(())
}

/// Human-readable view of the effective configuration; secrets are omitted
fn summary(config: &AppConfig, services: usize) -> String {
    [
        format!("listen:          {}:{}", config.server.host, config.server.port),
        format!("concourse url:   {}", config.concourse.url),
        format!("admin team:      {}", config.concourse.admin_team),
        format!("admin user:      {}", config.concourse.admin_username),
        format!("skip ssl verify: {}", config.concourse.skip_ssl_validation),
        format!("uaa client:      {}", config.uaa.client_id),
        format!("cf api:          {}", config.uaa.cf_url),
        format!("catalog:         {} ({} service)", config.broker.catalog_path, services),
    ]
    .join("\n")
}
