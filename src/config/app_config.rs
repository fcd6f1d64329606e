use std::time::Duration;

use serde::Deserialize;

use crate::domain::team::{AdminCredentials, PlatformAuth};
use crate::domain::DomainError;
use crate::infrastructure::concourse::{ConcourseHttpOptions, DEFAULT_ADMIN_TEAM};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub broker: BrokerConfig,
    #[serde(default)]
    pub concourse: ConcourseConfig,
    #[serde(default)]
    pub uaa: UaaConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Credentials the platform uses to call the broker, and the catalog it is shown
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    pub username: String,
    pub password: String,
    pub catalog_path: String,
}

/// Where the Concourse server is and how to reach it as administrator
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ConcourseConfig {
    pub url: String,
    pub admin_username: String,
    pub admin_password: String,
    pub admin_team: String,
    pub skip_ssl_validation: bool,
    pub request_timeout_secs: u64,
    pub operation_timeout_secs: u64,
}

/// Platform OAuth client that provisioned teams log in through
#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct UaaConfig {
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub cf_url: String,
    pub cf_ca_cert: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            catalog_path: "./catalog.json".to_string(),
        }
    }
}

impl Default for ConcourseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            admin_username: String::new(),
            admin_password: String::new(),
            admin_team: DEFAULT_ADMIN_TEAM.to_string(),
            skip_ssl_validation: false,
            request_timeout_secs: 30,
            operation_timeout_secs: 60,
        }
    }
}

impl std::fmt::Debug for BrokerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("catalog_path", &self.catalog_path)
            .finish()
    }
}

impl std::fmt::Debug for ConcourseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcourseConfig")
            .field("url", &self.url)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"[REDACTED]")
            .field("admin_team", &self.admin_team)
            .field("skip_ssl_validation", &self.skip_ssl_validation)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("operation_timeout_secs", &self.operation_timeout_secs)
            .finish()
    }
}

impl std::fmt::Debug for UaaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UaaConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("cf_url", &self.cf_url)
            .finish()
    }
}

impl ConcourseConfig {
    pub fn admin_credentials(&self) -> AdminCredentials {
        AdminCredentials::new(&self.admin_username, &self.admin_password)
    }

    pub fn http_options(&self) -> ConcourseHttpOptions {
        ConcourseHttpOptions {
            timeout: Duration::from_secs(self.request_timeout_secs),
            skip_ssl_validation: self.skip_ssl_validation,
        }
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }
}

impl UaaConfig {
    pub fn platform_auth(&self) -> PlatformAuth {
        PlatformAuth {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            auth_url: self.auth_url.clone(),
            token_url: self.token_url.clone(),
            cf_url: self.cf_url.clone(),
            cf_ca_cert: self.cf_ca_cert.clone(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Check every required setting at once
    pub fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("broker.username", &self.broker.username),
            ("broker.password", &self.broker.password),
            ("concourse.url", &self.concourse.url),
            ("concourse.admin_username", &self.concourse.admin_username),
            ("concourse.admin_password", &self.concourse.admin_password),
            ("concourse.admin_team", &self.concourse.admin_team),
            ("uaa.client_id", &self.uaa.client_id),
            ("uaa.client_secret", &self.uaa.client_secret),
            ("uaa.auth_url", &self.uaa.auth_url),
            ("uaa.token_url", &self.uaa.token_url),
            ("uaa.cf_url", &self.uaa.cf_url),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(key, _)| *key)
            .collect();

        if !missing.is_empty() {
            return Err(DomainError::configuration(format!(
                "missing required settings: {}",
                missing.join(", ")
            )));
        }

        if self.concourse.operation_timeout_secs == 0 || self.concourse.request_timeout_secs == 0 {
            return Err(DomainError::configuration("timeouts must be greater than zero"));
        }

        Ok(())
    }
}
