//! Layered configuration: `config/default`, `config/local`, then `APP__*` variables

mod app_config;

pub use app_config::{
    AppConfig, BrokerConfig, ConcourseConfig, LogFormat, LoggingConfig, ServerConfig, UaaConfig,
};
