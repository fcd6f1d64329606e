//! API middleware components

pub mod broker_auth;

pub use broker_auth::{BrokerCredentials, RequireBrokerAuth};
