//! Infrastructure layer - Concourse HTTP integration, broker services, logging

pub mod broker;
pub mod concourse;
pub mod logging;
