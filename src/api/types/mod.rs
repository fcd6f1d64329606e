//! Service broker API types

pub mod error;
pub mod json;

pub use error::{OsbError, OsbErrorResponse};
pub use json::Json;
