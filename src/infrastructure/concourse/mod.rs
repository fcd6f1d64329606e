//! Concourse CI server integration
//!
//! - [`ConcourseApi`]: the four team endpoints, one call each
//! - [`ConcourseHttpClient`]: reqwest implementation of those endpoints
//! - [`ConcourseTeamClient`]: authenticated, idempotent team create/delete

mod api;
mod http_client;
mod team_client;

pub use api::{ConcourseApi, ConcourseApiError};
pub use http_client::{ConcourseHttpClient, ConcourseHttpOptions};
pub use team_client::{ConcourseTeamClient, DEFAULT_ADMIN_TEAM};
