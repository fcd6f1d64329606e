//! Team domain module
//!
//! A team is the Concourse namespace handed to a platform organization.
//! Teams are created and destroyed through a [`TeamClient`].

mod client;
mod entity;
mod error;
mod validation;

#[cfg(test)]
pub use client::MockTeamClient;
pub use client::TeamClient;
pub use entity::{
    AdminCredentials, AuthMethod, AuthToken, PlatformAuth, SaveTeamOutcome, SavedTeam,
    TeamAuthConfig, TeamName,
};
pub use error::TeamClientError;
pub use validation::{validate_organization_name, TeamValidationError};
