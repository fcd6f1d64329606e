//! Broker-level results of provision and deprovision

use thiserror::Error;

/// Successful provision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
}

/// Successful deprovision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeprovisionOutcome {
    Gone,
}

/// Failed provision or deprovision, as the platform sees it
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BrokerError {
    /// The organization already has a team
    #[error("Instance conflicts with existing team {team}")]
    Conflict { team: String },

    /// Anything the platform can only report as a failure
    #[error("{message}")]
    Internal { message: String },
}

impl BrokerError {
    pub fn conflict(team: impl Into<String>) -> Self {
        Self::Conflict { team: team.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
