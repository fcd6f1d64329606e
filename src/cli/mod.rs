//! CLI module for the Concourse team broker
//!
//! - `serve`: run the service broker API
//! - `check-config`: load and validate configuration, then exit

pub mod check_config;
pub mod serve;

use clap::{Parser, Subcommand};

/// Concourse Team Broker - provisions Concourse teams for platform organizations
#[derive(Parser)]
#[command(name = "concourse-team-broker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the service broker API
    Serve,

    /// Validate configuration and the catalog file without starting the server
    CheckConfig,
}
