//! CLI command implementations.

pub mod config;
pub mod platforms;
pub mod raw;
pub mod stats;

use anyhow::Result;

use crate::Cli;
use crate::config::Effective;

/// Resolves flags and the config file into effective settings.
pub fn effective(cli: &Cli) -> Result<Effective> {
    Effective::resolve(cli.config.as_deref(), cli.handles(), cli.timeout)
}
