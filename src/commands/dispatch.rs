//! Command dispatch logic for graphwalk
use std::time::Instant;

use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = WalkConfig::resolve(cli.config.as_deref())?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        Commands::Run {
            algorithm,
            start: start_node,
            at,
            source,
        } => commands::run::execute(cli, &config, *algorithm, start_node, source, *at),

        Commands::Stats { source } => commands::stats::execute(cli, &config, source),

        Commands::Show { source } => commands::show::execute(cli, &config, source),
    }
}
