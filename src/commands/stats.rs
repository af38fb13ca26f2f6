//! Stats command
use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;

use super::source::load_graph;
use crate::cli::{Cli, GraphSourceArgs};

/// Execute the stats command
pub fn execute(cli: &Cli, config: &WalkConfig, source: &GraphSourceArgs) -> Result<()> {
    let graph = load_graph(source, config)?;
    let stats = graph.statistics();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Human => {
            println!("nodes: {}", stats.node_count);
            println!("edges: {}", stats.edge_count);
            println!(
                "connected: {}",
                if stats.is_connected { "yes" } else { "no" }
            );
            println!("max degree: {}", stats.max_degree);
            println!("min degree: {}", stats.min_degree);
        }
    }

    Ok(())
}
