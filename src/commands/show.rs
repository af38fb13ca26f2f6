//! Show command
use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;

use super::source::load_graph;
use crate::cli::{Cli, GraphSourceArgs};

/// Execute the show command
pub fn execute(cli: &Cli, config: &WalkConfig, source: &GraphSourceArgs) -> Result<()> {
    let graph = load_graph(source, config)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", graph.to_json_string()?);
        }
        OutputFormat::Human => {
            if graph.is_empty() {
                if !cli.quiet {
                    println!("Empty graph");
                }
                return Ok(());
            }
            for node in graph.nodes() {
                println!("{}: {}", node, graph.neighbors(node).join(" "));
            }
        }
    }

    Ok(())
}
