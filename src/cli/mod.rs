//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::Algorithm;
use std::path::PathBuf;

pub use args::GraphSourceArgs;
use parse::{parse_algorithm, parse_format};

/// graphwalk - step-by-step BFS and DFS over undirected graphs
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `graphwalk_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a traversal and print every recorded step
    Run {
        /// Algorithm (bfs, dfs, dfs-recursive); defaults to the configured one
        #[arg(value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,

        /// Start node
        #[arg(long, short)]
        start: String,

        /// Print only the step at this index (-1 = before start)
        #[arg(long, allow_negative_numbers = true)]
        at: Option<isize>,

        #[command(flatten)]
        source: GraphSourceArgs,
    },

    /// Show node, edge, degree and connectivity figures
    Stats {
        #[command(flatten)]
        source: GraphSourceArgs,
    },

    /// Print the graph as a `{nodes, edges}` document
    Show {
        #[command(flatten)]
        source: GraphSourceArgs,
    },
}
