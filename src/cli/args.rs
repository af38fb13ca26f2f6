use std::path::PathBuf;

use clap::Args;
use graphwalk_core::Preset;

use super::parse::parse_preset;

/// Where the graph comes from: a preset generator or a graph document
#[derive(Args, Debug, Clone, Default)]
pub struct GraphSourceArgs {
    /// Preset graph (linear, binary-tree, complete, cycle, star, grid)
    #[arg(long, short, value_parser = parse_preset, conflicts_with = "graph")]
    pub preset: Option<Preset>,

    /// Preset node count (tree depth for binary-tree)
    #[arg(long, conflicts_with = "graph")]
    pub size: Option<usize>,

    /// Grid rows
    #[arg(long, conflicts_with = "graph")]
    pub rows: Option<usize>,

    /// Grid columns
    #[arg(long, conflicts_with = "graph")]
    pub cols: Option<usize>,

    /// JSON graph document with `nodes` and `edges`
    #[arg(long, short)]
    pub graph: Option<PathBuf>,
}
