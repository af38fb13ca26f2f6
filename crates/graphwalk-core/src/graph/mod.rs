//! Undirected graph container
//!
//! Provides the data side of graphwalk:
//! - `Graph`: node set, insertion-ordered adjacency and canonical edge set
//! - `GraphData`: the `{nodes, edges}` document exchanged with collaborators
//! - Preset generators (linear, binary tree, complete, cycle, star, grid)
//! - Summary statistics

pub mod data;
pub mod presets;
pub mod stats;
pub mod types;

pub use data::GraphData;
pub use presets::{node_label, Preset, PresetParams, MAX_PRESET_NODES, MAX_TREE_DEPTH};
pub use stats::GraphStatistics;
pub use types::{Graph, NodeKey};

#[cfg(test)]
mod tests;
