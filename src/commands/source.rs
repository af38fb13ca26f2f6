//! Graph source resolution shared by every command
use std::fs;
use std::path::Path;

use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::{GraphwalkError, Result};
use graphwalk_core::graph::PresetParams;
use graphwalk_core::Graph;

use crate::cli::GraphSourceArgs;

/// Load the graph named by `--graph`, or build the selected preset.
///
/// Size flags override the configured sizes; configured sizes only apply
/// when the preset is the configured one.
pub fn load_graph(source: &GraphSourceArgs, config: &WalkConfig) -> Result<Graph> {
    if let Some(path) = &source.graph {
        return read_graph_file(path);
    }

    let preset = source.preset.unwrap_or(config.graph.preset);
    let base = if preset == config.graph.preset {
        config.graph.params()
    } else {
        PresetParams::default()
    };
    let params = PresetParams {
        size: source.size.or(base.size),
        rows: source.rows.or(base.rows),
        cols: source.cols.or(base.cols),
    };

    preset.build(params)
}

fn read_graph_file(path: &Path) -> Result<Graph> {
    let invalid = |reason: String| GraphwalkError::InvalidGraph {
        path: path.to_path_buf(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let graph = Graph::from_json_str(&content).map_err(|e| invalid(e.to_string()))?;

    tracing::debug!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph document"
    );
    Ok(graph)
}
