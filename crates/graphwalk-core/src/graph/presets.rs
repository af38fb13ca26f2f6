//! Deterministic preset graphs
//!
//! Nodes are labelled `A`, `B`, ... `Z`, `AA`, `AB`, ... by index; grid
//! cells are labelled `"row,col"`. Edge insertion order is fixed per preset,
//! which fixes every traversal over the result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::Graph;
use crate::error::{GraphwalkError, Result};

/// Upper bound on the node count a preset may generate.
pub const MAX_PRESET_NODES: usize = 1024;

/// Deepest binary tree that fits within `MAX_PRESET_NODES`.
pub const MAX_TREE_DEPTH: u32 = MAX_PRESET_NODES.ilog2();

/// Spreadsheet-style label for a zero-based node index.
pub fn node_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut rest = index;
    loop {
        letters.push(char::from(b'A' + (rest % 26) as u8));
        if rest < 26 {
            break;
        }
        rest = rest / 26 - 1;
    }
    letters.iter().rev().collect()
}

fn labels(count: usize) -> Vec<String> {
    (0..count).map(node_label).collect()
}

/// Path graph: A–B–C–...
pub fn linear(size: usize) -> Graph {
    let nodes = labels(size);
    let mut graph = Graph::new();
    for node in &nodes {
        graph.add_node(node.clone());
    }
    for pair in nodes.windows(2) {
        graph.add_edge(pair[0].clone(), pair[1].clone());
    }
    graph
}

/// Complete binary tree of the given depth (`2^depth - 1` nodes).
///
/// Node `i` has children `2i + 1` and `2i + 2`. Depths past
/// `MAX_TREE_DEPTH` are clamped to it.
pub fn binary_tree(depth: u32) -> Graph {
    let count = (1usize << depth.min(MAX_TREE_DEPTH)) - 1;
    let nodes = labels(count);
    let mut graph = Graph::new();
    for node in &nodes {
        graph.add_node(node.clone());
    }
    for (i, node) in nodes.iter().enumerate() {
        for child in [2 * i + 1, 2 * i + 2] {
            if let Some(child) = nodes.get(child) {
                graph.add_edge(node.clone(), child.clone());
            }
        }
    }
    graph
}

/// Complete graph: every pair `(i, j)` with `i < j`.
pub fn complete(size: usize) -> Graph {
    let nodes = labels(size);
    let mut graph = Graph::new();
    for node in &nodes {
        graph.add_node(node.clone());
    }
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            graph.add_edge(a.clone(), b.clone());
        }
    }
    graph
}

/// Cycle graph: `i` joined to `(i + 1) mod size`.
pub fn cycle(size: usize) -> Graph {
    let nodes = labels(size);
    let mut graph = Graph::new();
    for node in &nodes {
        graph.add_node(node.clone());
    }
    for (i, node) in nodes.iter().enumerate() {
        let next = &nodes[(i + 1) % nodes.len()];
        graph.add_edge(node.clone(), next.clone());
    }
    graph
}

/// Star graph: centre `A` joined to `size - 1` leaves.
pub fn star(size: usize) -> Graph {
    let center = node_label(0);
    let mut graph = Graph::new();
    graph.add_node(center.clone());
    for leaf in (1..size).map(node_label) {
        graph.add_node(leaf.clone());
        graph.add_edge(center.clone(), leaf);
    }
    graph
}

/// Grid graph with `"row,col"` labels; each cell links right, then down.
pub fn grid(rows: usize, cols: usize) -> Graph {
    let label = |r: usize, c: usize| format!("{r},{c}");
    let mut graph = Graph::new();
    for r in 0..rows {
        for c in 0..cols {
            graph.add_node(label(r, c));
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                graph.add_edge(label(r, c), label(r, c + 1));
            }
            if r + 1 < rows {
                graph.add_edge(label(r, c), label(r + 1, c));
            }
        }
    }
    graph
}

/// Named preset generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    Linear,
    BinaryTree,
    Complete,
    Cycle,
    Star,
    Grid,
}

/// Size parameters for a preset; unset values fall back to preset defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresetParams {
    /// Node count (tree depth for `binary-tree`)
    pub size: Option<usize>,
    /// Grid rows
    pub rows: Option<usize>,
    /// Grid columns
    pub cols: Option<usize>,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Linear,
        Preset::BinaryTree,
        Preset::Complete,
        Preset::Cycle,
        Preset::Star,
        Preset::Grid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Linear => "linear",
            Preset::BinaryTree => "binary-tree",
            Preset::Complete => "complete",
            Preset::Cycle => "cycle",
            Preset::Star => "star",
            Preset::Grid => "grid",
        }
    }

    /// Default size parameter (depth for `binary-tree`, side length for `grid`).
    pub fn default_size(&self) -> usize {
        match self {
            Preset::Linear | Preset::Cycle => 5,
            Preset::BinaryTree => 3,
            Preset::Complete => 4,
            Preset::Star => 6,
            Preset::Grid => 3,
        }
    }

    /// Grid rows and columns, defaulting to a square of `size`.
    fn grid_dims(&self, params: &PresetParams) -> (usize, usize) {
        let side = params.size.unwrap_or_else(|| self.default_size());
        (params.rows.unwrap_or(side), params.cols.unwrap_or(side))
    }

    /// Node count the preset would generate, or `None` on overflow.
    fn node_count(&self, params: &PresetParams) -> Option<usize> {
        let size = params.size.unwrap_or_else(|| self.default_size());
        match self {
            Preset::BinaryTree => {
                let depth = u32::try_from(size).ok()?;
                1usize.checked_shl(depth).map(|n| n - 1)
            }
            Preset::Star => Some(size.max(1)),
            Preset::Grid => {
                let (rows, cols) = self.grid_dims(params);
                rows.checked_mul(cols)
            }
            _ => Some(size),
        }
    }

    /// Generate the preset graph.
    ///
    /// Fails when the requested graph would exceed `MAX_PRESET_NODES`.
    pub fn build(&self, params: PresetParams) -> Result<Graph> {
        match self.node_count(&params) {
            Some(n) if n <= MAX_PRESET_NODES => {}
            _ => {
                return Err(GraphwalkError::invalid_value(
                    "preset size",
                    format!(
                        "{} exceeds {} nodes",
                        self.as_str(),
                        MAX_PRESET_NODES
                    ),
                ))
            }
        }

        let size = params.size.unwrap_or_else(|| self.default_size());
        let graph = match self {
            Preset::Linear => linear(size),
            // node_count() has already bounded the depth
            Preset::BinaryTree => binary_tree(size as u32),
            Preset::Complete => complete(size),
            Preset::Cycle => cycle(size),
            Preset::Star => star(size),
            Preset::Grid => {
                let (rows, cols) = self.grid_dims(&params);
                grid(rows, cols)
            }
        };

        tracing::debug!(
            preset = self.as_str(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built preset graph"
        );
        Ok(graph)
    }
}

impl FromStr for Preset {
    type Err = GraphwalkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Preset::Linear),
            "binary-tree" | "binary_tree" | "tree" => Ok(Preset::BinaryTree),
            "complete" => Ok(Preset::Complete),
            "cycle" => Ok(Preset::Cycle),
            "star" => Ok(Preset::Star),
            "grid" => Ok(Preset::Grid),
            other => Err(GraphwalkError::unsupported(
                "preset",
                other,
                Preset::ALL
                    .iter()
                    .map(Preset::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            )),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
