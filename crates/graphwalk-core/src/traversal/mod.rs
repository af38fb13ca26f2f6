//! Step-recording traversal engine
//!
//! Each algorithm reads a `Graph` (never mutating it) and eagerly returns
//! every step of the run, so consumers can jump to any step index without
//! re-running anything:
//! - `bfs`: FIFO queue
//! - `dfs_iterative`: LIFO stack, neighbors pushed in reverse
//! - `dfs_recursive`: simulated call stack

mod bfs;
mod dfs;
pub mod export;
mod recorder;
mod recursive;
pub mod step;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphwalkError;
use crate::graph::{Graph, NodeKey};

pub use bfs::bfs;
pub use dfs::dfs_iterative;
pub use export::{ExportMetadata, StepExport};
pub use recursive::dfs_recursive;
pub use step::{Frontier, Step, StepEvent};

/// Traversal algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Breadth-first search
    #[default]
    Bfs,
    /// Iterative depth-first search
    Dfs,
    /// Recursive depth-first search
    DfsRecursive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::DfsRecursive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::DfsRecursive => "dfs-recursive",
        }
    }

    /// Run this algorithm over `graph` from `start`.
    pub fn run<N: NodeKey>(&self, graph: &Graph<N>, start: &N) -> Traversal<N> {
        match self {
            Algorithm::Bfs => bfs(graph, start),
            Algorithm::Dfs => dfs_iterative(graph, start),
            Algorithm::DfsRecursive => dfs_recursive(graph, start),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphwalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" | "dfs-iterative" => Ok(Algorithm::Dfs),
            "dfs-recursive" | "dfs_recursive" => Ok(Algorithm::DfsRecursive),
            other => Err(GraphwalkError::unsupported(
                "algorithm",
                other,
                "bfs, dfs, dfs-recursive",
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete result of one traversal run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal<N> {
    pub algorithm: Algorithm,
    pub start: N,
    pub steps: Vec<Step<N>>,
    /// Nodes in the order they were visited
    pub visited_order: Vec<N>,
    /// Always equal to `steps.len()`
    pub total_steps: usize,
}

impl<N> Traversal<N> {
    /// Step at a zero-based index.
    pub fn step(&self, index: usize) -> Option<&Step<N>> {
        self.steps.get(index)
    }

    /// Step at a playback position, where `-1` means "before start".
    pub fn step_at(&self, position: isize) -> Option<&Step<N>> {
        usize::try_from(position).ok().and_then(|i| self.step(i))
    }

    /// The terminal `complete` step.
    pub fn last(&self) -> Option<&Step<N>> {
        self.steps.last()
    }
}
