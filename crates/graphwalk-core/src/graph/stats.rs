use serde::Serialize;

use super::types::{Graph, NodeKey};

/// Summary figures for a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub is_connected: bool,
    pub max_degree: usize,
    /// Smallest degree over all nodes; 0 for the empty graph
    pub min_degree: usize,
}

impl<N: NodeKey> Graph<N> {
    pub fn statistics(&self) -> GraphStatistics {
        let degrees = || self.nodes().iter().map(|n| self.degree(n));
        GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            is_connected: self.is_connected(),
            max_degree: degrees().max().unwrap_or(0),
            min_degree: degrees().min().unwrap_or(0),
        }
    }
}
