//! The `{nodes, edges}` graph document
//!
//! This is the only shape persistence and export collaborators see.
//! Loading replays nodes and then edges in array order, so adjacency order
//! after a load equals edge-array order.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::types::{Graph, NodeKey};
use crate::error::Result;

/// Serializable snapshot of a graph's nodes and canonical edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData<N> {
    // `Vec::new` rather than `default` keeps `N: Default` off the impl
    #[serde(default = "Vec::new")]
    pub nodes: Vec<N>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<(N, N)>,
}

impl<N: NodeKey> Graph<N> {
    /// Export nodes (insertion order) and canonical edges (insertion order).
    pub fn to_data(&self) -> GraphData<N> {
        GraphData {
            nodes: self.nodes().to_vec(),
            edges: self.edges().to_vec(),
        }
    }

    /// Replace this graph's contents with `data`.
    ///
    /// Clears the graph, adds every node, then every edge, in array order.
    pub fn load_data(&mut self, data: GraphData<N>) {
        self.clear();
        for node in data.nodes {
            self.add_node(node);
        }
        for (a, b) in data.edges {
            self.add_edge(a, b);
        }
    }

    /// Serialize the graph document as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String>
    where
        N: Serialize,
    {
        Ok(serde_json::to_string_pretty(&self.to_data())?)
    }

    /// Build a graph from a JSON graph document.
    pub fn from_json_str(json: &str) -> Result<Self>
    where
        N: DeserializeOwned,
    {
        let data: GraphData<N> = serde_json::from_str(json)?;
        Ok(Self::from(data))
    }
}

impl<N: NodeKey> From<GraphData<N>> for Graph<N> {
    fn from(data: GraphData<N>) -> Self {
        let mut graph = Graph::new();
        graph.load_data(data);
        graph
    }
}
