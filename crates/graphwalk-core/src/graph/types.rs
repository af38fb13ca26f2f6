use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Bounds every node identifier must satisfy.
///
/// `Ord` gives the total order used to canonicalize undirected edge keys;
/// `Display` renders identifiers inside step descriptions.
pub trait NodeKey: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// Undirected simple graph.
///
/// Adjacency lists keep the order in which edges were first added on each
/// side; traversal tie-breaks depend on it. Every undirected edge is stored
/// once in `edges` under its canonical `(min, max)` key.
///
/// All operations are total: unknown identifiers read as isolated nodes and
/// repeated mutations are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N: NodeKey = String> {
    /// Nodes in insertion order
    order: Vec<N>,
    adjacency: HashMap<N, Vec<N>>,
    /// Canonical edge keys in insertion order
    edges: Vec<(N, N)>,
    edge_keys: HashSet<(N, N)>,
}

/// Order-independent identity of the undirected edge `a`–`b`.
fn canonical<N: NodeKey>(a: &N, b: &N) -> (N, N) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

impl<N: NodeKey> Graph<N> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
            edges: Vec::new(),
            edge_keys: HashSet::new(),
        }
    }

    /// Whether `id` is a member of the node set.
    pub fn contains(&self, id: &N) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Add a node. No-op if already present.
    pub fn add_node(&mut self, id: N) {
        if self.adjacency.contains_key(&id) {
            return;
        }
        self.order.push(id.clone());
        self.adjacency.insert(id, Vec::new());
    }

    /// Remove a node together with every incident edge. No-op if absent.
    pub fn remove_node(&mut self, id: &N) {
        let Some(neighbors) = self.adjacency.get(id).cloned() else {
            return;
        };
        for neighbor in &neighbors {
            self.remove_edge(id, neighbor);
        }
        self.adjacency.remove(id);
        self.order.retain(|n| n != id);
    }

    /// Add the undirected edge `a`–`b`, adding missing endpoints first.
    ///
    /// Adding an existing edge changes nothing. Self-loops are rejected:
    /// the node is registered but no edge is recorded.
    pub fn add_edge(&mut self, a: N, b: N) {
        self.add_node(a.clone());
        self.add_node(b.clone());

        if a == b {
            tracing::debug!(node = %a, "ignoring self-loop");
            return;
        }

        if let Some(list) = self.adjacency.get_mut(&a) {
            if !list.contains(&b) {
                list.push(b.clone());
            }
        }
        if let Some(list) = self.adjacency.get_mut(&b) {
            if !list.contains(&a) {
                list.push(a.clone());
            }
        }

        let key = canonical(&a, &b);
        if self.edge_keys.insert(key.clone()) {
            self.edges.push(key);
        }
    }

    /// Remove the undirected edge `a`–`b`. No-op if absent.
    pub fn remove_edge(&mut self, a: &N, b: &N) {
        if let Some(list) = self.adjacency.get_mut(a) {
            list.retain(|n| n != b);
        }
        if let Some(list) = self.adjacency.get_mut(b) {
            list.retain(|n| n != a);
        }

        let key = canonical(a, b);
        if self.edge_keys.remove(&key) {
            self.edges.retain(|e| *e != key);
        }
    }

    /// Whether `a` and `b` are adjacent.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.neighbors(a).contains(b)
    }

    /// Neighbors of `id` in adjacency order; empty when `id` is absent.
    pub fn neighbors(&self, id: &N) -> &[N] {
        self.adjacency.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of neighbors of `id`; 0 when absent.
    pub fn degree(&self, id: &N) -> usize {
        self.neighbors(id).len()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.order
    }

    /// Canonical edge pairs in insertion order.
    pub fn edges(&self) -> &[(N, N)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether every node is reachable from the first one. The empty graph
    /// counts as connected.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.order.first() else {
            return true;
        };

        let mut seen: HashSet<&N> = HashSet::with_capacity(self.order.len());
        let mut stack = vec![first];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            stack.extend(self.neighbors(current).iter().filter(|n| !seen.contains(n)));
        }

        seen.len() == self.order.len()
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.order.clear();
        self.adjacency.clear();
        self.edges.clear();
        self.edge_keys.clear();
    }
}

impl<N: NodeKey> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}
