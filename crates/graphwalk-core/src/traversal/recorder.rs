use std::collections::{HashMap, HashSet};

use super::step::{Frontier, Step, StepEvent};
use super::{Algorithm, Traversal};
use crate::graph::NodeKey;

/// Live traversal state plus the steps emitted so far.
///
/// The visited set and parent map are mirrored in insertion-ordered vectors
/// so snapshots come out in a stable order.
pub(crate) struct Recorder<N: NodeKey> {
    visited: HashSet<N>,
    visited_order: Vec<N>,
    parents: HashMap<N, N>,
    parent_order: Vec<(N, N)>,
    steps: Vec<Step<N>>,
}

impl<N: NodeKey> Recorder<N> {
    pub(crate) fn new() -> Self {
        Self {
            visited: HashSet::new(),
            visited_order: Vec::new(),
            parents: HashMap::new(),
            parent_order: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub(crate) fn is_visited(&self, node: &N) -> bool {
        self.visited.contains(node)
    }

    /// Mark `node` visited. Returns false if it already was.
    pub(crate) fn mark_visited(&mut self, node: &N) -> bool {
        if !self.visited.insert(node.clone()) {
            return false;
        }
        self.visited_order.push(node.clone());
        true
    }

    /// Record `parent` as the discovery parent of `child` unless one exists.
    pub(crate) fn record_parent(&mut self, child: &N, parent: &N) {
        if self.parents.contains_key(child) {
            return;
        }
        self.parents.insert(child.clone(), parent.clone());
        self.parent_order.push((child.clone(), parent.clone()));
    }

    /// Append a step carrying copies of the current visited set and parents.
    pub(crate) fn emit(
        &mut self,
        event: StepEvent<N>,
        frontier: Frontier<N>,
        action: String,
        depth: Option<usize>,
    ) {
        self.steps.push(Step {
            event,
            action,
            visited: self.visited_order.clone(),
            frontier,
            parent: self.parent_order.clone(),
            depth,
        });
    }

    pub(crate) fn finish(self, algorithm: Algorithm, start: N) -> Traversal<N> {
        Traversal {
            algorithm,
            start,
            total_steps: self.steps.len(),
            steps: self.steps,
            visited_order: self.visited_order,
        }
    }
}
