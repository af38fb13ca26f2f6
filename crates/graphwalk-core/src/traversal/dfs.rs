use std::collections::HashSet;
use std::time::Instant;

use super::recorder::Recorder;
use super::step::{Frontier, StepEvent};
use super::{Algorithm, Traversal};
use crate::graph::{Graph, NodeKey};

fn snapshot<N: Clone>(stack: &[N]) -> Frontier<N> {
    Frontier::Stack(stack.to_vec())
}

/// Depth-first traversal with an explicit stack, recording every step.
///
/// Neighbors are pushed in reverse adjacency order so the first-listed
/// neighbor ends on top and is expanded next. Nodes already visited or
/// already on the stack are not pushed again.
#[tracing::instrument(skip_all, fields(start = %start, nodes = graph.node_count()))]
pub fn dfs_iterative<N: NodeKey>(graph: &Graph<N>, start: &N) -> Traversal<N> {
    let started = Instant::now();
    let mut rec = Recorder::new();
    let mut stack = vec![start.clone()];
    let mut stacked: HashSet<N> = HashSet::from([start.clone()]);

    rec.emit(
        StepEvent::Start {
            current_node: start.clone(),
        },
        snapshot(&stack),
        format!("Starting DFS from node {start}"),
        None,
    );

    while let Some(current) = stack.pop() {
        stacked.remove(&current);

        if !rec.mark_visited(&current) {
            continue;
        }
        rec.emit(
            StepEvent::Visit {
                current_node: current.clone(),
            },
            snapshot(&stack),
            format!("Visiting node {current}"),
            None,
        );

        for neighbor in graph.neighbors(&current).iter().rev() {
            if rec.is_visited(neighbor) || stacked.contains(neighbor) {
                continue;
            }
            stack.push(neighbor.clone());
            stacked.insert(neighbor.clone());
            rec.record_parent(neighbor, &current);
            rec.emit(
                StepEvent::Push {
                    current_node: current.clone(),
                    neighbor: neighbor.clone(),
                },
                snapshot(&stack),
                format!("Pushing neighbor {neighbor} to stack"),
                None,
            );
        }
    }

    rec.emit(
        StepEvent::Complete,
        Frontier::Stack(Vec::new()),
        "DFS traversal complete".to_string(),
        None,
    );

    let traversal = rec.finish(Algorithm::Dfs, start.clone());
    crate::trace_time!(started, "dfs_iterative", steps = traversal.total_steps);
    traversal
}
