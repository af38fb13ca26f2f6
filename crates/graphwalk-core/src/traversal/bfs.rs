use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use super::recorder::Recorder;
use super::step::{Frontier, StepEvent};
use super::{Algorithm, Traversal};
use crate::graph::{Graph, NodeKey};

fn snapshot<N: Clone>(queue: &VecDeque<N>) -> Frontier<N> {
    Frontier::Queue(queue.iter().cloned().collect())
}

/// Breadth-first traversal from `start`, recording every step.
///
/// Neighbors are enqueued in adjacency order, skipping nodes that are
/// already visited or already waiting in the queue. `start` is not checked
/// against the graph; an unknown id yields a one-node run.
#[tracing::instrument(skip_all, fields(start = %start, nodes = graph.node_count()))]
pub fn bfs<N: NodeKey>(graph: &Graph<N>, start: &N) -> Traversal<N> {
    let started = Instant::now();
    let mut rec = Recorder::new();
    let mut queue = VecDeque::from([start.clone()]);
    let mut queued: HashSet<N> = HashSet::from([start.clone()]);

    rec.emit(
        StepEvent::Start {
            current_node: start.clone(),
        },
        snapshot(&queue),
        format!("Starting BFS from node {start}"),
        None,
    );

    while let Some(current) = queue.pop_front() {
        queued.remove(&current);

        if !rec.mark_visited(&current) {
            continue;
        }
        rec.emit(
            StepEvent::Visit {
                current_node: current.clone(),
            },
            snapshot(&queue),
            format!("Visiting node {current}"),
            None,
        );

        for neighbor in graph.neighbors(&current) {
            if rec.is_visited(neighbor) || queued.contains(neighbor) {
                continue;
            }
            queue.push_back(neighbor.clone());
            queued.insert(neighbor.clone());
            rec.record_parent(neighbor, &current);
            rec.emit(
                StepEvent::Enqueue {
                    current_node: current.clone(),
                    neighbor: neighbor.clone(),
                },
                snapshot(&queue),
                format!("Adding neighbor {neighbor} to queue"),
                None,
            );
        }
    }

    rec.emit(
        StepEvent::Complete,
        Frontier::Queue(Vec::new()),
        "BFS traversal complete".to_string(),
        None,
    );

    let traversal = rec.finish(Algorithm::Bfs, start.clone());
    crate::trace_time!(started, "bfs", steps = traversal.total_steps);
    traversal
}
