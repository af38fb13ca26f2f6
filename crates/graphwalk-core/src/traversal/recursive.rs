use std::time::Instant;

use super::recorder::Recorder;
use super::step::{Frontier, StepEvent};
use super::{Algorithm, Traversal};
use crate::graph::{Graph, NodeKey};

/// One simulated call: the node, its depth and the next neighbor index
/// to consider.
struct Frame<N> {
    node: N,
    depth: usize,
    next: usize,
}

fn snapshot<N: Clone>(frames: &[Frame<N>]) -> Frontier<N> {
    Frontier::CallStack(frames.iter().map(|f| f.node.clone()).collect())
}

fn enter<N: NodeKey>(rec: &mut Recorder<N>, frames: &mut Vec<Frame<N>>, node: N, depth: usize) {
    frames.push(Frame {
        node: node.clone(),
        depth,
        next: 0,
    });
    rec.emit(
        StepEvent::Enter {
            current_node: node.clone(),
        },
        snapshot(frames),
        format!("Entering recursive call for node {node} (depth {depth})"),
        Some(depth),
    );

    rec.mark_visited(&node);
    rec.emit(
        StepEvent::Visit {
            current_node: node.clone(),
        },
        snapshot(frames),
        format!("Visiting node {node}"),
        Some(depth),
    );
}

/// Recursive depth-first traversal, recording the simulated call stack.
///
/// Calls are modelled with an explicit frame stack rather than native
/// recursion, so deep graphs cannot overflow the thread stack. Events come
/// out in the order true recursion would produce them: each unvisited
/// neighbor, taken in adjacency order, is fully explored before the next
/// one is considered.
#[tracing::instrument(skip_all, fields(start = %start, nodes = graph.node_count()))]
pub fn dfs_recursive<N: NodeKey>(graph: &Graph<N>, start: &N) -> Traversal<N> {
    let started = Instant::now();
    let mut rec = Recorder::new();
    let mut frames: Vec<Frame<N>> = Vec::new();

    rec.emit(
        StepEvent::Start {
            current_node: start.clone(),
        },
        Frontier::CallStack(Vec::new()),
        format!("Starting recursive DFS from node {start}"),
        Some(0),
    );

    enter(&mut rec, &mut frames, start.clone(), 0);

    while let Some(frame) = frames.last_mut() {
        let neighbors = graph.neighbors(&frame.node);
        let mut descend = None;
        while let Some(candidate) = neighbors.get(frame.next) {
            frame.next += 1;
            if !rec.is_visited(candidate) {
                descend = Some(candidate.clone());
                break;
            }
        }

        match descend {
            Some(neighbor) => {
                let node = frame.node.clone();
                let depth = frame.depth;
                rec.record_parent(&neighbor, &node);
                rec.emit(
                    StepEvent::Recurse {
                        current_node: node,
                        neighbor: neighbor.clone(),
                    },
                    snapshot(&frames),
                    format!("Recursively calling DFS on neighbor {neighbor}"),
                    Some(depth),
                );
                enter(&mut rec, &mut frames, neighbor, depth + 1);
            }
            None => {
                let Some(done) = frames.pop() else {
                    break;
                };
                rec.emit(
                    StepEvent::Return {
                        current_node: done.node.clone(),
                    },
                    snapshot(&frames),
                    format!("Returning from recursive call for node {}", done.node),
                    Some(done.depth),
                );
            }
        }
    }

    rec.emit(
        StepEvent::Complete,
        Frontier::CallStack(Vec::new()),
        "Recursive DFS traversal complete".to_string(),
        Some(0),
    );

    let traversal = rec.finish(Algorithm::DfsRecursive, start.clone());
    crate::trace_time!(started, "dfs_recursive", steps = traversal.total_steps);
    traversal
}
