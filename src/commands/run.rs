//! Run command: execute one traversal and print its steps
use std::time::Instant;

use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::{GraphwalkError, Result};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::{Algorithm, Graph, Step, Traversal};

use super::source::load_graph;
use crate::cli::{Cli, GraphSourceArgs};

/// Reject a start node the graph does not contain.
///
/// The engine itself accepts any identifier; this is the caller-side check.
pub fn validate_start(graph: &Graph, start: &str) -> Result<String> {
    let start = start.to_string();
    if !graph.contains(&start) {
        return Err(GraphwalkError::invalid_start(&start));
    }
    Ok(start)
}

/// Execute the run command
pub fn execute(
    cli: &Cli,
    config: &WalkConfig,
    algorithm: Option<Algorithm>,
    start_node: &str,
    source: &GraphSourceArgs,
    at: Option<isize>,
) -> Result<()> {
    let started = Instant::now();
    let graph = load_graph(source, config)?;
    let start = validate_start(&graph, start_node)?;
    let algorithm = algorithm.unwrap_or(config.algorithm);

    let traversal = algorithm.run(&graph, &start);
    tracing::debug!(
        elapsed = ?started.elapsed(),
        algorithm = %algorithm,
        steps = traversal.total_steps,
        "traversal"
    );

    match at {
        Some(position) => output_single_step(cli, &traversal, position),
        None => output_traversal(cli, &traversal),
    }
}

fn output_single_step(cli: &Cli, traversal: &Traversal<String>, position: isize) -> Result<()> {
    if position < -1 || position >= traversal.total_steps as isize {
        graphwalk_core::bail_invalid!(
            "step index",
            format!(
                "{} (expected -1..{})",
                position,
                traversal.total_steps as isize - 1
            )
        );
    }

    let step = traversal.step_at(position);
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&step)?);
        }
        OutputFormat::Human => match step {
            Some(step) => print_step_human(position as usize, step, true),
            None => println!("before start"),
        },
    }
    Ok(())
}

fn output_traversal(cli: &Cli, traversal: &Traversal<String>) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&traversal.export())?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "{} from {} ({} steps)",
                    traversal.algorithm, traversal.start, traversal.total_steps
                );
                for (index, step) in traversal.steps.iter().enumerate() {
                    print_step_human(index, step, false);
                }
            }
            println!("visited order: {}", traversal.visited_order.join(" "));
        }
    }
    Ok(())
}

fn print_step_human(index: usize, step: &Step<String>, with_parents: bool) {
    println!("{:>4}  {:<8}  {}", index, step.event.name(), step.action);
    println!(
        "      {}: [{}]  visited: [{}]",
        step.frontier.name(),
        step.frontier.nodes().join(", "),
        step.visited.join(", ")
    );
    if with_parents && !step.parent.is_empty() {
        let parents: Vec<String> = step
            .parent
            .iter()
            .map(|(child, parent)| format!("{child}<-{parent}"))
            .collect();
        println!("      parents: {}", parents.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwalk_core::graph::presets::linear;

    #[test]
    fn test_validate_start_accepts_member() {
        let graph = linear(3);
        assert_eq!(validate_start(&graph, "B").unwrap(), "B");
    }

    #[test]
    fn test_validate_start_rejects_unknown_node() {
        let graph = linear(3);
        let err = validate_start(&graph, "Z").unwrap_err();
        assert!(matches!(err, GraphwalkError::InvalidStartNode { ref node } if node == "Z"));
    }
}
