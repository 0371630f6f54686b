//! Critical-path analysis of a small build graph.
//!
//! Run with `cargo run --example longest_path`.

use acyclic::{
    compute_maximum_path_lengths_to_each_node, critical_path, longest_path, DirectedAcyclicGraph,
    DirectedGraph, GraphError, VertexId,
};
use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Each path is a chain of "must finish before" steps.
    let graph: DirectedGraph<&str> = DirectedGraph::from_paths([
        vec!["fetch", "configure", "compile", "link", "package"],
        vec!["fetch", "codegen", "compile"],
        vec!["configure", "docs", "package"],
        vec!["compile", "test"],
    ]);
    println!("{graph}");

    let dag = DirectedAcyclicGraph::of(graph.clone()).context("build graph must be acyclic")?;
    println!("{dag}");

    let path = longest_path(&dag, &VertexId::from_id("fetch")).context("fetch is a step")?;
    let steps: Vec<_> = path.iter().map(|v| *v.id()).collect();
    println!("longest chain from fetch: {}", steps.join(" -> "));

    if let Some(path) = critical_path(&dag) {
        println!("critical path has {} steps", path.len());
    }

    for (step, depth) in compute_maximum_path_lengths_to_each_node(&dag) {
        println!("  {:<10} earliest stage {depth}", step.id());
    }

    // A dependency from packaging back to fetching closes a loop.
    let cyclic = graph.add_edge_between(VertexId::from_id("package"), VertexId::from_id("fetch"));
    match DirectedAcyclicGraph::of(cyclic) {
        Ok(_) => anyhow::bail!("cyclic build graph was accepted"),
        Err(err @ GraphError::CycleDetected { .. }) => println!("rejected: {err}"),
    }

    Ok(())
}
