//! Orchestration: wires the graph, extractor, balancer and simulator
//! into the single entry point the CLI calls.
//!
//! `solve` builds the residual network, runs max-flow, decomposes it
//! into paths, balances ants across those paths, then simulates the
//! turns. Formatting is left to the caller since it needs the graph
//! for room names.

use crate::graph::paths::{reconstruct_paths, Path};
use crate::graph::residual::ResidualNetwork;
use crate::graph::{flow, Graph};
use crate::scheduling::{balance_ants, simulate_turns, Move};
use crate::{Error, Result};
use tracing::info;

/// Run the full pipeline and return the simulated turns.
///
/// Returns [`Error::NoPath`] if the extractor finds zero vertex-disjoint
/// paths between start and end.
pub fn solve(graph: &Graph, ants: u32) -> Result<Vec<Vec<Move>>> {
    let mut residual = ResidualNetwork::build(graph)?;
    flow::edmonds_karp(&mut residual.net, residual.source, residual.sink, None);

    let mut paths = reconstruct_paths(graph, &mut residual);
    if paths.is_empty() {
        return Err(Error::NoPath);
    }
    paths.sort_by_key(Path::len);

    let lengths: Vec<usize> = paths.iter().map(Path::len).collect();
    let balance = balance_ants(&lengths, ants);
    info!(
        paths = paths.len(),
        makespan = balance.makespan,
        "extracted paths and balanced ants"
    );

    Ok(simulate_turns(&paths, &balance.ants_per_path))
}
