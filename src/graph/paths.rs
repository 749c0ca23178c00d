//! Path reconstructor
//!
//! Decomposes the max-flow solution held in a [`ResidualNetwork`] into
//! ordered room sequences, one per unit of flow, by walking the
//! flow-carrying edges in a fixed, deterministic order.

use super::residual::ResidualNetwork;
use super::Graph;
use crate::RoomId;
use tracing::warn;

/// An ordered sequence of rooms from start to end.
#[derive(Debug, Clone)]
pub struct Path {
    /// Rooms in traversal order, `rooms[0] == start`, `rooms.last() == end`
    pub rooms: Vec<RoomId>,
}

impl Path {
    /// Number of edges in the path (`rooms.len() - 1`)
    pub fn len(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    /// A path with no rooms at all is meaningless; this only guards
    /// against the defensive empty-trace case.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Per-node outgoing half-edges sorted by destination room name, ties
/// broken by half-edge index.
fn sorted_outs(graph: &Graph, residual: &ResidualNetwork) -> Vec<Vec<usize>> {
    let net = &residual.net;
    (0..net.num_nodes)
        .map(|u| {
            let mut outs: Vec<usize> = net.adj[u].clone();
            outs.sort_by(|&a, &b| {
                let room_a = &graph.room(residual.node_room[net.to(a)]).name;
                let room_b = &graph.room(residual.node_room[net.to(b)]).name;
                room_a.cmp(room_b).then(a.cmp(&b))
            });
            outs
        })
        .collect()
}

/// Consume the first flow-carrying half-edge out of `u` in sorted
/// order, cancelling one unit of flow on it, and return its
/// destination node. `None` if `u` has no remaining flow-carrying
/// outgoing half-edge.
fn consume(residual: &mut ResidualNetwork, outs: &[Vec<usize>], u: usize) -> Option<usize> {
    let edge_idx = outs[u].iter().copied().find(|&e| residual.net.flow_of(e) > 0)?;
    residual.net.push_flow(edge_idx, -1);
    Some(residual.net.to(edge_idx))
}

/// Decompose the flow on `residual` into vertex-disjoint, edge-disjoint
/// start→end paths. Returns an empty `Vec` on zero flow (`NoPath`).
pub fn reconstruct_paths(graph: &Graph, residual: &mut ResidualNetwork) -> Vec<Path> {
    let outs = sorted_outs(graph, residual);
    let start = residual.node_room[residual.source];
    let end = residual.node_room[residual.sink];

    let mut paths = Vec::new();
    while let Some(first) = consume(residual, &outs, residual.source) {
        let mut rooms = vec![start];
        let mut cur = first;
        let mut ok = true;
        loop {
            let room = residual.node_room[cur];
            if room == end {
                break;
            }
            rooms.push(room);

            let Some(r_out) = consume(residual, &outs, cur) else {
                warn!("flow trace broke mid-path at the room-capacity edge");
                ok = false;
                break;
            };
            let Some(next) = consume(residual, &outs, r_out) else {
                warn!("flow trace broke mid-path at an original-edge half");
                ok = false;
                break;
            };
            cur = next;
        }
        if !ok {
            break;
        }
        rooms.push(end);
        paths.push(Path { rooms });
    }
    paths
}
