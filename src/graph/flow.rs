//! Max-flow solver — Edmonds-Karp
//!
//! Repeated shortest-augmenting-path BFS over the residual graph.
//! Chosen over a push-relabel style because BFS-order augmentation is
//! the cheapest way to make the result deterministic: given edges
//! inserted in a fixed order (the residual builder's job), visiting
//! `adj[u]` in that same order during BFS makes the sequence of
//! augmenting paths — and therefore the final flow decomposition —
//! fully reproducible.

use std::collections::VecDeque;
use tracing::{debug, info};

/// One half of a residual edge pair.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlowEdge {
    /// Destination node
    pub to: usize,
    /// Capacity of this half-edge
    pub capacity: i64,
    /// Current flow on this half-edge
    pub flow: i64,
    /// Index of the paired reverse half-edge
    pub rev: usize,
}

/// A flow network: a flat node space plus forward/reverse residual
/// edge pairs, the transient structure the solver augments in place.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    /// Number of nodes
    pub num_nodes: usize,
    pub(crate) adj: Vec<Vec<usize>>,
    pub(crate) edges: Vec<FlowEdge>,
}

impl FlowNetwork {
    /// Create an empty network with `num_nodes` nodes
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            adj: vec![Vec::new(); num_nodes],
            edges: Vec::new(),
        }
    }

    /// Add a capacity edge `from -> to`, plus its zero-capacity reverse
    /// pair for residual cancellation.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: i64) {
        let forward_idx = self.edges.len();
        let reverse_idx = forward_idx + 1;

        self.edges.push(FlowEdge {
            to,
            capacity,
            flow: 0,
            rev: reverse_idx,
        });
        self.adj[from].push(forward_idx);

        self.edges.push(FlowEdge {
            to: from,
            capacity: 0,
            flow: 0,
            rev: forward_idx,
        });
        self.adj[to].push(reverse_idx);
    }

    /// Residual capacity of a half-edge: `capacity - flow`
    pub fn residual(&self, edge_idx: usize) -> i64 {
        self.edges[edge_idx].capacity - self.edges[edge_idx].flow
    }

    /// Configured capacity of a half-edge
    pub fn capacity(&self, edge_idx: usize) -> i64 {
        self.edges[edge_idx].capacity
    }

    /// Current flow on a half-edge
    pub fn flow_of(&self, edge_idx: usize) -> i64 {
        self.edges[edge_idx].flow
    }

    /// Destination node of a half-edge
    pub fn to(&self, edge_idx: usize) -> usize {
        self.edges[edge_idx].to
    }

    /// Push `amount` of flow along a half-edge, mirroring it onto the
    /// paired reverse half-edge.
    pub fn push_flow(&mut self, edge_idx: usize, amount: i64) {
        self.edges[edge_idx].flow += amount;
        let rev = self.edges[edge_idx].rev;
        self.edges[rev].flow -= amount;
    }

    /// First forward half-edge between two nodes, if any (test/debug helper)
    pub fn edge_between(&self, from: usize, to: usize) -> Option<usize> {
        self.adj[from].iter().copied().find(|&e| self.edges[e].to == to)
    }
}

/// Result of running the max-flow solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxFlowResult {
    /// Total flow pushed from source to sink
    pub total_flow: i64,
    /// Number of augmenting-path iterations performed
    pub iterations: usize,
}

/// Find the maximum flow from `source` to `sink` using Edmonds–Karp.
///
/// `max_paths`, if set, stops augmentation early once `total_flow`
/// reaches that many units — used by callers that only want a bounded
/// number of vertex-disjoint paths.
pub fn edmonds_karp(
    net: &mut FlowNetwork,
    source: usize,
    sink: usize,
    max_paths: Option<usize>,
) -> MaxFlowResult {
    let n = net.num_nodes;
    let mut total_flow: i64 = 0;
    let mut iterations = 0usize;

    loop {
        let mut pred_edge: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        visited[source] = true;
        let mut queue = VecDeque::new();
        queue.push_back(source);

        let mut reached_sink = false;
        'bfs: while let Some(u) = queue.pop_front() {
            if u == sink {
                reached_sink = true;
                break 'bfs;
            }
            for &edge_idx in &net.adj[u] {
                if net.residual(edge_idx) <= 0 {
                    continue;
                }
                let v = net.to(edge_idx);
                if visited[v] {
                    continue;
                }
                visited[v] = true;
                pred_edge[v] = Some(edge_idx);
                if v == sink {
                    reached_sink = true;
                    break 'bfs;
                }
                queue.push_back(v);
            }
        }

        if !reached_sink {
            break;
        }

        // Reconstruct the augmenting path and find its bottleneck.
        let mut bottleneck = i64::MAX;
        let mut path_edges = Vec::new();
        let mut cur = sink;
        while cur != source {
            let edge_idx = pred_edge[cur].expect("BFS reached sink via a predecessor edge");
            bottleneck = bottleneck.min(net.residual(edge_idx));
            path_edges.push(edge_idx);
            // Walk back to the edge's origin via its reverse pair.
            let rev = net.edges[edge_idx].rev;
            cur = net.edges[rev].to;
        }

        for &edge_idx in &path_edges {
            net.push_flow(edge_idx, bottleneck);
        }
        total_flow += bottleneck;
        iterations += 1;
        debug!(iteration = iterations, bottleneck, total_flow, "augmented a path");

        if let Some(cap) = max_paths {
            if total_flow >= cap as i64 {
                break;
            }
        }
    }

    info!(total_flow, iterations, "max flow computed");
    MaxFlowResult { total_flow, iterations }
}
