//! Residual network builder
//!
//! Transforms a validated [`Graph`] into a node-split flow network:
//! each room becomes an `r_in` / `r_out` pair joined by a capacity
//! edge (1 for intermediate rooms, [`INF`] for start/end), and every
//! undirected link becomes two capacity-1 directed halves.
//!
//! Determinism contract (binding): rooms are visited in lexicographic
//! name order to assign ids `0..n`, and each room's neighbors are
//! inserted in lexicographic name order too. Everything downstream —
//! which augmenting paths Edmonds-Karp finds, which flow the
//! reconstructor decomposes into which paths — follows from this one
//! ordering choice.

use super::flow::FlowNetwork;
use super::Graph;
use crate::{Result, RoomId};

/// Capacity sentinel for start/end rooms, safely larger than any
/// achievable flow: max flow is bounded by `min(deg(start), deg(end))
/// <= room_count`, so any constant `>= room_count + 1` is safe. A
/// fixed large constant is simpler than computing the bound per-graph.
pub const INF: i64 = 1_000_000;

/// A built residual network plus the bookkeeping needed to map its
/// flat node indices back to rooms.
pub struct ResidualNetwork {
    /// The underlying flow network (2 * room_count nodes)
    pub net: FlowNetwork,
    /// `start_out` in the flat node space
    pub source: usize,
    /// `end_in` in the flat node space
    pub sink: usize,
    /// Rooms sorted by name; `ordered_rooms[i]` has `r_in = 2i`, `r_out = 2i+1`
    pub ordered_rooms: Vec<RoomId>,
    /// Maps a flat node index back to the room it belongs to
    pub node_room: Vec<RoomId>,
}

impl ResidualNetwork {
    /// `r_in` node index for the room at sorted position `idx`
    pub fn room_in(idx: usize) -> usize {
        2 * idx
    }

    /// `r_out` node index for the room at sorted position `idx`
    pub fn room_out(idx: usize) -> usize {
        2 * idx + 1
    }

    /// Build the residual network for a validated graph.
    pub fn build(graph: &Graph) -> Result<Self> {
        graph.validate_endpoints()?;
        let start = graph.start().expect("validated above");
        let end = graph.end().expect("validated above");

        let mut ordered_rooms: Vec<RoomId> = graph.room_ids().collect();
        ordered_rooms.sort_by(|a, b| graph.room(*a).name.cmp(&graph.room(*b).name));

        let index_of: std::collections::HashMap<RoomId, usize> = ordered_rooms
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i))
            .collect();

        let n = ordered_rooms.len();
        let mut net = FlowNetwork::new(2 * n);
        let mut node_room = vec![RoomId::new(0); 2 * n];

        for (i, &room_id) in ordered_rooms.iter().enumerate() {
            node_room[Self::room_in(i)] = room_id;
            node_room[Self::room_out(i)] = room_id;

            let cap = if room_id == start || room_id == end {
                INF
            } else {
                1
            };
            net.add_edge(Self::room_in(i), Self::room_out(i), cap);

            for neighbor in graph.sorted_neighbors(room_id) {
                let j = index_of[&neighbor];
                net.add_edge(Self::room_out(i), Self::room_in(j), 1);
            }
        }

        let source = Self::room_out(index_of[&start]);
        let sink = Self::room_in(index_of[&end]);

        Ok(Self {
            net,
            source,
            sink,
            ordered_rooms,
            node_room,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn triangle() -> Graph {
        let mut g = Graph::new();
        for name in ["start", "a", "end"] {
            g.add_room(name, 0, 0).unwrap();
        }
        g.add_link("start", "a").unwrap();
        g.add_link("a", "end").unwrap();
        g.mark_start("start").unwrap();
        g.mark_end("end").unwrap();
        g
    }

    #[test]
    fn intermediate_rooms_get_unit_capacity() {
        let g = triangle();
        let residual = ResidualNetwork::build(&g).unwrap();
        // "a" is the only intermediate room; find its split edge.
        let a_idx = residual
            .ordered_rooms
            .iter()
            .position(|&id| g.room(id).name == "a")
            .unwrap();
        let edge = residual
            .net
            .edge_between(ResidualNetwork::room_in(a_idx), ResidualNetwork::room_out(a_idx))
            .unwrap();
        assert_eq!(residual.net.capacity(edge), 1);
    }

    #[test]
    fn start_and_end_get_inf_capacity() {
        let g = triangle();
        let residual = ResidualNetwork::build(&g).unwrap();
        let start_idx = residual
            .ordered_rooms
            .iter()
            .position(|&id| g.room(id).name == "start")
            .unwrap();
        let edge = residual
            .net
            .edge_between(
                ResidualNetwork::room_in(start_idx),
                ResidualNetwork::room_out(start_idx),
            )
            .unwrap();
        assert_eq!(residual.net.capacity(edge), INF);
    }

    #[test]
    fn node_count_is_twice_room_count() {
        let g = triangle();
        let residual = ResidualNetwork::build(&g).unwrap();
        assert_eq!(residual.net.num_nodes, 2 * g.room_count());
    }
}
