//! Graph model
//!
//! Rooms live in an arena — `petgraph`'s `Vec`-backed undirected graph
//! — indexed by [`RoomId`]. Neighbor lists hold ids, not owned
//! references, which is what lets the room graph be cyclic (`a`
//! neighbors `b`, `b` neighbors `a`) without reference-counted or
//! unsafe cells.
//!
//! ## Example
//!
//! ```rust
//! use lemin_core::graph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_room("start", 0, 0).unwrap();
//! g.add_room("end", 1, 0).unwrap();
//! g.add_link("start", "end").unwrap();
//! g.mark_start("start").unwrap();
//! g.mark_end("end").unwrap();
//! assert_eq!(g.room_count(), 2);
//! ```

pub mod flow;
pub mod paths;
pub mod residual;

use crate::{Error, Result, RoomId};
use petgraph::graph::UnGraph;
use std::collections::HashMap;

/// A named room with coordinates used only by external visualizers.
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique room name
    pub name: String,
    /// X coordinate (visualizer-only)
    pub x: i32,
    /// Y coordinate (visualizer-only)
    pub y: i32,
}

/// The room graph: an arena of rooms, symmetric links between them,
/// and a distinguished start/end pair.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: UnGraph<Room, (), u32>,
    by_name: HashMap<String, RoomId>,
    start: Option<RoomId>,
    end: Option<RoomId>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            inner: UnGraph::default(),
            by_name: HashMap::new(),
            start: None,
            end: None,
        }
    }

    /// Add a room. Fails with [`Error::InvalidRoom`] if the name is
    /// already present.
    pub fn add_room(&mut self, name: impl Into<String>, x: i32, y: i32) -> Result<RoomId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(Error::invalid_room(format!("duplicate room {name}")));
        }
        let id = self.inner.add_node(Room { name: name.clone(), x, y });
        self.by_name.insert(name, id);
        Ok(id)
    }

    /// Add a symmetric, capacity-1 link between two existing rooms.
    /// Fails if either endpoint is unknown, the endpoints are equal, or
    /// the link already exists.
    pub fn add_link(&mut self, a: &str, b: &str) -> Result<()> {
        let a_id = self
            .room_id(a)
            .ok_or_else(|| Error::invalid_link(format!("unknown room {a}")))?;
        let b_id = self
            .room_id(b)
            .ok_or_else(|| Error::invalid_link(format!("unknown room {b}")))?;
        if a_id == b_id {
            return Err(Error::invalid_link(format!("self-link on {a}")));
        }
        if self.inner.find_edge(a_id, b_id).is_some() {
            return Err(Error::invalid_link(format!("duplicate link {a}-{b}")));
        }
        self.inner.add_edge(a_id, b_id, ());
        Ok(())
    }

    /// Mark the named room as start. Fails with [`Error::MultipleStart`]
    /// if a start was already marked.
    pub fn mark_start(&mut self, name: &str) -> Result<()> {
        if self.start.is_some() {
            return Err(Error::MultipleStart);
        }
        let id = self
            .room_id(name)
            .ok_or_else(|| Error::invalid_room(format!("unknown room {name}")))?;
        self.start = Some(id);
        Ok(())
    }

    /// Mark the named room as end. Fails with [`Error::MultipleEnd`] if
    /// an end was already marked.
    pub fn mark_end(&mut self, name: &str) -> Result<()> {
        if self.end.is_some() {
            return Err(Error::MultipleEnd);
        }
        let id = self
            .room_id(name)
            .ok_or_else(|| Error::invalid_room(format!("unknown room {name}")))?;
        self.end = Some(id);
        Ok(())
    }

    /// Look up a room id by name
    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a room by id
    pub fn room(&self, id: RoomId) -> &Room {
        &self.inner[id]
    }

    /// The marked start room, if any
    pub fn start(&self) -> Option<RoomId> {
        self.start
    }

    /// The marked end room, if any
    pub fn end(&self) -> Option<RoomId> {
        self.end
    }

    /// Number of rooms in the graph
    pub fn room_count(&self) -> usize {
        self.inner.node_count()
    }

    /// All room ids, in arbitrary (arena) order
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.inner.node_indices()
    }

    /// Neighbors of a room, sorted by neighbor name. This is the
    /// deterministic order the residual network builder relies on.
    pub fn sorted_neighbors(&self, id: RoomId) -> Vec<RoomId> {
        let mut neighbors: Vec<RoomId> = self.inner.neighbors(id).collect();
        neighbors.sort_by(|a, b| self.room(*a).name.cmp(&self.room(*b).name));
        neighbors
    }

    /// Whether a room is neither start nor end
    pub fn is_intermediate(&self, id: RoomId) -> bool {
        Some(id) != self.start && Some(id) != self.end
    }

    /// Validate that start and end are both marked. Called by the
    /// parser once input has been fully consumed.
    pub fn validate_endpoints(&self) -> Result<()> {
        let start = self.start.ok_or(Error::MissingStart)?;
        let end = self.end.ok_or(Error::MissingEnd)?;
        debug_assert_ne!(start, end, "parser must reject start == end rooms");
        Ok(())
    }
}
