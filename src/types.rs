//! Common types shared across the core pipeline

use petgraph::graph::NodeIndex;

/// Identifier for a room, shared by the graph model and the residual
/// network. Backed by `petgraph`'s arena index, so rooms live in a
/// `Vec`-backed graph rather than behind owned cyclic references (see
/// DESIGN.md for the arena rationale).
pub type RoomId = NodeIndex<u32>;

/// Identifier for an ant, `1..=N`.
pub type AntId = u32;
