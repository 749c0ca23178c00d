//! Output formatter
//!
//! Renders one turn of [`Move`]s as a single space-separated line of
//! `L<id>-<room>` tokens, in the order the simulator produced them —
//! this module does not reorder or deduplicate anything.

use crate::graph::Graph;
use crate::scheduling::Move;

/// Render one turn's moves as a single line with no trailing newline.
pub fn format_turn(graph: &Graph, moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| format!("L{}-{}", m.ant, graph.room(m.room).name))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render every turn as its own line, in order.
pub fn format_turns(graph: &Graph, turns: &[Vec<Move>]) -> Vec<String> {
    turns.iter().map(|moves| format_turn(graph, moves)).collect()
}
