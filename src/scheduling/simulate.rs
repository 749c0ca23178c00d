//! Turn simulator
//!
//! Replays a fixed path/ant assignment turn by turn under room
//! exclusivity: each intermediate room holds at most one ant at a
//! time, start and end are unconstrained, and every ant takes exactly
//! one step per turn once it has entered the farm.
//!
//! Each path keeps its own line of occupied intermediate rooms plus a
//! FIFO of ants still waiting to enter it. Every turn runs in two
//! passes per path:
//!
//! 1. **Move** — advance already-entered ants one room closer to
//!    `end`, iterating *back to front* (closest to `end` first). This
//!    order is load-bearing: processing front-to-back would let an ant
//!    vacate a room and the ant behind it "leapfrog" into it in the
//!    same turn, advancing two rooms in one step.
//! 2. **Dispatch** — if the first intermediate room is now free, pull
//!    the next waiting ant onto the path.
//!
//! A path with no intermediate rooms (a direct `start`-`end` link) has
//! nothing to move; dispatch alone finishes one waiting ant per turn.

use crate::graph::paths::Path;
use crate::{AntId, RoomId};
use tracing::{debug, warn};

/// One ant's move in a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// The ant making this move
    pub ant: AntId,
    /// The room it moves into
    pub room: RoomId,
}

struct PathState {
    /// `rooms[1 ..= rooms.len()-2]`, i.e. the intermediate rooms only
    intermediate: Vec<RoomId>,
    end: RoomId,
    /// `occupancy[i] == Some(ant)` means `intermediate[i]` holds `ant`
    occupancy: Vec<Option<AntId>>,
    waiting: std::collections::VecDeque<AntId>,
}

impl PathState {
    fn new(path: &Path, ants: &[AntId]) -> Self {
        let intermediate: Vec<RoomId> = if path.rooms.len() > 2 {
            path.rooms[1..path.rooms.len() - 1].to_vec()
        } else {
            Vec::new()
        };
        let occupancy = vec![None; intermediate.len()];
        PathState {
            intermediate,
            end: *path.rooms.last().expect("non-empty path"),
            occupancy,
            waiting: ants.iter().copied().collect(),
        }
    }

    fn is_idle(&self) -> bool {
        self.waiting.is_empty() && self.occupancy.iter().all(Option::is_none)
    }

    /// Phase 1: advance already-entered ants, back to front. Returns
    /// this path's moves for the turn.
    fn advance(&mut self, moves: &mut Vec<Move>) {
        let last = self.occupancy.len().saturating_sub(1);
        for i in (0..self.occupancy.len()).rev() {
            let Some(ant) = self.occupancy[i] else { continue };
            if i == last {
                self.occupancy[i] = None;
                moves.push(Move { ant, room: self.end });
            } else if self.occupancy[i + 1].is_none() {
                self.occupancy[i + 1] = Some(ant);
                self.occupancy[i] = None;
                moves.push(Move { ant, room: self.intermediate[i + 1] });
            }
        }
    }

    /// Phase 2: dispatch the next waiting ant if the path can take one.
    fn dispatch(&mut self, moves: &mut Vec<Move>) {
        if self.intermediate.is_empty() {
            if let Some(ant) = self.waiting.pop_front() {
                moves.push(Move { ant, room: self.end });
            }
            return;
        }
        if self.occupancy[0].is_none() {
            if let Some(ant) = self.waiting.pop_front() {
                self.occupancy[0] = Some(ant);
                moves.push(Move { ant, room: self.intermediate[0] });
            }
        }
    }
}

/// Simulate turn-by-turn movement of `ants_per_path[i]` ants along
/// `paths[i]`, returning one `Vec<Move>` per turn. Ants are numbered
/// `1..=N` in path order, then dispatch order within a path.
///
/// `paths` and `ants_per_path` must be the same length and in the same
/// order `balance_ants` was called with.
pub fn simulate_turns(paths: &[Path], ants_per_path: &[u32]) -> Vec<Vec<Move>> {
    assert_eq!(paths.len(), ants_per_path.len());

    let total_ants: u32 = ants_per_path.iter().sum();
    if total_ants == 0 || paths.is_empty() {
        return Vec::new();
    }

    let mut next_id: AntId = 1;
    let mut states: Vec<PathState> = paths
        .iter()
        .zip(ants_per_path)
        .map(|(path, &count)| {
            let ants: Vec<AntId> = (next_id..next_id + count).collect();
            next_id += count;
            PathState::new(path, &ants)
        })
        .collect();

    let mut turns = Vec::new();
    let mut finished = 0u32;
    // Generous safety bound: no correct assignment needs more turns
    // than the longest path's length plus the total ant count.
    let max_turns = paths.iter().map(|p| p.len()).max().unwrap_or(0) + total_ants as usize + 1;

    while finished < total_ants {
        let mut moves = Vec::new();
        for state in &mut states {
            state.advance(&mut moves);
        }
        for state in &mut states {
            state.dispatch(&mut moves);
        }
        let reached_end = moves.iter().filter(|m| states.iter().any(|s| s.end == m.room)).count();
        finished += reached_end as u32;

        if moves.is_empty() {
            warn!("turn produced no moves while ants remain; aborting simulation");
            break;
        }
        debug!(turn = turns.len() + 1, moves = moves.len(), "turn simulated");
        turns.push(moves);

        if turns.len() > max_turns {
            warn!(max_turns, "simulation exceeded its safety bound, aborting");
            break;
        }
        if states.iter().all(PathState::is_idle) {
            break;
        }
    }

    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::NodeIndex;

    fn path(rooms: &[u32]) -> Path {
        Path { rooms: rooms.iter().map(|&i| NodeIndex::new(i as usize)).collect() }
    }

    #[test]
    fn single_ant_direct_path() {
        // start-end direct link, one ant.
        let p = path(&[0, 1]);
        let turns = simulate_turns(&[p], &[1]);
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].len(), 1);
    }

    #[test]
    fn two_ants_one_intermediate_room() {
        // start-a-end, two ants -> 3 turns.
        let p = path(&[0, 1, 2]);
        let turns = simulate_turns(&[p], &[2]);
        assert_eq!(turns.len(), 3);
        let total_moves: usize = turns.iter().map(Vec::len).sum();
        assert_eq!(total_moves, 4); // each ant takes 2 steps
    }

    #[test]
    fn no_room_holds_two_ants_at_once() {
        let p = path(&[0, 1, 2, 3]);
        let turns = simulate_turns(&[p], &[5]);
        let intermediate = [NodeIndex::new(1), NodeIndex::new(2)];
        for room in intermediate {
            for t in &turns {
                let occupants: Vec<_> = t.iter().filter(|m| m.room == room).collect();
                assert!(occupants.len() <= 1, "room {room:?} double-occupied in a turn");
            }
        }
    }

    #[test]
    fn every_ant_eventually_reaches_end() {
        let p = path(&[0, 1, 2]);
        let turns = simulate_turns(&[p], &[4]);
        let end = NodeIndex::new(2);
        let arrivals: std::collections::HashSet<AntId> =
            turns.iter().flatten().filter(|m| m.room == end).map(|m| m.ant).collect();
        assert_eq!(arrivals.len(), 4);
    }

    #[test]
    fn parallel_paths_finish_together_near_makespan() {
        let p1 = path(&[0, 1, 2, 3, 4]); // length 4
        let p2 = path(&[0, 5, 4]); // length 2
        let turns = simulate_turns(&[p1, p2], &[5, 2]);
        // Makespan should not blow up past length + ants on the busiest path.
        assert!(turns.len() <= 4 - 1 + 5);
    }
}
