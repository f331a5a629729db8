//! Reachability search behind the general move rule.
//!
//! A move `start -> end` is legal when `end` can be reached through a chain
//! of elementary steps. Every intermediate square is treated as if the piece
//! stood there and expanded with fresh steps, so a chain may turn corners
//! (a rook going (0,0) -> (0,7) -> (7,7) is one legal move). Intermediate
//! squares must be empty; only the final square may hold an enemy piece.

use std::collections::{HashSet, VecDeque};

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::legal_move_validator::MoveValidator;
use crate::portals::portal_system::PortalSystem;

pub fn bfs_validate_move(
    validator: &MoveValidator,
    kind: &PieceKind,
    start: Position,
    end: Position,
    color: Color,
    board: &BoardState,
    portals: &PortalSystem,
) -> bool {
    if !board.is_in_bounds(start) || !board.is_in_bounds(end) {
        return false;
    }
    if matches!(board.piece_at(end), Some(piece) if piece.color == color) {
        return false;
    }

    let teleports = validator.is_teleporter(kind);
    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return true;
        }

        // Teleporters may hop through an open portal; the color gate is not
        // consulted here.
        if teleports
            && portals.is_portal_move(current, end)
            && !portals.is_portal_in_cooldown(current, end)
            && visited.insert(end)
        {
            queue.push_back(end);
        }

        for next in validator.move_edges(kind, current, color, board) {
            if !board.is_in_bounds(next) || visited.contains(&next) {
                continue;
            }
            if !board.is_empty_at(next) && next != end {
                continue;
            }
            visited.insert(next);
            queue.push_back(next);
        }
    }

    false
}
