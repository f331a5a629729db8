//! Pawn elementary steps.
//!
//! Only pushes and diagonal captures live here. En passant and promotion are
//! decided by the validator and applied at commit time.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::{Color, Position};

pub fn pawn_edges(from: Position, color: Color, board: &BoardState) -> Vec<Position> {
    let mut edges = Vec::with_capacity(4);
    let forward = color.forward();

    let one = from.offset(0, forward);
    if board.is_in_bounds(one) && board.is_empty_at(one) {
        edges.push(one);

        if from.rank == pawn_start_rank(color, board.board_size()) {
            let two = from.offset(0, 2 * forward);
            if board.is_in_bounds(two) && board.is_empty_at(two) {
                edges.push(two);
            }
        }
    }

    for d_file in [-1, 1] {
        let target = from.offset(d_file, forward);
        if !board.is_in_bounds(target) {
            continue;
        }
        if matches!(board.piece_at(target), Some(piece) if piece.color != color) {
            edges.push(target);
        }
    }

    edges
}
