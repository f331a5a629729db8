use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_edges::step_if_enterable;

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The eight knight jumps landing on an empty or enemy-occupied square.
pub fn knight_edges(from: Position, color: Color, board: &BoardState) -> Vec<Position> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(d_file, d_rank)| step_if_enterable(from, d_file, d_rank, color, board))
        .collect()
}
