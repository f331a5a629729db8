use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_edges::step_if_enterable;

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn king_edges(from: Position, color: Color, board: &BoardState) -> Vec<Position> {
    KING_OFFSETS
        .iter()
        .filter_map(|&(d_file, d_rank)| step_if_enterable(from, d_file, d_rank, color, board))
        .collect()
}
