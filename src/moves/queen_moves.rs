use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Position;
use crate::moves::bishop_moves::bishop_edges;
use crate::moves::rook_moves::rook_edges;

#[inline]
pub fn queen_edges(from: Position, board: &BoardState) -> Vec<Position> {
    let mut edges = rook_edges(from, board);
    edges.extend(bishop_edges(from, board));
    edges
}
