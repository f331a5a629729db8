use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Position;
use crate::moves::move_edges::trace_ray;

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Diagonal rays from `from`, stopping on (and including) the first occupant.
pub fn bishop_edges(from: Position, board: &BoardState) -> Vec<Position> {
    let mut edges = Vec::with_capacity(2 * board.board_size() as usize);
    for (d_file, d_rank) in BISHOP_DIRECTIONS {
        trace_ray(from, d_file, d_rank, board, &mut edges);
    }
    edges
}
