use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Position;
use crate::moves::move_edges::trace_ray;

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Orthogonal rays from `from`. Each ray includes the first occupied square
/// it meets, whatever its color.
pub fn rook_edges(from: Position, board: &BoardState) -> Vec<Position> {
    let mut edges = Vec::with_capacity(4 * board.board_size() as usize);
    for (d_file, d_rank) in ROOK_DIRECTIONS {
        trace_ray(from, d_file, d_rank, board, &mut edges);
    }
    edges
}
