//! Elementary step generation, dispatched on piece kind.
//!
//! An elementary step is a single application of a kind's movement template
//! from one origin square. Chaining steps into a full move is the job of the
//! reachability search in `move_generation::reachability`.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::moves::bishop_moves::bishop_edges;
use crate::moves::custom_moves::CustomKinds;
use crate::moves::king_moves::king_edges;
use crate::moves::knight_moves::knight_edges;
use crate::moves::pawn_moves::pawn_edges;
use crate::moves::queen_moves::queen_edges;
use crate::moves::rook_moves::rook_edges;

/// Squares `kind` could reach from `from` in one elementary step, evaluated
/// as if the piece stood on `from`. Unregistered custom kinds yield nothing.
pub fn move_edges(
    kind: &PieceKind,
    from: Position,
    color: Color,
    board: &BoardState,
    custom: &CustomKinds,
) -> Vec<Position> {
    match kind {
        PieceKind::Pawn => pawn_edges(from, color, board),
        PieceKind::Knight => knight_edges(from, color, board),
        PieceKind::Bishop => bishop_edges(from, board),
        PieceKind::Rook => rook_edges(from, board),
        PieceKind::Queen => queen_edges(from, board),
        PieceKind::King => king_edges(from, color, board),
        PieceKind::Custom(name) => custom
            .get(name)
            .map(|template| template.edges(from, color, board))
            .unwrap_or_default(),
    }
}

/// Walks from `from` in direction `(d_file, d_rank)` until leaving the board,
/// pushing every square visited. The first occupied square is pushed too and
/// ends the ray.
pub(crate) fn trace_ray(
    from: Position,
    d_file: i32,
    d_rank: i32,
    board: &BoardState,
    out: &mut Vec<Position>,
) {
    let mut next = from.checked_offset(d_file, d_rank);
    while let Some(current) = next.filter(|pos| board.is_in_bounds(*pos)) {
        out.push(current);
        if !board.is_empty_at(current) {
            break;
        }
        next = current.checked_offset(d_file, d_rank);
    }
}

/// One fixed-offset step, kept only when it lands on the board on an empty
/// or enemy-occupied square.
pub(crate) fn step_if_enterable(
    from: Position,
    d_file: i32,
    d_rank: i32,
    color: Color,
    board: &BoardState,
) -> Option<Position> {
    let target = from.checked_offset(d_file, d_rank)?;
    if !board.is_in_bounds(target) {
        return None;
    }
    match board.piece_at(target) {
        Some(piece) if piece.color == color => None,
        _ => Some(target),
    }
}

#[cfg(test)]
mod tests {
    use super::move_edges;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::moves::custom_moves::CustomKinds;

    #[test]
    fn empty_board_edge_counts_per_kind() {
        let board = BoardState::new(8).expect("board");
        let custom = CustomKinds::default();
        let d4 = Position::new(3, 3);
        let table = [
            (PieceKind::Pawn, 1usize),
            (PieceKind::Knight, 8),
            (PieceKind::Bishop, 13),
            (PieceKind::Rook, 14),
            (PieceKind::Queen, 27),
            (PieceKind::King, 8),
            (PieceKind::from_name("wizard"), 0),
        ];

        for (kind, expected) in table {
            let edges = move_edges(&kind, d4, Color::White, &board, &custom);
            assert_eq!(edges.len(), expected, "edge count for {kind}");
        }
    }
}
