//! Castling and en passant predicates.
//!
//! Both predicates assume the validator already checked that `start` holds
//! the mover and that `end` is on the board and not friendly.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{
    back_rank, castling_rook_file, en_passant_rank, king_home_file,
};
use crate::game_state::chess_types::{Color, PieceKind, Position};

/// King two files sideways toward a rook of its color on the same rank.
/// Squares the king crosses are not tested for attacks.
pub fn is_castling_move(start: Position, end: Position, color: Color, board: &BoardState) -> bool {
    let size = board.board_size();
    if start != Position::new(king_home_file(size), back_rank(color, size)) {
        return false;
    }

    let kingside = end.file > start.file;
    let rook_pos = Position::new(castling_rook_file(kingside, size), start.rank);
    match board.piece_at(rook_pos) {
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == color => {}
        _ => return false,
    }

    let step = if kingside { 1 } else { -1 };
    let mut file = start.file + step;
    while file != rook_pos.file {
        if !board.is_empty_at(Position::new(file, start.rank)) {
            return false;
        }
        file += step;
    }

    true
}

/// Where the castling rook goes: the square the king crossed.
pub fn castling_rook_move(start: Position, end: Position, board_size: i32) -> (Position, Position) {
    let kingside = end.file > start.file;
    let from = Position::new(castling_rook_file(kingside, board_size), start.rank);
    let to = Position::new(if kingside { end.file - 1 } else { end.file + 1 }, start.rank);
    (from, to)
}

/// Diagonal pawn step onto an empty square beside which an enemy pawn stands.
pub fn is_en_passant_move(start: Position, end: Position, color: Color, board: &BoardState) -> bool {
    if start.rank != en_passant_rank(color, board.board_size()) {
        return false;
    }
    if (end.file - start.file).abs() != 1 || end.rank != start.rank + color.forward() {
        return false;
    }
    if !board.is_in_bounds(end) || !board.is_empty_at(end) {
        return false;
    }

    matches!(
        board.piece_at(en_passant_capture_square(start, end)),
        Some(pawn) if pawn.kind == PieceKind::Pawn && pawn.color != color
    )
}

/// Square of the pawn removed by an en passant capture.
#[inline]
pub fn en_passant_capture_square(start: Position, end: Position) -> Position {
    Position::new(end.file, start.rank)
}
