//! Board-size-relative rule constants.
//!
//! Every rank or file the special rules depend on is derived from the board
//! size. On an 8x8 board these reduce to the classical values: pawns start on
//! ranks 1/6 and promote on 7/0, en passant is taken from ranks 4/3, the king
//! starts on file 4 and the rooks on files 0/7.

use crate::game_state::chess_types::Color;

/// Standard board size used by `GameConfig::standard`.
pub const STANDARD_BOARD_SIZE: i32 = 8;

/// Default name of the custom kind that may use portals mid-search.
pub const TELEPORTER_KIND: &str = "teleporter";

/// Home rank: rank 0 for white, the last rank for black.
#[inline]
pub const fn back_rank(color: Color, board_size: i32) -> i32 {
    match color {
        Color::White => 0,
        Color::Black => board_size - 1,
    }
}

/// Rank from which a pawn may advance two squares.
#[inline]
pub const fn pawn_start_rank(color: Color, board_size: i32) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => board_size - 2,
    }
}

/// Far rank on which a pawn promotes.
#[inline]
pub const fn promotion_rank(color: Color, board_size: i32) -> i32 {
    back_rank(color.opposite(), board_size)
}

/// Rank a pawn must stand on to capture en passant: the rank an opposing
/// pawn lands on after its double step.
#[inline]
pub const fn en_passant_rank(color: Color, board_size: i32) -> i32 {
    match color {
        Color::White => board_size - 4,
        Color::Black => 3,
    }
}

/// File the king must start on to castle.
#[inline]
pub const fn king_home_file(board_size: i32) -> i32 {
    board_size / 2
}

/// File of the castling rook for the given side.
#[inline]
pub const fn castling_rook_file(kingside: bool, board_size: i32) -> i32 {
    if kingside {
        board_size - 1
    } else {
        0
    }
}
