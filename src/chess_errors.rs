//! Errors used throughout the rule engine.
//!
//! `ChessErrors` is the single error type returned by board mutation, commit
//! and undo. Move legality itself is never an error: `is_valid_move` answers
//! with a plain `bool` so callers can simply try another move.
//!
//! Usage guidelines:
//! - `SquareOutOfRange` and `InvalidPlacement` reject positions outside the
//!   board; nothing is ever clamped.
//! - `IllegalMove` is the commit-time echo of a failed legality check and is
//!   recoverable by choosing a different move.
//! - `EmptyStartSquare` signals a contract violation by the caller (committing
//!   from a square with no piece) and should be treated as a bug.
//! - `UndoRestorationFailed` leaves the popped record back on the history.

use thiserror::Error;

use crate::game_state::chess_types::Position;
use crate::game_state::undo_state::MoveRecord;

/// Unified error type for the rule engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Boards must have at least one rank and file.
    #[error("invalid board size {0} (must be at least 1)")]
    InvalidBoardSize(i32),

    /// A read was attempted outside `[0, board_size)`.
    #[error("square {0} is outside the board")]
    SquareOutOfRange(Position),

    /// A piece placement targeted a square outside the board.
    #[error("cannot place a piece on {0}: outside the board")]
    InvalidPlacement(Position),

    /// The requested move failed validation.
    #[error("illegal move from {start} to {end}")]
    IllegalMove { start: Position, end: Position },

    /// A commit was attempted from a square holding no piece.
    #[error("no piece on start square {0}")]
    EmptyStartSquare(Position),

    /// Pawns may only promote to queen, rook, bishop or knight.
    #[error("invalid promotion choice `{0}`")]
    InvalidPromotion(String),

    /// Undo could not put the board back; the record was kept on the history.
    #[error("could not restore move {} -> {}", .0.start, .0.end)]
    UndoRestorationFailed(MoveRecord),
}

/// Result alias used across the crate.
pub type ChessResult<T> = Result<T, ChessErrors>;
