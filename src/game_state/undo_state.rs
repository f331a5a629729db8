use crate::game_state::chess_types::{Piece, Position};

/// Single history entry produced by every committed move (a teleport adds a
/// second entry for the portal leg) and consumed in LIFO order by undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub start: Position,
    pub end: Position,
    /// Piece as it stood on `start`; a promoted pawn is recorded as a pawn.
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    /// Where the captured piece stood. Equals `end` except for en passant.
    pub captured_at: Position,
    /// Rook relocation `(from, to)` performed by castling.
    pub rook_move: Option<(Position, Position)>,
}

impl MoveRecord {
    pub fn new(
        start: Position,
        end: Position,
        moved_piece: Piece,
        captured_piece: Option<Piece>,
    ) -> Self {
        Self {
            start,
            end,
            moved_piece,
            captured_piece,
            captured_at: end,
            rook_move: None,
        }
    }
}
