//! Check, checkmate and stalemate detection.
//!
//! All three questions are answered by asking the validator about concrete
//! moves, so they inherit the reachability semantics of the general rule:
//! a queen "attacks" every square it can reach through empty squares.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_validator::MoveValidator;
use crate::portals::portal_system::PortalSystem;

/// Whether `color`'s king can be taken by an enemy queen, rook, bishop,
/// knight or pawn. The first king found in rank/file scan order is used; no
/// king means no check.
pub fn is_in_check(
    board: &BoardState,
    portals: &PortalSystem,
    validator: &MoveValidator,
    color: Color,
) -> bool {
    let Some(king) = board.find_king(color) else {
        return false;
    };

    let attacker = color.opposite();
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker && piece.kind.gives_check())
        .any(|(from, piece)| {
            validator.is_valid_move(&piece.kind, from, king, attacker, board, portals)
        })
}

/// In check, and no own move leaves the king out of check. Candidate moves
/// are simulated on a cloned board as plain relocations.
pub fn is_checkmate(
    board: &BoardState,
    portals: &PortalSystem,
    validator: &MoveValidator,
    color: Color,
) -> bool {
    if !is_in_check(board, portals, validator, color) {
        return false;
    }

    for (start, piece) in board.pieces_of(color) {
        for end in board.all_positions() {
            if end == start {
                continue;
            }
            if !validator.is_valid_move(&piece.kind, start, end, color, board, portals) {
                continue;
            }

            let mut simulated = board.clone();
            simulated.take_piece(start);
            if simulated.set_square(end, Some(piece.clone())).is_err() {
                continue;
            }
            if !is_in_check(&simulated, portals, validator, color) {
                return false;
            }
        }
    }

    true
}

/// Not in check, and no own piece has any legal move.
pub fn is_stalemate(
    board: &BoardState,
    portals: &PortalSystem,
    validator: &MoveValidator,
    color: Color,
) -> bool {
    if is_in_check(board, portals, validator, color) {
        return false;
    }

    let size = board.board_size();
    for (start, piece) in board.pieces_of(color) {
        for d_rank in -size..=size {
            for d_file in -size..=size {
                if d_file == 0 && d_rank == 0 {
                    continue;
                }
                let end = start.offset(d_file, d_rank);
                if board.is_in_bounds(end)
                    && validator.is_valid_move(&piece.kind, start, end, color, board, portals)
                {
                    return false;
                }
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Position;

    fn pos(file: i32, rank: i32) -> Position {
        Position::new(file, rank)
    }

    fn setup(size: i32, pieces: &[(&str, Color, Position)]) -> BoardState {
        let mut board = BoardState::new(size).expect("board");
        for (kind, color, at) in pieces {
            board.place_piece(kind, *color, *at).expect("place");
        }
        board
    }

    #[test]
    fn kings_and_custom_pieces_never_give_check() {
        let board = setup(
            8,
            &[
                ("king", Color::White, pos(0, 0)),
                ("king", Color::Black, pos(1, 1)),
                ("teleporter", Color::Black, pos(0, 1)),
            ],
        );
        let validator = MoveValidator::default();
        assert!(!is_in_check(&board, &PortalSystem::default(), &validator, Color::White));
    }

    #[test]
    fn pawn_gives_check_diagonally() {
        let board = setup(
            8,
            &[
                ("king", Color::Black, pos(4, 4)),
                ("pawn", Color::White, pos(3, 3)),
            ],
        );
        let validator = MoveValidator::default();
        assert!(is_in_check(&board, &PortalSystem::default(), &validator, Color::Black));
        assert!(!is_in_check(&board, &PortalSystem::default(), &validator, Color::White));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = setup(8, &[("queen", Color::Black, pos(0, 7))]);
        let validator = MoveValidator::default();
        assert!(!is_in_check(&board, &PortalSystem::default(), &validator, Color::White));
        assert!(!is_checkmate(&board, &PortalSystem::default(), &validator, Color::White));
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemated() {
        // 2x2 board: the white king's only neighbours hold white pawns on
        // the last rank, which cannot move.
        let board = setup(
            2,
            &[
                ("king", Color::White, pos(0, 0)),
                ("pawn", Color::White, pos(0, 1)),
                ("pawn", Color::White, pos(1, 1)),
                ("pawn", Color::White, pos(1, 0)),
            ],
        );
        let validator = MoveValidator::default();
        let portals = PortalSystem::default();
        assert!(is_stalemate(&board, &portals, &validator, Color::White));
        assert!(!is_checkmate(&board, &portals, &validator, Color::White));
    }

    #[test]
    fn side_with_a_legal_move_is_not_stalemated() {
        let board = setup(8, &[("king", Color::White, pos(0, 0))]);
        let validator = MoveValidator::default();
        assert!(!is_stalemate(&board, &PortalSystem::default(), &validator, Color::White));
    }
}
