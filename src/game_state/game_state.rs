//! Game façade.
//!
//! `GameState` owns the board, the portal subsystem, the validator and the
//! move history, and exposes the operations the command layer needs: move
//! legality, commit, check/checkmate/stalemate and undo.

use crate::chess_errors::ChessResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::game_state::game_config::GameConfig;
use crate::game_state::undo_state::MoveRecord;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{is_checkmate, is_in_check, is_stalemate};
use crate::move_generation::legal_move_validator::MoveValidator;
use crate::portals::portal_system::PortalSystem;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: BoardState,
    pub(crate) portals: PortalSystem,
    pub(crate) validator: MoveValidator,
    pub(crate) move_history: Vec<MoveRecord>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> ChessResult<Self> {
        Self::with_validator(config, MoveValidator::default())
    }

    /// Builds a game whose validator knows extra custom kinds.
    pub fn with_validator(config: &GameConfig, validator: MoveValidator) -> ChessResult<Self> {
        let mut board = BoardState::new(config.board_size)?;
        board.initialize_board(&config.pieces);
        Ok(Self {
            board,
            portals: PortalSystem::new(config.portals.clone()),
            validator,
            move_history: Vec::new(),
        })
    }

    /// Standard 8x8 starting position without portals.
    pub fn new_game() -> Self {
        Self::new(&GameConfig::standard()).expect("standard board size is positive")
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Direct board access for setting up positions. Edits made here bypass
    /// validation and history.
    #[inline]
    pub fn board_mut(&mut self) -> &mut BoardState {
        &mut self.board
    }

    #[inline]
    pub fn portals(&self) -> &PortalSystem {
        &self.portals
    }

    #[inline]
    pub fn portals_mut(&mut self) -> &mut PortalSystem {
        &mut self.portals
    }

    #[inline]
    pub fn validator(&self) -> &MoveValidator {
        &self.validator
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn is_valid_move(&self, kind: &str, start: Position, end: Position, color: Color) -> bool {
        self.validator.is_valid_move(
            &PieceKind::from_name(kind),
            start,
            end,
            color,
            &self.board,
            &self.portals,
        )
    }

    /// Commits a move; pawns reaching the far rank become queens.
    pub fn move_piece(&mut self, start: Position, end: Position) -> ChessResult<()> {
        apply_move(self, start, end, &PieceKind::Queen)
    }

    pub fn move_piece_with_promotion(
        &mut self,
        start: Position,
        end: Position,
        promote_to: &str,
    ) -> ChessResult<()> {
        apply_move(self, start, end, &PieceKind::from_name(promote_to))
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, &self.portals, &self.validator, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        is_checkmate(&self.board, &self.portals, &self.validator, color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        is_stalemate(&self.board, &self.portals, &self.validator, color)
    }

    pub fn add_to_move_history(&mut self, record: MoveRecord) {
        self.move_history.push(record);
    }

    /// Reverts the latest history record. `Ok(None)` when there is nothing
    /// to undo.
    pub fn undo_move(&mut self) -> ChessResult<Option<MoveRecord>> {
        undo_move(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Piece;
    use crate::portals::portal_system::Portal;

    fn pos(file: i32, rank: i32) -> Position {
        Position::new(file, rank)
    }

    fn empty_game(portals: Vec<Portal>) -> GameState {
        let mut config = GameConfig::empty(8);
        config.portals = portals;
        GameState::new(&config).expect("game")
    }

    #[test]
    fn new_game_has_standard_layout() {
        let game = GameState::new_game();
        assert_eq!(game.board().piece_count(), 32);
        assert_eq!(
            game.board().piece_at(pos(4, 0)),
            Some(&Piece::new(PieceKind::King, Color::White))
        );
    }

    #[test]
    fn opening_position_counts_as_check_through_chained_knight_steps() {
        // A knight may chain jumps across the empty middle ranks, so the
        // standard opening already has both kings reachable.
        let game = GameState::new_game();
        assert!(game.is_in_check(Color::White));
        assert!(game.is_in_check(Color::Black));
        assert!(game.is_valid_move("knight", pos(1, 7), pos(4, 0), Color::Black));
        assert!(!game.is_stalemate(Color::White));
    }

    #[test]
    fn invalid_board_size_is_rejected() {
        assert!(matches!(
            GameState::new(&GameConfig::empty(0)),
            Err(ChessErrors::InvalidBoardSize(0))
        ));
    }

    #[test]
    fn commit_records_captured_piece() {
        let mut game = empty_game(Vec::new());
        game.board_mut().place_piece("rook", Color::White, pos(0, 0)).expect("place");
        game.board_mut().place_piece("knight", Color::Black, pos(0, 5)).expect("place");

        game.move_piece(pos(0, 0), pos(0, 5)).expect("capture");

        let record = game.move_history().last().expect("record");
        assert_eq!(record.captured_piece, Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(
            game.board().piece_at(pos(0, 5)),
            Some(&Piece::new(PieceKind::Rook, Color::White))
        );
    }

    #[test]
    fn rejected_commit_leaves_state_untouched() {
        let mut game = empty_game(Vec::new());
        game.board_mut().place_piece("bishop", Color::White, pos(2, 0)).expect("place");
        let before = game.board().clone();

        assert_eq!(
            game.move_piece(pos(2, 0), pos(2, 1)),
            Err(ChessErrors::IllegalMove {
                start: pos(2, 0),
                end: pos(2, 1)
            })
        );
        assert_eq!(
            game.move_piece(pos(5, 5), pos(5, 6)),
            Err(ChessErrors::EmptyStartSquare(pos(5, 5)))
        );
        assert_eq!(
            game.move_piece(pos(2, 0), pos(2, 8)),
            Err(ChessErrors::SquareOutOfRange(pos(2, 8)))
        );
        assert_eq!(game.board(), &before);
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn promotion_defaults_to_queen_and_validates_choice() {
        let mut game = empty_game(Vec::new());
        game.board_mut().place_piece("pawn", Color::White, pos(3, 6)).expect("place");

        let before = game.board().clone();
        assert_eq!(
            game.move_piece_with_promotion(pos(3, 6), pos(3, 7), "king"),
            Err(ChessErrors::InvalidPromotion("king".to_string()))
        );
        assert_eq!(game.board(), &before);

        game.move_piece_with_promotion(pos(3, 6), pos(3, 7), "Knight")
            .expect("promote");
        assert_eq!(
            game.board().piece_at(pos(3, 7)),
            Some(&Piece::new(PieceKind::Knight, Color::White))
        );

        game.undo_move().expect("undo");
        assert_eq!(
            game.board().piece_at(pos(3, 6)),
            Some(&Piece::new(PieceKind::Pawn, Color::White))
        );

        game.move_piece(pos(3, 6), pos(3, 7)).expect("promote");
        assert_eq!(
            game.board().piece_at(pos(3, 7)),
            Some(&Piece::new(PieceKind::Queen, Color::White))
        );
    }

    #[test]
    fn en_passant_commit_removes_passed_pawn_and_undo_restores_it() {
        let mut game = empty_game(Vec::new());
        game.board_mut().place_piece("pawn", Color::White, pos(4, 4)).expect("place");
        game.board_mut().place_piece("pawn", Color::Black, pos(5, 4)).expect("place");
        let before = game.board().clone();

        game.move_piece(pos(4, 4), pos(5, 5)).expect("en passant");
        assert!(game.board().is_empty_at(pos(5, 4)));
        assert_eq!(game.move_history()[0].captured_at, pos(5, 4));

        game.undo_move().expect("undo");
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn castling_moves_rook_and_undo_puts_it_back() {
        let mut game = empty_game(Vec::new());
        game.board_mut().place_piece("king", Color::Black, pos(4, 7)).expect("place");
        game.board_mut().place_piece("rook", Color::Black, pos(0, 7)).expect("place");
        let before = game.board().clone();

        game.move_piece(pos(4, 7), pos(2, 7)).expect("castle");
        assert_eq!(
            game.board().piece_at(pos(3, 7)),
            Some(&Piece::new(PieceKind::Rook, Color::Black))
        );
        assert!(game.board().is_empty_at(pos(0, 7)));

        game.undo_move().expect("undo");
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn landing_on_portal_entry_teleports_and_records_second_leg() {
        let mut game = empty_game(vec![Portal {
            id: "p1".to_string(),
            entry: pos(3, 3),
            exit: pos(6, 6),
            cooldown: 2,
            allowed_colors: vec![Color::White],
        }]);
        game.board_mut().place_piece("rook", Color::White, pos(3, 0)).expect("place");

        game.move_piece(pos(3, 0), pos(3, 3)).expect("move");

        assert!(game.board().is_empty_at(pos(3, 3)));
        assert_eq!(
            game.board().piece_at(pos(6, 6)),
            Some(&Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(game.move_history().len(), 2);
        assert_eq!(game.move_history()[1].start, pos(3, 3));
        assert_eq!(game.move_history()[1].end, pos(6, 6));
        // Cooldown 2, minus the commit's own tick.
        assert_eq!(game.portals().remaining_cooldown("p1"), 1);
    }

    #[test]
    fn portal_color_gate_blocks_teleport_on_landing() {
        let mut game = empty_game(vec![Portal {
            id: "white_only".to_string(),
            entry: pos(3, 3),
            exit: pos(6, 6),
            cooldown: 2,
            allowed_colors: vec![Color::White],
        }]);
        game.board_mut().place_piece("rook", Color::Black, pos(3, 0)).expect("place");

        game.move_piece(pos(3, 0), pos(3, 3)).expect("move");

        assert!(game.board().piece_at(pos(3, 3)).is_some());
        assert_eq!(game.move_history().len(), 1);
        assert_eq!(game.portals().remaining_cooldown("white_only"), 0);
    }

    #[test]
    fn landing_tries_every_portal_sharing_the_entry() {
        let portal = |id: &str, exit: Position, allowed_colors: Vec<Color>| Portal {
            id: id.to_string(),
            entry: pos(3, 3),
            exit,
            cooldown: 2,
            allowed_colors,
        };
        let mut game = empty_game(vec![
            portal("cooling", pos(6, 6), vec![Color::White]),
            portal("black_only", pos(7, 3), vec![Color::Black]),
            portal("open", pos(0, 6), vec![Color::White]),
        ]);
        game.portals_mut().start_cooldown("cooling");
        game.board_mut().place_piece("rook", Color::White, pos(3, 0)).expect("place");

        game.move_piece(pos(3, 0), pos(3, 3)).expect("move");

        assert!(game.board().is_empty_at(pos(3, 3)));
        assert!(game.board().is_empty_at(pos(6, 6)));
        assert_eq!(
            game.board().piece_at(pos(0, 6)),
            Some(&Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(game.move_history()[1].end, pos(0, 6));
        assert_eq!(game.portals().remaining_cooldown("open"), 2);
        assert_eq!(game.portals().remaining_cooldown("black_only"), 0);
    }

    #[test]
    fn friendly_piece_on_first_exit_falls_through_to_next_portal() {
        let mut game = empty_game(vec![
            Portal {
                id: "blocked".to_string(),
                entry: pos(3, 3),
                exit: pos(6, 6),
                cooldown: 1,
                allowed_colors: vec![Color::Black],
            },
            Portal {
                id: "clear".to_string(),
                entry: pos(3, 3),
                exit: pos(1, 1),
                cooldown: 1,
                allowed_colors: vec![Color::Black],
            },
        ]);
        game.board_mut().place_piece("bishop", Color::Black, pos(6, 6)).expect("place");
        game.board_mut().place_piece("knight", Color::Black, pos(1, 2)).expect("place");

        game.move_piece(pos(1, 2), pos(3, 3)).expect("move");

        assert_eq!(
            game.board().piece_at(pos(1, 1)),
            Some(&Piece::new(PieceKind::Knight, Color::Black))
        );
        assert_eq!(
            game.board().piece_at(pos(6, 6)),
            Some(&Piece::new(PieceKind::Bishop, Color::Black))
        );
    }

    #[test]
    fn undo_on_empty_history_is_a_noop() {
        let mut game = GameState::new_game();
        let before = game.board().clone();
        assert_eq!(game.undo_move(), Ok(None));
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn failed_restoration_keeps_record_and_board() {
        let mut game = empty_game(Vec::new());
        game.board_mut().place_piece("king", Color::White, pos(0, 0)).expect("place");
        let bogus = MoveRecord::new(
            pos(0, 0),
            pos(9, 9),
            Piece::new(PieceKind::King, Color::White),
            None,
        );
        game.add_to_move_history(bogus.clone());
        let before = game.board().clone();

        assert_eq!(
            game.undo_move(),
            Err(ChessErrors::UndoRestorationFailed(bogus.clone()))
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.move_history(), &[bogus]);
    }
}
