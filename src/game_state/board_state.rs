//! Sparse board representation.
//!
//! `BoardState` maps occupied positions to pieces; absence means the square is
//! empty. The map is ordered rank-major so every scan over it visits squares
//! in ascending rank/file order, which check detection relies on when picking
//! "the first king found". The struct is a plain value: `clone` produces a
//! fully independent board for simulations.

use std::collections::BTreeMap;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
use crate::game_state::game_config::PieceConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board_size: i32,
    squares: BTreeMap<Position, Piece>,
}

impl BoardState {
    pub fn new(board_size: i32) -> ChessResult<Self> {
        if board_size < 1 {
            return Err(ChessErrors::InvalidBoardSize(board_size));
        }
        Ok(Self {
            board_size,
            squares: BTreeMap::new(),
        })
    }

    #[inline]
    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    #[inline]
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        (0..self.board_size).contains(&pos.file) && (0..self.board_size).contains(&pos.rank)
    }

    /// Occupant of `pos`, or `None` for an empty in-bounds square.
    pub fn get_square(&self, pos: Position) -> ChessResult<Option<&Piece>> {
        if !self.is_in_bounds(pos) {
            return Err(ChessErrors::SquareOutOfRange(pos));
        }
        Ok(self.squares.get(&pos))
    }

    /// Occupant lookup that treats off-board squares as empty.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.squares.get(&pos)
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        !self.squares.contains_key(&pos)
    }

    /// Places `kind`/`color` on `pos`, replacing any occupant. An empty kind
    /// clears the square instead.
    pub fn place_piece(&mut self, kind: &str, color: Color, pos: Position) -> ChessResult<()> {
        if kind.trim().is_empty() {
            return self.set_square(pos, None);
        }
        self.set_square(pos, Some(Piece::new(PieceKind::from_name(kind), color)))
    }

    pub fn set_square(&mut self, pos: Position, piece: Option<Piece>) -> ChessResult<()> {
        if !self.is_in_bounds(pos) {
            return Err(ChessErrors::InvalidPlacement(pos));
        }
        match piece {
            Some(piece) => {
                self.squares.insert(pos, piece);
            }
            None => {
                self.squares.remove(&pos);
            }
        }
        Ok(())
    }

    /// Removes and returns the occupant of `pos`, if any.
    pub fn take_piece(&mut self, pos: Position) -> Option<Piece> {
        self.squares.remove(&pos)
    }

    /// Clears the board and loads the placement descriptors. Out-of-bounds
    /// entries are skipped silently.
    pub fn initialize_board(&mut self, piece_configs: &[PieceConfig]) {
        self.squares.clear();
        for config in piece_configs {
            let kind = PieceKind::from_name(&config.kind);
            let placements = config
                .white
                .iter()
                .map(|pos| (*pos, Color::White))
                .chain(config.black.iter().map(|pos| (*pos, Color::Black)));
            for (pos, color) in placements {
                if self.is_in_bounds(pos) {
                    self.squares.insert(pos, Piece::new(kind.clone(), color));
                }
            }
        }
    }

    /// Occupied squares in ascending rank/file order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> {
        self.squares.iter().map(|(pos, piece)| (*pos, piece))
    }

    /// Owned snapshot of one side's pieces, in scan order.
    pub fn pieces_of(&self, color: Color) -> Vec<(Position, Piece)> {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(pos, piece)| (pos, piece.clone()))
            .collect()
    }

    /// First king of `color` in scan order.
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.color == color && piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// All in-bounds positions in ascending rank/file order.
    pub fn all_positions(&self) -> impl Iterator<Item = Position> {
        let size = self.board_size;
        (0..size).flat_map(move |rank| (0..size).map(move |file| Position::new(file, rank)))
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.squares.len()
    }
}
