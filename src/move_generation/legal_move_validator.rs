//! Move legality oracle.
//!
//! `MoveValidator::is_valid_move` checks the cheap preconditions first and
//! then dispatches, in order, to castling, en passant, promotion-rank pawn
//! moves, direct portal moves and finally the general reachability search.
//! Every rejection is a plain `false`.

use std::sync::Arc;

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{promotion_rank, TELEPORTER_KIND};
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::legal_move_special::{is_castling_move, is_en_passant_move};
use crate::move_generation::reachability::bfs_validate_move;
use crate::moves::custom_moves::{CustomKinds, MovementTemplate};
use crate::moves::move_edges::move_edges;
use crate::portals::portal_system::PortalSystem;

#[derive(Debug, Clone)]
pub struct MoveValidator {
    custom_kinds: CustomKinds,
    teleporter_kind: PieceKind,
}

impl Default for MoveValidator {
    fn default() -> Self {
        Self {
            custom_kinds: CustomKinds::default(),
            teleporter_kind: PieceKind::from_name(TELEPORTER_KIND),
        }
    }
}

impl MoveValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the movement template of a custom kind.
    pub fn with_custom_kind(
        mut self,
        name: &str,
        template: impl MovementTemplate + 'static,
    ) -> Self {
        self.custom_kinds.register(name, Arc::new(template));
        self
    }

    /// Renames the kind allowed to hop through portals during the search.
    pub fn with_teleporter_kind(mut self, name: &str) -> Self {
        self.teleporter_kind = PieceKind::from_name(name);
        self
    }

    #[inline]
    pub fn is_teleporter(&self, kind: &PieceKind) -> bool {
        *kind == self.teleporter_kind
    }

    #[inline]
    pub fn custom_kinds(&self) -> &CustomKinds {
        &self.custom_kinds
    }

    /// Elementary steps of `kind` from `from`.
    #[inline]
    pub fn move_edges(
        &self,
        kind: &PieceKind,
        from: Position,
        color: Color,
        board: &BoardState,
    ) -> Vec<Position> {
        move_edges(kind, from, color, board, &self.custom_kinds)
    }

    pub fn is_valid_move(
        &self,
        kind: &PieceKind,
        start: Position,
        end: Position,
        color: Color,
        board: &BoardState,
        portals: &PortalSystem,
    ) -> bool {
        if !board.is_in_bounds(start) {
            return false;
        }
        match board.piece_at(start) {
            Some(piece) if piece.kind == *kind && piece.color == color => {}
            _ => return false,
        }
        if !board.is_in_bounds(end) {
            return false;
        }
        if matches!(board.piece_at(end), Some(piece) if piece.color == color) {
            return false;
        }

        if *kind == PieceKind::King
            && (end.file - start.file).abs() == 2
            && end.rank == start.rank
        {
            return is_castling_move(start, end, color, board);
        }

        if *kind == PieceKind::Pawn {
            if is_en_passant_move(start, end, color, board) {
                return true;
            }
            if end.rank == promotion_rank(color, board.board_size()) {
                return self.move_edges(kind, start, color, board).contains(&end);
            }
        }

        if portals.is_portal_move(start, end) {
            return portals.validate_portal_move(kind, start, end, color, board);
        }

        bfs_validate_move(self, kind, start, end, color, board, portals)
    }
}
