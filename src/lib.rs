//! Crate root module declarations for the portal chess rule engine.
//!
//! The crate is a single-ply legality oracle for a configurable chess variant:
//! square boards of any size, the standard pieces and special moves, and
//! one-directional portals with color gates and a shared cooldown queue.
//! Subsystems are exposed under stable paths so the (external) configuration
//! loader, command loop and renderer can import them directly.

pub mod chess_errors;

pub mod game_state {
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod custom_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_edges;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_special;
    pub mod legal_move_validator;
    pub mod reachability;
}

pub mod portals {
    pub mod portal_system;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::board_state::BoardState;
pub use game_state::chess_types::{Color, Piece, PieceKind, Position};
pub use game_state::game_config::{GameConfig, PieceConfig};
pub use game_state::game_state::GameState;
pub use game_state::undo_state::MoveRecord;
pub use move_generation::legal_move_validator::MoveValidator;
pub use moves::custom_moves::{MovementTemplate, StepTemplate};
pub use portals::portal_system::{Portal, PortalSystem};
