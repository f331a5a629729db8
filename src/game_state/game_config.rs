//! Descriptors handed over by the external configuration loader.
//!
//! The loader itself lives outside this crate; these types only fix the shape
//! of what it provides. They derive serde traits so any serde format can feed
//! them directly.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::STANDARD_BOARD_SIZE;
use crate::game_state::chess_types::Position;
use crate::portals::portal_system::Portal;

/// Starting squares of one piece kind for both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceConfig {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub white: Vec<Position>,
    #[serde(default)]
    pub black: Vec<Position>,
}

/// Everything needed to set up a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: i32,
    #[serde(default)]
    pub pieces: Vec<PieceConfig>,
    #[serde(default)]
    pub portals: Vec<Portal>,
}

impl GameConfig {
    /// Standard 8x8 starting layout without portals.
    pub fn standard() -> Self {
        let n = STANDARD_BOARD_SIZE;
        let mirrored = |kind: &str, files: &[i32]| PieceConfig {
            kind: kind.to_string(),
            white: files.iter().map(|&file| Position::new(file, 0)).collect(),
            black: files.iter().map(|&file| Position::new(file, n - 1)).collect(),
        };

        let pawns = PieceConfig {
            kind: "pawn".to_string(),
            white: (0..n).map(|file| Position::new(file, 1)).collect(),
            black: (0..n).map(|file| Position::new(file, n - 2)).collect(),
        };

        Self {
            board_size: n,
            pieces: vec![
                pawns,
                mirrored("rook", &[0, 7]),
                mirrored("knight", &[1, 6]),
                mirrored("bishop", &[2, 5]),
                mirrored("queen", &[3]),
                mirrored("king", &[4]),
            ],
            portals: Vec::new(),
        }
    }

    /// Empty board of the given size.
    pub fn empty(board_size: i32) -> Self {
        Self {
            board_size,
            pieces: Vec::new(),
            portals: Vec::new(),
        }
    }
}
