//! Core value types shared by every subsystem: colors, board coordinates,
//! piece kinds and occupied squares.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Side owning a piece. White moves toward higher ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single forward step.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Zero-based `(file, rank)` coordinate. Coordinates may be negative or past
/// the board edge while computing candidate steps; bounds are checked by
/// `BoardState::is_in_bounds`.
///
/// Ordering is rank-major (rank first, then file) so that iterating the
/// board's sparse mapping walks squares in ascending rank/file scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub file: i32,
    pub rank: i32,
}

impl Position {
    #[inline]
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn offset(self, d_file: i32, d_rank: i32) -> Self {
        Self {
            file: self.file + d_file,
            rank: self.rank + d_rank,
        }
    }

    /// `offset` for untrusted step sizes; `None` when a coordinate overflows.
    #[inline]
    pub const fn checked_offset(self, d_file: i32, d_rank: i32) -> Option<Self> {
        match (self.file.checked_add(d_file), self.rank.checked_add(d_rank)) {
            (Some(file), Some(rank)) => Some(Self { file, rank }),
            _ => None,
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.rank, self.file).cmp(&(other.rank, other.file))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Position {
    fn from((file, rank): (i32, i32)) -> Self {
        Self::new(file, rank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.file, self.rank)
    }
}

/// Piece kind. The six standard kinds are closed variants; anything else is a
/// configurable custom kind identified by its lowercased name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Custom(String),
}

impl PieceKind {
    /// Parses a kind name case-insensitively. Never fails: unknown names
    /// become `Custom`.
    pub fn from_name(name: &str) -> Self {
        let lower = name.trim().to_ascii_lowercase();
        match lower.as_str() {
            "pawn" => PieceKind::Pawn,
            "knight" => PieceKind::Knight,
            "bishop" => PieceKind::Bishop,
            "rook" => PieceKind::Rook,
            "queen" => PieceKind::Queen,
            "king" => PieceKind::King,
            _ => PieceKind::Custom(lower),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::Custom(name) => name,
        }
    }

    /// Kinds that can deliver check. Kings and custom kinds never do.
    #[inline]
    pub fn gives_check(&self) -> bool {
        matches!(
            self,
            PieceKind::Queen
                | PieceKind::Rook
                | PieceKind::Bishop
                | PieceKind::Knight
                | PieceKind::Pawn
        )
    }

    #[inline]
    pub fn is_promotion_choice(&self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

impl From<&str> for PieceKind {
    fn from(name: &str) -> Self {
        PieceKind::from_name(name)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occupant of a square.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: impl Into<PieceKind>, color: Color) -> Self {
        Self {
            kind: kind.into(),
            color,
        }
    }
}
