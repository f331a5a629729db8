//! Portals: configured one-directional teleport links with a color gate and a
//! cooldown automaton.
//!
//! Cooldowns are kept as a per-portal remaining-turns counter plus one FIFO
//! queue shared by every portal. Triggering a portal with cooldown `n` sets
//! its counter to `n` and appends `n` copies of its id to the queue. Each call
//! to `update_cooldowns` pops exactly one entry and decrements only that
//! entry's portal. A portal's countdown therefore stalls while ticks owed by
//! portals triggered earlier are still ahead of it in the queue.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chess_errors::ChessResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, PieceKind, Position};

/// A configured teleport link from `entry` to `exit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portal {
    pub id: String,
    pub entry: Position,
    pub exit: Position,
    /// Number of queue ticks the portal stays closed after use.
    pub cooldown: u32,
    pub allowed_colors: Vec<Color>,
}

impl Portal {
    #[inline]
    pub fn connects(&self, start: Position, end: Position) -> bool {
        self.entry == start && self.exit == end
    }

    #[inline]
    pub fn allows(&self, color: Color) -> bool {
        self.allowed_colors.contains(&color)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PortalSystem {
    portals: Vec<Portal>,
    cooldowns: HashMap<String, u32>,
    cooldown_queue: VecDeque<String>,
}

impl PortalSystem {
    pub fn new(portals: Vec<Portal>) -> Self {
        let cooldowns = portals
            .iter()
            .map(|portal| (portal.id.clone(), 0))
            .collect();
        Self {
            portals,
            cooldowns,
            cooldown_queue: VecDeque::new(),
        }
    }

    #[inline]
    pub fn portals(&self) -> &[Portal] {
        &self.portals
    }

    /// First portal whose entry/exit pair is exactly `(start, end)`.
    pub fn find_portal(&self, start: Position, end: Position) -> Option<&Portal> {
        self.portals.iter().find(|portal| portal.connects(start, end))
    }

    /// Portals leaving `entry`, in configuration order.
    pub fn portals_from(&self, entry: Position) -> impl Iterator<Item = &Portal> {
        self.portals.iter().filter(move |portal| portal.entry == entry)
    }

    #[inline]
    pub fn is_portal_move(&self, start: Position, end: Position) -> bool {
        self.find_portal(start, end).is_some()
    }

    pub fn is_portal_in_cooldown(&self, start: Position, end: Position) -> bool {
        match self.find_portal(start, end) {
            Some(portal) => self.remaining_cooldown(&portal.id) > 0,
            None => false,
        }
    }

    /// Remaining turns before the portal opens again; unknown ids report 0.
    pub fn remaining_cooldown(&self, id: &str) -> u32 {
        self.cooldowns.get(id).copied().unwrap_or(0)
    }

    /// Queue entries still owed across all portals.
    #[inline]
    pub fn pending_ticks(&self) -> usize {
        self.cooldown_queue.len()
    }

    /// Confirms `kind`/`color` stands on `start`, the portal is open and the
    /// mover's color may use it.
    pub fn validate_portal_move(
        &self,
        kind: &PieceKind,
        start: Position,
        end: Position,
        color: Color,
        board: &BoardState,
    ) -> bool {
        match board.piece_at(start) {
            Some(piece) if piece.kind == *kind && piece.color == color => {}
            _ => return false,
        }

        let Some(portal) = self.find_portal(start, end) else {
            return false;
        };

        let remaining = self.remaining_cooldown(&portal.id);
        if remaining > 0 {
            debug!(portal = %portal.id, remaining, "portal rejected: cooling down");
            return false;
        }

        if !portal.allows(color) {
            debug!(portal = %portal.id, %color, "portal rejected: color not allowed");
            return false;
        }

        true
    }

    /// Moves the occupant of `start` to `end` and starts the portal's
    /// cooldown. Returns `false` (and does nothing) when `(start, end)` is not
    /// a portal or `start` is empty.
    pub fn handle_portal_move(
        &mut self,
        start: Position,
        end: Position,
        board: &mut BoardState,
    ) -> ChessResult<bool> {
        let Some(id) = self.find_portal(start, end).map(|portal| portal.id.clone()) else {
            return Ok(false);
        };
        let Some(piece) = board.piece_at(start).cloned() else {
            return Ok(false);
        };

        board.set_square(end, Some(piece))?;
        board.set_square(start, None)?;
        self.start_cooldown(&id);
        Ok(true)
    }

    /// Closes the portal for its configured cooldown and queues the ticks it
    /// is owed.
    pub fn start_cooldown(&mut self, id: &str) {
        let Some(length) = self
            .portals
            .iter()
            .find(|portal| portal.id == id)
            .map(|portal| portal.cooldown)
        else {
            return;
        };

        self.cooldowns.insert(id.to_string(), length);
        self.cooldown_queue
            .extend(std::iter::repeat(id.to_string()).take(length as usize));
        info!(portal = id, cooldown = length, "portal used");
    }

    /// Pops one queue entry and decrements that entry's portal only.
    pub fn update_cooldowns(&mut self) {
        let Some(id) = self.cooldown_queue.pop_front() else {
            return;
        };

        if let Some(remaining) = self.cooldowns.get_mut(&id) {
            if *remaining > 0 {
                *remaining -= 1;
                if *remaining == 0 {
                    info!(portal = %id, "portal ready again");
                }
            }
        }

        for (id, remaining) in self.cooldowns.iter().filter(|(_, r)| **r > 0) {
            debug!(portal = %id, remaining, "portal cooling down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(file: i32, rank: i32) -> Position {
        Position::new(file, rank)
    }

    fn portal(id: &str, entry: Position, exit: Position, cooldown: u32) -> Portal {
        Portal {
            id: id.to_string(),
            entry,
            exit,
            cooldown,
            allowed_colors: vec![Color::White, Color::Black],
        }
    }

    #[test]
    fn portal_moves_are_directional() {
        let system = PortalSystem::new(vec![portal("p1", pos(0, 3), pos(7, 4), 2)]);
        assert!(system.is_portal_move(pos(0, 3), pos(7, 4)));
        assert!(!system.is_portal_move(pos(7, 4), pos(0, 3)));
    }

    #[test]
    fn handle_portal_move_relocates_and_starts_cooldown() {
        let mut system = PortalSystem::new(vec![portal("p1", pos(0, 3), pos(7, 4), 3)]);
        let mut board = BoardState::new(8).expect("board");
        board.place_piece("knight", Color::White, pos(0, 3)).expect("place");

        assert_eq!(system.handle_portal_move(pos(0, 3), pos(7, 4), &mut board), Ok(true));
        assert!(board.is_empty_at(pos(0, 3)));
        assert!(board.piece_at(pos(7, 4)).is_some());
        assert_eq!(system.remaining_cooldown("p1"), 3);
        assert_eq!(system.pending_ticks(), 3);
        assert!(system.is_portal_in_cooldown(pos(0, 3), pos(7, 4)));
    }

    #[test]
    fn handle_portal_move_ignores_empty_entry() {
        let mut system = PortalSystem::new(vec![portal("p1", pos(0, 3), pos(7, 4), 3)]);
        let mut board = BoardState::new(8).expect("board");
        assert_eq!(system.handle_portal_move(pos(0, 3), pos(7, 4), &mut board), Ok(false));
        assert_eq!(system.remaining_cooldown("p1"), 0);
    }

    #[test]
    fn update_cooldowns_decrements_only_the_queue_head_owner() {
        let mut system = PortalSystem::new(vec![
            portal("a", pos(0, 0), pos(1, 1), 2),
            portal("b", pos(2, 2), pos(3, 3), 2),
        ]);
        system.start_cooldown("a");
        system.start_cooldown("b");

        system.update_cooldowns();
        assert_eq!(system.remaining_cooldown("a"), 1);
        assert_eq!(system.remaining_cooldown("b"), 2);

        system.update_cooldowns();
        system.update_cooldowns();
        assert_eq!(system.remaining_cooldown("a"), 0);
        assert_eq!(system.remaining_cooldown("b"), 1);
        assert_eq!(system.pending_ticks(), 1);
    }

    #[test]
    fn update_cooldowns_on_empty_queue_is_noop() {
        let mut system = PortalSystem::new(vec![portal("a", pos(0, 0), pos(1, 1), 2)]);
        system.update_cooldowns();
        assert_eq!(system.remaining_cooldown("a"), 0);
        assert_eq!(system.pending_ticks(), 0);
    }

    #[test]
    fn validate_rejects_wrong_color_and_wrong_piece() {
        let mut white_only = portal("w", pos(0, 3), pos(7, 4), 1);
        white_only.allowed_colors = vec![Color::White];
        let system = PortalSystem::new(vec![white_only]);
        let mut board = BoardState::new(8).expect("board");
        board.place_piece("rook", Color::Black, pos(0, 3)).expect("place");

        assert!(!system.validate_portal_move(
            &PieceKind::Rook,
            pos(0, 3),
            pos(7, 4),
            Color::Black,
            &board
        ));
        assert!(!system.validate_portal_move(
            &PieceKind::Bishop,
            pos(0, 3),
            pos(7, 4),
            Color::Black,
            &board
        ));

        board.place_piece("rook", Color::White, pos(0, 3)).expect("place");
        assert!(system.validate_portal_move(
            &PieceKind::Rook,
            pos(0, 3),
            pos(7, 4),
            Color::White,
            &board
        ));
    }
}
