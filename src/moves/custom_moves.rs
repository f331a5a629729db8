//! Extensibility point for configurable piece kinds.
//!
//! Standard kinds are dispatched by `PieceKind`; anything else is looked up
//! by lowercased name in a `CustomKinds` registry. `StepTemplate` covers the
//! data-driven movement descriptions the external configuration provides.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_edges::{step_if_enterable, trace_ray};

/// Movement of a custom kind: the elementary steps available from one square.
pub trait MovementTemplate: fmt::Debug + Send + Sync {
    fn edges(&self, from: Position, color: Color, board: &BoardState) -> Vec<Position>;
}

/// Offsets a custom piece may step (or slide) along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTemplate {
    pub offsets: Vec<(i32, i32)>,
    /// Repeat each offset as a ray, like a rook or bishop.
    #[serde(default)]
    pub sliding: bool,
    /// Mirror rank offsets for black, like a pawn's forward direction.
    #[serde(default)]
    pub color_relative: bool,
}

impl StepTemplate {
    pub fn leaper(offsets: &[(i32, i32)]) -> Self {
        Self {
            offsets: offsets.to_vec(),
            sliding: false,
            color_relative: false,
        }
    }

    pub fn rider(offsets: &[(i32, i32)]) -> Self {
        Self {
            offsets: offsets.to_vec(),
            sliding: true,
            color_relative: false,
        }
    }
}

impl MovementTemplate for StepTemplate {
    fn edges(&self, from: Position, color: Color, board: &BoardState) -> Vec<Position> {
        let mut edges = Vec::new();
        for &(d_file, d_rank) in &self.offsets {
            let d_rank = if self.color_relative {
                match d_rank.checked_mul(color.forward()) {
                    Some(d_rank) => d_rank,
                    None => continue,
                }
            } else {
                d_rank
            };
            if self.sliding {
                trace_ray(from, d_file, d_rank, board, &mut edges);
            } else if let Some(target) = step_if_enterable(from, d_file, d_rank, color, board) {
                edges.push(target);
            }
        }
        edges
    }
}

/// Registry of custom kinds keyed by lowercased name.
#[derive(Debug, Clone, Default)]
pub struct CustomKinds {
    templates: HashMap<String, Arc<dyn MovementTemplate>>,
}

impl CustomKinds {
    pub fn register(&mut self, name: &str, template: Arc<dyn MovementTemplate>) {
        self.templates.insert(name.trim().to_ascii_lowercase(), template);
    }

    pub fn get(&self, name: &str) -> Option<&dyn MovementTemplate> {
        self.templates
            .get(&name.to_ascii_lowercase())
            .map(|template| template.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(&name.to_ascii_lowercase())
    }
}
