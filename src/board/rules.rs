//! Movement and casting legality
//!
//! The AI only ever asks two questions of the rules: where can this glyphling
//! slide, and where can it cast from where it stands. `MoveRules` is that seam;
//! `LeylineRules` is the standard ruleset.

use crate::board::hex::{HexCoord, HexDirection};
use crate::board::state::GameState;
use crate::core::types::GlyphlingId;

/// Legality queries supplied by the rules collaborator
pub trait MoveRules {
    /// Hexes the glyphling may slide to (excluding its current hex)
    fn legal_destinations(&self, state: &GameState, glyphling: GlyphlingId) -> Vec<HexCoord>;

    /// Hexes the glyphling may cast a tile onto from its current hex
    fn legal_cast_positions(&self, state: &GameState, glyphling: GlyphlingId) -> Vec<HexCoord>;

    /// Number of legal slides; zero means the glyphling is tangled
    fn move_count(&self, state: &GameState, glyphling: GlyphlingId) -> usize {
        self.legal_destinations(state, glyphling).len()
    }

    fn is_tangled(&self, state: &GameState, glyphling: GlyphlingId) -> bool {
        state.position_of(glyphling).is_some() && self.move_count(state, glyphling) == 0
    }
}

/// Standard rules: slide any distance along a leyline until blocked, cast
/// onto an open hex within `cast_range` along a leyline
#[derive(Debug, Clone)]
pub struct LeylineRules {
    pub cast_range: u32,
}

impl Default for LeylineRules {
    fn default() -> Self {
        Self { cast_range: 2 }
    }
}

impl LeylineRules {
    pub fn new(cast_range: u32) -> Self {
        Self { cast_range }
    }

    /// Open hexes along one direction, stopping at the first blocker
    fn open_run(state: &GameState, from: HexCoord, direction: HexDirection, limit: u32) -> Vec<HexCoord> {
        let mut run = Vec::new();
        for step in 1..=limit as i32 {
            let hex = from.step(direction, step);
            if !state.is_open(hex) {
                break;
            }
            run.push(hex);
        }
        run
    }
}

impl MoveRules for LeylineRules {
    fn legal_destinations(&self, state: &GameState, glyphling: GlyphlingId) -> Vec<HexCoord> {
        let Some(from) = state.position_of(glyphling) else {
            return Vec::new();
        };
        let limit = state.radius() * 2;
        HexDirection::all()
            .into_iter()
            .flat_map(|d| Self::open_run(state, from, d, limit))
            .collect()
    }

    fn legal_cast_positions(&self, state: &GameState, glyphling: GlyphlingId) -> Vec<HexCoord> {
        let Some(from) = state.position_of(glyphling) else {
            return Vec::new();
        };
        HexDirection::all()
            .into_iter()
            .flat_map(|d| Self::open_run(state, from, d, self.cast_range))
            .collect()
    }
}
