//! Board analysis shared by the goal evaluators
//!
//! Trap detection compares enemy mobility before and after a move, contest
//! detection looks for enemy words a hex would complete, setup analysis
//! grades a freshly laid tile for the words it may enable later.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::board::{GameState, HexCoord, HexDirection, LeylineAxis, Lexicon, MoveRules};
use crate::core::types::{GlyphlingId, Side};

/// Mobility change of one enemy glyphling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestrictionReport {
    pub glyphling: GlyphlingId,
    pub moves_before: usize,
    pub moves_after: usize,
}

impl RestrictionReport {
    pub fn removed(&self) -> usize {
        self.moves_before.saturating_sub(self.moves_after)
    }

    /// Had moves before, has none after
    pub fn is_full_trap(&self) -> bool {
        self.moves_before > 0 && self.moves_after == 0
    }
}

/// Mobility of every placed `side` glyphling in `before` versus `after`
pub fn movement_restriction(
    rules: &dyn MoveRules,
    before: &GameState,
    after: &GameState,
    side: Side,
) -> Vec<RestrictionReport> {
    before
        .placed_glyphlings(side)
        .map(|g| RestrictionReport {
            glyphling: g.id,
            moves_before: rules.move_count(before, g.id),
            moves_after: rules.move_count(after, g.id),
        })
        .collect()
}

/// Number of `side` glyphlings on hexes adjacent to `hex`
pub fn adjacent_glyphlings(state: &GameState, hex: HexCoord, side: Side) -> usize {
    hex.neighbors()
        .iter()
        .filter(|n| state.glyphling_at(**n).is_some_and(|g| g.owner == side))
        .count()
}

/// Enemy words a hex would complete
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ContestReport {
    /// Known words containing at least one enemy tile
    pub threatened_words: usize,
    /// Length plus enemy tiles of the most valuable threatened word
    pub best_value: f32,
}

/// Try every letter on `hex` and report the enemy words it would complete
pub fn contest_at(
    state: &GameState,
    lexicon: &dyn Lexicon,
    hex: HexCoord,
    enemy: Side,
    threshold: f32,
) -> ContestReport {
    let mut report = ContestReport::default();
    if !state.is_on_board(hex) || state.tile_at(hex).is_some() {
        return report;
    }

    for letter in 'A'..='Z' {
        for word in lexicon.find_words_formed_at(state, hex, letter) {
            if !lexicon.is_word_above_frequency_threshold(&word.text, threshold) {
                continue;
            }
            let enemy_tiles = word
                .positions
                .iter()
                .filter(|p| **p != hex && state.owner_of(**p) == Some(enemy))
                .count();
            if enemy_tiles == 0 {
                continue;
            }
            report.threatened_words += 1;
            report.best_value = report.best_value.max((word.len() + enemy_tiles) as f32);
        }
    }
    report
}

/// Future-word potential of a tile on `hex`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SetupReport {
    /// Open hexes that sit between this tile and another own tile
    pub productive_gaps: usize,
    /// Directions with at least two free or own hexes ahead
    pub extension_paths: usize,
    /// Leyline axes that meet another own tile within reach
    pub leyline_intersections: usize,
    pub adjacent_own: usize,
    pub open_neighbors: usize,
    pub spacing_bonus: f32,
}

const INTERSECTION_REACH: i32 = 3;

/// Grade `hex` as a building spot for `side`; `state` should already hold the tile
pub fn setup_at(state: &GameState, hex: HexCoord, side: Side) -> SetupReport {
    let own = |h: HexCoord| h != hex && state.owner_of(h) == Some(side);

    let mut report = SetupReport::default();

    for direction in HexDirection::all() {
        let next = hex.step(direction, 1);
        let after = hex.step(direction, 2);
        if state.is_open(next) && own(after) {
            report.productive_gaps += 1;
        }
        if state.is_open(next) && (state.is_open(after) || own(after)) {
            report.extension_paths += 1;
        }
    }

    for axis in LeylineAxis::all() {
        let forward = axis.forward();
        let meets = [forward, forward.opposite()].into_iter().any(|d| {
            (1..=INTERSECTION_REACH).any(|step| own(hex.step(d, step)))
        });
        if meets {
            report.leyline_intersections += 1;
        }
    }

    let neighbors = hex.neighbors();
    report.adjacent_own = neighbors.iter().filter(|n| own(**n)).count();
    report.open_neighbors = neighbors.iter().filter(|n| state.is_open(**n)).count();
    report.spacing_bonus = match report.adjacent_own {
        1 | 2 if report.open_neighbors >= 4 => 3.0,
        1 | 2 if report.open_neighbors >= 3 => 2.0,
        0..=3 => 0.0,
        _ => -2.0,
    };

    report
}

/// How freely a glyphling can still move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EscapeProfile {
    pub moves: usize,
    /// Distinct directions with at least one legal destination
    pub directions: usize,
}

pub fn escape_profile(state: &GameState, rules: &dyn MoveRules, glyphling: GlyphlingId) -> EscapeProfile {
    let Some(position) = state.position_of(glyphling) else {
        return EscapeProfile::default();
    };
    let destinations = rules.legal_destinations(state, glyphling);
    let directions: BTreeSet<usize> = destinations
        .iter()
        .filter_map(|d| position.direction_to(d))
        .map(|d| d.index())
        .collect();
    EscapeProfile {
        moves: destinations.len(),
        directions: directions.len(),
    }
}
