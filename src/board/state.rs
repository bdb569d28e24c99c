//! Game state consumed by the AI: tiles, glyphlings and hands
//!
//! The AI treats this as read-only and simulates on clones. `Clone` is a deep
//! copy; no collection is shared between a state and its clone.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::board::hex::HexCoord;
use crate::core::error::{AiError, Result};
use crate::core::types::{GlyphlingId, Side};

/// A letter tile cast onto the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub letter: char,
    pub owner: Side,
}

/// A movable piece that slides along leylines and casts tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphling {
    pub id: GlyphlingId,
    pub owner: Side,
    /// None while the piece is still waiting to be placed
    pub position: Option<HexCoord>,
}

/// Board snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    radius: i32,
    tiles: BTreeMap<HexCoord, Tile>,
    glyphlings: Vec<Glyphling>,
    hands: [Vec<char>; 2],
    scores: [u32; 2],
}

impl GameState {
    /// Empty hexagonal board of the given radius
    pub fn new(radius: u32) -> Self {
        Self {
            radius: radius as i32,
            tiles: BTreeMap::new(),
            glyphlings: Vec::new(),
            hands: [Vec::new(), Vec::new()],
            scores: [0, 0],
        }
    }

    pub fn radius(&self) -> u32 {
        self.radius as u32
    }

    pub fn is_on_board(&self, hex: HexCoord) -> bool {
        hex.q.abs() <= self.radius && hex.r.abs() <= self.radius && hex.s().abs() <= self.radius
    }

    /// Number of hexes on the board
    pub fn cell_count(&self) -> usize {
        let r = self.radius as usize;
        3 * r * (r + 1) + 1
    }

    /// Every hex on the board in a stable order
    pub fn cells(&self) -> Vec<HexCoord> {
        HexCoord::new(0, 0).hexes_in_range(self.radius as u32)
    }

    /// Fraction of the board covered by tiles (0.0 to 1.0)
    pub fn board_fill(&self) -> f32 {
        self.tiles.len() as f32 / self.cell_count() as f32
    }

    pub fn tile_at(&self, hex: HexCoord) -> Option<&Tile> {
        self.tiles.get(&hex)
    }

    pub fn tiles(&self) -> impl Iterator<Item = (&HexCoord, &Tile)> {
        self.tiles.iter()
    }

    /// Owner of the tile on a hex
    pub fn owner_of(&self, hex: HexCoord) -> Option<Side> {
        self.tiles.get(&hex).map(|t| t.owner)
    }

    pub fn glyphling(&self, id: GlyphlingId) -> Option<&Glyphling> {
        self.glyphlings.iter().find(|g| g.id == id)
    }

    pub fn glyphlings(&self) -> &[Glyphling] {
        &self.glyphlings
    }

    /// Placed glyphlings belonging to a side
    pub fn placed_glyphlings(&self, side: Side) -> impl Iterator<Item = &Glyphling> {
        self.glyphlings
            .iter()
            .filter(move |g| g.owner == side && g.position.is_some())
    }

    pub fn position_of(&self, id: GlyphlingId) -> Option<HexCoord> {
        self.glyphling(id).and_then(|g| g.position)
    }

    pub fn glyphling_at(&self, hex: HexCoord) -> Option<&Glyphling> {
        self.glyphlings.iter().find(|g| g.position == Some(hex))
    }

    /// True if a tile or a glyphling sits on the hex
    pub fn is_occupied(&self, hex: HexCoord) -> bool {
        self.tiles.contains_key(&hex) || self.glyphling_at(hex).is_some()
    }

    /// On the board and free of tiles and glyphlings
    pub fn is_open(&self, hex: HexCoord) -> bool {
        self.is_on_board(hex) && !self.is_occupied(hex)
    }

    pub fn hand(&self, side: Side) -> &[char] {
        &self.hands[side.index()]
    }

    pub fn set_hand(&mut self, side: Side, letters: Vec<char>) {
        self.hands[side.index()] = letters;
    }

    /// Remove one copy of a letter from a hand; false if absent
    pub fn take_from_hand(&mut self, side: Side, letter: char) -> bool {
        let hand = &mut self.hands[side.index()];
        match hand.iter().position(|c| c.eq_ignore_ascii_case(&letter)) {
            Some(idx) => {
                hand.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    pub fn add_score(&mut self, side: Side, points: u32) {
        self.scores[side.index()] += points;
    }

    /// Add a glyphling and return its id
    pub fn add_glyphling(&mut self, owner: Side, position: Option<HexCoord>) -> GlyphlingId {
        let id = GlyphlingId(self.glyphlings.len() as u8);
        self.glyphlings.push(Glyphling {
            id,
            owner,
            position,
        });
        id
    }

    /// Move a glyphling to a hex (no legality check)
    pub fn relocate(&mut self, id: GlyphlingId, to: HexCoord) -> Result<()> {
        let glyphling = self
            .glyphlings
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(AiError::GlyphlingNotFound(id))?;
        glyphling.position = Some(to);
        Ok(())
    }

    /// Put a tile on a hex, replacing anything already there
    pub fn place_tile(&mut self, hex: HexCoord, letter: char, owner: Side) {
        self.tiles.insert(
            hex,
            Tile {
                letter: letter.to_ascii_uppercase(),
                owner,
            },
        );
    }

    /// Change ownership of an existing tile
    pub fn claim_tile(&mut self, hex: HexCoord, owner: Side) {
        if let Some(tile) = self.tiles.get_mut(&hex) {
            tile.owner = owner;
        }
    }
}
