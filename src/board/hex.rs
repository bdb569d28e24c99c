//! Hex coordinate system for the glyph board (axial coordinates)
//!
//! Uses axial coordinates (q, r) for easy neighbor calculation. Leylines are
//! the three straight axes through a hex; every legal slide and cast runs
//! along one of them.

use serde::{Deserialize, Serialize};

/// Axial hex coordinate on the board
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cube coordinate S (derived from q and r)
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Manhattan distance in hex space
    pub fn distance(&self, other: &Self) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Step `steps` hexes in a direction
    pub fn step(&self, direction: HexDirection, steps: i32) -> Self {
        let offset = direction.offset();
        Self::new(self.q + offset.q * steps, self.r + offset.r * steps)
    }

    /// Get all 6 neighboring hex coordinates
    pub fn neighbors(&self) -> [HexCoord; 6] {
        HexDirection::all().map(|d| self.step(d, 1))
    }

    /// Direction of `other` if both hexes share a leyline
    ///
    /// Returns None for the same hex or hexes off every leyline.
    pub fn direction_to(&self, other: &Self) -> Option<HexDirection> {
        if self == other {
            return None;
        }
        let dq = other.q - self.q;
        let dr = other.r - self.r;
        let ds = other.s() - self.s();
        if dr == 0 {
            Some(if dq > 0 { HexDirection::East } else { HexDirection::West })
        } else if dq == 0 {
            Some(if dr > 0 { HexDirection::SouthEast } else { HexDirection::NorthWest })
        } else if ds == 0 {
            Some(if dq > 0 { HexDirection::NorthEast } else { HexDirection::SouthWest })
        } else {
            None
        }
    }

    /// Get all hexes within range (inclusive)
    pub fn hexes_in_range(&self, range: u32) -> Vec<HexCoord> {
        let range = range as i32;
        let mut results = Vec::new();
        for q in -range..=range {
            for r in (-range).max(-q - range)..=range.min(-q + range) {
                results.push(HexCoord::new(self.q + q, self.r + r));
            }
        }
        results
    }
}

/// Direction enum for the six hex neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum HexDirection {
    #[default]
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    /// Get the hex offset for this direction
    pub fn offset(&self) -> HexCoord {
        match self {
            HexDirection::East => HexCoord::new(1, 0),
            HexDirection::NorthEast => HexCoord::new(1, -1),
            HexDirection::NorthWest => HexCoord::new(0, -1),
            HexDirection::West => HexCoord::new(-1, 0),
            HexDirection::SouthWest => HexCoord::new(-1, 1),
            HexDirection::SouthEast => HexCoord::new(0, 1),
        }
    }

    /// Get opposite direction
    pub fn opposite(&self) -> Self {
        match self {
            HexDirection::East => HexDirection::West,
            HexDirection::NorthEast => HexDirection::SouthWest,
            HexDirection::NorthWest => HexDirection::SouthEast,
            HexDirection::West => HexDirection::East,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::SouthEast => HexDirection::NorthWest,
        }
    }

    /// Bucket index 0..6, used for direction diversity counts
    pub fn index(&self) -> usize {
        match self {
            HexDirection::East => 0,
            HexDirection::NorthEast => 1,
            HexDirection::NorthWest => 2,
            HexDirection::West => 3,
            HexDirection::SouthWest => 4,
            HexDirection::SouthEast => 5,
        }
    }

    /// All directions
    pub fn all() -> [HexDirection; 6] {
        [
            HexDirection::East,
            HexDirection::NorthEast,
            HexDirection::NorthWest,
            HexDirection::West,
            HexDirection::SouthWest,
            HexDirection::SouthEast,
        ]
    }
}

/// One of the three straight axes of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeylineAxis {
    /// East-west, r constant
    Q,
    /// Northwest-southeast, q constant
    R,
    /// Northeast-southwest, s constant
    S,
}

impl LeylineAxis {
    /// Reading direction of words laid along this axis
    pub fn forward(&self) -> HexDirection {
        match self {
            LeylineAxis::Q => HexDirection::East,
            LeylineAxis::R => HexDirection::SouthEast,
            LeylineAxis::S => HexDirection::SouthWest,
        }
    }

    pub fn all() -> [LeylineAxis; 3] {
        [LeylineAxis::Q, LeylineAxis::R, LeylineAxis::S]
    }
}
