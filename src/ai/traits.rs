//! Traits, goals and the clamped trait range
//!
//! A trait is a 0-100 dial that controls how likely its goal is to activate.
//! Each personality carries a base range per trait; every turn the ranges are
//! copied, shifted by the situation and rolled.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ai::constants::{TRAIT_MAX, TRAIT_MIN};

/// The seven personality dials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Aggression,
    Greed,
    Spite,
    Caution,
    Patience,
    Opportunism,
    Pragmatism,
}

impl Trait {
    pub fn all() -> [Trait; 7] {
        [
            Trait::Aggression,
            Trait::Greed,
            Trait::Spite,
            Trait::Caution,
            Trait::Patience,
            Trait::Opportunism,
            Trait::Pragmatism,
        ]
    }

    /// Goal this trait controls
    pub fn goal(&self) -> Goal {
        match self {
            Trait::Aggression => Goal::Trap,
            Trait::Greed => Goal::Score,
            Trait::Spite => Goal::Deny,
            Trait::Caution => Goal::Escape,
            Trait::Patience => Goal::Build,
            Trait::Opportunism => Goal::Steal,
            Trait::Pragmatism => Goal::Dump,
        }
    }

    fn index(&self) -> usize {
        match self {
            Trait::Aggression => 0,
            Trait::Greed => 1,
            Trait::Spite => 2,
            Trait::Caution => 3,
            Trait::Patience => 4,
            Trait::Opportunism => 5,
            Trait::Pragmatism => 6,
        }
    }
}

/// What kind of move the AI wants to make this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Restrict or tangle enemy glyphlings
    Trap,
    /// Form the best words available
    Score,
    /// Block enemy leylines and contested word spots
    Deny,
    /// Relieve pressure on own glyphlings
    Escape,
    /// Lay tiles that set up future words
    Build,
    /// Form words out of mostly enemy tiles
    Steal,
    /// Get rid of junk letters safely
    Dump,
}

impl Goal {
    pub fn all() -> [Goal; 7] {
        Trait::all().map(|t| t.goal())
    }

    /// Trait whose range gates this goal in the cascade
    pub fn controlling_trait(&self) -> Trait {
        match self {
            Goal::Trap => Trait::Aggression,
            Goal::Score => Trait::Greed,
            Goal::Deny => Trait::Spite,
            Goal::Escape => Trait::Caution,
            Goal::Build => Trait::Patience,
            Goal::Steal => Trait::Opportunism,
            Goal::Dump => Trait::Pragmatism,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Goal::Trap => "trap",
            Goal::Score => "score",
            Goal::Deny => "deny",
            Goal::Escape => "escape",
            Goal::Build => "build",
            Goal::Steal => "steal",
            Goal::Dump => "dump",
        };
        write!(f, "{}", name)
    }
}

/// Closed interval inside [0, 100] with `min <= max`
///
/// Every mutator clamps and re-orders, so no sequence of calls can produce
/// an invalid range. Serialized as a `[min, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct TraitRange {
    min: f32,
    max: f32,
}

impl TraitRange {
    pub fn new(min: f32, max: f32) -> Self {
        let mut range = Self { min, max };
        range.normalize();
        range
    }

    /// Zero-width range that always rolls `value`
    pub fn fixed(value: f32) -> Self {
        Self::new(value, value)
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn center(&self) -> f32 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// Move both bounds
    pub fn shift(&mut self, delta: f32) {
        self.min += delta;
        self.max += delta;
        self.normalize();
    }

    pub fn shift_min(&mut self, delta: f32) {
        self.min += delta;
        self.normalize();
    }

    pub fn shift_max(&mut self, delta: f32) {
        self.max += delta;
        self.normalize();
    }

    /// Shrink toward the center by a fraction of the width (0.25 = 25%)
    pub fn narrow(&mut self, fraction: f32) {
        let half = self.width() * (1.0 - fraction.clamp(0.0, 1.0)) / 2.0;
        let center = self.center();
        self.min = center - half;
        self.max = center + half;
        self.normalize();
    }

    /// Grow away from the center by a fraction of the width
    pub fn widen(&mut self, fraction: f32) {
        let half = self.width() * (1.0 + fraction.max(0.0)) / 2.0;
        let center = self.center();
        self.min = center - half;
        self.max = center + half;
        self.normalize();
    }

    /// Uniform draw in [min, max]
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    fn normalize(&mut self) {
        // NaN collapses to the floor
        let clamp = |v: f32| if v.is_nan() { TRAIT_MIN } else { v.clamp(TRAIT_MIN, TRAIT_MAX) };
        self.min = clamp(self.min);
        self.max = clamp(self.max);
        if self.min > self.max {
            std::mem::swap(&mut self.min, &mut self.max);
        }
    }
}

impl From<[f32; 2]> for TraitRange {
    fn from(pair: [f32; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<TraitRange> for [f32; 2] {
    fn from(range: TraitRange) -> Self {
        [range.min, range.max]
    }
}

/// One range per trait
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitRanges {
    pub aggression: TraitRange,
    pub greed: TraitRange,
    pub spite: TraitRange,
    pub caution: TraitRange,
    pub patience: TraitRange,
    pub opportunism: TraitRange,
    pub pragmatism: TraitRange,
}

impl TraitRanges {
    /// Every trait set to the same range
    pub fn uniform(range: TraitRange) -> Self {
        Self {
            aggression: range,
            greed: range,
            spite: range,
            caution: range,
            patience: range,
            opportunism: range,
            pragmatism: range,
        }
    }

    pub fn get(&self, t: Trait) -> &TraitRange {
        match t {
            Trait::Aggression => &self.aggression,
            Trait::Greed => &self.greed,
            Trait::Spite => &self.spite,
            Trait::Caution => &self.caution,
            Trait::Patience => &self.patience,
            Trait::Opportunism => &self.opportunism,
            Trait::Pragmatism => &self.pragmatism,
        }
    }

    pub fn get_mut(&mut self, t: Trait) -> &mut TraitRange {
        match t {
            Trait::Aggression => &mut self.aggression,
            Trait::Greed => &mut self.greed,
            Trait::Spite => &mut self.spite,
            Trait::Caution => &mut self.caution,
            Trait::Patience => &mut self.patience,
            Trait::Opportunism => &mut self.opportunism,
            Trait::Pragmatism => &mut self.pragmatism,
        }
    }

    /// Shift a single trait
    pub fn shift(&mut self, t: Trait, delta: f32) {
        if delta != 0.0 {
            self.get_mut(t).shift(delta);
        }
    }

    /// Shift every trait by the same amount
    pub fn shift_all(&mut self, delta: f32) {
        for t in Trait::all() {
            self.shift(t, delta);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, &TraitRange)> {
        Trait::all().into_iter().map(move |t| (t, self.get(t)))
    }
}

/// Trait magnitudes rolled for one turn
///
/// Only the goal cascade reads these; evaluators score on board signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveTraits {
    values: [f32; 7],
}

impl EffectiveTraits {
    /// Roll every trait in declaration order
    pub fn roll<R: Rng + ?Sized>(ranges: &TraitRanges, rng: &mut R) -> Self {
        let mut values = [0.0; 7];
        for t in Trait::all() {
            values[t.index()] = ranges.get(t).roll(rng);
        }
        Self { values }
    }

    /// Same value for every trait
    pub fn constant(value: f32) -> Self {
        Self {
            values: [value.clamp(TRAIT_MIN, TRAIT_MAX); 7],
        }
    }

    pub fn get(&self, t: Trait) -> f32 {
        self.values[t.index()]
    }

    pub fn set(&mut self, t: Trait, value: f32) {
        self.values[t.index()] = value.clamp(TRAIT_MIN, TRAIT_MAX);
    }
}
