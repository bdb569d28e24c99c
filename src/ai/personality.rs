//! AI personality configuration loaded from TOML
//!
//! A personality is the immutable template of one AI seat: base trait ranges,
//! the goal priority cascade, perception meta-traits and the sensitivities
//! that scale each situational shift. Seven presets ship embedded in the
//! crate; hosts can load more from disk.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::ai::constants::{SENSITIVITY_SCALE, TRAIT_MAX};
use crate::ai::traits::{Goal, Trait, TraitRange, TraitRanges};
use crate::core::error::{AiError, Result};

const PRESETS: [(&str, &str); 7] = [
    ("architect", include_str!("../../data/personalities/architect.toml")),
    ("balanced", include_str!("../../data/personalities/balanced.toml")),
    ("bully", include_str!("../../data/personalities/bully.toml")),
    ("magpie", include_str!("../../data/personalities/magpie.toml")),
    ("saboteur", include_str!("../../data/personalities/saboteur.toml")),
    ("survivor", include_str!("../../data/personalities/survivor.toml")),
    ("wordsmith", include_str!("../../data/personalities/wordsmith.toml")),
];

/// Perception quality and morale direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaTraits {
    /// Share of the dictionary this seat knows (0.0 = commonest words only)
    pub vocabulary_modifier: f32,
    /// How exactly own scoring is tracked (0.0 to 1.0)
    pub self_score_accuracy: f32,
    /// How exactly opponent scoring is tracked (0.0 to 1.0)
    pub opponent_score_accuracy: f32,
    /// +1 fights back after a big enemy turn, -1 gets rattled
    pub morale_response: f32,
}

impl Default for MetaTraits {
    fn default() -> Self {
        Self {
            vocabulary_modifier: 0.5,
            self_score_accuracy: 0.8,
            opponent_score_accuracy: 0.6,
            morale_response: 0.0,
        }
    }
}

/// Sensitivity of each situational shift (0 = ignores it, 100 = full effect)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubTraits {
    pub endgame: f32,
    pub desperation: f32,
    pub momentum: f32,
    pub pressure: f32,
    pub opportunity: f32,
    pub hand_quality: f32,
    pub morale: f32,
    /// Willingness to take a lower-ranked move (widens the selection pool)
    pub flexibility: f32,
}

impl Default for SubTraits {
    fn default() -> Self {
        Self {
            endgame: 50.0,
            desperation: 50.0,
            momentum: 50.0,
            pressure: 50.0,
            opportunity: 50.0,
            hand_quality: 50.0,
            morale: 50.0,
            flexibility: 50.0,
        }
    }
}

/// Per-trait additive deltas, zero when omitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitDeltas {
    pub aggression: f32,
    pub greed: f32,
    pub spite: f32,
    pub caution: f32,
    pub patience: f32,
    pub opportunism: f32,
    pub pragmatism: f32,
}

impl TraitDeltas {
    pub fn get(&self, t: Trait) -> f32 {
        match t {
            Trait::Aggression => self.aggression,
            Trait::Greed => self.greed,
            Trait::Spite => self.spite,
            Trait::Caution => self.caution,
            Trait::Patience => self.patience,
            Trait::Opportunism => self.opportunism,
            Trait::Pragmatism => self.pragmatism,
        }
    }
}

/// Complete personality template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Ordered goal cascade; earlier goals get the first activation roll
    pub goal_priority: Vec<Goal>,
    pub ranges: TraitRanges,
    #[serde(default)]
    pub meta: MetaTraits,
    #[serde(default)]
    pub sub_traits: SubTraits,
    /// Endgame lean at full board fill and endgame sensitivity 100
    #[serde(default)]
    pub endgame_shifts: TraitDeltas,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            description: String::new(),
            goal_priority: Goal::all().to_vec(),
            ranges: TraitRanges::uniform(TraitRange::new(40.0, 60.0)),
            meta: MetaTraits::default(),
            sub_traits: SubTraits::default(),
            endgame_shifts: TraitDeltas::default(),
        }
    }
}

impl Personality {
    /// Parse and validate a personality from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let personality: Personality = toml::from_str(content)?;
        personality.validate()?;
        Ok(personality)
    }

    /// Minimum dictionary frequency this seat recognizes
    ///
    /// Vocabulary 0.8 knows words down to frequency 20; vocabulary 0.0 only
    /// recognizes words at the top of the scale.
    pub fn vocabulary_threshold(&self) -> f32 {
        (1.0 - self.meta.vocabulary_modifier) * TRAIT_MAX
    }

    /// Flexibility as a 0.0-1.0 fraction
    pub fn flexibility(&self) -> f32 {
        (self.sub_traits.flexibility / SENSITIVITY_SCALE).clamp(0.0, 1.0)
    }

    /// First goal of the cascade
    pub fn primary_goal(&self) -> Option<Goal> {
        self.goal_priority.first().copied()
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| AiError::InvalidPersonality {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }

        let mut seen = BTreeSet::new();
        for goal in &self.goal_priority {
            if !seen.insert(*goal) {
                return Err(invalid(format!("goal '{}' listed twice", goal)));
            }
        }

        let unit = [
            ("vocabulary_modifier", self.meta.vocabulary_modifier),
            ("self_score_accuracy", self.meta.self_score_accuracy),
            ("opponent_score_accuracy", self.meta.opponent_score_accuracy),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{} must be within 0.0-1.0, got {}", field, value)));
            }
        }
        if !(-1.0..=1.0).contains(&self.meta.morale_response) {
            return Err(invalid(format!(
                "morale_response must be within -1.0-1.0, got {}",
                self.meta.morale_response
            )));
        }

        let s = &self.sub_traits;
        let sensitivities = [
            ("endgame", s.endgame),
            ("desperation", s.desperation),
            ("momentum", s.momentum),
            ("pressure", s.pressure),
            ("opportunity", s.opportunity),
            ("hand_quality", s.hand_quality),
            ("morale", s.morale),
            ("flexibility", s.flexibility),
        ];
        for (field, value) in sensitivities {
            if !(0.0..=SENSITIVITY_SCALE).contains(&value) {
                return Err(invalid(format!("sub-trait {} must be within 0-100, got {}", field, value)));
            }
        }

        Ok(())
    }
}

/// Names of the embedded presets, sorted
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

/// Load one of the embedded presets by name
pub fn preset(name: &str) -> Result<Personality> {
    let key = name.trim().to_ascii_lowercase();
    let (_, content) = PRESETS
        .iter()
        .find(|(preset, _)| *preset == key)
        .ok_or_else(|| AiError::UnknownPersonality(name.to_string()))?;
    Personality::from_toml_str(content)
}

/// Load a personality from a TOML file on disk
pub fn load_personality(path: impl AsRef<Path>) -> Result<Personality> {
    let contents = fs::read_to_string(path.as_ref())?;
    Personality::from_toml_str(&contents)
}
