//! AI tuning configuration with documented constants
//!
//! The numbers here are tuned by play, not derived. They are grouped by the
//! stage of the decision pipeline that reads them and can be overridden from
//! TOML for balancing runs.

use serde::{Deserialize, Serialize};

use crate::core::error::{AiError, Result};

/// Tuning knobs for one AI seat
///
/// Every seat carries its own copy; there is no process-wide tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    // === CANDIDATE GENERATION ===
    /// Maximum number of candidates evaluated per turn
    ///
    /// Above this the candidate list is uniformly sampled down, so the whole
    /// move space keeps some coverage instead of only the first pieces.
    pub max_candidates: usize,

    // === MOVE SELECTION ===
    /// Maximum number of moves in the weighted selection pool
    pub pool_size: usize,

    /// Pool size used when no move reaches the threshold
    pub fallback_pool_size: usize,

    /// Absolute margin below the best score when every score is <= 0
    pub negative_field_margin: f32,

    // === PERCEPTION ===
    /// Maximum perceived-lead noise at zero confidence (the K constant)
    pub perception_noise: f32,

    /// Confidence multiplier applied at every end of turn
    ///
    /// At 0.9 a fully confident seat drops to ~0.35 after ten silent turns.
    pub confidence_decay: f32,

    /// Maximum drift of an estimate per turn at zero confidence
    pub drift_scale: f32,

    /// Number of recent scores per side kept for momentum
    pub momentum_window: usize,

    // === MORALE ===
    /// Opponent score that triggers the minor morale shift
    pub morale_minor_threshold: u32,

    /// Opponent score that triggers the full morale shift
    pub morale_full_threshold: u32,

    /// Opponent score that triggers the amplified morale shift
    pub morale_amplified_threshold: u32,

    /// Range shift (trait points) of a full morale event at sensitivity 100
    pub morale_shift: f32,

    // === TRAP ===
    /// Points per legal move removed from an enemy glyphling
    pub restriction_points: f32,

    /// Flat bonus when an enemy glyphling is left with zero moves
    pub full_trap_bonus: f32,

    /// Extra bonus per own glyphling adjacent to the freshly tangled enemy
    pub kill_shot_bonus_per_adjacent: f32,

    /// Board fill fraction above which self-tangling is considered
    pub self_tangle_fill: f32,

    /// Perceived lead above which self-tangling is considered
    pub self_tangle_lead: f32,

    /// Points an opponent collects per glyphling adjacent to a tangled one
    pub tangle_payout_per_adjacent: f32,

    // === STEAL ===
    /// Bonus per enemy tile when every other tile of the word is enemy owned
    pub full_steal_rate: f32,

    /// Bonus per enemy tile when the enemy only holds the majority
    pub partial_steal_rate: f32,

    // === DISCARDS ===
    /// Hand quality below which the seat cycles letters
    pub discard_quality_threshold: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            max_candidates: 300,

            pool_size: 8,
            fallback_pool_size: 5,
            negative_field_margin: 3.0,

            perception_noise: 8.0,
            confidence_decay: 0.9,
            drift_scale: 2.0,
            momentum_window: 5,

            morale_minor_threshold: 8,
            morale_full_threshold: 15,
            morale_amplified_threshold: 25,
            morale_shift: 10.0,

            restriction_points: 4.0,
            full_trap_bonus: 40.0,
            kill_shot_bonus_per_adjacent: 15.0,
            self_tangle_fill: 0.8,
            self_tangle_lead: 15.0,
            tangle_payout_per_adjacent: 5.0,

            full_steal_rate: 3.0,
            partial_steal_rate: 1.5,

            discard_quality_threshold: 4.0,
        }
    }
}

impl AiTuning {
    /// Create a new tuning with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a tuning table; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let tuning: AiTuning = toml::from_str(content)?;
        tuning.validate().map_err(AiError::InvalidTuning)?;
        Ok(tuning)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_candidates == 0 {
            return Err("max_candidates must be positive".into());
        }

        if self.pool_size == 0 || self.fallback_pool_size == 0 {
            return Err("selection pool sizes must be positive".into());
        }

        if !(0.0..=1.0).contains(&self.confidence_decay) {
            return Err(format!(
                "confidence_decay ({}) must be within [0, 1]",
                self.confidence_decay
            ));
        }

        if self.momentum_window == 0 {
            return Err("momentum_window must be positive".into());
        }

        // Morale tiers must escalate
        if !(self.morale_minor_threshold < self.morale_full_threshold
            && self.morale_full_threshold < self.morale_amplified_threshold)
        {
            return Err(format!(
                "morale thresholds must be strictly increasing ({} < {} < {})",
                self.morale_minor_threshold,
                self.morale_full_threshold,
                self.morale_amplified_threshold
            ));
        }

        if !(0.0..=1.0).contains(&self.self_tangle_fill) {
            return Err(format!(
                "self_tangle_fill ({}) must be a fraction",
                self.self_tangle_fill
            ));
        }

        if self.partial_steal_rate > self.full_steal_rate {
            return Err(format!(
                "partial_steal_rate ({}) should not exceed full_steal_rate ({})",
                self.partial_steal_rate, self.full_steal_rate
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(AiTuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let tuning = AiTuning::from_toml_str("full_steal_rate = 4.0\nself_tangle_lead = 20.0\n")
            .expect("partial tuning should parse");
        assert_eq!(tuning.full_steal_rate, 4.0);
        assert_eq!(tuning.self_tangle_lead, 20.0);
        assert_eq!(tuning.max_candidates, 300);
    }

    #[test]
    fn test_rejects_unordered_morale_tiers() {
        let result = AiTuning::from_toml_str("morale_minor_threshold = 30\n");
        assert!(matches!(result, Err(AiError::InvalidTuning(_))));
    }

    #[test]
    fn test_rejects_inverted_steal_rates() {
        let tuning = AiTuning {
            partial_steal_rate: 5.0,
            ..AiTuning::default()
        };
        assert!(tuning.validate().is_err());
    }
}
