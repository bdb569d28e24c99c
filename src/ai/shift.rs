//! Situational range shifts
//!
//! Copies the personality's base ranges and moves them according to what the
//! seat perceives this turn. Steps run in a fixed order (difficulty, morale,
//! endgame, desperation, own pressure, opponent pressure, hand quality,
//! momentum) and each one scales by its sub-trait sensitivity.

use tracing::trace;

use crate::ai::constants::*;
use crate::ai::perception::PerceptionSnapshot;
use crate::ai::personality::Personality;
use crate::ai::traits::{Trait, TraitRanges};
use crate::core::config::AiTuning;
use crate::core::types::Difficulty;

/// Shifted copy of the personality's ranges for this turn
///
/// The personality itself is never modified.
pub fn shifted_ranges(
    personality: &Personality,
    snapshot: &PerceptionSnapshot,
    tuning: &AiTuning,
) -> TraitRanges {
    let mut ranges = personality.ranges;
    let sens = |value: f32| (value / SENSITIVITY_SCALE).clamp(0.0, 1.0);
    let subs = &personality.sub_traits;

    apply_difficulty(&mut ranges, snapshot.difficulty);

    // Morale
    let tier = morale_tier(snapshot.last_opponent_score, tuning);
    if tier > 0.0 {
        let delta = tier * tuning.morale_shift * sens(subs.morale) * personality.meta.morale_response;
        trace!(score = snapshot.last_opponent_score, delta, "morale shift");
        ranges.shift_all(delta);
    }

    // Endgame
    let intensity = ramp(snapshot.board_fill, ENDGAME_START, ENDGAME_FULL) * sens(subs.endgame);
    if intensity > 0.0 {
        trace!(fill = snapshot.board_fill, intensity, "endgame shift");
        for t in Trait::all() {
            ranges.shift(t, personality.endgame_shifts.get(t) * intensity);
        }
    }

    // Desperation
    if snapshot.perceived_lead < DESPERATION_START {
        let intensity =
            ramp(-snapshot.perceived_lead, -DESPERATION_START, -DESPERATION_FULL) * sens(subs.desperation);
        trace!(lead = snapshot.perceived_lead, intensity, "desperation shift");
        ranges.shift(Trait::Aggression, DESPERATION_AGGRESSION * intensity);
        ranges.shift(Trait::Greed, DESPERATION_GREED * intensity);
        ranges.shift(Trait::Caution, DESPERATION_CAUTION * intensity);
        ranges.shift(Trait::Pragmatism, DESPERATION_PRAGMATISM * intensity);
    }

    // Own glyphlings under pressure
    if snapshot.my_max_pressure >= PRESSURE_TRIGGER {
        let intensity = (snapshot.my_max_pressure / PRESSURE_MAX).min(1.0) * sens(subs.pressure);
        trace!(pressure = snapshot.my_max_pressure, intensity, "pressure shift");
        ranges.shift(Trait::Caution, OWN_PRESSURE_CAUTION * intensity);
        ranges.shift(Trait::Aggression, OWN_PRESSURE_AGGRESSION * intensity);
    }

    // Enemy glyphlings under pressure
    if snapshot.opponent_max_pressure >= PRESSURE_TRIGGER {
        let intensity = (snapshot.opponent_max_pressure / PRESSURE_MAX).min(1.0) * sens(subs.opportunity);
        trace!(pressure = snapshot.opponent_max_pressure, intensity, "opportunity shift");
        ranges.shift(Trait::Aggression, OPPORTUNITY_AGGRESSION * intensity);
        ranges.shift(Trait::Opportunism, OPPORTUNITY_OPPORTUNISM * intensity);
    }

    // Hand quality
    if snapshot.hand_quality < BAD_HAND {
        let intensity = ((BAD_HAND - snapshot.hand_quality) / BAD_HAND).min(1.0) * sens(subs.hand_quality);
        ranges.shift(Trait::Pragmatism, BAD_HAND_PRAGMATISM * intensity);
        ranges.shift(Trait::Greed, BAD_HAND_GREED * intensity);
    } else if snapshot.hand_quality > GREAT_HAND {
        let intensity =
            ((snapshot.hand_quality - GREAT_HAND) / (10.0 - GREAT_HAND)).min(1.0) * sens(subs.hand_quality);
        ranges.shift(Trait::Greed, GREAT_HAND_GREED * intensity);
        ranges.shift(Trait::Pragmatism, GREAT_HAND_PRAGMATISM * intensity);
    }

    // Momentum
    if snapshot.momentum > HOT_STREAK {
        ranges.shift(Trait::Aggression, HOT_STREAK_AGGRESSION * sens(subs.momentum));
    } else if snapshot.momentum < COLD_STREAK {
        ranges.shift(Trait::Caution, COLD_STREAK_CAUTION * sens(subs.momentum));
    }

    ranges
}

fn apply_difficulty(ranges: &mut TraitRanges, difficulty: Difficulty) {
    match difficulty {
        Difficulty::Easy => {
            for t in Trait::all() {
                ranges.get_mut(t).widen(EASY_WIDEN);
            }
            ranges.shift_all(EASY_SHIFT);
        }
        Difficulty::Normal => {}
        Difficulty::Hard => {
            for t in Trait::all() {
                ranges.get_mut(t).narrow(HARD_NARROW);
            }
            ranges.shift_all(HARD_SHIFT);
        }
    }
}

/// Multiplier of the morale shift for an opponent turn worth `score`
fn morale_tier(score: u32, tuning: &AiTuning) -> f32 {
    if score >= tuning.morale_amplified_threshold {
        MORALE_AMPLIFIED
    } else if score >= tuning.morale_full_threshold {
        MORALE_FULL
    } else if score >= tuning.morale_minor_threshold {
        MORALE_MINOR
    } else {
        0.0
    }
}

/// Linear 0..1 ramp between `start` and `full`
fn ramp(value: f32, start: f32, full: f32) -> f32 {
    if full <= start {
        return if value >= full { 1.0 } else { 0.0 };
    }
    ((value - start) / (full - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::personality::preset;
    use crate::ai::traits::TraitRange;

    fn flat_personality() -> Personality {
        let mut personality = Personality::default();
        personality.ranges = TraitRanges::uniform(TraitRange::new(40.0, 60.0));
        personality.sub_traits.morale = 100.0;
        personality.sub_traits.endgame = 100.0;
        personality.sub_traits.desperation = 100.0;
        personality.sub_traits.pressure = 100.0;
        personality.sub_traits.opportunity = 100.0;
        personality.sub_traits.hand_quality = 100.0;
        personality.sub_traits.momentum = 100.0;
        personality
    }

    #[test]
    fn test_calm_situation_keeps_base_ranges() {
        let personality = flat_personality();
        let shifted = shifted_ranges(&personality, &PerceptionSnapshot::default(), &AiTuning::default());
        assert_eq!(shifted, personality.ranges);
    }

    #[test]
    fn test_base_personality_is_untouched() {
        let personality = preset("bully").unwrap();
        let before = personality.clone();
        let snapshot = PerceptionSnapshot {
            perceived_lead: -30.0,
            my_max_pressure: 9.0,
            ..Default::default()
        };
        let _ = shifted_ranges(&personality, &snapshot, &AiTuning::default());
        assert_eq!(personality, before);
    }

    #[test]
    fn test_desperation_at_full_intensity() {
        let personality = flat_personality();
        let snapshot = PerceptionSnapshot {
            perceived_lead: -40.0,
            ..Default::default()
        };
        let shifted = shifted_ranges(&personality, &snapshot, &AiTuning::default());
        assert_eq!(shifted.aggression, TraitRange::new(55.0, 75.0));
        assert_eq!(shifted.greed, TraitRange::new(50.0, 70.0));
        assert_eq!(shifted.caution, TraitRange::new(25.0, 45.0));
        assert_eq!(shifted.pragmatism, TraitRange::new(50.0, 70.0));
        assert_eq!(shifted.spite, personality.ranges.spite);
    }

    #[test]
    fn test_slightly_behind_is_not_desperate() {
        let personality = flat_personality();
        let snapshot = PerceptionSnapshot {
            perceived_lead: -4.0,
            ..Default::default()
        };
        let shifted = shifted_ranges(&personality, &snapshot, &AiTuning::default());
        assert_eq!(shifted, personality.ranges);
    }

    #[test]
    fn test_morale_direction_follows_response() {
        let tuning = AiTuning::default();
        let snapshot = PerceptionSnapshot {
            last_opponent_score: tuning.morale_full_threshold,
            ..Default::default()
        };

        let mut fighter = flat_personality();
        fighter.meta.morale_response = 1.0;
        let shifted = shifted_ranges(&fighter, &snapshot, &tuning);
        assert_eq!(shifted.greed.min(), 40.0 + tuning.morale_shift);

        let mut rattled = flat_personality();
        rattled.meta.morale_response = -1.0;
        let shifted = shifted_ranges(&rattled, &snapshot, &tuning);
        assert_eq!(shifted.greed.min(), 40.0 - tuning.morale_shift);
    }

    #[test]
    fn test_amplified_morale_beats_minor() {
        let tuning = AiTuning::default();
        let mut personality = flat_personality();
        personality.meta.morale_response = 1.0;

        let minor = PerceptionSnapshot {
            last_opponent_score: tuning.morale_minor_threshold,
            ..Default::default()
        };
        let amplified = PerceptionSnapshot {
            last_opponent_score: tuning.morale_amplified_threshold,
            ..Default::default()
        };
        let low = shifted_ranges(&personality, &minor, &tuning);
        let high = shifted_ranges(&personality, &amplified, &tuning);
        assert!(high.aggression.min() > low.aggression.min());
    }

    #[test]
    fn test_endgame_shift_ramps_with_fill() {
        let mut personality = flat_personality();
        personality.endgame_shifts.greed = 20.0;

        let half = PerceptionSnapshot {
            board_fill: 0.6,
            ..Default::default()
        };
        let full = PerceptionSnapshot {
            board_fill: 0.95,
            ..Default::default()
        };
        let tuning = AiTuning::default();
        let halfway = shifted_ranges(&personality, &half, &tuning).greed.min();
        assert!((halfway - 50.0).abs() < 1e-3, "halfway greed {}", halfway);
        assert_eq!(shifted_ranges(&personality, &full, &tuning).greed.min(), 60.0);
    }

    #[test]
    fn test_own_pressure_raises_caution() {
        let personality = flat_personality();
        let snapshot = PerceptionSnapshot {
            my_max_pressure: 10.0,
            ..Default::default()
        };
        let shifted = shifted_ranges(&personality, &snapshot, &AiTuning::default());
        assert_eq!(shifted.caution, TraitRange::new(60.0, 80.0));
        assert_eq!(shifted.aggression, TraitRange::new(30.0, 50.0));
    }

    #[test]
    fn test_zero_sensitivity_ignores_pressure() {
        let mut personality = flat_personality();
        personality.sub_traits.pressure = 0.0;
        let snapshot = PerceptionSnapshot {
            my_max_pressure: 10.0,
            ..Default::default()
        };
        let shifted = shifted_ranges(&personality, &snapshot, &AiTuning::default());
        assert_eq!(shifted.caution, personality.ranges.caution);
    }

    #[test]
    fn test_bad_hand_favors_dumping() {
        let personality = flat_personality();
        let snapshot = PerceptionSnapshot {
            hand_quality: 0.0,
            ..Default::default()
        };
        let shifted = shifted_ranges(&personality, &snapshot, &AiTuning::default());
        assert!(shifted.pragmatism.min() > personality.ranges.pragmatism.min());
        assert!(shifted.greed.min() < personality.ranges.greed.min());
    }

    #[test]
    fn test_pressured_enemy_invites_attack() {
        let personality = flat_personality();
        let snapshot = PerceptionSnapshot {
            opponent_max_pressure: 10.0,
            ..Default::default()
        };
        let shifted = shifted_ranges(&personality, &snapshot, &AiTuning::default());
        assert_eq!(shifted.aggression, TraitRange::new(55.0, 75.0));
        assert_eq!(shifted.opportunism, TraitRange::new(50.0, 70.0));
        assert_eq!(shifted.caution, personality.ranges.caution);

        let calm = PerceptionSnapshot {
            opponent_max_pressure: PRESSURE_TRIGGER - 0.5,
            ..Default::default()
        };
        assert_eq!(shifted_ranges(&personality, &calm, &AiTuning::default()), personality.ranges);
    }

    #[test]
    fn test_great_hand_favors_scoring() {
        let personality = flat_personality();
        let great = PerceptionSnapshot {
            hand_quality: 10.0,
            ..Default::default()
        };
        let shifted = shifted_ranges(&personality, &great, &AiTuning::default());
        assert_eq!(shifted.greed, TraitRange::new(55.0, 75.0));
        assert_eq!(shifted.pragmatism, TraitRange::new(30.0, 50.0));

        let borderline = PerceptionSnapshot {
            hand_quality: GREAT_HAND,
            ..Default::default()
        };
        assert_eq!(shifted_ranges(&personality, &borderline, &AiTuning::default()), personality.ranges);
    }

    #[test]
    fn test_momentum_streaks() {
        let personality = flat_personality();
        let tuning = AiTuning::default();
        let hot = PerceptionSnapshot {
            momentum: 3.0,
            ..Default::default()
        };
        let cold = PerceptionSnapshot {
            momentum: -3.0,
            ..Default::default()
        };
        let even = PerceptionSnapshot {
            momentum: HOT_STREAK,
            ..Default::default()
        };

        let shifted = shifted_ranges(&personality, &hot, &tuning);
        assert_eq!(shifted.aggression, TraitRange::new(48.0, 68.0));
        assert_eq!(shifted.caution, personality.ranges.caution);

        let shifted = shifted_ranges(&personality, &cold, &tuning);
        assert_eq!(shifted.caution, TraitRange::new(48.0, 68.0));
        assert_eq!(shifted.aggression, personality.ranges.aggression);

        assert_eq!(shifted_ranges(&personality, &even, &tuning), personality.ranges);
    }

    #[test]
    fn test_hard_narrows_and_easy_widens() {
        let personality = flat_personality();
        let tuning = AiTuning::default();
        let hard = PerceptionSnapshot {
            difficulty: Difficulty::Hard,
            ..Default::default()
        };
        let easy = PerceptionSnapshot {
            difficulty: Difficulty::Easy,
            ..Default::default()
        };
        let hard_range = shifted_ranges(&personality, &hard, &tuning).greed;
        let easy_range = shifted_ranges(&personality, &easy, &tuning).greed;
        assert!(hard_range.width() < 20.0);
        assert!(easy_range.width() > 20.0);
        assert!(hard_range.center() > easy_range.center());
    }

    #[test]
    fn test_ramp() {
        assert_eq!(ramp(0.4, 0.4, 0.8), 0.0);
        assert!((ramp(0.6, 0.4, 0.8) - 0.5).abs() < 1e-5);
        assert_eq!(ramp(2.0, 0.4, 0.8), 1.0);
    }
}
