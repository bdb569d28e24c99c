//! Probabilistic goal cascade
//!
//! Walks the personality's goal priority list in order. Each goal activates
//! when a d100 roll lands at or below its trait's rolled magnitude; the first
//! activation wins. If nothing activates the primary goal is forced.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::ai::constants::ACTIVATION_DIE;
use crate::ai::traits::{EffectiveTraits, Goal};

/// One activation roll of the cascade
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CascadeStep {
    pub goal: Goal,
    pub threshold: f32,
    pub roll: u32,
    pub activated: bool,
}

/// Outcome of the cascade
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalSelection {
    pub goal: Goal,
    /// True when no goal activated and the goal was forced
    pub was_fallback: bool,
    pub steps: Vec<CascadeStep>,
}

/// Selects this turn's goal from a priority list and rolled traits
pub struct GoalSelector;

impl GoalSelector {
    /// Goal used when the priority list is empty
    pub const FALLBACK: Goal = Goal::Score;

    pub fn select<R: Rng + ?Sized>(
        priority: &[Goal],
        traits: &EffectiveTraits,
        rng: &mut R,
    ) -> GoalSelection {
        let mut steps = Vec::with_capacity(priority.len());

        for &goal in priority {
            let threshold = traits.get(goal.controlling_trait());
            let roll = rng.gen_range(1..=ACTIVATION_DIE);
            let activated = roll as f32 <= threshold;
            steps.push(CascadeStep {
                goal,
                threshold,
                roll,
                activated,
            });
            if activated {
                debug!(%goal, roll, threshold, "goal activated");
                return GoalSelection {
                    goal,
                    was_fallback: false,
                    steps,
                };
            }
        }

        let goal = priority.first().copied().unwrap_or(Self::FALLBACK);
        debug!(%goal, rolls = steps.len(), "no goal activated, forcing fallback");
        GoalSelection {
            goal,
            was_fallback: true,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::traits::Trait;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_certain_first_goal_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let traits = EffectiveTraits::constant(100.0);
        let selection = GoalSelector::select(&[Goal::Trap, Goal::Score], &traits, &mut rng);
        assert_eq!(selection.goal, Goal::Trap);
        assert!(!selection.was_fallback);
        assert_eq!(selection.steps.len(), 1);
    }

    #[test]
    fn test_all_failures_force_primary_goal() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let traits = EffectiveTraits::constant(0.0);
        let priority = [Goal::Trap, Goal::Deny, Goal::Build];
        let selection = GoalSelector::select(&priority, &traits, &mut rng);
        assert_eq!(selection.goal, Goal::Trap);
        assert!(selection.was_fallback);
        assert_eq!(selection.steps.len(), 3);
        assert!(selection.steps.iter().all(|s| !s.activated));
    }

    #[test]
    fn test_empty_priority_falls_back() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let selection = GoalSelector::select(&[], &EffectiveTraits::constant(100.0), &mut rng);
        assert_eq!(selection.goal, Goal::Score);
        assert!(selection.was_fallback);
        assert!(selection.steps.is_empty());
    }

    #[test]
    fn test_failed_goal_passes_to_next() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut traits = EffectiveTraits::constant(0.0);
        traits.set(Trait::Spite, 100.0);
        let selection = GoalSelector::select(&[Goal::Trap, Goal::Deny, Goal::Score], &traits, &mut rng);
        assert_eq!(selection.goal, Goal::Deny);
        assert_eq!(selection.steps.len(), 2);
    }

    #[test]
    fn test_rolls_stay_on_the_die() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let traits = EffectiveTraits::constant(50.0);
        for _ in 0..50 {
            let selection = GoalSelector::select(&Goal::all(), &traits, &mut rng);
            for step in selection.steps {
                assert!((1..=ACTIVATION_DIE).contains(&step.roll));
            }
        }
    }
}
