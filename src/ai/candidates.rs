//! Candidate move enumeration
//!
//! A candidate is (glyphling, destination, cast position, letter). Staying in
//! place counts as a destination. Cast positions depend on where the
//! glyphling ends up, so each destination is probed on a private copy of the
//! state; the caller's state is never touched.

use std::collections::BTreeSet;

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{GameState, HexCoord, MoveRules};
use crate::core::types::{GlyphlingId, Side};

/// One complete turn: move a glyphling, then cast a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AiMove {
    pub glyphling: GlyphlingId,
    pub destination: HexCoord,
    pub cast_position: HexCoord,
    pub letter: char,
}

pub struct CandidateGenerator<'a> {
    rules: &'a dyn MoveRules,
    max_candidates: usize,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(rules: &'a dyn MoveRules, max_candidates: usize) -> Self {
        Self { rules, max_candidates }
    }

    /// Every legal candidate for `side`, sampled down to the cap
    ///
    /// Sampling is uniform without replacement and keeps generation order.
    pub fn generate<R: Rng + ?Sized>(&self, state: &GameState, side: Side, rng: &mut R) -> Vec<AiMove> {
        let letters: BTreeSet<char> = state
            .hand(side)
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if letters.is_empty() {
            return Vec::new();
        }

        let mut all = Vec::new();
        for glyphling in state.placed_glyphlings(side) {
            let Some(origin) = glyphling.position else {
                continue;
            };
            let mut destinations = vec![origin];
            destinations.extend(self.rules.legal_destinations(state, glyphling.id));

            let mut probe = state.clone();
            for destination in destinations {
                if probe.relocate(glyphling.id, destination).is_err() {
                    continue;
                }
                for cast_position in self.rules.legal_cast_positions(&probe, glyphling.id) {
                    for &letter in &letters {
                        all.push(AiMove {
                            glyphling: glyphling.id,
                            destination,
                            cast_position,
                            letter,
                        });
                    }
                }
            }
        }

        let total = all.len();
        if total <= self.max_candidates {
            debug!(total, "generated candidates");
            return all;
        }

        let mut picked = index::sample(rng, total, self.max_candidates).into_vec();
        picked.sort_unstable();
        debug!(total, kept = picked.len(), "sampled candidates");
        picked.into_iter().map(|i| all[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::LeylineRules;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (GameState, GlyphlingId) {
        let mut state = GameState::new(3);
        let id = state.add_glyphling(Side::First, Some(HexCoord::new(0, 0)));
        state.add_glyphling(Side::Second, Some(HexCoord::new(2, -2)));
        state.set_hand(Side::First, vec!['a', 'T', 'A']);
        (state, id)
    }

    #[test]
    fn test_generation_leaves_state_untouched() {
        let (state, _) = setup();
        let before = state.clone();
        let rules = LeylineRules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let moves = CandidateGenerator::new(&rules, 10_000).generate(&state, Side::First, &mut rng);
        assert!(!moves.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_duplicate_letters_collapse() {
        let (state, id) = setup();
        let rules = LeylineRules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let moves = CandidateGenerator::new(&rules, 10_000).generate(&state, Side::First, &mut rng);
        let letters: BTreeSet<char> = moves.iter().map(|m| m.letter).collect();
        assert_eq!(letters, BTreeSet::from(['A', 'T']));
        assert!(moves.iter().all(|m| m.glyphling == id));
    }

    #[test]
    fn test_staying_in_place_is_a_candidate() {
        let (state, id) = setup();
        let rules = LeylineRules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let moves = CandidateGenerator::new(&rules, 10_000).generate(&state, Side::First, &mut rng);
        let origin = state.position_of(id).unwrap();
        assert!(moves.iter().any(|m| m.destination == origin));
    }

    #[test]
    fn test_cast_positions_follow_destination() {
        let (state, id) = setup();
        let rules = LeylineRules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let moves = CandidateGenerator::new(&rules, 10_000).generate(&state, Side::First, &mut rng);
        let origin = state.position_of(id).unwrap();
        // Moving away frees the origin hex as a cast target
        assert!(moves
            .iter()
            .any(|m| m.destination != origin && m.cast_position == origin));
        for m in &moves {
            assert_ne!(m.cast_position, m.destination);
        }
    }

    #[test]
    fn test_cap_samples_without_duplicates() {
        let (state, _) = setup();
        let rules = LeylineRules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let moves = CandidateGenerator::new(&rules, 25).generate(&state, Side::First, &mut rng);
        assert_eq!(moves.len(), 25);
        let unique: std::collections::HashSet<AiMove> = moves.iter().copied().collect();
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn test_sampling_is_seeded() {
        let (state, _) = setup();
        let rules = LeylineRules::default();
        let generator = CandidateGenerator::new(&rules, 25);
        let a = generator.generate(&state, Side::First, &mut ChaCha8Rng::seed_from_u64(9));
        let b = generator.generate(&state, Side::First, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_hand_yields_nothing() {
        let (mut state, _) = setup();
        state.set_hand(Side::First, Vec::new());
        let rules = LeylineRules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(CandidateGenerator::new(&rules, 300)
            .generate(&state, Side::First, &mut rng)
            .is_empty());
    }
}
