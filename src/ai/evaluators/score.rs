//! Score: form the most valuable known words

use crate::ai::candidates::AiMove;
use crate::ai::evaluators::{simulate, Breakdown, EvalContext, GoalEvaluationResult, Reason};
use crate::ai::traits::Goal;

/// Bonus per own tile already in a formed word
const OWNED_TILE_BONUS: f32 = 0.5;
/// Words at least this long earn the long-word bonus
const LONG_WORD: usize = 5;
const LONG_WORD_BONUS_PER_LETTER: f32 = 2.0;
const MULTI_WORD_BONUS: f32 = 3.0;

pub fn evaluate(candidate: &AiMove, ctx: &EvalContext) -> GoalEvaluationResult {
    let Some(simulated) = simulate(ctx.state, ctx.side, candidate) else {
        return GoalEvaluationResult::invalid(*candidate, Goal::Score);
    };

    let words = ctx.known_words(&simulated, candidate);
    let mut reasons = Vec::new();

    let mut base = 0.0;
    let mut long_word_bonus = 0.0;
    for word in &words {
        let owned = word
            .positions
            .iter()
            .filter(|p| **p != candidate.cast_position && ctx.state.owner_of(**p) == Some(ctx.side))
            .count();
        base += word.len() as f32 + owned as f32 * OWNED_TILE_BONUS;
        if word.len() >= LONG_WORD {
            long_word_bonus += (word.len() + 1 - LONG_WORD) as f32 * LONG_WORD_BONUS_PER_LETTER;
        }
    }
    let multi_word_bonus = words.len().saturating_sub(1) as f32 * MULTI_WORD_BONUS;

    if words.is_empty() {
        reasons.push(Reason::NoKnownWords);
    } else {
        reasons.push(Reason::WordsFormed);
    }
    if long_word_bonus > 0.0 {
        reasons.push(Reason::LongWord);
    }
    if multi_word_bonus > 0.0 {
        reasons.push(Reason::MultiWord);
    }

    GoalEvaluationResult {
        candidate: *candidate,
        goal: Goal::Score,
        score: base + long_word_bonus + multi_word_bonus,
        reasons,
        breakdown: Breakdown::Score {
            words: words.into_iter().map(|w| w.text).collect(),
            base,
            long_word_bonus,
            multi_word_bonus,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::evaluators::test_support::{mv, Fixture};
    use crate::board::HexCoord;
    use crate::core::types::Side;

    fn with_row() -> (Fixture, crate::core::types::GlyphlingId) {
        let mut fx = Fixture::new(4);
        fx.state.place_tile(HexCoord::new(-2, 0), 'C', Side::First);
        fx.state.place_tile(HexCoord::new(-1, 0), 'A', Side::Second);
        let mine = fx.state.add_glyphling(Side::First, Some(HexCoord::new(1, 1)));
        fx.state.set_hand(Side::First, vec!['T', 'Z']);
        (fx, mine)
    }

    #[test]
    fn test_word_scores_length_and_own_tiles() {
        let (fx, mine) = with_row();
        let result = evaluate(
            &mv(mine, HexCoord::new(1, 1), HexCoord::new(0, 0), 'T'),
            &fx.ctx(Side::First),
        );
        // CAT: 3 letters + one own tile
        assert_eq!(result.score, 3.5);
        assert_eq!(result.reasons, vec![Reason::WordsFormed]);
    }

    #[test]
    fn test_no_word_scores_zero() {
        let (fx, mine) = with_row();
        let result = evaluate(
            &mv(mine, HexCoord::new(1, 1), HexCoord::new(0, 0), 'Z'),
            &fx.ctx(Side::First),
        );
        assert_eq!(result.score, 0.0);
        assert_eq!(result.reasons, vec![Reason::NoKnownWords]);
    }

    #[test]
    fn test_rare_word_unknown_to_small_vocabulary() {
        let mut fx = Fixture::new(4);
        fx.state.place_tile(HexCoord::new(-2, 0), 'Q', Side::First);
        fx.state.place_tile(HexCoord::new(-1, 0), 'A', Side::First);
        let mine = fx.state.add_glyphling(Side::First, Some(HexCoord::new(1, 1)));
        fx.state.set_hand(Side::First, vec!['T']);
        let candidate = mv(mine, HexCoord::new(1, 1), HexCoord::new(0, 0), 'T');

        let mut ctx = fx.ctx(Side::First);
        assert!(evaluate(&candidate, &ctx).score > 0.0);

        ctx.vocabulary_threshold = 50.0;
        assert_eq!(evaluate(&candidate, &ctx).score, 0.0);
    }

    #[test]
    fn test_two_words_earn_multi_word_bonus() {
        let (mut fx, mine) = with_row();
        // E A above the cast hex along the R axis spells EAT downward
        fx.state.place_tile(HexCoord::new(0, -2), 'E', Side::Second);
        fx.state.place_tile(HexCoord::new(0, -1), 'A', Side::Second);
        let result = evaluate(
            &mv(mine, HexCoord::new(1, 1), HexCoord::new(0, 0), 'T'),
            &fx.ctx(Side::First),
        );
        assert!(result.reasons.contains(&Reason::MultiWord));
        assert_eq!(result.score, 3.5 + 3.0 + MULTI_WORD_BONUS);
    }
}
