//! Deny: block enemy leylines and the hexes enemy words need

use crate::ai::candidates::AiMove;
use crate::ai::detectors::contest_at;
use crate::ai::evaluators::{simulate, Breakdown, EvalContext, GoalEvaluationResult, Reason};
use crate::ai::perception::LetterJunkAssessor;
use crate::ai::traits::Goal;

const LEYLINE_BLOCK_POINTS: f32 = 3.0;
const ADJACENT_ENEMY_TILE: f32 = 1.0;
const NEAR_ENEMY_TILE: f32 = 0.5;
const PROXIMITY_CAP: f32 = 5.0;
/// Junk grade at which the cast tile also clears the hand
const DOUBLE_DUTY_JUNK: f32 = 5.0;
const DOUBLE_DUTY_BONUS: f32 = 2.0;

pub fn evaluate(candidate: &AiMove, ctx: &EvalContext) -> GoalEvaluationResult {
    if simulate(ctx.state, ctx.side, candidate).is_none() {
        return GoalEvaluationResult::invalid(*candidate, Goal::Deny);
    }
    let enemy = ctx.enemy();
    let cast = candidate.cast_position;
    let mut reasons = Vec::new();

    let leylines_blocked = ctx
        .state
        .placed_glyphlings(enemy)
        .filter(|g| ctx.rules.legal_destinations(ctx.state, g.id).contains(&cast))
        .count();
    if leylines_blocked > 0 {
        reasons.push(Reason::LeylineBlocked);
    }

    let proximity: f32 = ctx
        .state
        .tiles()
        .filter(|(_, tile)| tile.owner == enemy)
        .map(|(hex, _)| match hex.distance(&cast) {
            1 => ADJACENT_ENEMY_TILE,
            2 => NEAR_ENEMY_TILE,
            _ => 0.0,
        })
        .sum::<f32>()
        .min(PROXIMITY_CAP);
    if proximity > 0.0 {
        reasons.push(Reason::NearEnemyTiles);
    }

    let contest = contest_at(ctx.state, ctx.lexicon, cast, enemy, ctx.vocabulary_threshold).best_value;
    if contest > 0.0 {
        reasons.push(Reason::EnemyWordDenied);
    }

    let junk = LetterJunkAssessor::assess(candidate.letter, ctx.state.hand(ctx.side));
    let junk_bonus = if junk >= DOUBLE_DUTY_JUNK {
        reasons.push(Reason::JunkDoubleDuty);
        DOUBLE_DUTY_BONUS
    } else {
        0.0
    };

    let score = leylines_blocked as f32 * LEYLINE_BLOCK_POINTS + proximity + contest + junk_bonus;
    if score == 0.0 {
        reasons.push(Reason::NoDenialValue);
    }

    GoalEvaluationResult {
        candidate: *candidate,
        goal: Goal::Deny,
        score,
        reasons,
        breakdown: Breakdown::Deny {
            leylines_blocked,
            proximity,
            contest,
            junk_bonus,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::evaluators::test_support::{mv, Fixture};
    use crate::board::HexCoord;
    use crate::core::types::Side;

    #[test]
    fn test_blocking_enemy_word_spot() {
        let mut fx = Fixture::new(4);
        fx.state.place_tile(HexCoord::new(-2, 0), 'C', Side::Second);
        fx.state.place_tile(HexCoord::new(-1, 0), 'A', Side::Second);
        let mine = fx.state.add_glyphling(Side::First, Some(HexCoord::new(2, 2)));
        fx.state.set_hand(Side::First, vec!['Q', 'E']);

        let spot = evaluate(
            &mv(mine, HexCoord::new(2, 2), HexCoord::new(0, 0), 'Q'),
            &fx.ctx(Side::First),
        );
        assert!(spot.reasons.contains(&Reason::EnemyWordDenied));
        assert!(spot.reasons.contains(&Reason::JunkDoubleDuty));

        let elsewhere = evaluate(
            &mv(mine, HexCoord::new(2, 2), HexCoord::new(3, 1), 'E'),
            &fx.ctx(Side::First),
        );
        assert!(spot.score > elsewhere.score);
    }

    #[test]
    fn test_blocking_enemy_slide() {
        let mut fx = Fixture::new(4);
        fx.state.add_glyphling(Side::Second, Some(HexCoord::new(-3, 0)));
        let mine = fx.state.add_glyphling(Side::First, Some(HexCoord::new(2, 2)));
        fx.state.set_hand(Side::First, vec!['E']);

        let result = evaluate(
            &mv(mine, HexCoord::new(2, 2), HexCoord::new(0, 0), 'E'),
            &fx.ctx(Side::First),
        );
        assert!(result.reasons.contains(&Reason::LeylineBlocked));
        assert!(result.score >= LEYLINE_BLOCK_POINTS);
    }

    #[test]
    fn test_empty_corner_has_no_denial_value() {
        let mut fx = Fixture::new(4);
        let mine = fx.state.add_glyphling(Side::First, Some(HexCoord::new(4, -4)));
        fx.state.set_hand(Side::First, vec!['E']);
        let result = evaluate(
            &mv(mine, HexCoord::new(4, -4), HexCoord::new(3, -4), 'E'),
            &fx.ctx(Side::First),
        );
        assert_eq!(result.score, 0.0);
        assert_eq!(result.reasons, vec![Reason::NoDenialValue]);
    }

    #[test]
    fn test_junk_letter_earns_bonus_on_its_own() {
        let mut fx = Fixture::new(4);
        let mine = fx.state.add_glyphling(Side::First, Some(HexCoord::new(4, -4)));
        fx.state.set_hand(Side::First, vec!['Q', 'E']);
        let result = evaluate(
            &mv(mine, HexCoord::new(4, -4), HexCoord::new(3, -4), 'Q'),
            &fx.ctx(Side::First),
        );
        assert_eq!(result.reasons, vec![Reason::JunkDoubleDuty]);
        assert_eq!(result.score, DOUBLE_DUTY_BONUS);
    }
}
