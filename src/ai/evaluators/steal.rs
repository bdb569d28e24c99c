//! Steal: complete words made mostly of enemy tiles
//!
//! A word counts when enemy tiles outnumber ours, the new tile included.
//! Words with no other own tile are full steals and pay the higher rate.

use crate::ai::candidates::AiMove;
use crate::ai::evaluators::{simulate, Breakdown, EvalContext, GoalEvaluationResult, Reason};
use crate::ai::traits::Goal;

pub fn evaluate(candidate: &AiMove, ctx: &EvalContext) -> GoalEvaluationResult {
    let Some(simulated) = simulate(ctx.state, ctx.side, candidate) else {
        return GoalEvaluationResult::invalid(*candidate, Goal::Steal);
    };
    let cast = candidate.cast_position;
    let enemy = ctx.enemy();
    let mut reasons = Vec::new();

    let mut score = 0.0;
    let mut stolen = Vec::new();
    let mut enemy_tiles = 0;
    let mut full_steals = 0;

    for word in ctx.known_words(&simulated, candidate) {
        let others = word.positions.iter().filter(|p| **p != cast);
        let theirs = others.clone().filter(|p| ctx.state.owner_of(**p) == Some(enemy)).count();
        let ours = 1 + others.filter(|p| ctx.state.owner_of(**p) == Some(ctx.side)).count();
        if theirs <= ours {
            continue;
        }

        let rate = if ours == 1 {
            full_steals += 1;
            ctx.tuning.full_steal_rate
        } else {
            ctx.tuning.partial_steal_rate
        };
        score += word.len() as f32 + theirs as f32 * rate;
        enemy_tiles += theirs;
        stolen.push(word.text);
    }

    if stolen.is_empty() {
        reasons.push(Reason::NothingToSteal);
    } else if full_steals > 0 {
        reasons.push(Reason::FullSteal);
    } else {
        reasons.push(Reason::PartialSteal);
    }

    GoalEvaluationResult {
        candidate: *candidate,
        goal: Goal::Steal,
        score,
        reasons,
        breakdown: Breakdown::Steal {
            words: stolen,
            enemy_tiles,
            full_steals,
        },
    }
}
