//! Dump: spend the worst letter somewhere it does no harm

use crate::ai::candidates::AiMove;
use crate::ai::evaluators::{simulate, Breakdown, EvalContext, GoalEvaluationResult, Reason};
use crate::ai::perception::LetterJunkAssessor;
use crate::ai::traits::Goal;

const JUNK_WEIGHT: f32 = 1.5;
const DUMP_JUNK: f32 = 7.0;
const DISCARD_JUNK: f32 = 4.0;
/// Minimum distance to every other glyphling for a safe dump
const SAFE_DISTANCE: u32 = 3;
const SAFE_BONUS: f32 = 3.0;

pub fn evaluate(candidate: &AiMove, ctx: &EvalContext) -> GoalEvaluationResult {
    let Some(simulated) = simulate(ctx.state, ctx.side, candidate) else {
        return GoalEvaluationResult::invalid(*candidate, Goal::Dump);
    };
    let cast = candidate.cast_position;
    let junk = LetterJunkAssessor::assess(candidate.letter, ctx.state.hand(ctx.side));
    let mut reasons = Vec::new();

    reasons.push(if junk >= DUMP_JUNK {
        Reason::Dump
    } else if junk >= DISCARD_JUNK {
        Reason::Discard
    } else {
        Reason::NotJunk
    });

    // The caster always stands within cast range, so only the others count
    let safe_distance = simulated
        .glyphlings()
        .iter()
        .filter(|g| g.id != candidate.glyphling)
        .filter_map(|g| g.position)
        .all(|at| at.distance(&cast) >= SAFE_DISTANCE);
    let mut score = junk * JUNK_WEIGHT;
    if safe_distance {
        reasons.push(Reason::SafeDump);
        score += SAFE_BONUS;
    }

    GoalEvaluationResult {
        candidate: *candidate,
        goal: Goal::Dump,
        score,
        reasons,
        breakdown: Breakdown::Dump { junk, safe_distance },
    }
}
