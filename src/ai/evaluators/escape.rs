//! Escape: get the moving glyphling out of a tight spot

use crate::ai::candidates::AiMove;
use crate::ai::detectors::escape_profile;
use crate::ai::evaluators::{simulate, Breakdown, EvalContext, GoalEvaluationResult, Reason};
use crate::ai::perception::GlyphlingPressureAssessor;
use crate::ai::traits::Goal;

const RELIEF_WEIGHT: f32 = 3.0;
const WORSENING_PENALTY: f32 = 2.0;
const DIRECTION_POINTS: f32 = 1.5;
const MOVE_POINTS: f32 = 0.3;
const COUNTED_MOVES: usize = 10;
/// At or below this many open directions a position is risky
const RISKY_DIRECTIONS: usize = 2;
const TANGLED_PENALTY: f32 = 20.0;

pub fn evaluate(candidate: &AiMove, ctx: &EvalContext) -> GoalEvaluationResult {
    let Some(simulated) = simulate(ctx.state, ctx.side, candidate) else {
        return GoalEvaluationResult::invalid(*candidate, Goal::Escape);
    };
    let mover = candidate.glyphling;
    let mut reasons = Vec::new();

    let pressure_before = GlyphlingPressureAssessor::assess(ctx.state, ctx.rules, mover);
    let pressure_after = GlyphlingPressureAssessor::assess(&simulated, ctx.rules, mover);
    let relief = pressure_before - pressure_after;

    let mut score = if relief > 0.0 {
        reasons.push(Reason::PressureRelieved);
        relief * RELIEF_WEIGHT
    } else if relief < 0.0 {
        reasons.push(Reason::PressureIncreased);
        relief * (RELIEF_WEIGHT + WORSENING_PENALTY)
    } else {
        0.0
    };

    let profile = escape_profile(&simulated, ctx.rules, mover);
    score += profile.directions as f32 * DIRECTION_POINTS + profile.moves.min(COUNTED_MOVES) as f32 * MOVE_POINTS;

    let risky = profile.directions <= RISKY_DIRECTIONS;
    if profile.moves == 0 {
        reasons.push(Reason::SelfTangled);
        score -= TANGLED_PENALTY;
    } else if risky {
        reasons.push(Reason::RiskyPosition);
    }

    GoalEvaluationResult {
        candidate: *candidate,
        goal: Goal::Escape,
        score,
        reasons,
        breakdown: Breakdown::Escape {
            pressure_before,
            pressure_after,
            moves_after: profile.moves,
            directions_after: profile.directions,
            risky,
        },
    }
}
