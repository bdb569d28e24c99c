//! Build: lay tiles that open future words

use crate::ai::candidates::AiMove;
use crate::ai::detectors::setup_at;
use crate::ai::evaluators::{simulate, Breakdown, EvalContext, GoalEvaluationResult, Reason};
use crate::ai::traits::Goal;

const GAP_POINTS: f32 = 2.0;
const PATH_POINTS: f32 = 1.0;
const INTERSECTION_POINTS: f32 = 1.5;
const CHAIN_ADJACENT: f32 = 1.0;
const CHAIN_NEAR: f32 = 0.5;
const CHAIN_CAP: f32 = 3.0;

pub fn evaluate(candidate: &AiMove, ctx: &EvalContext) -> GoalEvaluationResult {
    let Some(simulated) = simulate(ctx.state, ctx.side, candidate) else {
        return GoalEvaluationResult::invalid(*candidate, Goal::Build);
    };
    let cast = candidate.cast_position;
    let setup = setup_at(&simulated, cast, ctx.side);
    let mut reasons = Vec::new();

    let chain: f32 = ctx
        .state
        .tiles()
        .filter(|(hex, tile)| tile.owner == ctx.side && **hex != cast)
        .map(|(hex, _)| match hex.distance(&cast) {
            1 => CHAIN_ADJACENT,
            2 => CHAIN_NEAR,
            _ => 0.0,
        })
        .sum::<f32>()
        .min(CHAIN_CAP);

    if setup.productive_gaps > 0 {
        reasons.push(Reason::GapsOpened);
    }
    if chain > 0.0 {
        reasons.push(Reason::ChainBuilding);
    }
    if setup.spacing_bonus < 0.0 {
        reasons.push(Reason::OverClustered);
    }

    let score = setup.productive_gaps as f32 * GAP_POINTS
        + setup.extension_paths as f32 * PATH_POINTS
        + setup.leyline_intersections as f32 * INTERSECTION_POINTS
        + setup.spacing_bonus
        + chain;

    GoalEvaluationResult {
        candidate: *candidate,
        goal: Goal::Build,
        score,
        reasons,
        breakdown: Breakdown::Build {
            gaps: setup.productive_gaps,
            extension_paths: setup.extension_paths,
            intersections: setup.leyline_intersections,
            spacing: setup.spacing_bonus,
            chain,
        },
    }
}
