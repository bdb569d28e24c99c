//! Trap: take legal moves away from enemy glyphlings
//!
//! Points per removed move, a flat bonus for a full trap plus extra per own
//! glyphling next to the victim. Tangling our own mover is only worth it
//! late in the game with a lead that covers the opponent's payout.

use crate::ai::candidates::AiMove;
use crate::ai::detectors::{adjacent_glyphlings, movement_restriction};
use crate::ai::evaluators::{simulate, Breakdown, EvalContext, GoalEvaluationResult, Reason};
use crate::ai::traits::Goal;

const SELF_TANGLE_WEIGHT: f32 = 0.5;
const SELF_TANGLE_PENALTY: f32 = 20.0;

pub fn evaluate(candidate: &AiMove, ctx: &EvalContext) -> GoalEvaluationResult {
    let Some(simulated) = simulate(ctx.state, ctx.side, candidate) else {
        return GoalEvaluationResult::invalid(*candidate, Goal::Trap);
    };
    let tuning = ctx.tuning;
    let mut reasons = Vec::new();

    let reports = movement_restriction(ctx.rules, ctx.state, &simulated, ctx.enemy());
    let moves_removed: usize = reports.iter().map(|r| r.removed()).sum();
    let mut score = moves_removed as f32 * tuning.restriction_points;
    if moves_removed > 0 {
        reasons.push(Reason::MovesRestricted);
    }

    let mut full_traps = 0;
    let mut kill_shot_bonus = 0.0;
    for report in reports.iter().filter(|r| r.is_full_trap()) {
        full_traps += 1;
        let helpers = simulated
            .position_of(report.glyphling)
            .map(|at| adjacent_glyphlings(&simulated, at, ctx.side))
            .unwrap_or(0);
        kill_shot_bonus += tuning.full_trap_bonus + helpers as f32 * tuning.kill_shot_bonus_per_adjacent;
    }
    if full_traps > 0 {
        reasons.push(Reason::KillShot);
    }
    score += kill_shot_bonus;

    let mut self_tangle = 0.0;
    if ctx.rules.is_tangled(&simulated, candidate.glyphling) {
        let late = simulated.board_fill() > tuning.self_tangle_fill;
        let comfortable = ctx.perceived_lead > tuning.self_tangle_lead;
        let payout = simulated
            .position_of(candidate.glyphling)
            .map(|at| adjacent_glyphlings(&simulated, at, ctx.enemy()))
            .unwrap_or(0) as f32
            * tuning.tangle_payout_per_adjacent;
        let net = ctx.perceived_lead - payout;

        if late && comfortable && net > 0.0 {
            self_tangle = net * SELF_TANGLE_WEIGHT;
            reasons.push(Reason::SelfTangleClose);
        } else {
            self_tangle = -(SELF_TANGLE_PENALTY + payout);
            reasons.push(Reason::SelfTangleRisk);
        }
    }
    score += self_tangle;

    if reasons.is_empty() {
        reasons.push(Reason::NoTrapValue);
    }

    GoalEvaluationResult {
        candidate: *candidate,
        goal: Goal::Trap,
        score,
        reasons,
        breakdown: Breakdown::Trap {
            moves_removed,
            full_traps,
            kill_shot_bonus,
            self_tangle,
        },
    }
}
