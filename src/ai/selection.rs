//! Weighted move selection
//!
//! Results are ranked by score. Moves within a flexibility-dependent margin
//! of the best form a small pool, and one is drawn with weight proportional
//! to how far it clears the threshold. Rigid seats almost always take the
//! top move; flexible ones spread out.

use ordered_float::OrderedFloat;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::ai::evaluators::GoalEvaluationResult;
use crate::core::config::AiTuning;

/// Fraction of the best score kept at flexibility 1.0
const FLEXIBLE_FLOOR: f32 = 0.7;
/// Additional fraction kept as flexibility drops to 0.0
const RIGID_SPAN: f32 = 0.25;
const MIN_WEIGHT: f64 = 0.1;

/// The chosen result plus how the pool looked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub result: GoalEvaluationResult,
    pub threshold: f32,
    pub pool_size: usize,
    /// True when no result reached the threshold
    pub used_fallback: bool,
}

/// Score a result must reach to enter the pool
pub fn pool_threshold(best: f32, flexibility: f32, tuning: &AiTuning) -> f32 {
    if best > 0.0 {
        best * (FLEXIBLE_FLOOR + (1.0 - flexibility.clamp(0.0, 1.0)) * RIGID_SPAN)
    } else {
        best - tuning.negative_field_margin
    }
}

/// Pick one result; None only when `results` is empty
pub fn select_move<R: Rng + ?Sized>(
    mut results: Vec<GoalEvaluationResult>,
    flexibility: f32,
    tuning: &AiTuning,
    rng: &mut R,
) -> Option<Selection> {
    if results.is_empty() {
        return None;
    }

    // Stable sort keeps generation order among equal scores
    results.sort_by_key(|r| std::cmp::Reverse(OrderedFloat(r.score)));
    let best = results[0].score;
    let threshold = pool_threshold(best, flexibility, tuning);

    let qualified = results
        .iter()
        .take_while(|r| r.score >= threshold)
        .take(tuning.pool_size.max(1))
        .count();
    let (pool_len, used_fallback) = if qualified > 0 {
        (qualified, false)
    } else {
        warn!(best, threshold, "no move reached the pool threshold");
        (tuning.fallback_pool_size.max(1).min(results.len()), true)
    };
    results.truncate(pool_len);

    let weights: Vec<f64> = results
        .iter()
        .map(|r| ((r.score - threshold) as f64 + 1.0).max(MIN_WEIGHT))
        .collect();
    let picked = match WeightedIndex::new(&weights) {
        Ok(dist) => dist.sample(rng),
        Err(e) => {
            warn!(error = %e, "invalid selection weights, taking the best move");
            0
        }
    };

    debug!(
        best,
        threshold,
        pool = results.len(),
        picked,
        score = results[picked].score,
        "selected move"
    );
    let result = results.swap_remove(picked);
    Some(Selection {
        result,
        threshold,
        pool_size: pool_len,
        used_fallback,
    })
}
