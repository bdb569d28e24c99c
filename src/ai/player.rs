//! AI player - one seat's decision pipeline
//!
//! perceive -> shift ranges -> roll traits -> goal cascade -> candidates ->
//! evaluate for the chosen goal -> weighted selection. The player owns its
//! personality, perception and RNG; the board is only ever read.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::ai::candidates::{AiMove, CandidateGenerator};
use crate::ai::constants::{MAX_DISCARDS, MIN_DISCARDS, TRAIT_MAX};
use crate::ai::evaluators::{evaluate, EvalContext, GoalEvaluationResult};
use crate::ai::goal_selector::{GoalSelection, GoalSelector};
use crate::ai::perception::{
    GlyphlingPressureAssessor, HandQualityAssessor, LetterJunkAssessor, PerceptionSnapshot,
    ScorePerception,
};
use crate::ai::personality::Personality;
use crate::ai::selection::select_move;
use crate::ai::shift::shifted_ranges;
use crate::ai::traits::{EffectiveTraits, Trait, TraitRanges};
use crate::board::{GameState, Lexicon, MoveRules};
use crate::core::config::AiTuning;
use crate::core::error::{AiError, Result};
use crate::core::types::{Difficulty, Side};

/// Seed used by `AiPlayer::new`
const DEFAULT_SEED: u64 = 42;

/// Board collaborators the player consults
#[derive(Clone, Copy)]
pub struct AiEnv<'a> {
    pub rules: &'a dyn MoveRules,
    pub lexicon: &'a dyn Lexicon,
}

/// Full trace of one turn's decision
#[derive(Debug, Clone, Serialize)]
pub struct TurnDecision {
    pub snapshot: PerceptionSnapshot,
    pub shifted: TraitRanges,
    pub effective: EffectiveTraits,
    pub selection: GoalSelection,
    pub candidates_considered: usize,
    pub threshold: f32,
    pub pool_size: usize,
    pub chosen: GoalEvaluationResult,
}

impl TurnDecision {
    pub fn ai_move(&self) -> AiMove {
        self.chosen.candidate
    }
}

pub struct AiPlayer {
    personality: Personality,
    side: Side,
    difficulty: Difficulty,
    tuning: AiTuning,
    perception: ScorePerception,
    seed: u64,
    rng: ChaCha8Rng,
}

impl AiPlayer {
    /// Create with the default seed
    pub fn new(personality: Personality, side: Side) -> Self {
        Self::with_seed(personality, side, DEFAULT_SEED)
    }

    /// Create with a specific RNG seed for deterministic behavior
    pub fn with_seed(personality: Personality, side: Side, seed: u64) -> Self {
        let tuning = AiTuning::default();
        let perception = ScorePerception::new(
            personality.meta.self_score_accuracy,
            personality.meta.opponent_score_accuracy,
            &tuning,
        );
        Self {
            personality,
            side,
            difficulty: Difficulty::default(),
            tuning,
            perception,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replace the tuning; observations so far are discarded
    pub fn with_tuning(mut self, tuning: AiTuning) -> Result<Self> {
        tuning.validate().map_err(AiError::InvalidTuning)?;
        self.perception = ScorePerception::new(
            self.personality.meta.self_score_accuracy,
            self.personality.meta.opponent_score_accuracy,
            &tuning,
        );
        self.tuning = tuning;
        Ok(self)
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn perception(&self) -> &ScorePerception {
        &self.perception
    }

    /// Build this turn's view of the match
    pub fn perceive(&mut self, state: &GameState, env: AiEnv) -> PerceptionSnapshot {
        PerceptionSnapshot {
            perceived_lead: self.perception.perceived_lead(&mut self.rng),
            my_max_pressure: GlyphlingPressureAssessor::max_for_side(state, env.rules, self.side),
            opponent_max_pressure: GlyphlingPressureAssessor::max_for_side(
                state,
                env.rules,
                self.side.opponent(),
            ),
            hand_quality: HandQualityAssessor::assess(state.hand(self.side)),
            momentum: self.perception.momentum(),
            board_fill: state.board_fill(),
            last_opponent_score: self.perception.last_opponent_score(),
            difficulty: self.difficulty,
        }
    }

    /// Run the whole pipeline and keep the trace
    ///
    /// None when the seat has no legal candidate (no placed glyphling, empty
    /// hand or nowhere to cast).
    pub fn decide(&mut self, state: &GameState, env: AiEnv) -> Option<TurnDecision> {
        let snapshot = self.perceive(state, env);
        let shifted = shifted_ranges(&self.personality, &snapshot, &self.tuning);
        let effective = EffectiveTraits::roll(&shifted, &mut self.rng);
        let selection = GoalSelector::select(&self.personality.goal_priority, &effective, &mut self.rng);

        let candidates = CandidateGenerator::new(env.rules, self.tuning.max_candidates).generate(
            state,
            self.side,
            &mut self.rng,
        );
        if candidates.is_empty() {
            info!(personality = %self.personality.name, side = %self.side, "no legal candidates");
            return None;
        }

        let ctx = EvalContext {
            state,
            side: self.side,
            rules: env.rules,
            lexicon: env.lexicon,
            tuning: &self.tuning,
            vocabulary_threshold: self.personality.vocabulary_threshold(),
            perceived_lead: snapshot.perceived_lead,
        };
        let results: Vec<GoalEvaluationResult> = candidates
            .iter()
            .map(|c| evaluate(selection.goal, c, &ctx))
            .collect();

        let candidates_considered = results.len();
        let picked = select_move(results, self.personality.flexibility(), &self.tuning, &mut self.rng)?;

        debug!(
            personality = %self.personality.name,
            goal = %selection.goal,
            fallback = selection.was_fallback,
            candidates = candidates_considered,
            score = picked.result.score,
            "decided move"
        );

        Some(TurnDecision {
            snapshot,
            shifted,
            effective,
            selection,
            candidates_considered,
            threshold: picked.threshold,
            pool_size: picked.pool_size,
            chosen: picked.result,
        })
    }

    /// Choose this turn's move, None if there is nothing legal to do
    pub fn choose_move(&mut self, state: &GameState, env: AiEnv) -> Option<AiMove> {
        self.decide(state, env).map(|d| d.ai_move())
    }

    /// Letters to throw back when the hand is poor, worst first
    ///
    /// Empty when the hand is good enough to keep. Patient seats cycle more
    /// letters at once.
    pub fn choose_discards(&mut self, state: &GameState, env: AiEnv) -> Vec<char> {
        let hand = state.hand(self.side);
        let quality = HandQualityAssessor::assess(hand);
        if hand.is_empty() || quality >= self.tuning.discard_quality_threshold {
            return Vec::new();
        }

        let snapshot = self.perceive(state, env);
        let shifted = shifted_ranges(&self.personality, &snapshot, &self.tuning);
        let patience = shifted.get(Trait::Patience).roll(&mut self.rng);
        let extra = ((patience / TRAIT_MAX) * (MAX_DISCARDS - MIN_DISCARDS) as f32).round() as usize;
        let count = (MIN_DISCARDS + extra).clamp(MIN_DISCARDS, MAX_DISCARDS).min(hand.len());

        let mut ranked: Vec<(usize, f32)> = hand
            .iter()
            .enumerate()
            .map(|(i, &c)| (i, LetterJunkAssessor::assess(c, hand)))
            .collect();
        // Worst first; earlier hand slots win ties
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let discards: Vec<char> = ranked.into_iter().take(count).map(|(i, _)| hand[i]).collect();
        debug!(quality, count, ?discards, "chose discards");
        discards
    }

    /// Points this seat just scored
    pub fn notify_scored(&mut self, points: u32) {
        self.perception.observe_my_score(points, &mut self.rng);
    }

    /// Points the opponent just scored
    pub fn notify_opponent_scored(&mut self, points: u32) {
        self.perception.observe_opponent_score(points, &mut self.rng);
    }

    /// Called once after every turn, whoever played it
    pub fn end_turn(&mut self) {
        self.perception.end_turn(&mut self.rng);
    }

    /// Back to the freshly constructed state, same seed
    pub fn reset(&mut self) {
        self.perception.reset();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }
}
