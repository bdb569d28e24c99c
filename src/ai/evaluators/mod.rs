//! Goal evaluators
//!
//! Each evaluator scores one candidate against one goal by simulating the
//! move on a private copy of the state. Scores are comparable only within a
//! goal; the selector never mixes goals in one ranking.

pub mod build;
pub mod deny;
pub mod dump;
pub mod escape;
pub mod score;
pub mod steal;
pub mod trap;

use serde::Serialize;

use crate::ai::candidates::AiMove;
use crate::ai::constants::SENTINEL_SCORE;
use crate::ai::traits::Goal;
use crate::board::{FoundWord, GameState, Lexicon, MoveRules};
use crate::core::config::AiTuning;
use crate::core::types::Side;

/// Read-only inputs shared by every evaluator
pub struct EvalContext<'a> {
    pub state: &'a GameState,
    pub side: Side,
    pub rules: &'a dyn MoveRules,
    pub lexicon: &'a dyn Lexicon,
    pub tuning: &'a AiTuning,
    /// Minimum word frequency this seat recognizes
    pub vocabulary_threshold: f32,
    pub perceived_lead: f32,
}

impl EvalContext<'_> {
    pub fn enemy(&self) -> Side {
        self.side.opponent()
    }

    /// Words the move forms that this seat knows
    pub fn known_words(&self, simulated: &GameState, candidate: &AiMove) -> Vec<FoundWord> {
        self.lexicon
            .find_words_formed_at(simulated, candidate.cast_position, candidate.letter)
            .into_iter()
            .filter(|w| {
                self.lexicon
                    .is_word_above_frequency_threshold(&w.text, self.vocabulary_threshold)
            })
            .collect()
    }
}

/// Human-readable tags explaining a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    KillShot,
    MovesRestricted,
    SelfTangleClose,
    SelfTangleRisk,
    NoTrapValue,
    WordsFormed,
    LongWord,
    MultiWord,
    NoKnownWords,
    LeylineBlocked,
    EnemyWordDenied,
    NearEnemyTiles,
    JunkDoubleDuty,
    NoDenialValue,
    PressureRelieved,
    PressureIncreased,
    RiskyPosition,
    SelfTangled,
    GapsOpened,
    ChainBuilding,
    OverClustered,
    FullSteal,
    PartialSteal,
    NothingToSteal,
    Dump,
    Discard,
    NotJunk,
    SafeDump,
    InvalidMove,
}

/// Goal-specific sub-scores behind a result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Breakdown {
    Trap {
        moves_removed: usize,
        full_traps: usize,
        kill_shot_bonus: f32,
        self_tangle: f32,
    },
    Score {
        words: Vec<String>,
        base: f32,
        long_word_bonus: f32,
        multi_word_bonus: f32,
    },
    Deny {
        leylines_blocked: usize,
        proximity: f32,
        contest: f32,
        junk_bonus: f32,
    },
    Escape {
        pressure_before: f32,
        pressure_after: f32,
        moves_after: usize,
        directions_after: usize,
        risky: bool,
    },
    Build {
        gaps: usize,
        extension_paths: usize,
        intersections: usize,
        spacing: f32,
        chain: f32,
    },
    Steal {
        words: Vec<String>,
        enemy_tiles: usize,
        full_steals: usize,
    },
    Dump {
        junk: f32,
        safe_distance: bool,
    },
    Invalid,
}

/// One candidate scored against one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalEvaluationResult {
    pub candidate: AiMove,
    pub goal: Goal,
    pub score: f32,
    pub reasons: Vec<Reason>,
    pub breakdown: Breakdown,
}

impl GoalEvaluationResult {
    /// Result for a candidate that cannot be simulated
    pub fn invalid(candidate: AiMove, goal: Goal) -> Self {
        Self {
            candidate,
            goal,
            score: SENTINEL_SCORE,
            reasons: vec![Reason::InvalidMove],
            breakdown: Breakdown::Invalid,
        }
    }
}

/// Apply a candidate to a copy of the state
///
/// None if the glyphling is gone, belongs to the other side, or is not on
/// the board.
pub fn simulate(state: &GameState, side: Side, candidate: &AiMove) -> Option<GameState> {
    let glyphling = state.glyphling(candidate.glyphling)?;
    if glyphling.owner != side || glyphling.position.is_none() {
        return None;
    }
    let mut simulated = state.clone();
    simulated.relocate(candidate.glyphling, candidate.destination).ok()?;
    simulated.place_tile(candidate.cast_position, candidate.letter, side);
    simulated.take_from_hand(side, candidate.letter);
    Some(simulated)
}

/// Score a candidate against a goal
pub fn evaluate(goal: Goal, candidate: &AiMove, ctx: &EvalContext) -> GoalEvaluationResult {
    match goal {
        Goal::Trap => trap::evaluate(candidate, ctx),
        Goal::Score => score::evaluate(candidate, ctx),
        Goal::Deny => deny::evaluate(candidate, ctx),
        Goal::Escape => escape::evaluate(candidate, ctx),
        Goal::Build => build::evaluate(candidate, ctx),
        Goal::Steal => steal::evaluate(candidate, ctx),
        Goal::Dump => dump::evaluate(candidate, ctx),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::board::{Dictionary, HexCoord, LeylineRules};
    use crate::core::types::GlyphlingId;

    pub struct Fixture {
        pub state: GameState,
        pub rules: LeylineRules,
        pub dictionary: Dictionary,
        pub tuning: AiTuning,
        pub lead: f32,
    }

    impl Fixture {
        pub fn new(radius: u32) -> Self {
            Self {
                state: GameState::new(radius),
                rules: LeylineRules::default(),
                dictionary: Dictionary::from_entries([
                    ("CAT", 90u8),
                    ("CATS", 80),
                    ("ACT", 70),
                    ("TEA", 60),
                    ("EAT", 90),
                    ("STAR", 75),
                    ("RATS", 40),
                    ("QAT", 5),
                ]),
                tuning: AiTuning::default(),
                lead: 0.0,
            }
        }

        pub fn ctx(&self, side: Side) -> EvalContext<'_> {
            EvalContext {
                state: &self.state,
                side,
                rules: &self.rules,
                lexicon: &self.dictionary,
                tuning: &self.tuning,
                vocabulary_threshold: 0.0,
                perceived_lead: self.lead,
            }
        }
    }

    pub fn mv(glyphling: GlyphlingId, destination: HexCoord, cast: HexCoord, letter: char) -> AiMove {
        AiMove {
            glyphling,
            destination,
            cast_position: cast,
            letter,
        }
    }
}
