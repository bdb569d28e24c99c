//! Personality-driven AI for Glyphling
//!
//! Each turn a seat perceives the match, shifts its personality's trait
//! ranges to fit the situation, rolls a goal through its priority cascade,
//! scores every candidate against that goal and picks from the best few.

pub mod candidates;
pub mod constants;
pub mod detectors;
pub mod evaluators;
pub mod goal_selector;
pub mod perception;
pub mod personality;
pub mod player;
pub mod selection;
pub mod shift;
pub mod traits;

pub use candidates::{AiMove, CandidateGenerator};
pub use evaluators::{Breakdown, EvalContext, GoalEvaluationResult, Reason};
pub use goal_selector::{CascadeStep, GoalSelection, GoalSelector};
pub use perception::{
    GlyphlingPressureAssessor, HandQualityAssessor, LetterJunkAssessor, PerceptionSnapshot,
    ScorePerception,
};
pub use personality::{
    load_personality, preset, preset_names, MetaTraits, Personality, SubTraits, TraitDeltas,
};
pub use player::{AiEnv, AiPlayer, TurnDecision};
pub use selection::{select_move, Selection};
pub use shift::shifted_ranges;
pub use traits::{EffectiveTraits, Goal, Trait, TraitRange, TraitRanges};
