//! AI constants - fixed breakpoints of the decision pipeline
//!
//! Balance knobs live in `AiTuning`; these are the structural numbers the
//! shift engine and perception are written against. Shift magnitudes are
//! ADDITIVE trait points at full intensity and full sensitivity.

// Trait scale
pub const TRAIT_MIN: f32 = 0.0;
pub const TRAIT_MAX: f32 = 100.0;
pub const SENSITIVITY_SCALE: f32 = 100.0;

// Cascade activation die
pub const ACTIVATION_DIE: u32 = 100;

// Perception
pub const MIN_CONFIDENCE: f32 = 0.1;
pub const MAX_CONFIDENCE: f32 = 1.0;
pub const OBSERVE_CONFIDENCE_GAIN: f32 = 0.25;
pub const OBSERVE_NOISE_SCALE: f32 = 0.5;
/// Opponent score stays "recent" for this many end-of-turn calls
pub const MORALE_MEMORY_TURNS: u32 = 2;

// Difficulty scaling
pub const EASY_WIDEN: f32 = 0.3;
pub const EASY_SHIFT: f32 = -10.0;
pub const HARD_NARROW: f32 = 0.3;
pub const HARD_SHIFT: f32 = 5.0;

// Morale tiers (multipliers of AiTuning::morale_shift)
pub const MORALE_MINOR: f32 = 0.5;
pub const MORALE_FULL: f32 = 1.0;
pub const MORALE_AMPLIFIED: f32 = 1.5;

// Endgame ramp (board fill fraction)
pub const ENDGAME_START: f32 = 0.4;
pub const ENDGAME_FULL: f32 = 0.8;

// Desperation ramp (perceived lead)
pub const DESPERATION_START: f32 = -5.0;
pub const DESPERATION_FULL: f32 = -25.0;
pub const DESPERATION_AGGRESSION: f32 = 15.0;
pub const DESPERATION_GREED: f32 = 10.0;
pub const DESPERATION_CAUTION: f32 = -15.0;
pub const DESPERATION_PRAGMATISM: f32 = 10.0;

// Pressure responses (pressure scale 0-10)
pub const PRESSURE_TRIGGER: f32 = 5.0;
pub const PRESSURE_MAX: f32 = 10.0;
pub const OWN_PRESSURE_CAUTION: f32 = 20.0;
pub const OWN_PRESSURE_AGGRESSION: f32 = -10.0;
pub const OPPORTUNITY_AGGRESSION: f32 = 15.0;
pub const OPPORTUNITY_OPPORTUNISM: f32 = 10.0;

// Hand quality responses (quality scale 0-10)
pub const BAD_HAND: f32 = 4.0;
pub const GREAT_HAND: f32 = 7.0;
pub const BAD_HAND_PRAGMATISM: f32 = 20.0;
pub const BAD_HAND_GREED: f32 = -10.0;
pub const GREAT_HAND_GREED: f32 = 15.0;
pub const GREAT_HAND_PRAGMATISM: f32 = -10.0;

// Momentum responses
pub const HOT_STREAK: f32 = 2.0;
pub const COLD_STREAK: f32 = -2.0;
pub const HOT_STREAK_AGGRESSION: f32 = 8.0;
pub const COLD_STREAK_CAUTION: f32 = 8.0;

// Evaluation
/// Score given to candidates that no longer apply to the simulated state
pub const SENTINEL_SCORE: f32 = -1000.0;

// Discards
pub const MIN_DISCARDS: usize = 3;
pub const MAX_DISCARDS: usize = 6;
