//! Glyphling AI - personality-driven opponents for a hex-grid word game

pub mod ai;
pub mod board;
pub mod core;

pub use ai::{AiEnv, AiMove, AiPlayer, Goal, Personality};
pub use board::{Dictionary, GameState, HexCoord, LeylineRules};
pub use core::{AiError, AiTuning, Difficulty, GlyphlingId, Result, Side};
