pub mod config;
pub mod error;
pub mod types;

pub use config::AiTuning;
pub use error::{AiError, Result};
pub use types::{Difficulty, GlyphlingId, Side};
