//! Board collaborator - geometry, state, legality and dictionary
//!
//! The AI core reaches the board only through the queries exposed here:
//! occupancy/ownership on `GameState`, legality through `MoveRules` and word
//! search through `Lexicon`. Hosts may swap in their own rules or lexicon.

pub mod hex;
pub mod lexicon;
pub mod rules;
pub mod state;

pub use hex::{HexCoord, HexDirection, LeylineAxis};
pub use lexicon::{Dictionary, FoundWord, Lexicon, MAX_FREQUENCY, MIN_WORD_LEN};
pub use rules::{LeylineRules, MoveRules};
pub use state::{GameState, Glyphling, Tile};
