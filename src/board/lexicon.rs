//! Dictionary access and word search along leylines
//!
//! Words are read along each leyline axis through the cast hex in the axis'
//! forward direction. Every dictionary word of at least `MIN_WORD_LEN`
//! letters that covers the cast hex counts as formed.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::board::hex::{HexCoord, LeylineAxis};
use crate::board::state::GameState;
use crate::core::error::{AiError, Result};

/// Shortest string that counts as a word
pub const MIN_WORD_LEN: usize = 3;

/// Highest frequency rank; the most common words sit here
pub const MAX_FREQUENCY: u8 = 100;

/// Frequency assumed for word list lines without an explicit rank
const DEFAULT_FREQUENCY: u8 = 50;

/// A word formed by a placement, with the hexes that spell it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    pub text: String,
    pub positions: Vec<HexCoord>,
}

impl FoundWord {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Narrow dictionary interface consumed by the AI
pub trait Lexicon {
    /// Words that placing `letter` on `hex` would form
    ///
    /// Any tile already on `hex` is treated as replaced by `letter`.
    fn find_words_formed_at(&self, state: &GameState, hex: HexCoord, letter: char) -> Vec<FoundWord>;

    /// True if the word is known and at least as common as `threshold`
    ///
    /// Unknown words are never above any threshold.
    fn is_word_above_frequency_threshold(&self, text: &str, threshold: f32) -> bool;
}

/// In-memory word list with frequency ranks (1 = rare, 100 = very common)
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: AHashMap<String, u8>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (word, frequency) pairs
    pub fn from_entries<S: AsRef<str>>(entries: impl IntoIterator<Item = (S, u8)>) -> Self {
        let mut dictionary = Self::new();
        for (word, frequency) in entries {
            dictionary.insert(word.as_ref(), frequency);
        }
        dictionary
    }

    /// Parse a word list: one `word [frequency]` per line, `#` comments
    pub fn parse(content: &str) -> Result<Self> {
        let mut dictionary = Self::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let mut parts = line.split_whitespace();
            let word = parts.next().unwrap_or_default();
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(AiError::InvalidWordList {
                    line: idx + 1,
                    reason: format!("'{}' is not alphabetic", word),
                });
            }
            let frequency = match parts.next() {
                Some(value) => value.parse::<u8>().map_err(|e| AiError::InvalidWordList {
                    line: idx + 1,
                    reason: format!("bad frequency '{}': {}", value, e),
                })?,
                None => DEFAULT_FREQUENCY,
            };
            dictionary.insert(word, frequency);
        }
        Ok(dictionary)
    }

    /// Small built-in word list used by the duel runner and benches
    pub fn builtin() -> Result<Self> {
        Self::parse(include_str!("../../data/words.txt"))
    }

    pub fn insert(&mut self, word: &str, frequency: u8) {
        self.words
            .insert(word.to_ascii_uppercase(), frequency.clamp(1, MAX_FREQUENCY));
    }

    /// Frequency rank of a word, None if unknown
    pub fn frequency(&self, word: &str) -> Option<u8> {
        self.words.get(&word.to_ascii_uppercase()).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequency(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for Dictionary {
    fn find_words_formed_at(&self, state: &GameState, hex: HexCoord, letter: char) -> Vec<FoundWord> {
        let letter = letter.to_ascii_uppercase();
        let letter_at = |h: HexCoord| -> Option<char> {
            if h == hex {
                Some(letter)
            } else {
                state.tile_at(h).map(|t| t.letter)
            }
        };

        let mut found = Vec::new();
        for axis in LeylineAxis::all() {
            let forward = axis.forward();
            let backward = forward.opposite();

            let mut start = hex;
            while letter_at(start.step(backward, 1)).is_some() {
                start = start.step(backward, 1);
            }
            let mut run = Vec::new();
            let mut cursor = start;
            while let Some(c) = letter_at(cursor) {
                run.push((cursor, c));
                cursor = cursor.step(forward, 1);
            }
            if run.len() < MIN_WORD_LEN {
                continue;
            }

            let anchor = run.iter().position(|(h, _)| *h == hex).unwrap_or(0);
            for from in 0..=anchor {
                for to in (anchor + 1)..=run.len() {
                    if to - from < MIN_WORD_LEN {
                        continue;
                    }
                    let text: String = run[from..to].iter().map(|(_, c)| *c).collect();
                    if self.contains(&text) {
                        found.push(FoundWord {
                            text,
                            positions: run[from..to].iter().map(|(h, _)| *h).collect(),
                        });
                    }
                }
            }
        }
        found
    }

    fn is_word_above_frequency_threshold(&self, text: &str, threshold: f32) -> bool {
        self.frequency(text)
            .is_some_and(|frequency| frequency as f32 >= threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Side;
    use proptest::prelude::*;

    fn row(state: &mut GameState, q_start: i32, word: &str, owner: Side) {
        for (i, c) in word.chars().enumerate() {
            state.place_tile(HexCoord::new(q_start + i as i32, 0), c, owner);
        }
    }

    #[test]
    fn test_parse_word_list() {
        let dictionary = Dictionary::parse("# common\ncat 90\nzax 5\n\ntea\n").unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.frequency("CAT"), Some(90));
        assert_eq!(dictionary.frequency("tea"), Some(DEFAULT_FREQUENCY));
        assert_eq!(dictionary.frequency("dog"), None);
    }

    #[test]
    fn test_parse_rejects_bad_frequency() {
        let result = Dictionary::parse("cat ninety\n");
        assert!(matches!(result, Err(AiError::InvalidWordList { line: 1, .. })));
    }

    #[test]
    fn test_builtin_word_list_loads() {
        let dictionary = Dictionary::builtin().expect("built-in list should parse");
        assert!(dictionary.len() > 100);
        assert!(dictionary.contains("star"));
    }

    #[test]
    fn test_finds_word_completed_by_placement() {
        let mut state = GameState::new(4);
        row(&mut state, -2, "CA", Side::First);
        let dictionary = Dictionary::from_entries([("CAT", 90u8)]);

        let words = dictionary.find_words_formed_at(&state, HexCoord::new(0, 0), 't');
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "CAT");
        assert_eq!(
            words[0].positions,
            vec![HexCoord::new(-2, 0), HexCoord::new(-1, 0), HexCoord::new(0, 0)]
        );
    }

    #[test]
    fn test_substrings_must_cover_cast_hex() {
        let mut state = GameState::new(4);
        row(&mut state, -3, "CAT", Side::First);
        let dictionary = Dictionary::from_entries([("CAT", 90u8), ("CATS", 80)]);

        // S at (0,0) extends CAT to CATS; CAT alone does not cover the cast hex
        let words = dictionary.find_words_formed_at(&state, HexCoord::new(0, 0), 'S');
        let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["CATS"]);
    }

    #[test]
    fn test_words_on_two_axes() {
        let mut state = GameState::new(4);
        row(&mut state, -2, "AT", Side::First);
        // Vertical (R axis): hexes (0,-2), (0,-1) then cast at (0,0)
        state.place_tile(HexCoord::new(0, -2), 'T', Side::Second);
        state.place_tile(HexCoord::new(0, -1), 'O', Side::Second);
        let dictionary = Dictionary::from_entries([("ATE", 70u8), ("TOE", 60)]);

        let words = dictionary.find_words_formed_at(&state, HexCoord::new(0, 0), 'E');
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_unknown_word_is_never_above_threshold() {
        let dictionary = Dictionary::from_entries([("CAT", 90u8)]);
        assert!(!dictionary.is_word_above_frequency_threshold("QZX", 0.0));
        assert!(dictionary.is_word_above_frequency_threshold("cat", 90.0));
        assert!(!dictionary.is_word_above_frequency_threshold("cat", 91.0));
    }

    proptest! {
        #[test]
        fn prop_raising_threshold_never_accepts_more(
            low in 0.0f32..100.0,
            bump in 0.0f32..100.0,
            entries in proptest::collection::vec(("[A-Z]{3,6}", 1u8..=100), 1..40),
        ) {
            let dictionary = Dictionary::from_entries(entries.iter().map(|(w, f)| (w.as_str(), *f)));
            let high = low + bump;
            for (word, _) in &entries {
                if dictionary.is_word_above_frequency_threshold(word, high) {
                    prop_assert!(dictionary.is_word_above_frequency_threshold(word, low));
                }
            }
        }
    }
}
