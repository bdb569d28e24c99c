//! Imperfect perception of the match
//!
//! The AI never reads exact scores. It keeps noisy running estimates whose
//! confidence decays between observations, and it grades its hand, single
//! letters and glyphling safety on 0-10 scales.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use rand::Rng;
use serde::Serialize;

use crate::ai::constants::{
    MAX_CONFIDENCE, MIN_CONFIDENCE, MORALE_MEMORY_TURNS, OBSERVE_CONFIDENCE_GAIN,
    OBSERVE_NOISE_SCALE,
};
use crate::board::{GameState, MoveRules};
use crate::core::config::AiTuning;
use crate::core::types::{Difficulty, GlyphlingId, Side};

const VOWELS: &str = "AEIOU";

/// Everything the shift engine reads for one turn
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerceptionSnapshot {
    pub perceived_lead: f32,
    pub my_max_pressure: f32,
    pub opponent_max_pressure: f32,
    pub hand_quality: f32,
    pub momentum: f32,
    pub board_fill: f32,
    pub last_opponent_score: u32,
    pub difficulty: Difficulty,
}

impl Default for PerceptionSnapshot {
    /// A calm midgame: even score, no pressure, average hand
    fn default() -> Self {
        Self {
            perceived_lead: 0.0,
            my_max_pressure: 0.0,
            opponent_max_pressure: 0.0,
            hand_quality: 5.0,
            momentum: 0.0,
            board_fill: 0.0,
            last_opponent_score: 0,
            difficulty: Difficulty::Normal,
        }
    }
}

/// Noisy score tracking for one seat
#[derive(Debug, Clone, Serialize)]
pub struct ScorePerception {
    my_estimate: f32,
    opponent_estimate: f32,
    confidence: f32,
    recent_mine: VecDeque<u32>,
    recent_opponent: VecDeque<u32>,
    last_opponent_score: u32,
    turns_since_opponent_scored: u32,

    self_accuracy: f32,
    opponent_accuracy: f32,
    noise: f32,
    decay: f32,
    drift_scale: f32,
    window: usize,
}

impl ScorePerception {
    pub fn new(self_accuracy: f32, opponent_accuracy: f32, tuning: &AiTuning) -> Self {
        Self {
            my_estimate: 0.0,
            opponent_estimate: 0.0,
            confidence: MAX_CONFIDENCE,
            recent_mine: VecDeque::new(),
            recent_opponent: VecDeque::new(),
            last_opponent_score: 0,
            turns_since_opponent_scored: u32::MAX,
            self_accuracy: self_accuracy.clamp(0.0, 1.0),
            opponent_accuracy: opponent_accuracy.clamp(0.0, 1.0),
            noise: tuning.perception_noise,
            decay: tuning.confidence_decay,
            drift_scale: tuning.drift_scale,
            window: tuning.momentum_window.max(1),
        }
    }

    pub fn my_estimate(&self) -> f32 {
        self.my_estimate
    }

    pub fn opponent_estimate(&self) -> f32 {
        self.opponent_estimate
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    /// Record points this seat just scored
    pub fn observe_my_score<R: Rng + ?Sized>(&mut self, points: u32, rng: &mut R) {
        self.my_estimate += noisy(points, self.self_accuracy, rng);
        self.confidence =
            (self.confidence + OBSERVE_CONFIDENCE_GAIN * self.self_accuracy).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
        push_window(&mut self.recent_mine, points, self.window);
    }

    /// Record points the opponent just scored
    pub fn observe_opponent_score<R: Rng + ?Sized>(&mut self, points: u32, rng: &mut R) {
        self.opponent_estimate += noisy(points, self.opponent_accuracy, rng);
        self.confidence = (self.confidence + OBSERVE_CONFIDENCE_GAIN * self.opponent_accuracy)
            .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
        push_window(&mut self.recent_opponent, points, self.window);
        self.last_opponent_score = points;
        self.turns_since_opponent_scored = 0;
    }

    /// Decay confidence and let both estimates drift
    pub fn end_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.confidence = (self.confidence * self.decay).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);
        let spread = self.drift_scale * (1.0 - self.confidence);
        if spread > 0.0 {
            self.my_estimate = (self.my_estimate + rng.gen_range(-spread..=spread)).max(0.0);
            self.opponent_estimate = (self.opponent_estimate + rng.gen_range(-spread..=spread)).max(0.0);
        }
        self.turns_since_opponent_scored = self.turns_since_opponent_scored.saturating_add(1);
    }

    /// Estimated lead with confidence-scaled noise
    pub fn perceived_lead<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let lead = self.my_estimate - self.opponent_estimate;
        let spread = self.noise * (1.0 - self.confidence);
        if spread > 0.0 {
            lead + rng.gen_range(-spread..=spread)
        } else {
            lead
        }
    }

    /// Recent average scored minus recent average conceded
    pub fn momentum(&self) -> f32 {
        average(&self.recent_mine) - average(&self.recent_opponent)
    }

    /// Opponent's last score while it is still fresh, else 0
    pub fn last_opponent_score(&self) -> u32 {
        if self.turns_since_opponent_scored <= MORALE_MEMORY_TURNS {
            self.last_opponent_score
        } else {
            0
        }
    }

    /// Forget everything observed; accuracy and tuning are kept
    pub fn reset(&mut self) {
        self.my_estimate = 0.0;
        self.opponent_estimate = 0.0;
        self.confidence = MAX_CONFIDENCE;
        self.recent_mine.clear();
        self.recent_opponent.clear();
        self.last_opponent_score = 0;
        self.turns_since_opponent_scored = u32::MAX;
    }
}

fn noisy<R: Rng + ?Sized>(points: u32, accuracy: f32, rng: &mut R) -> f32 {
    let spread = (1.0 - accuracy) * OBSERVE_NOISE_SCALE;
    let factor = if spread > 0.0 {
        1.0 + rng.gen_range(-spread..=spread)
    } else {
        1.0
    };
    points as f32 * factor
}

fn push_window(window: &mut VecDeque<u32>, points: u32, cap: usize) {
    window.push_back(points);
    while window.len() > cap {
        window.pop_front();
    }
}

fn average(values: &VecDeque<u32>) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<u32>() as f32 / values.len() as f32
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c.to_ascii_uppercase())
}

fn letter_counts(hand: &[char]) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in hand {
        *counts.entry(c.to_ascii_uppercase()).or_insert(0) += 1;
    }
    counts
}

/// Grades a whole hand 0 (unplayable) to 10 (excellent)
pub struct HandQualityAssessor;

impl HandQualityAssessor {
    const BASE: f32 = 5.0;
    const COMMON: &'static str = "ETAOINSR";
    const STARTERS: &'static str = "SCPTBM";
    const ENDERS: &'static str = "SEDTRNY";
    const HARD: &'static str = "QXZJV";

    pub fn assess(hand: &[char]) -> f32 {
        if hand.is_empty() {
            return 0.0;
        }
        let vowels = hand.iter().filter(|c| is_vowel(**c)).count();
        let consonants = hand.len() - vowels;

        let mut quality = Self::BASE;

        if vowels < 2 {
            quality -= 1.5 * (2 - vowels) as f32;
        } else if vowels > 4 {
            quality -= (vowels - 4) as f32;
        }
        if consonants < 3 {
            quality -= (3 - consonants) as f32;
        }

        for count in letter_counts(hand).values() {
            match count {
                0 | 1 => {}
                2 => quality -= 0.5,
                _ => quality -= 1.5,
            }
        }

        for c in hand.iter().map(|c| c.to_ascii_uppercase()) {
            if Self::HARD.contains(c) {
                quality -= 1.0;
            }
            if Self::COMMON.contains(c) {
                quality += 0.3;
            }
            if Self::STARTERS.contains(c) {
                quality += 0.25;
            }
            if Self::ENDERS.contains(c) {
                quality += 0.25;
            }
        }

        quality.clamp(0.0, 10.0)
    }
}

/// Grades how badly a single letter clogs the hand, 0 (keep) to 10 (junk)
pub struct LetterJunkAssessor;

impl LetterJunkAssessor {
    pub fn assess(letter: char, hand: &[char]) -> f32 {
        let letter = letter.to_ascii_uppercase();
        let mut junk: f32 = match letter {
            'Q' => 6.0,
            'X' | 'Z' | 'J' => 5.0,
            'V' => 4.0,
            'K' | 'W' => 2.0,
            _ => 0.0,
        };
        if letter == 'Q' && !hand.iter().any(|c| c.eq_ignore_ascii_case(&'U')) {
            junk += 2.0;
        }

        let copies = hand.iter().filter(|c| c.eq_ignore_ascii_case(&letter)).count();
        if copies >= 3 {
            junk += 3.0;
        } else if copies == 2 {
            junk += 1.5;
        }

        let vowels = hand.iter().filter(|c| is_vowel(**c)).count();
        let consonants = hand.len() - vowels;
        if is_vowel(letter) {
            if vowels > 4 {
                junk += 2.0;
            } else if vowels <= 2 {
                junk -= 2.0;
            }
        } else if vowels < 2 {
            junk += 1.5;
        } else if consonants <= 2 {
            junk -= 1.5;
        }

        junk.clamp(0.0, 10.0)
    }
}

/// Grades how boxed-in a glyphling is, 0 (free) to 10 (tangled)
pub struct GlyphlingPressureAssessor;

impl GlyphlingPressureAssessor {
    const BLOCKED_DIRECTION: f32 = 1.5;
    const ADJACENT_ENEMY: f32 = 1.5;
    const NEAR_ENEMY: f32 = 0.5;

    pub fn assess(state: &GameState, rules: &dyn MoveRules, glyphling: GlyphlingId) -> f32 {
        let Some(me) = state.glyphling(glyphling) else {
            return 0.0;
        };
        let Some(position) = me.position else {
            return 0.0;
        };

        let destinations = rules.legal_destinations(state, glyphling);
        if destinations.is_empty() {
            return 10.0;
        }

        let open: BTreeSet<usize> = destinations
            .iter()
            .filter_map(|d| position.direction_to(d))
            .map(|d| d.index())
            .collect();
        let blocked = 6usize.saturating_sub(open.len());

        let mut pressure = blocked as f32 * Self::BLOCKED_DIRECTION;
        if open.len() <= 1 {
            pressure += 2.0;
        } else if open.len() <= 2 {
            pressure += 1.0;
        }

        for enemy in state.placed_glyphlings(me.owner.opponent()) {
            if let Some(at) = enemy.position {
                match position.distance(&at) {
                    1 => pressure += Self::ADJACENT_ENEMY,
                    2 => pressure += Self::NEAR_ENEMY,
                    _ => {}
                }
            }
        }

        pressure.clamp(0.0, 10.0)
    }

    /// Highest pressure among a side's placed glyphlings
    pub fn max_for_side(state: &GameState, rules: &dyn MoveRules, side: Side) -> f32 {
        state
            .placed_glyphlings(side)
            .map(|g| Self::assess(state, rules, g.id))
            .fold(0.0, f32::max)
    }
}
