//! Headless AI Duel Runner
//!
//! Plays two AI seats against each other on a fresh board and prints a JSON
//! (or text) summary. Useful for balancing personalities and tuning files.

use std::collections::BTreeMap;

use clap::Parser;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use glyphling_ai::ai::{preset, preset_names, AiEnv, AiMove, AiPlayer};
use glyphling_ai::board::{Dictionary, GameState, HexCoord, LeylineRules, Lexicon, MoveRules};
use glyphling_ai::core::{AiTuning, Difficulty, Result, Side};

/// Letter distribution of the bag, one entry per tile
const BAG: &str = "AAAAAAAAABBCCDDDDEEEEEEEEEEEEFFGGGHHIIIIIIIIIJKLLLLMMNNNNNNOOOOOOOOPPQRRRRRRSSSSTTTTTTUUUUVVWWXYYZ";
const HAND_SIZE: usize = 7;
/// Consecutive passes that end the game
const PASS_LIMIT: u32 = 4;

/// Headless AI Duel - two AI seats play one game
#[derive(Parser, Debug)]
#[command(name = "ai_duel")]
#[command(about = "Run an AI vs AI Glyphling game and print the result")]
struct Args {
    /// Personality of the first seat (embedded preset name)
    #[arg(long, default_value = "balanced")]
    first: String,

    /// Personality of the second seat (embedded preset name)
    #[arg(long, default_value = "balanced")]
    second: String,

    /// Board radius in hexes
    #[arg(long, default_value_t = 4)]
    radius: u32,

    /// Maximum turns before the game is called
    #[arg(long, default_value_t = 80)]
    max_turns: u32,

    /// Difficulty applied to both seats (easy, normal, hard)
    #[arg(long, default_value = "normal")]
    difficulty: Difficulty,

    /// Optional TOML file overriding the AI tuning
    #[arg(long)]
    tuning: Option<String>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every turn to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct DuelResult {
    winner: Option<Side>,
    first_score: u32,
    second_score: u32,
    turns: u32,
    board_fill: f32,
    first_personality: String,
    second_personality: String,
    first_goals: BTreeMap<String, u32>,
    second_goals: BTreeMap<String, u32>,
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let tuning = match &args.tuning {
        Some(path) => AiTuning::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => AiTuning::default(),
    };

    let first = preset(&args.first).map_err(|e| {
        eprintln!("Available presets: {}", preset_names().join(", "));
        e
    })?;
    let second = preset(&args.second)?;

    let mut seats = [
        AiPlayer::with_seed(first, Side::First, seed)
            .with_difficulty(args.difficulty)
            .with_tuning(tuning.clone())?,
        AiPlayer::with_seed(second, Side::Second, seed.wrapping_add(1))
            .with_difficulty(args.difficulty)
            .with_tuning(tuning)?,
    ];

    let rules = LeylineRules::default();
    let dictionary = Dictionary::builtin()?;
    let env = AiEnv {
        rules: &rules,
        lexicon: &dictionary,
    };

    let mut bag: Vec<char> = BAG.chars().collect();
    bag.shuffle(&mut rng);
    let mut state = starting_board(args.radius);
    for side in Side::all() {
        refill(&mut state, side, &mut bag);
    }

    let mut goals: [BTreeMap<String, u32>; 2] = Default::default();
    let mut passes = 0;
    let mut turns = 0;

    while turns < args.max_turns && passes < PASS_LIMIT && state.board_fill() < 1.0 {
        let side = if turns % 2 == 0 { Side::First } else { Side::Second };
        let seat = &mut seats[side.index()];

        match seat.decide(&state, env) {
            Some(decision) => {
                passes = 0;
                *goals[side.index()]
                    .entry(decision.selection.goal.to_string())
                    .or_insert(0) += 1;
                let ai_move = decision.ai_move();
                let points = apply_move(&mut state, &rules, &dictionary, side, &ai_move);
                if args.verbose {
                    eprintln!(
                        "[{}] {} {} -> {:?}, cast {} at {:?}: {} pts",
                        turns,
                        side,
                        decision.selection.goal,
                        ai_move.destination,
                        ai_move.letter,
                        ai_move.cast_position,
                        points
                    );
                }
                seats[side.index()].notify_scored(points);
                seats[side.opponent().index()].notify_opponent_scored(points);
            }
            None => {
                passes += 1;
                let discards = seat.choose_discards(&state, env);
                if args.verbose {
                    eprintln!("[{}] {} passes, discarding {:?}", turns, side, discards);
                }
                for letter in discards {
                    if state.take_from_hand(side, letter) {
                        bag.insert(0, letter);
                    }
                }
            }
        }

        refill(&mut state, side, &mut bag);
        for seat in seats.iter_mut() {
            seat.end_turn();
        }
        turns += 1;
    }

    let first_score = state.score(Side::First);
    let second_score = state.score(Side::Second);
    let winner = match first_score.cmp(&second_score) {
        std::cmp::Ordering::Greater => Some(Side::First),
        std::cmp::Ordering::Less => Some(Side::Second),
        std::cmp::Ordering::Equal => None,
    };
    let [first_goals, second_goals] = goals;

    let result = DuelResult {
        winner,
        first_score,
        second_score,
        turns,
        board_fill: state.board_fill(),
        first_personality: seats[0].personality().name.clone(),
        second_personality: seats[1].personality().name.clone(),
        first_goals,
        second_goals,
        seed,
    };

    match args.format.as_str() {
        "text" => {
            println!("Duel Result");
            println!("===========");
            match result.winner {
                Some(side) => println!("Winner: {}", side),
                None => println!("Winner: draw"),
            }
            println!(
                "Score: {} {} - {} {}",
                result.first_personality, result.first_score, result.second_score, result.second_personality
            );
            println!("Turns: {}", result.turns);
            println!("Board fill: {:.0}%", result.board_fill * 100.0);
            println!("Goals ({}): {:?}", result.first_personality, result.first_goals);
            println!("Goals ({}): {:?}", result.second_personality, result.second_goals);
            println!("Seed: {}", result.seed);
        }
        other => {
            if other != "json" {
                eprintln!("Unknown format '{}', defaulting to json", other);
            }
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

/// Two glyphlings per side on opposite halves of the board
fn starting_board(radius: u32) -> GameState {
    let mut state = GameState::new(radius);
    let r = (radius as i32).max(2);
    let edge = r - 1;
    state.add_glyphling(Side::First, Some(HexCoord::new(-edge, 1)));
    state.add_glyphling(Side::First, Some(HexCoord::new(-1, edge)));
    state.add_glyphling(Side::Second, Some(HexCoord::new(edge, -1)));
    state.add_glyphling(Side::Second, Some(HexCoord::new(1, -edge)));
    state
}

fn refill(state: &mut GameState, side: Side, bag: &mut Vec<char>) {
    let mut hand = state.hand(side).to_vec();
    while hand.len() < HAND_SIZE {
        match bag.pop() {
            Some(letter) => hand.push(letter),
            None => break,
        }
    }
    state.set_hand(side, hand);
}

/// Play a move; every word it forms is claimed and scored by its length
fn apply_move(
    state: &mut GameState,
    rules: &dyn MoveRules,
    lexicon: &dyn Lexicon,
    side: Side,
    ai_move: &AiMove,
) -> u32 {
    let legal_destination = state.position_of(ai_move.glyphling) == Some(ai_move.destination)
        || rules
            .legal_destinations(state, ai_move.glyphling)
            .contains(&ai_move.destination);
    if !legal_destination || state.relocate(ai_move.glyphling, ai_move.destination).is_err() {
        tracing::warn!(?ai_move, "rejected illegal move");
        return 0;
    }
    if !rules
        .legal_cast_positions(state, ai_move.glyphling)
        .contains(&ai_move.cast_position)
        || !state.take_from_hand(side, ai_move.letter)
    {
        tracing::warn!(?ai_move, "rejected illegal cast");
        return 0;
    }

    let words = lexicon.find_words_formed_at(state, ai_move.cast_position, ai_move.letter);
    state.place_tile(ai_move.cast_position, ai_move.letter, side);

    let mut points = 0;
    for word in &words {
        points += word.len() as u32;
        for hex in &word.positions {
            state.claim_tile(*hex, side);
        }
    }
    state.add_score(side, points);
    points
}
