//! Turn decision benchmarks
//!
//! One full `decide` per iteration on a midgame board, per preset and per
//! candidate cap.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use glyphling_ai::ai::{preset, preset_names, AiEnv, AiPlayer};
use glyphling_ai::board::{Dictionary, GameState, HexCoord, LeylineRules};
use glyphling_ai::core::{AiTuning, Side};

fn midgame_board() -> GameState {
    let mut state = GameState::new(5);
    state.add_glyphling(Side::First, Some(HexCoord::new(-3, 1)));
    state.add_glyphling(Side::First, Some(HexCoord::new(-1, 3)));
    state.add_glyphling(Side::Second, Some(HexCoord::new(3, -1)));
    state.add_glyphling(Side::Second, Some(HexCoord::new(1, -3)));
    for (i, letter) in "STARECAT".chars().enumerate() {
        let side = if i % 2 == 0 { Side::First } else { Side::Second };
        state.place_tile(HexCoord::new(i as i32 - 4, 0), letter, side);
    }
    state.set_hand(Side::First, vec!['E', 'A', 'T', 'R', 'S', 'L', 'N']);
    state.set_hand(Side::Second, vec!['O', 'I', 'D', 'C', 'M', 'U', 'Q']);
    state
}

fn bench_presets(c: &mut Criterion) {
    let state = midgame_board();
    let rules = LeylineRules::default();
    let dictionary = Dictionary::builtin().unwrap();
    let env = AiEnv {
        rules: &rules,
        lexicon: &dictionary,
    };

    let mut group = c.benchmark_group("decide_preset");
    for name in preset_names() {
        let mut player = AiPlayer::with_seed(preset(name).unwrap(), Side::First, 42);
        group.bench_with_input(BenchmarkId::from_parameter(name), &state, |b, state| {
            b.iter(|| black_box(player.decide(black_box(state), env)))
        });
    }
    group.finish();
}

fn bench_candidate_cap(c: &mut Criterion) {
    let state = midgame_board();
    let rules = LeylineRules::default();
    let dictionary = Dictionary::builtin().unwrap();
    let env = AiEnv {
        rules: &rules,
        lexicon: &dictionary,
    };

    let mut group = c.benchmark_group("decide_cap");
    for cap in [50usize, 150, 300, 600] {
        let tuning = AiTuning {
            max_candidates: cap,
            ..AiTuning::default()
        };
        let mut player = AiPlayer::with_seed(preset("balanced").unwrap(), Side::First, 42)
            .with_tuning(tuning)
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(cap), &state, |b, state| {
            b.iter(|| black_box(player.choose_move(black_box(state), env)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_presets, bench_candidate_cap);
criterion_main!(benches);
