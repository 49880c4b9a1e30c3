//! Benchmarks for protocol dispatch.

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use warlight_engine::protocol::Registry;
use warlight_engine::{Engine, RandomBot};

/// A full setup for a square grid of `side * side` regions, one super region
/// per row, followed by `rounds` turns.
fn game_script(side: usize, rounds: usize) -> String {
    let mut script = String::from("settings your_bot player1\nsettings opponent_bot player2\n");

    let super_regions: Vec<String> = (0..side).map(|row| format!("{row} 3")).collect();
    script.push_str(&format!("setup_map super_regions {}\n", super_regions.join(" ")));

    let regions: Vec<String> = (0..side * side)
        .map(|id| format!("{id} {}", id / side))
        .collect();
    script.push_str(&format!("setup_map regions {}\n", regions.join(" ")));

    let neighbours: Vec<String> = (0..side * side)
        .filter_map(|id| {
            let mut adjacent = Vec::new();
            if id % side + 1 < side {
                adjacent.push((id + 1).to_string());
            }
            if id + side < side * side {
                adjacent.push((id + side).to_string());
            }
            (!adjacent.is_empty()).then(|| format!("{id} {}", adjacent.join(",")))
        })
        .collect();
    script.push_str(&format!("setup_map neighbors {}\n", neighbours.join(" ")));

    let updates: Vec<String> = (0..side * side)
        .map(|id| {
            let owner = if id % 2 == 0 { "player1" } else { "player2" };
            format!("{id} {owner} 3")
        })
        .collect();
    for _ in 0..rounds {
        script.push_str("settings starting_armies 5\n");
        script.push_str(&format!("update_map {}\n", updates.join(" ")));
        script.push_str("opponent_moves player2 place_armies 1 2 player2 attack/transfer 1 4\n");
        script.push_str("go place_armies 2000\ngo attack/transfer 2000\n");
    }
    script
}

fn bench_dispatch(c: &mut Criterion) {
    let registry = Registry::protocol();
    let lines = [
        "setup_map super_regions 1 5 2 3 3 2 4 4",
        "update_map 1 player1 3 2 player2 4 3 neutral 2 4 player1 7",
        "opponent_moves player2 place_armies 3 2 player2 attack/transfer 3 4",
        "go attack/transfer 2000",
        "settings max_rounds 60",
    ];

    let mut group = c.benchmark_group("dispatch");
    for line in lines {
        group.bench_with_input(BenchmarkId::from_parameter(line), &line, |b, line| {
            b.iter(|| black_box(registry.dispatch(black_box(line))))
        });
    }
    group.finish();
}

fn bench_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("game");
    for side in [4usize, 12] {
        let script = game_script(side, 20);
        group.bench_with_input(BenchmarkId::new("grid", side), &script, |b, script| {
            b.iter(|| {
                let mut engine = Engine::new(RandomBot::new(Some(1)));
                let mut out = Vec::new();
                engine
                    .run(Cursor::new(script.as_bytes()), &mut out)
                    .expect("script is well formed");
                black_box(out)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_game);
criterion_main!(benches);
