use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_referee::move_generation::perft::perft;
use chess_referee::{Board, Color, Game, Position};

const START_NODES: &[u64] = &[20, 400, 8902];

/// Italian opening with both sides castling; every ply runs the full reply scan.
const OPENING_LINE: &[(u8, u8, u8, u8)] = &[
    (4, 1, 4, 3),
    (4, 6, 4, 4),
    (6, 0, 5, 2),
    (1, 7, 2, 5),
    (5, 0, 2, 3),
    (6, 7, 5, 5),
    (3, 1, 3, 2),
    (5, 7, 2, 4),
    (4, 0, 6, 0),
    (4, 7, 6, 7),
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_start");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    let board = Board::standard();
    for (depth_idx, expected_nodes) in START_NODES.iter().enumerate() {
        let depth = (depth_idx + 1) as u8;

        // Correctness guard before benchmarking.
        let warmup = perft(&board, Color::White, depth);
        assert_eq!(warmup.nodes as u64, *expected_nodes, "node mismatch at depth {depth}");

        group.throughput(Throughput::Elements(*expected_nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}")),
            expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let count = perft(black_box(&board), Color::White, black_box(depth));
                    assert_eq!(count.nodes as u64, *expected);
                    black_box(count.nodes)
                });
            },
        );
    }

    group.finish();
}

fn bench_submit_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_moves");
    group.throughput(Throughput::Elements(OPENING_LINE.len() as u64));
    group.bench_function("italian_castles", |b| {
        b.iter(|| {
            let mut game = Game::default();
            for &(x, y, nx, ny) in OPENING_LINE {
                let accepted = game.submit_move(Position::new(x, y), Position::new(nx, ny));
                assert!(accepted);
            }
            black_box(game.state())
        });
    });
    group.finish();
}

criterion_group!(referee_benches, bench_perft, bench_submit_moves);
criterion_main!(referee_benches);
