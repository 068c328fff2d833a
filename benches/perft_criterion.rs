use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_minimax::game_state::game_state::GameState;
use plum_minimax::move_generation::move_generator::PseudoLegalMoveGenerator;
use plum_minimax::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Pseudo-legal counts match the legal ones only where no move can leave a king
// in check, so node guards are limited to the start position.
const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("pseudo_legal_perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");
        let depths = case.expected_nodes.len().max(3);

        for depth in 1..=depths as u8 {
            let mut warmup_game = game.clone();
            let warmup = perft(&PseudoLegalMoveGenerator, &mut warmup_game, depth)
                .expect("perft should run");
            if let Some(expected) = case.expected_nodes.get(usize::from(depth) - 1) {
                assert_eq!(
                    warmup.nodes, *expected,
                    "node mismatch in warmup for {} depth {}",
                    case.name, depth
                );
            }

            group.throughput(Throughput::Elements(warmup.nodes));
            let mut bench_game = game.clone();
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let count =
                            perft(&PseudoLegalMoveGenerator, &mut bench_game, black_box(depth))
                                .expect("perft benchmark run should succeed");
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
