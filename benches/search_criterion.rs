use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_minimax::search::board_scoring::evaluate;
use plum_minimax::search::minimax::{search_best_move, SearchConfig};
use plum_minimax::utils::fen_parser::parse_fen;

const POSITIONS: &[(&str, &str)] = &[
    ("opening", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"),
    ("middlegame", "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b - - 4 4"),
    ("back_rank", "r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1"),
];

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for (name, fen) in POSITIONS {
        let position = parse_fen(fen).expect("benchmark FEN should parse");
        group.bench_with_input(BenchmarkId::from_parameter(name), &position.board, |b, board| {
            b.iter(|| black_box(evaluate(black_box(board))));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for depth in 1..=3u32 {
        for (name, fen) in POSITIONS {
            let position = parse_fen(fen).expect("benchmark FEN should parse");
            group.bench_with_input(
                BenchmarkId::new(*name, depth),
                &position,
                |b, position| {
                    b.iter(|| {
                        let outcome = search_best_move(
                            black_box(&position.board),
                            position.side_to_move,
                            depth,
                            SearchConfig::default(),
                        );
                        black_box(outcome.best_move)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_evaluate, bench_search);
criterion_main!(search_benches);
