//! Benchmarks for move generation, notation and search.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chesskit::board::{Ai, AiConfig, Board, MoveQuery, PgnOptions, Strategy};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let mut board = Board::new();

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    // Complex middlegame position (Kiwipete)
    let mut kiwipete = Board::from_fen(KIWIPETE);

    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves()))
    });

    let mut middlegame = Board::from_fen(MIDDLEGAME);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.generate_moves()))
    });

    let mut kiwipete = Board::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.generate_moves()))
    });
    group.bench_function("kiwipete_pseudo", |b| {
        let query = MoveQuery {
            legal: false,
            ..MoveQuery::default()
        };
        b.iter(|| black_box(kiwipete.moves(&query)))
    });

    group.finish();
}

fn bench_notation(c: &mut Criterion) {
    let mut group = c.benchmark_group("notation");

    let mut kiwipete = Board::from_fen(KIWIPETE);
    group.bench_function("fen", |b| b.iter(|| black_box(kiwipete.fen())));
    group.bench_function("moves_san", |b| {
        b.iter(|| black_box(kiwipete.moves_san(&MoveQuery::default())))
    });

    let mut game = Board::new();
    game.load_pgn(
        "1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 4. Ba4 Nf6 5. O-O Be7 6. Re1 b5 7. Bb3 d6",
        &PgnOptions::default(),
    )
    .expect("valid pgn");
    let pgn = game.pgn(&PgnOptions::default());
    group.bench_function("load_pgn", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.load_pgn(black_box(&pgn), &PgnOptions::default())
        })
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    let config = |strategy| AiConfig {
        strategy,
        max_time: None,
        use_book: false,
        seed: Some(1),
        ..AiConfig::default()
    };

    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("alphabeta_startpos", depth), &depth, |b, &depth| {
            let mut ai = Ai::new(config(Strategy::AlphaBeta));
            b.iter(|| {
                let mut board = Board::new();
                ai.search_root(&mut board, depth)
            })
        });
    }

    group.bench_function("minimax_startpos_3", |b| {
        let mut ai = Ai::new(config(Strategy::Minimax));
        b.iter(|| {
            let mut board = Board::new();
            ai.search_root(&mut board, 3)
        })
    });

    // Tactical position
    group.bench_function("tactical", |b| {
        let mut ai = Ai::new(AiConfig {
            max_time: Some(Duration::from_secs(2)),
            ..config(Strategy::AlphaBeta)
        });
        b.iter(|| {
            let mut board = Board::from_fen(KIWIPETE);
            ai.search_root(&mut board, 3)
        })
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        ("middlegame", MIDDLEGAME),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let mut board = Board::from_fen(fen);
        group.bench_function(BenchmarkId::new("position", name), |b| {
            b.iter(|| black_box(board.evaluate()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_notation,
    bench_search,
    bench_eval
);
criterion_main!(benches);
