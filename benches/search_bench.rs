use chess::ChessMove;
use chess_bot::agent::ai::{evaluate, iterative_deepening_search, TranspositionTable};
use chess_bot::{ChessPosition, EvalStyle, SearchConfig, SearchPosition, TurnTimer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_evaluate(c: &mut Criterion) {
    let pos = ChessPosition::from_fen(KIWIPETE).unwrap();
    c.bench_function("evaluate tapered", |b| {
        b.iter(|| black_box(evaluate(&pos, 0, EvalStyle::Tapered)))
    });
    c.bench_function("evaluate discrete", |b| {
        b.iter(|| black_box(evaluate(&pos, 0, EvalStyle::Discrete)))
    });
}

fn bench_perft_kiwipete(c: &mut Criterion) {
    let mut pos = ChessPosition::from_fen(KIWIPETE).unwrap();
    c.bench_function("perft kiwipete depth 3", |b| b.iter(|| black_box(pos.perft(3))));
}

fn bench_search(c: &mut Criterion, name: &str, fen: &str, depth: i32) {
    let config = SearchConfig::default().with_max_depth(depth).with_tt_capacity(1 << 20);
    let mut table = TranspositionTable::<ChessMove>::with_capacity(config.tt_capacity);

    c.bench_function(name, |b| {
        b.iter(|| {
            table.clear();
            let mut pos = ChessPosition::from_fen(fen).unwrap();
            black_box(iterative_deepening_search(&mut pos, &TurnTimer::unlimited(), &mut table, &config))
        })
    });
}

fn bench_search_start_depth_4(c: &mut Criterion) {
    bench_search(c, "search startpos depth 4", chess_bot::game_repr::START_FEN, 4);
}

fn bench_search_kiwipete_depth_3(c: &mut Criterion) {
    bench_search(c, "search kiwipete depth 3", KIWIPETE, 3);
}

criterion_group!(
    benches,
    bench_evaluate,
    bench_perft_kiwipete,
    bench_search_start_depth_4,
    bench_search_kiwipete_depth_3
);
criterion_main!(benches);
