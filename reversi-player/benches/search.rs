use criterion::*;

use reversi_board::{Board, Side};
use reversi_player::{Engine, EngineConfig};

fn criterion_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("opening_search");
    group.sample_size(10);

    for depth in 3..7 {
        group.bench_with_input(BenchmarkId::new("single", depth), &depth, |b, &depth| {
            let mut engine = Engine::new(EngineConfig::default().with_depth(depth).with_workers(1));
            engine.set_evaluate_side(Side::Black);
            let mut board = Board::new();
            b.iter(|| engine.search_single(black_box(&mut board)))
        });

        group.bench_with_input(BenchmarkId::new("parallel", depth), &depth, |b, &depth| {
            let mut engine = Engine::new(EngineConfig::default().with_depth(depth));
            engine.set_evaluate_side(Side::Black);
            let board = Board::new();
            b.iter(|| engine.search_parallel(black_box(&board)))
        });
    }

    group.finish();
}

criterion_group!(search, criterion_search);
criterion_main!(search);
