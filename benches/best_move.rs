use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tictac_minimax::core::{Board, Mark};
use tictac_minimax::search::{Minimax, SearchConfig, Strategy};

fn bench_best_move(c: &mut Criterion) {
    let positions = [
        ("empty", Board::new(), Mark::X),
        ("corner_opening", "X........".parse::<Board>().unwrap(), Mark::O),
        ("midgame", "X...O...X".parse::<Board>().unwrap(), Mark::O),
    ];
    let strategies = [Strategy::Exhaustive, Strategy::AlphaBeta, Strategy::Memoized];

    let mut group = c.benchmark_group("best_move");
    group.sample_size(10);

    for (name, board, mark) in positions {
        for strategy in strategies {
            let mut engine = Minimax::new(SearchConfig::default().with_strategy(strategy));
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), name),
                &board,
                |b, board| b.iter(|| engine.best_move(black_box(board), mark)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_best_move);
criterion_main!(benches);
