use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{Board, GameState};
use tui_2048::types::MoveDirection;

fn bench_apply_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut i = 0usize;

    c.bench_function("apply_move_cycle", |b| {
        b.iter(|| {
            let dir = MoveDirection::ALL[i % 4];
            i += 1;
            if state.apply_move(black_box(dir)).is_none()
                && MoveDirection::ALL.iter().all(|&d| !state.can_move(d))
            {
                state.reset();
            }
        })
    });
}

fn bench_can_move(c: &mut Criterion) {
    let board = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);

    c.bench_function("can_move_stuck_board", |b| {
        b.iter(|| {
            for dir in MoveDirection::ALL {
                black_box(black_box(&board).can_move(dir));
            }
        })
    });
}

fn bench_shift_dense(c: &mut Criterion) {
    let board = Board::from_rows([
        [2, 2, 4, 4],
        [8, 8, 16, 16],
        [2, 0, 2, 0],
        [4, 4, 4, 4],
    ]);

    c.bench_function("shift_dense_board", |b| {
        b.iter(|| {
            let mut copy = black_box(board);
            black_box(copy.shift(MoveDirection::Left))
        })
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("reset", |b| {
        b.iter(|| {
            state.reset();
        })
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_can_move,
    bench_shift_dense,
    bench_reset
);
criterion_main!(benches);
