use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{clear_full_rows, GameState, LockedCells};
use blockfall::types::Cell;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            black_box(state.tick());
            state.take_events();
        })
    });
}

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            black_box(state.advance(black_box(16)));
            state.take_events();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            // Fill bottom 4 rows
            let mut locked: LockedCells = (16..20)
                .flat_map(|row| (0..10).map(move |col| Cell::new(row, col)))
                .collect();
            black_box(clear_full_rows(&mut locked));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(state.rotate());
            state.take_events();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(state.move_left());
            black_box(state.move_right());
            state.take_events();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_advance,
    bench_line_clear,
    bench_rotate,
    bench_move
);
criterion_main!(benches);
