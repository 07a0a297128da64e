use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{canonical_shape, Board, Session};
use gridfall::types::{Direction, PieceKind, Position, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(TICK_MS));
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::new();
    let shape = canonical_shape(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| board.collides(black_box(&shape), black_box(Position::new(10, 4))))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.start();

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            session.move_piece(black_box(Direction::Left));
            session.move_piece(black_box(Direction::Right));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.start();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            session.rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_collides,
    bench_line_clear,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
