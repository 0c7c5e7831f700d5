use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frag_tetris::core::{Board, BoardConfig, SimpleRng};
use frag_tetris::types::{ShapeKind, Vector2D};

fn new_board(shape: ShapeKind) -> Board {
    Board::new(BoardConfig::default(), shape, SimpleRng::new(12345)).unwrap()
}

fn bench_tick(c: &mut Criterion) {
    let mut board = Board::with_random_start(BoardConfig::default(), SimpleRng::new(12345)).unwrap();

    c.bench_function("board_tick", |b| {
        b.iter(|| {
            if !board.tick() && !board.is_running() {
                board.reset();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = new_board(ShapeKind::T);
            // Fill bottom 4 rows with squares, so every clear splits pieces
            for row in [20, 22] {
                for col in (0..20).step_by(2) {
                    board.lock_piece(ShapeKind::O, Vector2D::new(row, col));
                }
            }
            black_box(board.clear_lines());
        })
    });
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("settle_floating_squares", |b| {
        b.iter(|| {
            let mut board = new_board(ShapeKind::T);
            for row in (4..20).step_by(4) {
                for col in (0..20).step_by(2) {
                    board.lock_piece(ShapeKind::O, Vector2D::new(row, col));
                }
            }
            board.settle();
            black_box(board.occupied_count());
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut board = new_board(ShapeKind::T);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            board.spawn(black_box(ShapeKind::L));
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut board = new_board(ShapeKind::T);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !board.move_right() {
                while board.move_left() {}
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut board = new_board(ShapeKind::T);
    board.move_down();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            board.rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_settle,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
