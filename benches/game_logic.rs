use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{compact_full_rows, Board, EngineConfig, Game, Grid};
use blockfall::types::{GameMode, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(EngineConfig::new(GameMode::Classic).with_seed(12345)).unwrap();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if game.is_finished() {
                game.restart();
            }
            black_box(game.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut grid = Grid::new(10, 20);
    // Fill bottom 4 rows
    for y in 16..20 {
        for x in 0..10 {
            grid.set(x, y, PieceKind::I.color_id());
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| compact_full_rows(black_box(&grid)))
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut board = Board::new(10, 20, 12345).unwrap();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            board.spawn_new_piece();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = Board::new(10, 20, 12345).unwrap();
    board.spawn_kind(PieceKind::T);

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !board.move_right() {
                while board.move_left() {}
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = Board::new(10, 20, 12345).unwrap();
    board.spawn_kind(PieceKind::T);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            board.rotate();
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut game = Game::new(EngineConfig::new(GameMode::Classic).with_seed(12345)).unwrap();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if game.game_over() {
                game.restart();
            }
            black_box(game.hard_drop());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_hard_drop
);
criterion_main!(benches);
