use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::snake::{
    Direction, RenderStyle, RenderSurface, Rgb, SnakeGameState, TickOutcome, render,
};

struct NullSurface {
    rects: usize,
}

impl RenderSurface for NullSurface {
    fn clear(&mut self, _color: Rgb) {
        self.rects = 0;
    }

    fn fill_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32, _color: Rgb) {
        self.rects += 1;
    }
}

fn run_ticks(count: usize, rng: &mut SessionRng) -> u32 {
    let mut state = SnakeGameState::new();
    let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

    for step in 0..count {
        if step % 5 == 0 {
            let _ = state.set_heading(turns[(step / 5) % turns.len()]);
        }
        if let TickOutcome::Collided(_) = state.advance(rng) {
            state.restart();
        }
    }

    state.score()
}

fn bench_ticks(c: &mut Criterion) {
    let mut rng = SessionRng::new(42);
    c.bench_function("snake_1000_ticks", |b| {
        b.iter(|| black_box(run_ticks(1000, &mut rng)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut rng = SessionRng::new(42);
    let mut state = SnakeGameState::new();
    for _ in 0..8 {
        state.advance(&mut rng);
    }
    let snapshot = state.snapshot(false);
    let style = RenderStyle::default();
    let mut surface = NullSurface { rects: 0 };

    c.bench_function("snake_render_snapshot", |b| {
        b.iter(|| {
            render(black_box(&snapshot), &mut surface, &style);
            black_box(surface.rects)
        })
    });
}

criterion_group!(benches, bench_ticks, bench_render);
criterion_main!(benches);
