#[macro_use]
extern crate criterion;
extern crate chaosgame;
extern crate rand;

use chaosgame::{build_polygon, Canvas, ChaosGame, Framebuffer};
use criterion::Criterion;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn game(sides: usize, ratio: f64) -> ChaosGame<StdRng> {
    let canvas = Canvas::new(800, 800);
    ChaosGame::new(canvas, build_polygon(&canvas, sides), ratio, StdRng::seed_from_u64(0)).unwrap()
}

fn triangle_steps(c: &mut Criterion) {
    let mut game = game(3, 0.5);
    let mut fb = Framebuffer::new(game.canvas());
    c.bench_function("5000 triangle steps", move |b| {
        b.iter(|| game.advance(&mut fb, 5000))
    });
}

fn heptagon_steps(c: &mut Criterion) {
    let ratio = chaosgame::optimal_ratio(7).unwrap();
    let mut game = game(7, ratio);
    let mut fb = Framebuffer::new(game.canvas());
    c.bench_function("5000 heptagon steps", move |b| {
        b.iter(|| game.advance(&mut fb, 5000))
    });
}

criterion_group!(benches, triangle_steps, heptagon_steps);
criterion_main!(benches);
