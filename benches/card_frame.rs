#![allow(clippy::unwrap_used)]
//! Benchmarks for the per-frame work of the card: advancing animations and
//! deriving the visuals the window draws

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use swipecard::CardController;
use swipecard::config::GestureSettings;
use swipecard::controller::CardVisuals;
use swipecard::subjects::SubjectRing;

const FRAME: Duration = Duration::from_millis(16);

fn new_card() -> CardController {
    CardController::new(SubjectRing::default(), GestureSettings::default())
        .unwrap()
}

fn bench_visuals(c: &mut Criterion) {
    c.bench_function("card_visuals_derive", |b| {
        let mut x = -250.0;
        b.iter(|| {
            x = if x > 250.0 { -250.0 } else { x + 1.0 };
            black_box(CardVisuals::derive(black_box((x, 12.0)), black_box(0.8)));
        });
    });
}

fn bench_spring_back(c: &mut Criterion) {
    c.bench_function("card_spring_back_to_rest", |b| {
        b.iter(|| {
            let mut card = new_card();
            card.on_gesture_start();
            card.on_gesture_move(black_box(100.0), black_box(20.0));
            card.on_gesture_end(0.5, 0.0);
            while card.is_animating() {
                card.tick(FRAME);
                black_box(card.visuals());
            }
        });
    });
}

fn bench_throw_and_cycle(c: &mut Criterion) {
    c.bench_function("card_throw_and_cycle", |b| {
        b.iter(|| {
            let mut card = new_card();
            card.on_gesture_start();
            card.on_gesture_move(black_box(180.0), 0.0);
            card.on_gesture_end(4.0, 0.0);
            while card.is_animating() {
                card.tick(FRAME);
                black_box(card.visuals());
            }
            black_box(card.current_index());
        });
    });
}

criterion_group!(
    benches,
    bench_visuals,
    bench_spring_back,
    bench_throw_and_cycle
);
criterion_main!(benches);
