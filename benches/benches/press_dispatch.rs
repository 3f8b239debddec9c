// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Vec2};
use understory_press::config::PressConfig;
use understory_press::controller::{PointerHandler, PressController};
use understory_press::easing::Easing;
use understory_press::element::Pressable;
use understory_press::engine::{AnimationEngine, AnimationTarget};
use understory_press::timeline::Timeline;
use understory_press::types::{PointerEvent, Property};

struct Element {
    scale: Vec2,
}

impl Pressable for Element {
    fn visible_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }
    fn scale(&self) -> Vec2 {
        self.scale
    }
    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }
}

type Press = PressController<Weak<RefCell<Element>>, Timeline, fn(&mut Element)>;

fn ignore_click(_: &mut Element) {}

fn setup() -> (Rc<RefCell<Element>>, Press) {
    let el = Rc::new(RefCell::new(Element {
        scale: Vec2::new(1.0, 1.0),
    }));
    let listener: fn(&mut Element) = ignore_click;
    let mut press: Press =
        PressController::new(PressConfig::default(), Timeline::new(), listener).unwrap();
    press.attach(Rc::downgrade(&el));
    (el, press)
}

/// A press with `moves` wiggles inside the element, released inside.
fn gesture(t0: u64, moves: usize) -> Vec<PointerEvent> {
    let mut out = Vec::with_capacity(moves + 2);
    out.push(PointerEvent::down(Point::new(50.0, 50.0), t0));
    for i in 0..moves {
        let dx = (i % 20) as f64;
        out.push(PointerEvent::moved(Point::new(40.0 + dx, 50.0), t0 + 1 + i as u64));
    }
    out.push(PointerEvent::up(Point::new(50.0, 50.0), t0 + 1 + moves as u64));
    out
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("press_dispatch");
    for &moves in &[0_usize, 16, 256] {
        let events = gesture(0, moves);
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_function(format!("gesture_moves_{moves}"), |b| {
            b.iter_batched(
                setup,
                |(el, mut press)| {
                    for ev in &events {
                        black_box(press.on_pointer(ev));
                    }
                    drop(el);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("press_frames");
    group.throughput(Throughput::Elements(13));
    group.bench_function("tap_then_13_frames", |b| {
        b.iter_batched(
            setup,
            |(el, mut press)| {
                let _ = press.on_pointer(&PointerEvent::down(Point::new(50.0, 50.0), 0));
                let _ = press.on_pointer(&PointerEvent::up(Point::new(50.0, 50.0), 20));
                for frame in 0..13_u64 {
                    press.advance(frame * 16);
                }
                black_box(el.borrow().scale);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

struct Sink(f64, f64);

impl AnimationTarget for Sink {
    fn value(&self, p: Property) -> f64 {
        match p {
            Property::ScaleX => self.0,
            Property::ScaleY => self.1,
        }
    }
    fn set_value(&mut self, p: Property, v: f64) {
        match p {
            Property::ScaleX => self.0 = v,
            Property::ScaleY => self.1 = v,
        }
    }
}

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_advance");
    for &pairs in &[1_usize, 64, 1024] {
        let mut tl = Timeline::new();
        for _ in 0..pairs {
            let ease = Easing::FastOutSlowIn;
            let x = tl.play_from_to(Property::ScaleX, None, 0.9, 1_000_000, ease);
            let y = tl.play_from_to(Property::ScaleY, None, 0.9, 1_000_000, ease);
            let g = tl.combine(&[x, y]);
            tl.start(g, 0, 0);
        }
        let mut sink = Sink(1.0, 1.0);
        let mut now = 0_u64;
        group.throughput(Throughput::Elements(pairs as u64));
        group.bench_function(format!("pairs_{pairs}"), |b| {
            b.iter(|| {
                now += 1;
                black_box(tl.advance(now, &mut sink));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_frames, bench_timeline);
criterion_main!(benches);
