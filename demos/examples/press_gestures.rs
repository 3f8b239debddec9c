// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gestures that do and do not end in a click.
//!
//! Runs a few scripted gestures against one element and reports which of them
//! produced a click: a tap, a drag away, a cancel from an enclosing scroller,
//! and a double tap caught by the debounce gate.
//!
//! Run:
//! - `cargo run -p understory_demos --example press_gestures`

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use kurbo::{Point, Rect, Vec2};
use understory_press::config::PressConfig;
use understory_press::controller::{PointerHandler, PressController};
use understory_press::element::Pressable;
use understory_press::timeline::Timeline;
use understory_press::types::PointerEvent;

struct Card {
    scale: Vec2,
}

impl Pressable for Card {
    fn visible_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 300.0, 120.0)
    }
    fn scale(&self) -> Vec2 {
        self.scale
    }
    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }
}

type Listener = Box<dyn FnMut(&mut Card)>;

fn run(
    press: &mut PressController<Weak<RefCell<Card>>, Timeline, Listener>,
    clicks: &Cell<u32>,
    name: &str,
    start: u64,
    events: &[PointerEvent],
) {
    let before = clicks.get();
    for ev in events {
        press.advance(ev.time);
        let handled = press.on_pointer(ev);
        println!(
            "  {:>5} {:?} at {:?} handled={}",
            ev.time,
            ev.kind,
            ev.position,
            handled.is_handled()
        );
    }
    // Let the restore animation play out.
    let end = events.last().map_or(start, |e| e.time) + 400;
    for now in (start..=end).step_by(10) {
        press.advance(now);
    }
    println!("{name}: {} click(s)\n", clicks.get() - before);
}

fn main() {
    let card = Rc::new(RefCell::new(Card {
        scale: Vec2::new(1.0, 1.0),
    }));
    let clicks = Rc::new(Cell::new(0_u32));
    let counter = clicks.clone();
    let listener: Listener = Box::new(move |_: &mut Card| counter.set(counter.get() + 1));
    let mut press = PressController::new(
        PressConfig::default().with_debounce(600),
        Timeline::new(),
        listener,
    )
    .expect("valid config");
    press.attach(Rc::downgrade(&card));

    let inside = Point::new(150.0, 60.0);
    let outside = Point::new(150.0, 200.0);

    let tap = [PointerEvent::down(inside, 0), PointerEvent::up(inside, 30)];
    let drag_away = [
        PointerEvent::down(inside, 1000),
        PointerEvent::moved(Point::new(150.0, 100.0), 1050),
        PointerEvent::moved(outside, 1100),
        PointerEvent::up(outside, 1150),
    ];
    let scroller = [
        PointerEvent::down(inside, 2000),
        PointerEvent::cancel(inside, 2080),
    ];
    let double_tap = [
        PointerEvent::down(inside, 3000),
        PointerEvent::up(inside, 3020),
        PointerEvent::down(inside, 3250),
        PointerEvent::up(inside, 3270),
    ];

    println!("== Tap ==");
    run(&mut press, &clicks, "tap", 0, &tap);
    println!("== Drag away ==");
    run(&mut press, &clicks, "drag away", 1000, &drag_away);
    println!("== Scroller takes over ==");
    run(&mut press, &clicks, "cancel", 2000, &scroller);
    println!("== Double tap within debounce window ==");
    run(&mut press, &clicks, "double tap", 3000, &double_tap);

    assert_eq!(card.borrow().scale, Vec2::new(1.0, 1.0));
    println!("total clicks: {}", clicks.get());
}
