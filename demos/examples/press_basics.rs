// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press basics.
//!
//! A tiny host screen with two pressable elements, a button and an image.
//! Each gets its own controller; a tap shrinks the element, restores it, and
//! shows a "toast" once the restore finishes.
//!
//! Run:
//! - `cargo run -p understory_demos --example press_basics`
//! - `RUST_LOG=understory_press=debug cargo run -p understory_demos --example press_basics`

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use kurbo::{Point, Rect, Vec2};
use tracing_subscriber::EnvFilter;
use understory_press::config::PressConfig;
use understory_press::controller::{PointerHandler, PressController};
use understory_press::element::Pressable;
use understory_press::timeline::Timeline;
use understory_press::types::PointerEvent;

#[derive(Debug)]
struct View {
    name: &'static str,
    frame: Rect,
    scale: Vec2,
}

impl View {
    fn new(name: &'static str, frame: Rect) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            name,
            frame,
            scale: Vec2::new(1.0, 1.0),
        }))
    }
}

impl Pressable for View {
    fn visible_bounds(&self) -> Rect {
        self.frame
    }
    fn scale(&self) -> Vec2 {
        self.scale
    }
    fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }
}

type Toasts = Rc<RefCell<Vec<String>>>;
type Listener = Box<dyn FnMut(&mut View)>;
type Press = PressController<Weak<RefCell<View>>, Timeline, Listener>;

fn bind(view: &Rc<RefCell<View>>, message: &'static str, toasts: &Toasts) -> Press {
    let sink = toasts.clone();
    let listener: Listener = Box::new(move |v: &mut View| {
        sink.borrow_mut().push(format!("{message} ({})", v.name));
    });
    let mut press = PressController::new(PressConfig::default(), Timeline::new(), listener)
        .expect("default config is valid");
    press.attach(Rc::downgrade(view));
    press
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let button = View::new("button", Rect::new(20.0, 100.0, 220.0, 148.0));
    let image = View::new("image", Rect::new(20.0, 200.0, 220.0, 400.0));
    let toasts: Toasts = Rc::default();

    let mut presses = [
        bind(&button, "Are you clicked Button", &toasts),
        bind(&image, "Are you clicked on ImageView", &toasts),
    ];

    // Tap the button at t=0 and the image at t=400, each held for 40 ms.
    let (on_button, on_image) = (Point::new(120.0, 124.0), Point::new(60.0, 300.0));
    let script = [
        (0_usize, PointerEvent::down(on_button, 0)),
        (0, PointerEvent::up(on_button, 40)),
        (1, PointerEvent::down(on_image, 400)),
        (1, PointerEvent::up(on_image, 440)),
    ];

    println!("== Frames (16 ms) ==");
    let mut next = 0;
    for now in (0..=800).step_by(16) {
        while next < script.len() && script[next].1.time <= now {
            let (i, ev) = script[next];
            let handled = presses[i].on_pointer(&ev);
            let kind = ev.kind;
            println!("  t={now:>3}  {kind:?} on {i}  handled={}", handled.is_handled());
            next += 1;
        }
        for p in &mut presses {
            p.advance(now);
        }
        for toast in toasts.borrow_mut().drain(..) {
            println!("  t={now:>3}  toast: {toast}");
        }
        let (b, im) = (button.borrow().scale.x, image.borrow().scale.x);
        if b < 1.0 || im < 1.0 {
            println!("  t={now:>3}  scale button={b:.3} image={im:.3}");
        }
    }
}
