// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press controller: pointer events in, scale feedback and clicks out.
//!
//! ## Overview
//!
//! A [`PressController`] is bound 1:1 to one element through a weak
//! [`ElementRef`]. The host feeds it pointer events through
//! [`PointerHandler::on_pointer`] and frame ticks through
//! [`PressController::advance`]; the controller animates the element's scale
//! and calls its [`ClickListener`] when a press ends in a click.
//!
//! ## State machine
//!
//! | event | when | effect | consumed |
//! |---|---|---|---|
//! | `Down` | always | refresh bounds, record touch time; if idle, play press and become pressed | yes |
//! | `Move` | pressed | refresh bounds; if the pointer left them, play release (no click) and become idle | no |
//! | `Up` | pressed | refresh bounds; play release (with click if still inside) and become idle | no |
//! | `Cancel` | always | play release (no click) and become idle | no |
//! | `Other` | any | nothing | no |
//!
//! Only `Down` is consumed, so an enclosing scroll container still sees the
//! drag and can take the gesture away with a `Cancel`.
//!
//! ## Click delivery
//!
//! A click is not delivered on `Up`. It is delivered from
//! [`PressController::advance`] once the release animation has run to its end,
//! and only if the [debounce gate](crate::debounce::DebounceGate) lets it
//! through and the element is still alive. A `Cancel` that arrives before the
//! release has finished discards the click.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::{Rc, Weak};
//!
//! use kurbo::{Point, Rect, Vec2};
//! use understory_press::config::PressConfig;
//! use understory_press::controller::{PointerHandler, PressController};
//! use understory_press::element::Pressable;
//! use understory_press::timeline::Timeline;
//! use understory_press::types::{PointerEvent, PressState};
//!
//! struct Button {
//!     scale: Vec2,
//! }
//!
//! impl Pressable for Button {
//!     fn visible_bounds(&self) -> Rect {
//!         Rect::new(10.0, 10.0, 110.0, 50.0)
//!     }
//!     fn scale(&self) -> Vec2 {
//!         self.scale
//!     }
//!     fn set_scale(&mut self, scale: Vec2) {
//!         self.scale = scale;
//!     }
//! }
//!
//! let button = Rc::new(RefCell::new(Button { scale: Vec2::new(1.0, 1.0) }));
//! let clicks = Rc::new(RefCell::new(0));
//! let counter = clicks.clone();
//!
//! let mut press: PressController<Weak<RefCell<Button>>, _, _> = PressController::new(
//!     PressConfig::default(),
//!     Timeline::new(),
//!     move |_: &mut Button| *counter.borrow_mut() += 1,
//! )
//! .unwrap();
//! press.attach(Rc::downgrade(&button));
//!
//! let at = Point::new(50.0, 30.0);
//! assert!(press.on_pointer(&PointerEvent::down(at, 0)).is_handled());
//! assert_eq!(press.state(), PressState::Pressed);
//! assert!(!press.on_pointer(&PointerEvent::up(at, 30)).is_handled());
//! assert_eq!(press.state(), PressState::Idle);
//!
//! // The click arrives once the restore animation finishes.
//! press.advance(100);
//! assert_eq!(*clicks.borrow(), 0);
//! press.advance(200);
//! assert_eq!(*clicks.borrow(), 1);
//! assert_eq!(button.borrow().scale, Vec2::new(1.0, 1.0));
//! ```

use kurbo::{Point, Rect};

use crate::animator::ScaleAnimator;
use crate::config::{ConfigError, PressConfig};
use crate::debounce::DebounceGate;
use crate::element::{Detached, ElementRef, Pressable};
use crate::engine::AnimationEngine;
use crate::hit::is_inside;
use crate::types::{Handled, PointerEvent, PointerKind, PressFlags, PressState};

/// Receives click notifications.
///
/// Closures taking `&mut E` implement this trait.
pub trait ClickListener<E: ?Sized> {
    /// The element was clicked.
    fn on_click(&mut self, element: &mut E);
}

impl<E: ?Sized, F: FnMut(&mut E)> ClickListener<E> for F {
    fn on_click(&mut self, element: &mut E) {
        self(element);
    }
}

/// Receives raw pointer events for an element.
pub trait PointerHandler {
    /// Handle `event` and report whether it was consumed.
    fn on_pointer(&mut self, event: &PointerEvent) -> Handled;
}

/// Press-with-feedback controller for a single element.
///
/// See the [module docs](self) for the state machine.
pub struct PressController<W: ElementRef, E: AnimationEngine, L> {
    config: PressConfig,
    element: Option<W>,
    flags: PressFlags,
    bounds: Option<Rect>,
    touch_time: Option<u64>,
    animator: ScaleAnimator<E>,
    gate: DebounceGate,
    listener: L,
}

impl<W: ElementRef, E: AnimationEngine, L> core::fmt::Debug for PressController<W, E, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PressController")
            .field("config", &self.config)
            .field("attached", &self.element.is_some())
            .field("flags", &self.flags)
            .field("bounds", &self.bounds)
            .field("touch_time", &self.touch_time)
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

impl<W, E, L> PressController<W, E, L>
where
    W: ElementRef,
    E: AnimationEngine,
    L: ClickListener<W::Element>,
{
    /// Create an unattached controller.
    ///
    /// Fails if `config` does not [validate](PressConfig::validate).
    pub fn new(config: PressConfig, engine: E, listener: L) -> Result<Self, ConfigError> {
        config.validate()?;
        let window = config.debounce_enabled.then_some(config.debounce_window);
        Ok(Self {
            config,
            element: None,
            flags: PressFlags::default(),
            bounds: None,
            touch_time: None,
            animator: ScaleAnimator::new(engine, &config),
            gate: DebounceGate::new(window),
            listener,
        })
    }

    /// Bind the element. Replaces any previous binding.
    pub fn attach(&mut self, element: W) {
        self.element = Some(element);
    }

    /// Stop animations, return to idle and release the element handle.
    pub fn detach(&mut self) -> Option<W> {
        self.animator.cancel_all();
        self.flags = PressFlags::RELEASED;
        self.bounds = None;
        self.element.take()
    }

    /// Returns `true` if an element handle is bound (it may still be gone).
    pub fn is_attached(&self) -> bool {
        self.element.is_some()
    }

    /// Semantic press state.
    pub fn state(&self) -> PressState {
        self.flags.state()
    }

    /// Raw press flags.
    pub fn flags(&self) -> PressFlags {
        self.flags
    }

    /// Visible bounds from the last refresh; `None` before the first.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Time of the most recent `Down`.
    pub fn touch_time(&self) -> Option<u64> {
        self.touch_time
    }

    /// Time of the most recent delivered click, when debouncing.
    pub fn last_click_time(&self) -> Option<u64> {
        self.gate.last_fire()
    }

    /// Configuration in use.
    pub fn config(&self) -> &PressConfig {
        &self.config
    }

    /// Animation engine.
    pub fn engine(&self) -> &E {
        self.animator.engine()
    }

    /// Click listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Click listener, mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Tick animations to `now` and deliver a click if one completed.
    ///
    /// Call once per frame on the UI thread. While the element is alive but
    /// borrowed elsewhere the tick is skipped; the next one catches up.
    /// Once the element is gone the animations run out without a target and
    /// any click is dropped.
    pub fn advance(&mut self, now: u64) {
        let Self {
            element,
            animator,
            gate,
            listener,
            ..
        } = self;
        let Some(w) = element.as_ref() else {
            let _ = animator.advance(now, &mut Detached);
            return;
        };
        let ticked = w.with_element(|el| {
            let at = animator.advance(now, el)?;
            let fire = gate.should_fire(at);
            if fire {
                listener.on_click(el);
            }
            Some((at, fire))
        });
        match ticked {
            Some(Some((at, true))) => tracing::debug!(at, "click delivered"),
            Some(Some((at, false))) => tracing::debug!(at, "click debounced"),
            Some(None) => {}
            None if !w.is_gone() => tracing::trace!(now, "element busy, tick skipped"),
            None => {
                if let Some(at) = animator.advance(now, &mut Detached) {
                    tracing::debug!(at, "click dropped, element gone");
                }
            }
        }
    }

    fn refresh_bounds(&mut self) {
        self.bounds = self
            .element
            .as_ref()
            .and_then(|w| w.with_element(|el| el.visible_bounds()));
        tracing::trace!(bounds = ?self.bounds, "visible bounds refreshed");
    }

    fn release(&mut self, now: u64, click: bool) {
        let _ = self.animator.play_release(now, self.touch_time, click);
        self.flags = PressFlags::RELEASED;
    }

    fn on_down(&mut self, time: u64) -> Handled {
        self.refresh_bounds();
        self.touch_time = Some(time);
        if !self.flags.contains(PressFlags::PRESSED) {
            self.animator.play_press(time);
            self.flags = PressFlags::PRESSED;
            tracing::debug!(time, "pressed");
        }
        Handled::Yes
    }

    fn on_move(&mut self, position: Point, time: u64) -> Handled {
        if self.flags.contains(PressFlags::PRESSED) {
            self.refresh_bounds();
            if !is_inside(position, self.bounds) {
                self.release(time, false);
                tracing::debug!(time, "pointer left element, press cancelled");
            }
        }
        Handled::No
    }

    fn on_up(&mut self, position: Point, time: u64) -> Handled {
        if self.flags.contains(PressFlags::PRESSED) {
            self.refresh_bounds();
            let inside = is_inside(position, self.bounds);
            self.release(time, inside);
            tracing::debug!(time, inside, "released");
        }
        Handled::No
    }

    fn on_cancel(&mut self, time: u64) -> Handled {
        // Passes through the empty state on the way to idle.
        self.flags.remove(PressFlags::PRESSED);
        self.release(time, false);
        tracing::debug!(time, "press cancelled");
        Handled::No
    }
}

impl<W, E, L> PointerHandler for PressController<W, E, L>
where
    W: ElementRef,
    E: AnimationEngine,
    L: ClickListener<W::Element>,
{
    fn on_pointer(&mut self, event: &PointerEvent) -> Handled {
        let handled = match event.kind {
            PointerKind::Down => self.on_down(event.time),
            PointerKind::Move => self.on_move(event.position, event.time),
            PointerKind::Up => self.on_up(event.position, event.time),
            PointerKind::Cancel => self.on_cancel(event.time),
            PointerKind::Other => Handled::No,
        };
        debug_assert!(self.flags.is_steady(), "unsteady flags {:?}", self.flags);
        handled
    }
}

/// Plain click path: forwards straight to the listener, without animation or debounce.
impl<W, E, L> ClickListener<W::Element> for PressController<W, E, L>
where
    W: ElementRef,
    E: AnimationEngine,
    L: ClickListener<W::Element>,
{
    fn on_click(&mut self, element: &mut W::Element) {
        self.listener.on_click(element);
    }
}
