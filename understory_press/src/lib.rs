// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_press --heading-base-level=0

//! Understory Press: a `no_std` press-and-click controller with scale feedback.
//!
//! ## Overview
//!
//! This crate turns raw pointer events on one element into a "click with visual feedback" gesture.
//! The element shrinks while pressed, restores when released, and a click is reported only when
//! the release happened over the element and the restore animation has finished.
//! Repeated clicks inside a cool-down window are debounced.
//!
//! It does not do layout, rendering, or multi-pointer tracking, and it knows no gestures other
//! than press and release.
//!
//! ## Pieces
//!
//! - [`controller`]: [`PressController`](crate::controller::PressController), the state machine
//!   that consumes [`PointerEvent`](crate::types::PointerEvent)s and drives everything else.
//! - [`hit`]: inclusive point-in-bounds test against the element's visible bounds.
//! - [`animator`]: [`ScaleAnimator`](crate::animator::ScaleAnimator), the press and release
//!   composite animations with a minimum visible cycle for quick taps.
//! - [`debounce`]: [`DebounceGate`](crate::debounce::DebounceGate).
//! - [`engine`]: the [`AnimationEngine`](crate::engine::AnimationEngine) abstraction, with
//!   [`Timeline`](crate::timeline::Timeline) as the bundled backend.
//! - [`element`]: the [`Pressable`](crate::element::Pressable) element and the weak
//!   [`ElementRef`](crate::element::ElementRef) handle the controller reaches it through.
//!
//! ## Threading
//!
//! Everything runs on the UI thread. Pointer events, frame ticks and click callbacks are
//! serialized by the host; nothing here locks or is `Send`.
//!
//! ## Workflow
//!
//! 1) Build a [`PressController`](crate::controller::PressController) with a
//!    [`PressConfig`](crate::config::PressConfig), an engine and a
//!    [`ClickListener`](crate::controller::ClickListener) (any `FnMut(&mut Element)`).
//! 2) [`attach`](crate::controller::PressController::attach) a weak handle to the element.
//! 3) Route the element's pointer events to
//!    [`on_pointer`](crate::controller::PointerHandler::on_pointer). Honor the returned
//!    [`Handled`](crate::types::Handled): only `Down` is consumed.
//! 4) Call [`advance`](crate::controller::PressController::advance) every frame. Scale updates
//!    are written to the element and clicks are delivered from here.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animator;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod easing;
pub mod element;
pub mod engine;
pub mod hit;
pub mod timeline;
pub mod types;
