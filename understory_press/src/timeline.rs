// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick-driven animation backend.
//!
//! [`Timeline`] keeps every animation in a flat slot vector; handles are slot
//! indices and are never reused. The host calls
//! [`advance`](crate::engine::AnimationEngine::advance) once per frame with the
//! frame time.
//!
//! ```
//! use understory_press::easing::Easing;
//! use understory_press::engine::{AnimationEngine, AnimationTarget};
//! use understory_press::timeline::Timeline;
//! use understory_press::types::Property;
//!
//! #[derive(Default)]
//! struct Scale(f64, f64);
//! impl AnimationTarget for Scale {
//!     fn value(&self, p: Property) -> f64 {
//!         match p { Property::ScaleX => self.0, Property::ScaleY => self.1 }
//!     }
//!     fn set_value(&mut self, p: Property, v: f64) {
//!         match p { Property::ScaleX => self.0 = v, Property::ScaleY => self.1 = v }
//!     }
//! }
//!
//! let mut tl = Timeline::new();
//! let x = tl.play_from_to(Property::ScaleX, Some(0.0), 1.0, 100, Easing::Linear);
//! let y = tl.play_from_to(Property::ScaleY, Some(0.0), 1.0, 100, Easing::Linear);
//! let both = tl.combine(&[x, y]);
//! tl.on_complete(both);
//! tl.start(both, 0, 0);
//!
//! let mut s = Scale::default();
//! assert!(tl.advance(50, &mut s).is_empty());
//! assert_eq!((s.0, s.1), (0.5, 0.5));
//! let done = tl.advance(120, &mut s);
//! assert_eq!(done[0].handle, both);
//! assert_eq!(done[0].at, 100);
//! ```

use alloc::vec::Vec;

use crate::easing::Easing;
use crate::engine::{AnimationEngine, AnimationTarget, Completion};
use crate::types::Property;

/// Handle to an animation in a [`Timeline`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnimationId(u32);

impl AnimationId {
    fn from_idx(idx: usize) -> Self {
        Self(u32::try_from(idx).unwrap_or(u32::MAX))
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Track {
    property: Property,
    from: Option<f64>,
    to: f64,
    duration: u64,
    easing: Easing,
    // Start value resolved when the track first runs.
    origin: Option<f64>,
}

#[derive(Clone, Debug)]
enum Kind {
    Track(Track),
    // Slot indices of member tracks.
    Group(Vec<usize>),
}

#[derive(Clone, Debug)]
struct Entry {
    kind: Kind,
    begin: Option<u64>,
    notify: bool,
}

/// Flat, tick-driven [`AnimationEngine`].
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    entries: Vec<Entry>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered animations (tracks and groups).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time at which `id` is scheduled to begin, if it is scheduled or running.
    pub fn scheduled_begin(&self, id: AnimationId) -> Option<u64> {
        self.entries.get(id.idx()).and_then(|e| e.begin)
    }

    /// Returns `true` if `id` has an armed completion.
    pub fn has_completion(&self, id: AnimationId) -> bool {
        self.entries.get(id.idx()).is_some_and(|e| e.notify)
    }

    fn push(&mut self, kind: Kind) -> AnimationId {
        let id = AnimationId::from_idx(self.entries.len());
        self.entries.push(Entry {
            kind,
            begin: None,
            notify: false,
        });
        id
    }

    fn span(&self, idx: usize) -> u64 {
        match &self.entries[idx].kind {
            Kind::Track(t) => t.duration,
            Kind::Group(children) => children.iter().map(|&c| self.span(c)).max().unwrap_or(0),
        }
    }

    fn set_begin(&mut self, idx: usize, begin: Option<u64>) {
        let children = match &mut self.entries[idx].kind {
            Kind::Track(t) => {
                t.origin = None;
                None
            }
            Kind::Group(children) => Some(children.clone()),
        };
        self.entries[idx].begin = begin;
        for c in children.into_iter().flatten() {
            self.set_begin(c, begin);
        }
    }
}

impl AnimationEngine for Timeline {
    type Handle = AnimationId;

    fn play_from_to(
        &mut self,
        property: Property,
        start: Option<f64>,
        end: f64,
        duration: u64,
        easing: Easing,
    ) -> AnimationId {
        self.push(Kind::Track(Track {
            property,
            from: start,
            to: end,
            duration,
            easing,
            origin: None,
        }))
    }

    fn combine(&mut self, handles: &[AnimationId]) -> AnimationId {
        let mut members = Vec::new();
        for h in handles {
            match self.entries.get(h.idx()).map(|e| &e.kind) {
                Some(Kind::Track(_)) => members.push(h.idx()),
                Some(Kind::Group(children)) => members.extend_from_slice(children),
                None => {}
            }
        }
        self.push(Kind::Group(members))
    }

    fn start(&mut self, handle: AnimationId, now: u64, delay: u64) {
        if handle.idx() < self.entries.len() {
            self.set_begin(handle.idx(), Some(now.saturating_add(delay)));
        }
    }

    fn cancel(&mut self, handle: AnimationId) {
        if handle.idx() < self.entries.len() {
            self.entries[handle.idx()].notify = false;
            self.set_begin(handle.idx(), None);
        }
    }

    fn on_complete(&mut self, handle: AnimationId) {
        if let Some(e) = self.entries.get_mut(handle.idx()) {
            e.notify = true;
        }
    }

    fn clear_on_complete(&mut self, handle: AnimationId) {
        if let Some(e) = self.entries.get_mut(handle.idx()) {
            e.notify = false;
        }
    }

    fn is_running(&self, handle: AnimationId) -> bool {
        self.scheduled_begin(handle).is_some()
    }

    fn advance<T: AnimationTarget + ?Sized>(
        &mut self,
        now: u64,
        target: &mut T,
    ) -> Vec<Completion<AnimationId>> {
        let mut out = Vec::new();

        for (i, entry) in self.entries.iter_mut().enumerate() {
            let Some(begin) = entry.begin else {
                continue;
            };
            let Kind::Track(track) = &mut entry.kind else {
                continue;
            };
            if now < begin {
                continue;
            }
            let origin = match track.origin {
                Some(o) => o,
                None => {
                    let o = track.from.unwrap_or_else(|| target.value(track.property));
                    track.origin = Some(o);
                    o
                }
            };
            let elapsed = now - begin;
            if elapsed >= track.duration {
                target.set_value(track.property, track.to);
                track.origin = None;
                entry.begin = None;
                if entry.notify {
                    entry.notify = false;
                    out.push(Completion {
                        handle: AnimationId::from_idx(i),
                        at: begin.saturating_add(track.duration),
                    });
                }
            } else {
                let p = track.easing.ease(elapsed as f64 / track.duration as f64);
                target.set_value(track.property, origin + (track.to - origin) * p);
            }
        }

        for i in 0..self.entries.len() {
            let Some(begin) = self.entries[i].begin else {
                continue;
            };
            let Kind::Group(children) = &self.entries[i].kind else {
                continue;
            };
            if now < begin || children.iter().any(|&c| self.entries[c].begin.is_some()) {
                continue;
            }
            let at = begin.saturating_add(self.span(i));
            let entry = &mut self.entries[i];
            entry.begin = None;
            if entry.notify {
                entry.notify = false;
                out.push(Completion {
                    handle: AnimationId::from_idx(i),
                    at,
                });
            }
        }

        out.sort_by_key(|c| c.handle.0);
        out
    }
}
