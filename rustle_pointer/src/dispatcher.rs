// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer dispatcher: translate raw platform input once and fan it out to
//! keyed per-phase consumers.
//!
//! ## Usage
//!
//! 1) Obtain the dispatcher for a (target, device class) pair from a
//!    [`DispatcherHub`](crate::hub::DispatcherHub).
//! 2) Register handlers per phase under your [`HandlerKey`]; registering
//!    under the same key replaces your previous handler only.
//! 3) Platform glue calls [`dispatch`](PointerDispatcher::dispatch) with raw
//!    device coordinates; handlers receive the translated, component-local
//!    [`PointerEvent`].
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::{Affine, Point};
//! use rustle_pointer::dispatcher::PointerDispatcher;
//! use rustle_pointer::types::{DeviceClass, HandlerKey, PointerPhase, SourceId};
//!
//! // Target content sits at (100, 50) in platform coordinates.
//! let d = PointerDispatcher::new(DeviceClass::Mouse, Affine::translate((-100.0, -50.0)));
//! let seen = Rc::new(Cell::new(Point::ZERO));
//! let seen2 = seen.clone();
//! d.on_down(HandlerKey::new("demo", 0), move |ev| seen2.set(ev.point));
//!
//! d.dispatch(PointerPhase::Down, Point::new(105.0, 55.0), SourceId::mouse());
//! assert_eq!(seen.get(), Point::new(5.0, 5.0));
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;
use kurbo::{Affine, Point};
use smallvec::SmallVec;

use crate::types::{DeviceClass, HandlerKey, PhaseSet, PointerEvent, PointerPhase, SourceId};
use rustle_broadcast::registry::KeyedRegistry;

/// A handler registered with a [`PointerDispatcher`] for one phase.
pub type PointerHandler = dyn Fn(&PointerEvent);

type PhaseRegistry = RefCell<KeyedRegistry<HandlerKey, Rc<PointerHandler>>>;

/// Fans one rendering target's raw input of a single [`DeviceClass`] out to
/// per-phase consumers, translating coordinates exactly once.
///
/// Registration and deregistration are total, keyed by [`HandlerKey`], and
/// follow the same last-write-wins and snapshot-iteration semantics as
/// [`Broadcaster`](rustle_broadcast::broadcaster::Broadcaster): a handler may
/// re-enter the dispatcher (replace itself, deregister a sibling, even
/// trigger a nested dispatch) without corrupting the in-flight fan-out.
///
/// The platform→local transform is re-settable because layout may move the
/// target; [`dispatch`](Self::dispatch) always applies the current transform.
pub struct PointerDispatcher {
    class: DeviceClass,
    to_local: RefCell<Affine>,
    down: PhaseRegistry,
    up: PhaseRegistry,
    moved: PhaseRegistry,
}

impl PointerDispatcher {
    /// Creates a dispatcher for one device class with the given
    /// platform→local transform.
    #[must_use]
    pub fn new(class: DeviceClass, to_local: Affine) -> Self {
        Self {
            class,
            to_local: RefCell::new(to_local),
            down: PhaseRegistry::default(),
            up: PhaseRegistry::default(),
            moved: PhaseRegistry::default(),
        }
    }

    /// The device class this dispatcher translates for.
    #[must_use]
    pub fn class(&self) -> DeviceClass {
        self.class
    }

    /// Returns the current platform→local transform.
    #[must_use]
    pub fn to_local(&self) -> Affine {
        *self.to_local.borrow()
    }

    /// Replaces the platform→local transform, e.g. after the target moved.
    pub fn set_to_local(&self, to_local: Affine) {
        *self.to_local.borrow_mut() = to_local;
    }

    /// Registers (or replaces) `key`'s handler for the down phase.
    ///
    /// Returns `&self` for chaining.
    pub fn on_down(&self, key: HandlerKey, handler: impl Fn(&PointerEvent) + 'static) -> &Self {
        self.down.borrow_mut().set(key, Rc::new(handler));
        self
    }

    /// Registers (or replaces) `key`'s handler for the up phase.
    ///
    /// Returns `&self` for chaining.
    pub fn on_up(&self, key: HandlerKey, handler: impl Fn(&PointerEvent) + 'static) -> &Self {
        self.up.borrow_mut().set(key, Rc::new(handler));
        self
    }

    /// Registers (or replaces) `key`'s handler for the move phase.
    ///
    /// Returns `&self` for chaining.
    pub fn on_move(&self, key: HandlerKey, handler: impl Fn(&PointerEvent) + 'static) -> &Self {
        self.moved.borrow_mut().set(key, Rc::new(handler));
        self
    }

    /// Removes `key`'s handlers from every phase. Absent keys are a no-op.
    ///
    /// Returns `&self` for chaining.
    pub fn deregister(&self, key: &HandlerKey) -> &Self {
        self.down.borrow_mut().remove(key);
        self.up.borrow_mut().remove(key);
        self.moved.borrow_mut().remove(key);
        self
    }

    /// Returns the set of phases that currently have at least one handler.
    #[must_use]
    pub fn active_phases(&self) -> PhaseSet {
        let mut set = PhaseSet::empty();
        if !self.down.borrow().is_empty() {
            set |= PhaseSet::DOWN;
        }
        if !self.up.borrow().is_empty() {
            set |= PhaseSet::UP;
        }
        if !self.moved.borrow().is_empty() {
            set |= PhaseSet::MOVE;
        }
        set
    }

    /// Returns `true` when no handler is registered for any phase.
    ///
    /// Idle dispatchers are candidates for
    /// [`DispatcherHub::prune_idle`](crate::hub::DispatcherHub::prune_idle).
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active_phases().is_empty()
    }

    /// Translates `raw` (platform coordinates) into the target's local space
    /// and synchronously invokes every handler registered for `phase`.
    ///
    /// Iterates a snapshot of the phase's registrations taken at call start;
    /// handler mutations affect later dispatches only.
    pub fn dispatch(&self, phase: PointerPhase, raw: Point, source: SourceId) {
        debug_assert_eq!(
            source.class, self.class,
            "source class must match the dispatcher's device class"
        );
        let event = PointerEvent {
            point: *self.to_local.borrow() * raw,
            source,
        };
        let registry = match phase {
            PointerPhase::Down => &self.down,
            PointerPhase::Up => &self.up,
            PointerPhase::Move => &self.moved,
        };
        // Snapshot under a short borrow so handlers can re-enter.
        let snapshot: SmallVec<[Rc<PointerHandler>; 4]> =
            registry.borrow().iter().map(|(_, h)| h.clone()).collect();
        for handler in &snapshot {
            handler(&event);
        }
    }
}

impl core::fmt::Debug for PointerDispatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointerDispatcher")
            .field("class", &self.class)
            .field("to_local", &self.to_local.borrow())
            .field("active_phases", &self.active_phases())
            .finish_non_exhaustive()
    }
}
