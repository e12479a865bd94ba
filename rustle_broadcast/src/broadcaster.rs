// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broadcaster: a subject-bound publish/subscribe primitive.
//!
//! ## Usage
//!
//! 1) Construct a [`Broadcaster`] around the subject it will announce changes
//!    about. The subject is fixed for the broadcaster's lifetime.
//! 2) Register callbacks under structurally-compared keys with
//!    [`register_listener`](Broadcaster::register_listener). Registering under
//!    an existing key replaces the previous callback.
//! 3) Call [`broadcast`](Broadcaster::broadcast) with an event payload; every
//!    currently-registered callback is invoked synchronously with
//!    `(&subject, &event)`.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use rustle_broadcast::broadcaster::Broadcaster;
//!
//! struct Axis { ticks: u32 }
//! struct Rescaled;
//!
//! let b: Broadcaster<Axis, Rescaled, &'static str> = Broadcaster::new(Axis { ticks: 5 });
//! let seen = Rc::new(Cell::new(0_u32));
//! let seen2 = seen.clone();
//! b.register_listener("render", move |axis, _ev| seen2.set(axis.ticks));
//! b.broadcast(&Rescaled);
//! assert_eq!(seen.get(), 5);
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;
use core::hash::Hash;
use smallvec::SmallVec;

use crate::registry::KeyedRegistry;

/// A callback registered with a [`Broadcaster`].
///
/// Invoked synchronously with the broadcaster's subject and the event payload
/// of the broadcast that triggered it. A callback must tolerate being called
/// zero or many times per registration and may not assume any ordering
/// relative to other callbacks.
pub type ListenerFn<L, E> = dyn Fn(&L, &E);

/// Holds a reference to one subject ("listenable") and a keyed set of
/// callbacks to notify about it.
///
/// The subject never changes identity after construction. Registration and
/// deregistration are total: any key is accepted, re-registration replaces,
/// and deregistering an absent key is a silent no-op.
///
/// All methods take `&self`; the listener table lives behind a [`RefCell`] so
/// that a callback holding an `Rc` of this broadcaster may re-enter it —
/// registering, deregistering, or broadcasting again — while a broadcast is
/// in flight. Each `broadcast` call iterates a snapshot taken at call start,
/// so such mutations only affect subsequent broadcasts.
///
/// # Failure semantics
///
/// A callback that panics unwinds straight to the `broadcast` caller.
/// Callbacks ordered after it in that snapshot are not invoked; there is no
/// isolation, retry, or suppression. A single faulty listener therefore
/// aborts the remainder of that broadcast.
pub struct Broadcaster<L, E, K> {
    listenable: L,
    listeners: RefCell<KeyedRegistry<K, Rc<ListenerFn<L, E>>>>,
}

impl<L, E, K: Eq + Hash> Broadcaster<L, E, K> {
    /// Constructs a broadcaster bound to `listenable`.
    #[must_use]
    pub fn new(listenable: L) -> Self {
        Self {
            listenable,
            listeners: RefCell::new(KeyedRegistry::new()),
        }
    }

    /// Returns the subject this broadcaster announces changes about.
    #[must_use]
    pub fn listenable(&self) -> &L {
        &self.listenable
    }

    /// Registers `callback` under `key`, replacing any callback already
    /// registered under a structurally-equal key.
    ///
    /// Never fails; there is no limit on listener count. Returns `&self` for
    /// chaining.
    pub fn register_listener(&self, key: K, callback: impl Fn(&L, &E) + 'static) -> &Self {
        self.listeners.borrow_mut().set(key, Rc::new(callback));
        self
    }

    /// Deregisters the callback under `key`, silently succeeding if absent.
    ///
    /// Idempotent. Returns `&self` for chaining.
    pub fn deregister_listener(&self, key: &K) -> &Self {
        self.listeners.borrow_mut().remove(key);
        self
    }

    /// Deregisters every listener. The broadcaster remains usable with a
    /// fresh, empty registry.
    pub fn deregister_all_listeners(&self) {
        self.listeners.borrow_mut().clear();
    }

    /// Returns the number of currently-registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Synchronously invokes every currently-registered callback with the
    /// subject and `event`, returning once all have run to completion.
    ///
    /// Iterates a snapshot of the registrations taken when the call starts:
    /// a callback that registers or deregisters listeners, or triggers a
    /// nested broadcast, influences later broadcasts but never the in-flight
    /// iteration. Returns `&self` for chaining.
    pub fn broadcast(&self, event: &E) -> &Self {
        // Snapshot under a short borrow, then release it before any callback
        // runs so callbacks may re-enter this broadcaster.
        let snapshot: SmallVec<[Rc<ListenerFn<L, E>>; 8]> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for callback in &snapshot {
            callback(&self.listenable, event);
        }
        self
    }
}

impl<L, E, K: Eq + Hash> core::fmt::Debug for Broadcaster<L, E, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Broadcaster")
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}
