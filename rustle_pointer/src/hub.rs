// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher hub: deduplicate pointer dispatchers by target identity.
//!
//! The hub replaces a process-wide static lookup table with an explicit,
//! injectable registry. All consumers of one rendering target share a single
//! [`PointerDispatcher`] per device class; asking the hub twice for the same
//! (target, class) pair returns the same instance. Duplicate dispatchers
//! would double-fire every registered handler, so this deduplication is a
//! load-bearing invariant.
//!
//! The hub's lifetime is tied to the set of live rendering targets: when the
//! last consumer of a target deregisters, dispose the dispatcher with
//! [`release`](DispatcherHub::release) or sweep all unused ones with
//! [`prune_idle`](DispatcherHub::prune_idle).
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//! use kurbo::Affine;
//! use rustle_pointer::hub::DispatcherHub;
//! use rustle_pointer::types::DeviceClass;
//!
//! let hub: DispatcherHub<u32> = DispatcherHub::new();
//! let a = hub.dispatcher(7, DeviceClass::Mouse, Affine::IDENTITY);
//! let b = hub.dispatcher(7, DeviceClass::Mouse, Affine::IDENTITY);
//! assert!(Rc::ptr_eq(&a, &b));
//! assert_eq!(hub.len(), 1);
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;
use core::hash::Hash;
use hashbrown::HashMap;
use kurbo::{Affine, Point};

use crate::dispatcher::PointerDispatcher;
use crate::types::{DeviceClass, PointerPhase, SourceId};

/// An injectable registry of per-target pointer dispatchers.
///
/// `T` is the rendering-target identity supplied by the owning component — a
/// stable, structurally-comparable handle (a node id, a window id, …).
///
/// The hub hands out `Rc`s; a consumer that keeps its `Rc` past
/// [`release`](Self::release) keeps the old instance alive, and a later
/// accessor call creates a fresh, disjoint dispatcher. Dispose only when the
/// last consumer has deregistered.
#[derive(Debug)]
pub struct DispatcherHub<T> {
    dispatchers: RefCell<HashMap<(T, DeviceClass), Rc<PointerDispatcher>>>,
}

impl<T> Default for DispatcherHub<T> {
    fn default() -> Self {
        Self {
            dispatchers: RefCell::new(HashMap::new()),
        }
    }
}

impl<T: Eq + Hash + Clone> DispatcherHub<T> {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dispatcher for `(target, class)`, creating it with
    /// `to_local` if absent.
    ///
    /// When the dispatcher already exists, `to_local` is ignored — the
    /// existing transform stays authoritative; update it through
    /// [`PointerDispatcher::set_to_local`] if the target moved.
    #[must_use]
    pub fn dispatcher(
        &self,
        target: T,
        class: DeviceClass,
        to_local: Affine,
    ) -> Rc<PointerDispatcher> {
        self.dispatchers
            .borrow_mut()
            .entry((target, class))
            .or_insert_with(|| Rc::new(PointerDispatcher::new(class, to_local)))
            .clone()
    }

    /// Returns the dispatcher for `(target, class)` without creating one.
    #[must_use]
    pub fn get(&self, target: &T, class: DeviceClass) -> Option<Rc<PointerDispatcher>> {
        self.dispatchers
            .borrow()
            .get(&(target.clone(), class))
            .cloned()
    }

    /// Forwards a raw platform event to the dispatcher for `(target, class)`.
    ///
    /// Returns `false` when no such dispatcher exists (the event is dropped).
    pub fn dispatch(
        &self,
        target: &T,
        class: DeviceClass,
        phase: PointerPhase,
        raw: Point,
        source: SourceId,
    ) -> bool {
        // Clone the Rc out before dispatching so handlers may call back into
        // this hub (e.g. to release a dispatcher) without a borrow conflict.
        let Some(dispatcher) = self.get(target, class) else {
            return false;
        };
        dispatcher.dispatch(phase, raw, source);
        true
    }

    /// Removes the dispatcher for `(target, class)`.
    ///
    /// Returns `true` iff a dispatcher was removed. Consumers still holding
    /// an `Rc` keep the removed instance alive but detached from the hub.
    pub fn release(&self, target: &T, class: DeviceClass) -> bool {
        self.dispatchers
            .borrow_mut()
            .remove(&(target.clone(), class))
            .is_some()
    }

    /// Removes every dispatcher with no registered handlers, returning how
    /// many were dropped.
    pub fn prune_idle(&self) -> usize {
        let mut map = self.dispatchers.borrow_mut();
        let before = map.len();
        map.retain(|_, d| !d.is_idle());
        before - map.len()
    }

    /// Returns the number of live dispatchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dispatchers.borrow().len()
    }

    /// Returns `true` when the hub holds no dispatchers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dispatchers.borrow().is_empty()
    }
}
