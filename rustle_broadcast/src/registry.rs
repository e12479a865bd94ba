// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural-equality keyed registry with snapshot iteration.
//!
//! [`KeyedRegistry`] maps keys to values where key equality is structural
//! (`Eq + Hash`), not reference identity. It backs the listener tables in
//! [`Broadcaster`](crate::broadcaster::Broadcaster) and the per-phase handler
//! tables in the pointer dispatcher, but is generic over any key/value pair.
//!
//! [`values`](KeyedRegistry::values) returns a snapshot, so callers can
//! iterate the result while freely mutating the registry — entries removed
//! mid-iteration are neither skipped nor double-visited within that snapshot.

use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashMap;

/// An associative structure with structurally-compared keys.
///
/// At most one value is held per structurally-equal key; inserting under an
/// equal key replaces the previous value. Iteration order within one snapshot
/// is fixed, but no ordering is promised across mutations.
///
/// # Example
///
/// ```
/// use rustle_broadcast::registry::KeyedRegistry;
///
/// let mut reg: KeyedRegistry<(u32, &str), i32> = KeyedRegistry::new();
/// reg.set((1, "width"), 10);
/// // A structurally-equal key replaces, it does not duplicate.
/// reg.set((1, "width"), 20);
/// assert_eq!(reg.len(), 1);
/// assert_eq!(reg.get(&(1, "width")), Some(&20));
/// assert!(reg.remove(&(1, "width")));
/// assert!(!reg.remove(&(1, "width")));
/// ```
#[derive(Clone, Debug)]
pub struct KeyedRegistry<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> Default for KeyedRegistry<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> KeyedRegistry<K, V> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry whose key is structurally equal to `key`.
    ///
    /// Returns the displaced value when an entry with an equal key existed.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Returns the value registered under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns `true` if a value is registered under `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes the entry whose key is structurally equal to `key`.
    ///
    /// Returns `true` iff an entry was removed. Removing an absent key is a
    /// no-op, not an error, and the call is idempotent.
    pub fn remove(&mut self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Removes all entries. The registry remains usable afterward.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// Returns a snapshot of the registered values.
    ///
    /// The snapshot is detached from the registry: mutating the registry
    /// while iterating the returned vector cannot skip or double-visit an
    /// entry of that snapshot.
    #[must_use]
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries.values().cloned().collect()
    }
}
