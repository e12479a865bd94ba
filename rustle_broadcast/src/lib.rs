// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rustle_broadcast --heading-base-level=0

//! Rustle Broadcast: keyed listener registration and synchronous fan-out.
//!
//! ## Overview
//!
//! This crate provides the notification primitive the rest of Rustle is built
//! on: a [`Broadcaster`](crate::broadcaster::Broadcaster) permanently bound to
//! one subject, holding callbacks in a
//! [`KeyedRegistry`](crate::registry::KeyedRegistry) keyed by listener
//! identity. Third parties register and deregister callbacks under a key of
//! their choosing; calling
//! [`broadcast`](crate::broadcaster::Broadcaster::broadcast) invokes every
//! currently-registered callback with the subject and an event payload.
//!
//! ## Keys
//!
//! Keys are compared structurally (`Eq + Hash`), not by reference identity.
//! Two independently-constructed keys with the same shape address the same
//! registration, so a subsystem can derive a stable key (for example a
//! `(component_id, concern)` pair) without sharing an object with anyone
//! else, and re-registration under the same key is idempotent replacement.
//!
//! ## Delivery model
//!
//! All delivery is synchronous, single-threaded, and call-stack-bound. A
//! `broadcast` call iterates a snapshot of the registrations taken when the
//! call starts, so a callback may register or deregister listeners — or
//! trigger a nested broadcast — without affecting the in-flight iteration.
//! Mutations only show up in subsequent broadcasts.
//!
//! ## Minimal example
//!
//! ```
//! use rustle_broadcast::broadcaster::Broadcaster;
//!
//! struct Counter;
//! #[derive(Debug, PartialEq)]
//! struct Changed(u32);
//!
//! let b: Broadcaster<Counter, Changed, &'static str> = Broadcaster::new(Counter);
//! b.register_listener("log", |_subject, ev| {
//!     assert_eq!(ev, &Changed(7));
//! });
//! b.broadcast(&Changed(7));
//! b.deregister_listener(&"log");
//! assert_eq!(b.listener_count(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod broadcaster;
pub mod registry;
