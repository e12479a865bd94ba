// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rustle_pointer --heading-base-level=0

//! Rustle Pointer: per-target dispatchers that normalize raw pointer input.
//!
//! ## Overview
//!
//! A [`PointerDispatcher`](crate::dispatcher::PointerDispatcher) is the single
//! point of translation between one rendering target's raw platform input
//! (mouse or touch, in device coordinates) and the component-local
//! [`PointerEvent`](crate::types::PointerEvent)s its consumers see. Consumers
//! register per-phase handlers keyed by their own
//! [`HandlerKey`](crate::types::HandlerKey), so each consumer can replace its
//! handler without disturbing siblings.
//!
//! ## One dispatcher per (target, device class)
//!
//! Exactly one dispatcher exists per rendering target and
//! [`DeviceClass`](crate::types::DeviceClass), no matter how many logical
//! consumers register. Duplicated dispatchers would double-fire every
//! consumer and misalign hit tests, so the
//! [`DispatcherHub`](crate::hub::DispatcherHub) deduplicates instances by
//! target identity. The hub is an explicit, injectable registry rather than
//! process-wide static state; tests construct their own hub and feed it
//! synthetic input.
//!
//! ## Workflow
//!
//! 1) Platform glue obtains the dispatcher for a target from the hub, passing
//!    the platform→local transform for that target.
//! 2) Consumers register handlers with
//!    [`on_down`](crate::dispatcher::PointerDispatcher::on_down) /
//!    [`on_up`](crate::dispatcher::PointerDispatcher::on_up) /
//!    [`on_move`](crate::dispatcher::PointerDispatcher::on_move).
//! 3) The glue forwards each raw platform event to
//!    [`dispatch`](crate::dispatcher::PointerDispatcher::dispatch); the
//!    dispatcher translates the point once and fans the normalized event out
//!    to a snapshot of that phase's handlers.
//! 4) Consumers tear down with
//!    [`deregister`](crate::dispatcher::PointerDispatcher::deregister); the
//!    hub's [`prune_idle`](crate::hub::DispatcherHub::prune_idle) or
//!    [`release`](crate::hub::DispatcherHub::release) then dispose the
//!    dispatcher itself.
//!
//! Delivery is synchronous and call-stack-bound, with the same snapshot and
//! reentrancy discipline as `rustle_broadcast`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
pub mod hub;
pub mod types;
