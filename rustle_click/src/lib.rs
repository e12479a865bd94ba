// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=rustle_click --heading-base-level=0

//! Rustle Click: derive click gestures from normalized pointer phases.
//!
//! ## Overview
//!
//! A [`ClickInteraction`](crate::click::ClickInteraction) is a small state
//! machine with two states, idle and armed. Anchored to one rendering
//! target, it listens for down/up phases on both the mouse-class and the
//! touch-class [`PointerDispatcher`](rustle_pointer::dispatcher::PointerDispatcher)
//! of that target:
//!
//! - A down event inside the target's hit region arms the gesture; a down
//!   outside leaves it idle.
//! - The next up event always disarms. If the up point is also inside the
//!   region, the user callback fires with that point first.
//!
//! Hit-testing goes through the owning component's
//! [`HitRegion`](crate::region::HitRegion), queried at both phases — bounds
//! may change between press and release, so nothing is cached at arm time.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::{Affine, Point, Rect};
//! use rustle_click::click::ClickInteraction;
//! use rustle_pointer::hub::DispatcherHub;
//! use rustle_pointer::types::{DeviceClass, PointerPhase, SourceId};
//!
//! let hub: DispatcherHub<u32> = DispatcherHub::new();
//! let mouse = hub.dispatcher(1, DeviceClass::Mouse, Affine::IDENTITY);
//! let touch = hub.dispatcher(1, DeviceClass::Touch, Affine::IDENTITY);
//!
//! let mut click = ClickInteraction::new();
//! let clicked = Rc::new(Cell::new(None));
//! let c = clicked.clone();
//! click.set_click_callback(move |p| c.set(Some(p)));
//! click.anchor(Rc::new(Rect::new(0.0, 0.0, 10.0, 10.0)), &mouse, &touch);
//!
//! mouse.dispatch(PointerPhase::Down, Point::new(5.0, 5.0), SourceId::mouse());
//! mouse.dispatch(PointerPhase::Up, Point::new(5.0, 5.0), SourceId::mouse());
//! assert_eq!(clicked.get(), Some(Point::new(5.0, 5.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod click;
pub mod region;
