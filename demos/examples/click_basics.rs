// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click recognition from synthetic platform input.
//!
//! Wire a `DispatcherHub` and a `ClickInteraction` to a 10x10 component whose
//! content sits at (100, 50) in platform coordinates, then feed raw events
//! and watch which sequences become clicks.
//!
//! Run:
//! - `cargo run -p rustle_demos --example click_basics`

use std::rc::Rc;

use kurbo::{Affine, Point, Rect};
use rustle_click::click::ClickInteraction;
use rustle_pointer::hub::DispatcherHub;
use rustle_pointer::types::{DeviceClass, PointerPhase, SourceId};

fn main() {
    const TARGET: u32 = 1;
    let hub: DispatcherHub<u32> = DispatcherHub::new();
    let to_local = Affine::translate((-100.0, -50.0));
    let mouse = hub.dispatcher(TARGET, DeviceClass::Mouse, to_local);
    let touch = hub.dispatcher(TARGET, DeviceClass::Touch, to_local);

    let mut click = ClickInteraction::new();
    click.set_click_callback(|p| println!("  click recognized at local {p:?}"));
    click.anchor(Rc::new(Rect::new(0.0, 0.0, 10.0, 10.0)), &mouse, &touch);

    println!("== mouse press/release inside ==");
    let src = SourceId::mouse();
    hub.dispatch(&TARGET, DeviceClass::Mouse, PointerPhase::Down, Point::new(105.0, 55.0), src);
    hub.dispatch(&TARGET, DeviceClass::Mouse, PointerPhase::Up, Point::new(105.0, 55.0), src);

    println!("== press inside, release outside (drag off: no click) ==");
    hub.dispatch(&TARGET, DeviceClass::Mouse, PointerPhase::Down, Point::new(105.0, 55.0), src);
    hub.dispatch(&TARGET, DeviceClass::Mouse, PointerPhase::Up, Point::new(200.0, 200.0), src);

    println!("== press outside, release inside (never armed: no click) ==");
    hub.dispatch(&TARGET, DeviceClass::Mouse, PointerPhase::Down, Point::new(200.0, 200.0), src);
    hub.dispatch(&TARGET, DeviceClass::Mouse, PointerPhase::Up, Point::new(105.0, 55.0), src);

    println!("== touch tap ==");
    let tap = SourceId::touch(0);
    hub.dispatch(&TARGET, DeviceClass::Touch, PointerPhase::Down, Point::new(102.0, 52.0), tap);
    hub.dispatch(&TARGET, DeviceClass::Touch, PointerPhase::Up, Point::new(102.0, 52.0), tap);

    println!("== teardown ==");
    click.unanchor();
    let pruned = hub.prune_idle();
    println!("  pruned {pruned} idle dispatchers; hub empty: {}", hub.is_empty());
}
