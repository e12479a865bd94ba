// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyed listener registration and synchronous broadcast.
//!
//! Demonstrate structural-key overwrite, fan-out with a typed payload, and
//! snapshot semantics under mid-broadcast deregistration.
//!
//! Run:
//! - `cargo run -p rustle_demos --example broadcast_basics`

use std::rc::Rc;

use rustle_broadcast::broadcaster::Broadcaster;

struct Scale {
    domain: (f64, f64),
}

#[derive(Debug)]
struct DomainChanged {
    old: (f64, f64),
}

fn main() {
    let scale: Rc<Broadcaster<Scale, DomainChanged, String>> =
        Rc::new(Broadcaster::new(Scale { domain: (0.0, 100.0) }));

    // Two independently-built keys with the same shape address the same
    // registration: the second closure replaces the first.
    scale.register_listener("axis:render".to_string(), |_, _| {
        println!("  (replaced listener, never runs)");
    });
    scale.register_listener("axis:render".to_string(), |subject, ev| {
        println!("  axis re-render: {:?} -> {:?}", ev.old, subject.domain);
    });
    scale.register_listener("legend:render".to_string(), |_, ev| {
        println!("  legend refresh after {:?}", ev.old);
    });
    println!("listeners registered: {}", scale.listener_count());

    println!("== broadcast ==");
    scale.broadcast(&DomainChanged { old: (0.0, 1.0) });

    // A listener deregistering a sibling mid-broadcast does not stop the
    // sibling running in the in-flight broadcast, only in the next one.
    let scale2 = scale.clone();
    scale.register_listener("cleanup".to_string(), move |_, _| {
        scale2.deregister_listener(&"legend:render".to_string());
        println!("  cleanup: legend listener deregistered");
    });
    println!("== broadcast with mid-flight deregistration ==");
    scale.broadcast(&DomainChanged { old: (0.0, 100.0) });

    println!("== next broadcast ==");
    scale.broadcast(&DomainChanged { old: (5.0, 95.0) });
    println!("listeners remaining: {}", scale.listener_count());
}
