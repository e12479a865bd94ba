// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `rustle_pointer`: per-event dispatch cost with coordinate
//! translation, versus consumer count.

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point};

use rustle_pointer::dispatcher::PointerDispatcher;
use rustle_pointer::hub::DispatcherHub;
use rustle_pointer::types::{DeviceClass, HandlerKey, PointerPhase, SourceId};

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for n in [1_u64, 4, 16] {
        group.bench_with_input(BenchmarkId::new("move_fan_out", n), &n, |b, &n| {
            let d = PointerDispatcher::new(DeviceClass::Mouse, Affine::translate((-10.0, -20.0)));
            let sink = Rc::new(Cell::new(0.0_f64));
            for id in 0..n {
                let sink = sink.clone();
                d.on_move(HandlerKey::new("bench", id), move |ev| {
                    sink.set(sink.get() + ev.point.x);
                });
            }
            b.iter(|| {
                d.dispatch(
                    PointerPhase::Move,
                    black_box(Point::new(42.0, 17.0)),
                    SourceId::mouse(),
                );
            });
        });
    }

    group.bench_function("hub_lookup_and_dispatch", |b| {
        let hub: DispatcherHub<u32> = DispatcherHub::new();
        let d = hub.dispatcher(7, DeviceClass::Touch, Affine::IDENTITY);
        d.on_down(HandlerKey::new("bench", 0), |_| {});
        b.iter(|| {
            hub.dispatch(
                black_box(&7),
                DeviceClass::Touch,
                PointerPhase::Down,
                Point::ZERO,
                SourceId::touch(0),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
