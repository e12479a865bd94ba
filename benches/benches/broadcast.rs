// Copyright 2026 the Rustle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `rustle_broadcast`: registry operations and fan-out cost
//! versus listener count.

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use rustle_broadcast::broadcaster::Broadcaster;
use rustle_broadcast::registry::KeyedRegistry;

struct Subject;

struct Tick(u64);

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("set_replace", |b| {
        b.iter_batched(
            || {
                let mut reg: KeyedRegistry<(u32, &str), u64> = KeyedRegistry::new();
                reg.set((1, "down"), 0);
                reg
            },
            |mut reg| {
                reg.set(black_box((1, "down")), black_box(7));
                reg
            },
            BatchSize::SmallInput,
        );
    });

    for n in [4_u32, 16, 64] {
        group.bench_with_input(BenchmarkId::new("values_snapshot", n), &n, |b, &n| {
            let mut reg: KeyedRegistry<u32, u64> = KeyedRegistry::new();
            for k in 0..n {
                reg.set(k, u64::from(k));
            }
            b.iter(|| black_box(reg.values()));
        });
    }

    group.finish();
}

fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("broadcast");

    for n in [1_u32, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("fan_out", n), &n, |b, &n| {
            let broadcaster: Broadcaster<Subject, Tick, u32> = Broadcaster::new(Subject);
            let sink = Rc::new(Cell::new(0_u64));
            for key in 0..n {
                let sink = sink.clone();
                broadcaster.register_listener(key, move |_, ev| {
                    sink.set(sink.get().wrapping_add(ev.0));
                });
            }
            b.iter(|| {
                broadcaster.broadcast(black_box(&Tick(1)));
            });
        });
    }

    group.bench_function("register_deregister", |b| {
        let broadcaster: Broadcaster<Subject, Tick, u32> = Broadcaster::new(Subject);
        b.iter(|| {
            broadcaster.register_listener(black_box(1), |_, _| {});
            broadcaster.deregister_listener(black_box(&1));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_registry, bench_broadcast);
criterion_main!(benches);
