// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_quadtree::Quadtree;

use rstar::{AABB, RTree};

fn gen_points(count: usize, seed: u64) -> Vec<Point> {
    let mut x = seed;
    let mut next = move || {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        ((x >> 11) as f64) / ((1u64 << 53) as f64) * 1000.0
    };
    (0..count).map(|_| Point::new(next(), next())).collect()
}

fn to_rstar_points(v: &[Point]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_quadtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_external_compare");
    let queries = gen_points(1_000, 0xFEED);
    for &n in &[10_000usize, 100_000] {
        let pts = gen_points(n, 0xA11CE);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("understory_build_n{}", n), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| black_box(Quadtree::from_items(pts).len()),
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("rstar_build_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&pts),
                |pts| black_box(RTree::bulk_load(pts).size()),
                BatchSize::SmallInput,
            )
        });

        let tree = Quadtree::from_items(pts.iter().copied());
        let rtree = RTree::bulk_load(to_rstar_points(&pts));

        group.bench_function(format!("understory_nearest_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.find(*q));
                }
            })
        });
        group.bench_function(format!("rstar_nearest_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(rtree.nearest_neighbor(&[q.x, q.y]));
                }
            })
        });

        group.bench_function(format!("understory_k10_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.find_k_nearest(*q, 10));
                }
            })
        });
        group.bench_function(format!("rstar_k10_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    let k: Vec<_> = rtree.nearest_neighbor_iter(&[q.x, q.y]).take(10).collect();
                    black_box(k);
                }
            })
        });

        let window = Rect::new(400.0, 400.0, 450.0, 450.0);
        group.bench_function(format!("understory_in_bound_n{}", n), |b| {
            b.iter(|| black_box(tree.in_bound(window).len()))
        });
        group.bench_function(format!("rstar_locate_in_envelope_n{}", n), |b| {
            let aabb = AABB::from_corners([window.x0, window.y0], [window.x1, window.y1]);
            b.iter(|| black_box(rtree.locate_in_envelope(&aabb).count()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadtree_external_compare);
criterion_main!(benches);
