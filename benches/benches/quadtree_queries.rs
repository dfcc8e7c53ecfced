// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_quadtree::{Quadtree, contains_point};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    fn next_point(&mut self, bound: Rect) -> Point {
        Point::new(
            bound.x0 + self.next_f64() * bound.width(),
            bound.y0 + self.next_f64() * bound.height(),
        )
    }
}

const BOUND: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

fn gen_uniform_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count).map(|_| rng.next_point(BOUND)).collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1u64);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let c = rng.next_point(BOUND.inset(-spread));
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(c.x + dx, c.y + dy));
        }
    }
    out
}

fn gen_queries(count: usize) -> Vec<Point> {
    gen_uniform_points(count, 0xFEED)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 10_000, 100_000] {
        let pts = gen_uniform_points(n, 0xA11CE);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_n{}", n), |b| {
            b.iter_batched(
                || Quadtree::new(BOUND),
                |mut tree| {
                    for p in pts.iter().copied() {
                        tree.insert(p).unwrap();
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("from_items_n{}", n), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| {
                    let tree = Quadtree::from_items(pts);
                    black_box(tree.node_count());
                },
                BatchSize::SmallInput,
            )
        });
    }

    let clustered = gen_clustered_points(50, 400, 4.0);
    group.throughput(Throughput::Elements(clustered.len() as u64));
    group.bench_function("from_items_clustered", |b| {
        b.iter_batched(
            || clustered.clone(),
            |pts| black_box(Quadtree::from_items(pts).node_count()),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let queries = gen_queries(1_000);
    group.throughput(Throughput::Elements(queries.len() as u64));
    for &n in &[1_000usize, 100_000] {
        let pts = gen_uniform_points(n, 0xB0B);
        let tree = Quadtree::from_items(pts.iter().copied());
        group.bench_function(format!("quadtree_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.find(*q));
                }
            })
        });
        if n <= 1_000 {
            group.bench_function(format!("linear_scan_n{}", n), |b| {
                b.iter(|| {
                    for q in &queries {
                        let best = pts.iter().min_by(|a, b| {
                            a.distance_squared(*q).total_cmp(&b.distance_squared(*q))
                        });
                        black_box(best);
                    }
                })
            });
        }
    }
    group.finish();
}

fn bench_k_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("k_nearest");
    let pts = gen_uniform_points(100_000, 0xD00D);
    let tree = Quadtree::from_items(pts);
    let queries = gen_queries(1_000);
    group.throughput(Throughput::Elements(queries.len() as u64));
    for &k in &[1usize, 10, 100] {
        group.bench_function(format!("k{}", k), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.find_k_nearest(*q, k));
                }
            })
        });
    }
    group.bench_function("k10_within_5", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(tree.find_k_nearest_matching(*q, 10, |_| true, Some(5.0)));
            }
        })
    });
    group.finish();
}

fn bench_in_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_bound");
    let pts = gen_uniform_points(100_000, 0xE1E1);
    let tree = Quadtree::from_items(pts.iter().copied());
    let windows: Vec<Rect> = gen_queries(200)
        .into_iter()
        .map(|p| Rect::from_points(p, p).inflate(25.0, 25.0))
        .collect();
    group.throughput(Throughput::Elements(windows.len() as u64));

    group.bench_function("quadtree", |b| {
        b.iter(|| {
            for r in &windows {
                black_box(tree.in_bound(*r).len());
            }
        })
    });
    group.bench_function("quadtree_reused_buffer", |b| {
        let mut buf = Vec::new();
        b.iter(|| {
            for r in &windows {
                tree.in_bound_into(*r, |_| true, &mut buf);
                black_box(buf.len());
            }
        })
    });
    group.bench_function("linear_scan", |b| {
        b.iter(|| {
            for r in &windows {
                let hits = pts.iter().filter(|p| contains_point(r, **p)).count();
                black_box(hits);
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_find,
    bench_k_nearest,
    bench_in_bound
);
criterion_main!(benches);
