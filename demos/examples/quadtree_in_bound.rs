// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree rectangle queries.
//!
//! Scatter points on a grid, sweep a window across it reusing one result
//! buffer, and show that out-of-bound inserts are rejected.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_in_bound`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_quadtree::Quadtree;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tree = Quadtree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    for i in 0..400_u32 {
        // A cheap deterministic scatter.
        let x = f64::from((i * 37) % 101);
        let y = f64::from((i * 61) % 97);
        if let Err(err) = tree.insert(Point::new(x, y)) {
            tracing::warn!(%err, "dropping point");
        }
    }
    tracing::info!(
        items = tree.len(),
        nodes = tree.node_count(),
        "built quadtree"
    );

    let mut hits = Vec::new();
    for step in 0..5 {
        let x0 = f64::from(step) * 20.0;
        let window = Rect::new(x0, 40.0, x0 + 20.0, 60.0);
        tree.in_bound_into(window, |_| true, &mut hits);
        println!("{window:?}: {} points", hits.len());
    }

    let left_half = tree.in_bound_matching(tree.bound(), |p| p.x < 50.0);
    println!("left half: {} points", left_half.len());

    match tree.insert(Point::new(150.0, 10.0)) {
        Ok(()) => println!("unexpectedly accepted"),
        Err(err) => println!("rejected: {err}"),
    }
}
