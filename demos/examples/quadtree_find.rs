// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree nearest-neighbor lookups.
//!
//! Index a handful of named places, then ask for the closest one, the closest
//! open one, and the three nearest within a radius.
//!
//! Run:
//! - `cargo run -p understory_quadtree_demos --example quadtree_find`
//! - `RUST_LOG=understory_quadtree=trace cargo run -p understory_quadtree_demos --example quadtree_find`

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Located, Quadtree};

#[derive(Debug)]
struct Place {
    name: &'static str,
    at: Point,
    open: bool,
}

impl Located for Place {
    fn location(&self) -> Option<Point> {
        Some(self.at)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let places = [
        ("bakery", 2.0, 3.0, true),
        ("library", 8.0, 1.0, false),
        ("station", 5.0, 5.0, true),
        ("museum", 9.0, 9.0, true),
        ("pharmacy", 2.5, 3.5, false),
        ("market", 4.0, 8.0, true),
    ];
    let tree: Quadtree<Place> = places
        .into_iter()
        .map(|(name, x, y, open)| Place {
            name,
            at: Point::new(x, y),
            open,
        })
        .collect();
    println!("{tree:?}");

    let here = Point::new(2.4, 3.6);
    if let Some(p) = tree.find(here) {
        println!("closest to {here:?}: {}", p.name);
    }
    if let Some(p) = tree.find_matching(here, |p| p.open) {
        println!("closest open place: {}", p.name);
    }

    for (p, d) in tree.find_k_nearest_with_distances(here, 3, |_| true, Some(4.0)) {
        println!("  {:<10} {d:.2}", p.name);
    }
}
