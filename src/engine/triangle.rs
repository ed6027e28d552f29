//! A schedule-free fast path for triangle (`K3`) counting.
//!
//! Triangle counting doesn't need the general prefix machinery: for every
//! edge `(u, v)` with `u < v`, the number of triangles through that edge is
//! `|N(u) ∩ N(v) ∩ {w : w > v}|`. Restricting to `w > v` both avoids
//! recounting (each triangle is found exactly once, via its smallest two
//! vertices) and lets the merge exit early the moment either row drops to or
//! below the floor.

use std::cmp::Ordering;

use crate::graph::CsrGraph;

/// Counts triangles in `graph` directly, without a [`crate::schedule::Schedule`].
pub fn count_matches_clique_triangle(graph: &CsrGraph) -> u64 {
    let mut total = 0u64;
    for u in 0..graph.node_count() as i32 {
        for &v in graph.neighbors(u) {
            if v <= u {
                continue;
            }
            total += intersection_size_above(graph.neighbors(u), graph.neighbors(v), v);
        }
    }
    total
}

/// `|{ w ∈ a ∩ b : w > floor }|`, via a merge that skips past anything `<=
/// floor` on either side before comparing.
fn intersection_size_above(a: &[i32], b: &[i32], floor: i32) -> u64 {
    let (mut i, mut j) = (0usize, 0usize);
    let mut count = 0u64;
    while i < a.len() && j < b.len() {
        if a[i] <= floor {
            i += 1;
            continue;
        }
        if b[j] <= floor {
            j += 1;
            continue;
        }
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                count += 1;
                i += 1;
                j += 1;
            }
        }
    }
    count
}
