//! Minimum-image frequent-subgraph-mining support counting.
//!
//! For a pattern `P` with `n` positions, every embedding found contributes
//! one vertex to each position's *image* — the set of data-graph vertices
//! that have ever played that role. The minimum-image support of `P` is the
//! smallest of those `n` image sizes: it's the tightest bound on how many
//! times `P` could be "reused" against this graph without any one position
//! running out of distinct vertices to map to.

use std::collections::HashSet;

use crate::graph::CsrGraph;
use crate::schedule::Schedule;
use crate::vertex_set::VertexSet;

use super::matching::{rebuild_prefixes, restrictions_satisfied};
use super::parallel::parallel_reduce;

/// Computes the minimum-image support of `schedule`'s pattern in `graph`,
/// using the platform's default parallelism.
pub fn fsm_support(graph: &CsrGraph, schedule: &Schedule) -> usize {
    let num_threads = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    fsm_support_with_threads(graph, schedule, num_threads)
}

/// Same as [`fsm_support`], but with an explicit thread count.
///
/// Unlike [`super::count_matches`], this always walks every position to the
/// leaf (inclusion–exclusion collapsing would hide which exact vertices were
/// chosen, which is exactly the information support counting needs), so a
/// schedule with `in_exclusion_optimize_num > 1` is used here only for its
/// prefix/restriction shape, not its collapse. Each thread accumulates its
/// own per-position image sets over the roots it draws; the sets are unioned
/// once all threads finish, then reduced to the minimum size.
pub fn fsm_support_with_threads(graph: &CsrGraph, schedule: &Schedule, num_threads: usize) -> usize {
    let size = schedule.size();
    let per_thread: Vec<Vec<HashSet<i32>>> = parallel_reduce(graph, num_threads, |root, local| {
        if local.is_empty() {
            *local = vec![HashSet::new(); size];
        }
        accumulate_from_root(graph, schedule, root, local);
    });

    let mut images: Vec<HashSet<i32>> = vec![HashSet::new(); size];
    for thread_images in per_thread {
        for (d, set) in thread_images.into_iter().enumerate() {
            images[d].extend(set);
        }
    }
    images.iter().map(HashSet::len).min().unwrap_or(0)
}

fn accumulate_from_root(graph: &CsrGraph, schedule: &Schedule, root: i32, images: &mut [HashSet<i32>]) {
    let m = schedule.get_total_prefix_num();
    let mut prefixes: Vec<VertexSet> = (0..m).map(|_| VertexSet::empty()).collect();
    let mut embedding = VertexSet::empty();

    rebuild_prefixes(schedule, graph, &mut prefixes, root, 0);
    embedding.push(root);
    if schedule.size() == 1 {
        images[0].insert(root);
    } else {
        collect_images(graph, schedule, &mut prefixes, &mut embedding, 1, images);
    }
    embedding.pop();
}

fn collect_images<'g>(
    graph: &'g CsrGraph,
    schedule: &Schedule,
    prefixes: &mut Vec<VertexSet<'g>>,
    embedding: &mut VertexSet<'g>,
    depth: usize,
    images: &mut [HashSet<i32>],
) {
    if depth == schedule.size() {
        for (d, image) in images.iter_mut().enumerate() {
            image.insert(embedding.get(d));
        }
        return;
    }

    let prefix_id = schedule.get_loop_set_prefix_id(depth);
    let candidates: Vec<i32> = prefixes[prefix_id].as_slice().to_vec();
    for v in candidates {
        if embedding.contains_unordered(v) {
            continue;
        }
        if !restrictions_satisfied(schedule, depth, v, embedding) {
            continue;
        }
        rebuild_prefixes(schedule, graph, prefixes, v, depth);
        embedding.push(v);
        collect_images(graph, schedule, prefixes, embedding, depth + 1, images);
        embedding.pop();
    }
}
