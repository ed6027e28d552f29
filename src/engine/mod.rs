//! The matching engine: turns a [`crate::schedule::Schedule`] plus a
//! [`crate::graph::CsrGraph`] into a count or a support number.
//!
//! Work is partitioned across root vertices ([`parallel::parallel_reduce`]);
//! everything below the root is single-threaded backtracking
//! ([`matching::count_from_root`]), since a pattern's embedding count from
//! one root is independent of every other root's.

mod fsm;
mod matching;
mod parallel;
mod triangle;

pub use fsm::{fsm_support, fsm_support_with_threads};
pub use triangle::count_matches_clique_triangle;

use crate::graph::CsrGraph;
use crate::schedule::Schedule;

/// Counts embeddings of `schedule`'s pattern in `graph`, parallelized over
/// root vertices and reduced by `schedule`'s redundancy divisor.
///
/// Uses [`std::thread::available_parallelism`] to size the worker pool;
/// falls back to a single thread if the platform can't report it.
pub fn count_matches(graph: &CsrGraph, schedule: &Schedule) -> u64 {
    let num_threads = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    count_matches_with_threads(graph, schedule, num_threads)
}

/// Same as [`count_matches`], but with an explicit thread count — used by
/// benchmarks and tests that need a deterministic or single-threaded run.
pub fn count_matches_with_threads(graph: &CsrGraph, schedule: &Schedule, num_threads: usize) -> u64 {
    let partials: Vec<i64> =
        parallel::parallel_reduce(graph, num_threads, |root, local: &mut i64| {
            *local += matching::count_from_root(graph, schedule, root);
        });
    let raw: i64 = partials.into_iter().sum();
    (raw / schedule.get_in_exclusion_optimize_redundancy()) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::presets;

    fn k4() -> CsrGraph {
        CsrGraph::from_adjacency(&[
            vec![1, 2, 3],
            vec![0, 2, 3],
            vec![0, 1, 3],
            vec![0, 1, 2],
        ])
    }

    #[test]
    fn parallel_triangle_count_matches_single_threaded() {
        let g = k4();
        let schedule = presets::triangle();
        let single = count_matches_with_threads(&g, &schedule, 1);
        let multi = count_matches_with_threads(&g, &schedule, 4);
        assert_eq!(single, 4);
        assert_eq!(single, multi);
    }

    #[test]
    fn count_matches_agrees_with_the_fast_triangle_path() {
        let g = k4();
        assert_eq!(
            count_matches(&g, &presets::triangle()),
            count_matches_clique_triangle(&g)
        );
    }
}
