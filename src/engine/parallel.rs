//! The root-vertex work distributor every engine entry point shares.
//!
//! One logical unit of parallel work is "run a full backtracking search
//! rooted at vertex `v`". Threads pull root vertices from a single shared
//! cursor via `fetch_add`, so fast and slow roots even out without any
//! static partitioning scheme — the same batching idea as a work-stealing
//! queue, but implemented with nothing more than `std::thread::scope` and an
//! `AtomicUsize`, since the work items here are single integers rather than
//! a structure worth a deque and its synchronization overhead.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::graph::CsrGraph;

/// Runs `per_root` once for every vertex in `graph`, spread across
/// `num_threads` worker threads, and folds each thread's running total with
/// `Default::default()` + `per_root`'s mutation into a per-thread result.
///
/// `per_root` must be safe to call concurrently from distinct threads with
/// distinct roots (it receives a private, per-thread accumulator `&mut T`,
/// never shared).
pub fn parallel_reduce<T, F>(graph: &CsrGraph, num_threads: usize, per_root: F) -> Vec<T>
where
    T: Default + Send,
    F: Fn(i32, &mut T) + Sync,
{
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    let num_threads = num_threads.max(1).min(n);
    let cursor = AtomicUsize::new(0);
    let per_root = &per_root;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..num_threads)
            .map(|_| {
                let cursor = &cursor;
                scope.spawn(move || {
                    let mut local = T::default();
                    loop {
                        let v = cursor.fetch_add(1, Ordering::Relaxed);
                        if v >= n {
                            break;
                        }
                        per_root(v as i32, &mut local);
                    }
                    local
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().expect("worker thread panicked")).collect()
    })
}
