//! Schedule-guided backtracking search.
//!
//! One recursive function handles every schedule shape: whether it carries
//! symmetry-breaking restrictions or an inclusion–exclusion collapse just
//! changes which branches get pruned and how the final few depths are
//! totalled, not the walk itself. A schedule with no restrictions and
//! `in_exclusion_optimize_num <= 1` degenerates to the plain enumerate-every-
//! embedding search; one with both turned on is what elsewhere gets called
//! the aggressive variant. Both paths are exercised by the same code here,
//! which is what makes them provably equivalent rather than two
//! independently-maintained implementations that happen to agree.

use crate::graph::CsrGraph;
use crate::schedule::Schedule;
use crate::vertex_set::VertexSet;

/// Splits `prefixes` into a read-only reference at `father` and a disjoint
/// mutable reference at `child`, without cloning either slot.
///
/// `father != child` always holds (a prefix can't be its own father), so one
/// `split_at_mut` at whichever index is larger gives two non-overlapping
/// halves; the smaller index is then borrowed immutably, the larger mutably
/// (or vice versa), and the borrow checker can see they never alias.
fn father_and_child_mut<'a, 'g>(
    prefixes: &'a mut [VertexSet<'g>],
    father: usize,
    child: usize,
) -> (&'a VertexSet<'g>, &'a mut VertexSet<'g>) {
    debug_assert_ne!(father, child, "a prefix cannot be its own father");
    if father < child {
        let (left, right) = prefixes.split_at_mut(child);
        (&left[father], &mut right[0])
    } else {
        let (left, right) = prefixes.split_at_mut(father);
        (&right[0], &mut left[child])
    }
}

/// Rebuilds every prefix attached to `depth`'s rebuild list, now that
/// `new_vertex` has been chosen for `a[depth]`.
///
/// A father of `None` means the prefix *is* `N(new_vertex)`, borrowed
/// zero-copy from the graph. Otherwise it is `P[father] ∩ N(new_vertex)`,
/// read directly out of the father's slot via [`father_and_child_mut`] —
/// no intermediate owned copy of the father's contents.
pub(crate) fn rebuild_prefixes<'g>(
    schedule: &Schedule,
    graph: &'g CsrGraph,
    prefixes: &mut [VertexSet<'g>],
    new_vertex: i32,
    depth: usize,
) {
    let mut cur = schedule.get_last(depth);
    while let Some(k) = cur {
        match schedule.get_father_prefix_id(k) {
            None => prefixes[k].set_borrowed(graph.neighbors(new_vertex)),
            Some(father) => {
                let (father_set, child_set) = father_and_child_mut(prefixes, father, k);
                child_set.set_intersection(father_set.as_slice(), graph.neighbors(new_vertex));
            }
        }
        cur = schedule.get_next(k);
    }
}

/// Whether choosing `v` for `a[depth]` respects every active restriction
/// `a[depth] < a[index]` at this depth.
pub(crate) fn restrictions_satisfied(
    schedule: &Schedule,
    depth: usize,
    v: i32,
    embedding: &VertexSet,
) -> bool {
    let mut cur = schedule.get_restrict_last(depth);
    while let Some(i) = cur {
        if v >= embedding.get(schedule.get_restrict_index(i)) {
            return false;
        }
        cur = schedule.get_restrict_next(i);
    }
    true
}

/// The depth at which the recursive walk stops descending and collapses the
/// remaining positions via inclusion–exclusion instead.
fn collapse_depth(schedule: &Schedule) -> usize {
    let k = schedule.get_in_exclusion_optimize_num();
    if k > 1 {
        schedule.size() - k
    } else {
        schedule.size()
    }
}

/// Evaluates the inclusion–exclusion closed form for the final
/// `in_exclusion_optimize_num` positions, given the embedding chosen so far.
///
/// Each term is a signed product over its groups: a group merges the
/// candidate prefixes of the local positions it contains and counts how many
/// of those candidates are not already in the embedding. A singleton group
/// needs no merge at all — its one prefix is read directly, with no
/// intermediate owned copy. Summing `val * product-of-group-counts` over
/// every term yields the exact count of ways to complete the remaining
/// positions.
fn in_exclusion_collapse(schedule: &Schedule, prefixes: &[VertexSet<'_>], embedding: &VertexSet<'_>) -> i64 {
    let k = schedule.get_in_exclusion_optimize_num();
    let base_depth = schedule.size() - k;
    let groups_per_term = schedule.in_exclusion_optimize_group();
    let vals = schedule.in_exclusion_optimize_val();

    let mut total: i64 = 0;
    for (term, &val) in groups_per_term.iter().zip(vals) {
        let mut term_product: i64 = 1;
        for group in term {
            let first_prefix = schedule.get_loop_set_prefix_id(base_depth + group[0]);
            let available = if group.len() == 1 {
                prefixes[first_prefix].unordered_subtraction_size(embedding, None)
            } else {
                let mut merged = VertexSet::empty();
                merged.copy_from_slice(prefixes[first_prefix].as_slice());
                for &local in &group[1..] {
                    let prefix_id = schedule.get_loop_set_prefix_id(base_depth + local);
                    merged.intersect_with(&prefixes[prefix_id]);
                }
                merged.unordered_subtraction_size(embedding, None)
            };
            term_product *= available as i64;
        }
        total += val * term_product;
    }
    total
}

fn recurse<'g>(
    graph: &'g CsrGraph,
    schedule: &Schedule,
    prefixes: &mut Vec<VertexSet<'g>>,
    embedding: &mut VertexSet<'g>,
    depth: usize,
    stop_depth: usize,
) -> i64 {
    if depth == stop_depth {
        return if schedule.get_in_exclusion_optimize_num() > 1 {
            in_exclusion_collapse(schedule, prefixes, embedding)
        } else {
            1
        };
    }

    let prefix_id = schedule.get_loop_set_prefix_id(depth);
    let candidates: Vec<i32> = prefixes[prefix_id].as_slice().to_vec();
    let mut total: i64 = 0;
    for v in candidates {
        if embedding.contains_unordered(v) {
            continue;
        }
        if !restrictions_satisfied(schedule, depth, v, embedding) {
            continue;
        }
        rebuild_prefixes(schedule, graph, prefixes, v, depth);
        embedding.push(v);
        total += recurse(graph, schedule, prefixes, embedding, depth + 1, stop_depth);
        embedding.pop();
    }
    total
}

/// Counts embeddings rooted at `root`, *not* divided by the schedule's
/// redundancy — callers sum this across every root and divide once.
pub(crate) fn count_from_root(graph: &CsrGraph, schedule: &Schedule, root: i32) -> i64 {
    let m = schedule.get_total_prefix_num();
    let mut prefixes: Vec<VertexSet> = (0..m).map(|_| VertexSet::empty()).collect();
    let mut embedding = VertexSet::empty();

    rebuild_prefixes(schedule, graph, &mut prefixes, root, 0);
    embedding.push(root);

    let total = if schedule.size() == 1 {
        1
    } else {
        recurse(graph, schedule, &mut prefixes, &mut embedding, 1, collapse_depth(schedule))
    };
    embedding.pop();
    total
}

#[cfg(test)]
mod tests;
