//! The schedule contract the matching engine consumes.
//!
//! A [`Schedule`] is an **opaque plan** for a fixed pattern graph `P`,
//! produced elsewhere by a pattern-to-schedule compiler (out of scope here).
//! The engine only ever reads it through the accessors below
//! and assumes the well-formedness conditions checked by [`Schedule::validate`]:
//!
//! 1. the "father" relation on prefixes forms a forest rooted at a pseudo-root
//!    (`None` father means "this prefix is `N(a[depth])` directly");
//! 2. for every prefix `k` attached at depth `d`, `P[k]` equals
//!    `intersect(P[father(k)], N(a[d]))`, or `N(a[d])` itself when `father(k)` is `None`;
//! 3. a restriction at depth `d` references only indices `< d`;
//! 4. in-exclusion groups at depth `size - k` reference only local indices in `0..k`.

mod file;
pub mod presets;

pub use file::ScheduleFile;

/// The opaque, engine-facing schedule plan for a pattern `P`.
pub struct Schedule {
    size: usize,

    /// `loop_set_prefix_id[depth]` — which prefix supplies candidates at `depth`.
    loop_set_prefix_id: Vec<usize>,

    /// `prefix_father[k]` — the prefix `P[k]` is built from, or `None` to use
    /// `N(a[depth])` directly (depth is implied by which `last` list `k` is in).
    prefix_father: Vec<Option<usize>>,

    /// `last[depth]` — head of the intrusive list of prefixes (re)built right
    /// after `a[depth]` is chosen.
    last: Vec<Option<usize>>,
    /// `next[prefix_id]` — next prefix in its depth's rebuild list.
    next: Vec<Option<usize>>,

    /// `restrict_last[depth]` — head of the list of active restrictions at `depth`.
    restrict_last: Vec<Option<usize>>,
    /// `restrict_next[i]` — next restriction in its depth's list.
    restrict_next: Vec<Option<usize>>,
    /// `restrict_index[i]` — `j` such that the restriction requires `a[depth] < a[j]`.
    restrict_index: Vec<usize>,

    in_exclusion_optimize_num: usize,
    /// Per term: a partition of `0..in_exclusion_optimize_num` into groups,
    /// each a list of local indices (`0` = depth `size - k`, `1` = depth
    /// `size - k + 1`, ...).
    in_exclusion_optimize_group: Vec<Vec<Vec<usize>>>,
    /// Signed coefficient per term, parallel to `in_exclusion_optimize_group`.
    in_exclusion_optimize_val: Vec<i64>,

    /// Positive divisor applied once to the final reduced sum.
    redundancy: i64,
}

impl Schedule {
    /// Constructs a schedule from its raw fields and validates it (debug builds
    /// only — a malformed schedule is a programmer contract violation).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        size: usize,
        loop_set_prefix_id: Vec<usize>,
        prefix_father: Vec<Option<usize>>,
        last: Vec<Option<usize>>,
        next: Vec<Option<usize>>,
        restrict_last: Vec<Option<usize>>,
        restrict_next: Vec<Option<usize>>,
        restrict_index: Vec<usize>,
        in_exclusion_optimize_num: usize,
        in_exclusion_optimize_group: Vec<Vec<Vec<usize>>>,
        in_exclusion_optimize_val: Vec<i64>,
        redundancy: i64,
    ) -> Self {
        let schedule = Self {
            size,
            loop_set_prefix_id,
            prefix_father,
            last,
            next,
            restrict_last,
            restrict_next,
            restrict_index,
            in_exclusion_optimize_num,
            in_exclusion_optimize_group,
            in_exclusion_optimize_val,
            redundancy,
        };
        schedule.validate();
        schedule
    }

    /// Debug-only well-formedness check.
    #[cfg(debug_assertions)]
    fn validate(&self) {
        assert!(self.size >= 1, "pattern size must be at least 1");
        assert!(self.redundancy > 0, "redundancy must be a positive divisor");
        assert_eq!(self.loop_set_prefix_id.len(), self.size);
        assert_eq!(self.last.len(), self.size);
        assert_eq!(self.next.len(), self.prefix_father.len());
        assert_eq!(self.restrict_last.len(), self.size);
        assert_eq!(self.restrict_next.len(), self.restrict_index.len());

        let m = self.prefix_father.len();
        for father in self.prefix_father.iter().flatten() {
            assert!(*father < m, "prefix father {father} out of range (m={m})");
        }
        // Father relation must form a forest: following `father` repeatedly
        // from any prefix must terminate in at most `m` steps (no cycles).
        for start in 0..m {
            let mut cur = start;
            for _ in 0..=m {
                match self.prefix_father[cur] {
                    None => break,
                    Some(f) => cur = f,
                }
            }
            assert!(
                self.prefix_father[cur].is_none(),
                "prefix father relation contains a cycle reachable from prefix {start}"
            );
        }

        // Depth 0's entry is a structural placeholder: the engine never
        // consults it (the root vertex is pushed directly, recursion starts
        // at depth 1), so it's exempt from the `< m` bound — this is what
        // lets a size-1 pattern (no prefixes at all, `m == 0`) validate.
        for &loop_id in self.loop_set_prefix_id.iter().skip(1) {
            assert!(loop_id < m, "loop_set_prefix_id {loop_id} out of range (m={m})");
        }
        for &idx in &self.restrict_index {
            assert!(idx < self.size, "restrict_index {idx} out of range (size={})", self.size);
        }
        // Restrictions at depth d must reference only indices < d.
        for depth in 0..self.size {
            let mut cur = self.restrict_last[depth];
            while let Some(i) = cur {
                assert!(
                    self.restrict_index[i] < depth,
                    "restriction at depth {depth} references index {} >= depth",
                    self.restrict_index[i]
                );
                cur = self.restrict_next[i];
            }
        }

        let k = self.in_exclusion_optimize_num;
        if k > 1 {
            assert!(k <= self.size, "in_exclusion_optimize_num exceeds pattern size");
            assert_eq!(self.in_exclusion_optimize_group.len(), self.in_exclusion_optimize_val.len());
            for term in &self.in_exclusion_optimize_group {
                let mut seen = vec![false; k];
                for group in term {
                    assert!(!group.is_empty(), "in-exclusion group must be non-empty");
                    for &local in group {
                        assert!(local < k, "in-exclusion local index {local} out of range (k={k})");
                        assert!(!seen[local], "in-exclusion local index {local} used twice in one term");
                        seen[local] = true;
                    }
                }
            }
        }
    }

    #[cfg(not(debug_assertions))]
    fn validate(&self) {}

    /// `|P|`, the number of pattern vertices / recursion depths.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Which prefix supplies candidates for `a[depth]`.
    #[inline]
    pub fn get_loop_set_prefix_id(&self, depth: usize) -> usize {
        self.loop_set_prefix_id[depth]
    }

    /// The prefix `P[k]` is built from (`None` ⇒ use `N(a[depth])` directly).
    #[inline]
    pub fn get_father_prefix_id(&self, prefix_id: usize) -> Option<usize> {
        self.prefix_father[prefix_id]
    }

    /// Head of the rebuild list for `depth`.
    #[inline]
    pub fn get_last(&self, depth: usize) -> Option<usize> {
        self.last[depth]
    }

    /// Next prefix in `prefix_id`'s rebuild list.
    #[inline]
    pub fn get_next(&self, prefix_id: usize) -> Option<usize> {
        self.next[prefix_id]
    }

    /// Head of the active-restrictions list for `depth`.
    #[inline]
    pub fn get_restrict_last(&self, depth: usize) -> Option<usize> {
        self.restrict_last[depth]
    }

    /// Next restriction in `i`'s depth list.
    #[inline]
    pub fn get_restrict_next(&self, i: usize) -> Option<usize> {
        self.restrict_next[i]
    }

    /// `j` such that restriction `i` requires `a[depth] < a[j]`.
    #[inline]
    pub fn get_restrict_index(&self, i: usize) -> usize {
        self.restrict_index[i]
    }

    /// Total number of active restrictions across all depths.
    pub fn get_total_restrict_num(&self) -> usize {
        self.restrict_index.len()
    }

    /// `k`: when `> 1`, the final `k` depths collapse via inclusion–exclusion.
    #[inline]
    pub fn get_in_exclusion_optimize_num(&self) -> usize {
        self.in_exclusion_optimize_num
    }

    /// Per-term partitions of `0..k` into groups.
    #[inline]
    pub fn in_exclusion_optimize_group(&self) -> &[Vec<Vec<usize>>] {
        &self.in_exclusion_optimize_group
    }

    /// Signed coefficient per term, parallel to [`Schedule::in_exclusion_optimize_group`].
    #[inline]
    pub fn in_exclusion_optimize_val(&self) -> &[i64] {
        &self.in_exclusion_optimize_val
    }

    /// Positive divisor applied once to the grand total after reduction.
    #[inline]
    pub fn get_in_exclusion_optimize_redundancy(&self) -> i64 {
        self.redundancy
    }

    /// `m`, the size of the per-thread prefix array.
    #[inline]
    pub fn get_total_prefix_num(&self) -> usize {
        self.prefix_father.len()
    }
}

#[cfg(test)]
mod tests;
