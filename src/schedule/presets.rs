//! Hand-built schedules for small, well-known pattern graphs.
//!
//! These exist for tests and as worked examples of the contract in
//! [`super::Schedule`] — a real deployment generates schedules with an
//! external compiler and ships them as [`super::ScheduleFile`] JSON.

use super::Schedule;

/// Triangle (`K3`), no symmetry breaking: `a0 - a1 - a2 - a0`.
///
/// Two prefixes: `P0 = N(a0)` supplies `a1`'s candidates, `P1 = P0 ∩ N(a1)`
/// supplies `a2`'s. Every one of the 6 orderings of a found triangle's three
/// vertices is counted, so the raw count is divided by `6`.
pub fn triangle() -> Schedule {
    Schedule::new(
        3,
        vec![0, 0, 1],
        vec![None, Some(0)],
        vec![Some(0), Some(1), None],
        vec![None, None],
        vec![None, None, None],
        vec![],
        vec![],
        0,
        vec![],
        vec![],
        6,
    )
}

/// Triangle (`K3`) with symmetry-breaking restrictions `a2 < a1 < a0`.
///
/// Same two prefixes as [`triangle`], but a restriction at each non-root
/// depth prunes five of the six orderings up front, so `redundancy` is `1`.
pub fn triangle_restricted() -> Schedule {
    Schedule::new(
        3,
        vec![0, 0, 1],
        vec![None, Some(0)],
        vec![Some(0), Some(1), None],
        vec![None, None],
        vec![None, Some(0), Some(1)],
        vec![None, None],
        vec![0, 1],
        0,
        vec![],
        vec![],
        1,
    )
}

/// Open 3-path `a0 - a1 - a2` (no edge between `a0` and `a2`).
///
/// `P0 = N(a0)` supplies `a1`'s candidates; `P1 = N(a1)` supplies `a2`'s
/// candidates directly (not intersected with `P0`, since `a2` need not be
/// adjacent to `a0`). The pattern's only automorphism is the end-to-end
/// reversal, so `redundancy` is `2`.
pub fn path3() -> Schedule {
    Schedule::new(
        3,
        vec![0, 0, 1],
        vec![None, None],
        vec![Some(0), Some(1), None],
        vec![None, None],
        vec![None, None, None],
        vec![],
        vec![],
        0,
        vec![],
        vec![],
        2,
    )
}

/// 4-clique (`K4`), no symmetry breaking.
///
/// Three chained prefixes, each intersecting its predecessor with the newest
/// vertex's neighborhood. `K4` has `4! = 24` automorphisms.
pub fn k4_clique() -> Schedule {
    Schedule::new(
        4,
        vec![0, 0, 1, 2],
        vec![None, Some(0), Some(1)],
        vec![Some(0), Some(1), Some(2), None],
        vec![None, None, None],
        vec![None, None, None, None],
        vec![],
        vec![],
        0,
        vec![],
        vec![],
        24,
    )
}

/// A single pattern vertex with no edges at all: `size() == 1`, no prefixes,
/// no depth to recurse past. Every data-graph vertex is a match on its own,
/// so [`crate::engine::count_matches`] degenerates to `v_cnt / redundancy`.
pub fn single_vertex() -> Schedule {
    Schedule::new(1, vec![0], vec![], vec![None], vec![], vec![None], vec![], vec![], 0, vec![], vec![], 1)
}

/// Single edge `a0 - a1`, the pattern [`crate::engine::fsm_support`] counts
/// minimum-image support for in property tests.
pub fn edge() -> Schedule {
    Schedule::new(
        2,
        vec![0, 0],
        vec![None],
        vec![Some(0), None],
        vec![None],
        vec![None, None],
        vec![],
        vec![],
        0,
        vec![],
        vec![],
        2,
    )
}

/// 2-leaf star (`a0` adjacent to both `a1` and `a2`, no edge `a1 - a2`),
/// built without inclusion–exclusion: both leaves draw candidates from the
/// same prefix `P0 = N(a0)`, and the two leaf orderings are divided out via
/// `redundancy = 2`.
pub fn star3_plain() -> Schedule {
    Schedule::new(
        3,
        vec![0, 0, 0],
        vec![None],
        vec![Some(0), None, None],
        vec![None],
        vec![None, None, None],
        vec![],
        vec![],
        0,
        vec![],
        vec![],
        2,
    )
}

/// The same 2-leaf star as [`star3_plain`], but with the final two depths
/// collapsed via inclusion–exclusion instead of enumerated and divided out.
///
/// Counting ordered pairs of *distinct* vertices drawn from `P0` as
/// `|P0| * (|P0| - 1)` is `|P0|^2 - |P0|`: term `0` (coefficient `+1`) counts
/// every pair independently (`{0}`, `{1}` as separate singleton groups),
/// term `1` (coefficient `-1`) counts pairs collapsed into one group (the
/// diagonal `a1 == a2`). [`star3_plain`] and this schedule must agree once
/// both results are divided by their (equal) `redundancy`.
pub fn star3_in_exclusion() -> Schedule {
    Schedule::new(
        3,
        vec![0, 0, 0],
        vec![None],
        vec![Some(0), None, None],
        vec![None],
        vec![None, None, None],
        vec![],
        vec![],
        2,
        vec![vec![vec![0], vec![1]], vec![vec![0, 1]]],
        vec![1, -1],
        2,
    )
}
