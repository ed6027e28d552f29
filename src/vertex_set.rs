//! Sorted integer vertex sets — the primitive every intersection in the
//! matching engine bottoms out on.
//!
//! A [`VertexSet`] owns a sorted, duplicate-free array of vertex ids plus a
//! storage tag distinguishing a **borrowed** view into a graph's `edge[]`
//! array from an **owned** heap buffer. The first prefix set derived from a
//! vertex's neighbor list is always a borrow (zero-copy); any subsequent
//! in-place intersection forces promotion to owned storage, since the result
//! generally cannot alias either operand.
//!
//! The same type doubles as the embedding stack `E`: a LIFO of chosen
//! pattern vertices built with [`VertexSet::push`]/[`VertexSet::pop`]. `E` is
//! *not* kept sorted (vertices are pushed in recursion-depth order, not
//! value order), so membership tests against it use a linear scan
//! ([`VertexSet::contains_unordered`]) rather than the binary search used
//! for genuine candidate pools.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `set_intersection` | \(O(\lvert a\rvert + \lvert b\rvert)\) | Two-pointer merge |
//! | `has_data` | \(O(\log n)\) | Binary search; requires sorted storage |
//! | `contains_unordered` | \(O(n)\) | Used for the (unsorted) embedding stack |
//! | `unordered_subtraction_size` | \(O(n \cdot \lvert E\rvert)\) | `n` bounded by an optional limit |

use std::cmp::Ordering;

/// Backing storage for a [`VertexSet`]: a read-only view into a graph's edge
/// array, or an owned, independently growable buffer.
enum Storage<'g> {
    Borrowed(&'g [i32]),
    Owned(Vec<i32>),
}

/// A sorted, duplicate-free set of vertex ids (or, when used as the
/// embedding stack, a push-order list of chosen pattern vertices).
pub struct VertexSet<'g> {
    storage: Storage<'g>,
}

impl<'g> VertexSet<'g> {
    /// Creates an empty, owned set.
    pub fn empty() -> Self {
        Self {
            storage: Storage::Owned(Vec::new()),
        }
    }

    /// Creates a borrowed view over an already-sorted slice.
    ///
    /// # Panics
    /// Debug-asserts `slice` is sorted and duplicate-free.
    pub fn borrowed(slice: &'g [i32]) -> Self {
        debug_assert!(
            slice.windows(2).all(|w| w[0] < w[1]),
            "vertex set storage must be strictly sorted"
        );
        Self {
            storage: Storage::Borrowed(slice),
        }
    }

    /// Re-points this set at a borrowed slice, discarding any owned buffer.
    ///
    /// Used at depth 0 / whenever a prefix's father is the schedule's
    /// pseudo-root: the prefix is simply `N(a[d])`, no intersection needed.
    pub fn set_borrowed(&mut self, slice: &'g [i32]) {
        debug_assert!(slice.windows(2).all(|w| w[0] < w[1]));
        self.storage = Storage::Borrowed(slice);
    }

    /// Returns the current contents as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        match &self.storage {
            Storage::Borrowed(s) => s,
            Storage::Owned(v) => v,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Indexed read. Panics if `i >= self.len()`.
    #[inline]
    pub fn get(&self, i: usize) -> i32 {
        self.as_slice()[i]
    }

    /// Binary-search membership test.
    ///
    /// Requires the set's contents to be sorted, which holds for every
    /// candidate pool / prefix set (they are always built from sorted
    /// adjacency lists) but *not* for the embedding stack — use
    /// [`VertexSet::contains_unordered`] for that.
    pub fn has_data(&self, v: i32) -> bool {
        self.as_slice().binary_search(&v).is_ok()
    }

    /// Linear-scan membership test, correct regardless of ordering.
    ///
    /// Used for the embedding stack `E`, whose elements are in
    /// recursion-depth order rather than value order; `E` is bounded by the
    /// pattern size, so this stays cheap in practice.
    pub fn contains_unordered(&self, v: i32) -> bool {
        self.as_slice().iter().any(|&x| x == v)
    }

    /// Promotes to (or reuses) an owned buffer without shrinking capacity.
    fn owned_buf(&mut self) -> &mut Vec<i32> {
        if matches!(self.storage, Storage::Borrowed(_)) {
            self.storage = Storage::Owned(Vec::new());
        }
        match &mut self.storage {
            Storage::Owned(v) => v,
            Storage::Borrowed(_) => unreachable!("just promoted to owned"),
        }
    }

    /// Overwrites this set's owned contents with a copy of `slice`.
    pub fn copy_from_slice(&mut self, slice: &[i32]) {
        let buf = self.owned_buf();
        buf.clear();
        buf.extend_from_slice(slice);
    }

    /// Writes `a ∩ b` into this set's owned buffer, reusing prior capacity.
    ///
    /// This is the in-place intersection primitive the engine uses to
    /// rebuild a prefix set `P[k] = intersect(P[father(k)], N(w))` at every
    /// recursion frame.
    pub fn set_intersection(&mut self, a: &[i32], b: &[i32]) {
        let buf = self.owned_buf();
        buf.clear();
        let (mut i, mut j) = (0usize, 0usize);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    buf.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
    }

    /// In-place intersection with another set: `self = self ∩ other`.
    ///
    /// Used when chaining several prefix sets together for an in-exclusion
    /// group of size > 1.
    pub fn intersect_with(&mut self, other: &Self) {
        let merged = {
            let a = self.as_slice();
            let b = other.as_slice();
            let mut out = Vec::with_capacity(a.len().min(b.len()));
            let (mut i, mut j) = (0usize, 0usize);
            while i < a.len() && j < b.len() {
                match a[i].cmp(&b[j]) {
                    Ordering::Less => i += 1,
                    Ordering::Greater => j += 1,
                    Ordering::Equal => {
                        out.push(a[i]);
                        i += 1;
                        j += 1;
                    }
                }
            }
            out
        };
        let buf = self.owned_buf();
        *buf = merged;
    }

    /// Returns a fresh, owned `a ∩ b` set.
    pub fn intersection(&self, other: &Self) -> VertexSet<'static> {
        let mut out = VertexSet::empty();
        out.set_intersection(self.as_slice(), other.as_slice());
        out
    }

    /// `|{ c ∈ self[..limit] : c ∉ other }|`, where `other` is treated as an
    /// unordered collection (the embedding stack).
    ///
    /// `limit` bounds how many leading elements of `self` are considered —
    /// used by the aggressive variant's terminal, which first narrows the
    /// candidate pool to those below a restriction-derived upper bound.
    pub fn unordered_subtraction_size(&self, other: &Self, limit: Option<usize>) -> usize {
        let data = self.as_slice();
        let n = limit.map_or(data.len(), |l| l.min(data.len()));
        data[..n].iter().filter(|&&v| !other.contains_unordered(v)).count()
    }

    /// Pushes a vertex onto the embedding stack. Promotes to owned.
    pub fn push(&mut self, v: i32) {
        self.owned_buf().push(v);
    }

    /// Pops the most recently pushed vertex.
    pub fn pop(&mut self) -> Option<i32> {
        self.owned_buf().pop()
    }

    /// The most recently pushed vertex, if any.
    pub fn last(&self) -> Option<i32> {
        self.as_slice().last().copied()
    }
}
