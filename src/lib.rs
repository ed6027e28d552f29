//! # `subgraph-matching` — parallel backtracking subgraph matching
//!
//! A parallel backtracking engine that counts (or frequent-subgraph-mining
//! support-counts) occurrences of a small pattern graph `P` inside a large,
//! static, undirected, simple data graph `G`. Matches are enumerated by
//! recursive set intersection over sorted adjacency lists, guided by a
//! precomputed *schedule* for `P` (prefix dependency DAG, symmetry-breaking
//! restrictions, and an optional inclusion–exclusion collapse of the final
//! few recursion levels).
//!
//! ## Architecture
//!
//! - [`vertex_set`] — the sorted-integer vertex-set primitive (borrowed vs.
//!   owned) that every intersection in the engine bottoms out on.
//! - [`graph`] — the immutable CSR data graph, plus a small edge-list loader.
//! - [`schedule`] — the opaque schedule contract the engine consumes, a
//!   `serde` file format for it, and hand-built presets for canonical
//!   patterns (triangle, path, clique, edge) used by the test suite.
//! - [`engine`] — the matching engine (plain + aggressive + in-exclusion +
//!   triangle fast path), the FSM support-counting variant, and the
//!   shared-memory parallel driver.
//!
//! ## Example
//!
//! ```
//! use subgraph_matching::graph::CsrGraph;
//! use subgraph_matching::engine::count_matches_clique_triangle;
//!
//! // K4: every pair of {0,1,2,3} connected.
//! let graph = CsrGraph::from_adjacency(&[
//!     vec![1, 2, 3],
//!     vec![0, 2, 3],
//!     vec![0, 1, 3],
//!     vec![0, 1, 2],
//! ]);
//! assert_eq!(count_matches_clique_triangle(&graph), 4);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod graph;
pub mod schedule;
pub mod vertex_set;

pub use engine::{count_matches, count_matches_clique_triangle, fsm_support};
pub use graph::CsrGraph;
pub use schedule::Schedule;
pub use vertex_set::VertexSet;
