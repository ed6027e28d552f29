//! A minimal plain-text edge-list loader.
//!
//! Format: one undirected edge per line, `u v` (whitespace-separated
//! non-negative integers, `u != v`). An optional leading `v_cnt e_cnt` line
//! may hint at the sizes to pre-reserve; when absent, `v_cnt` is inferred as
//! `max(seen vertex id) + 1`. This is thin glue — graph I/O proper is out of
//! scope for this engine — kept only so the CLI has something to load.

use anyhow::{bail, Context, Result};

use super::CsrGraph;

/// Parses `text` as an edge-list file and builds a [`CsrGraph`].
///
/// Symmetrizes (inserts both directions of every edge), sorts, and
/// deduplicates each row, matching the CSR graph's invariants.
pub fn load_edge_list(text: &str) -> Result<CsrGraph> {
    let mut lines = text.lines().enumerate().peekable();

    let mut hinted_v_cnt: Option<usize> = None;
    if let Some(&(_, first)) = lines.peek() {
        let tokens: Vec<&str> = first.split_whitespace().collect();
        if tokens.len() == 2 {
            if let (Ok(v_cnt), Ok(_e_cnt)) = (tokens[0].parse::<usize>(), tokens[1].parse::<usize>()) {
                // Only treat this as a size hint if it isn't itself a valid
                // edge we'd otherwise drop; ambiguity is resolved by simply
                // trusting the hint and consuming the line.
                hinted_v_cnt = Some(v_cnt);
                lines.next();
            }
        }
    }

    let mut edges: Vec<(i32, i32)> = Vec::new();
    let mut max_vertex: i32 = -1;

    for (lineno, line) in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            bail!("line {}: expected two whitespace-separated integers, got {:?}", lineno + 1, line);
        }
        let u: i32 = tokens[0]
            .parse()
            .with_context(|| format!("line {}: invalid vertex id {:?}", lineno + 1, tokens[0]))?;
        let v: i32 = tokens[1]
            .parse()
            .with_context(|| format!("line {}: invalid vertex id {:?}", lineno + 1, tokens[1]))?;
        if u < 0 || v < 0 {
            bail!("line {}: vertex ids must be non-negative, got {u} {v}", lineno + 1);
        }
        if u == v {
            bail!("line {}: self-loop {u}->{v} is not allowed in a simple graph", lineno + 1);
        }
        max_vertex = max_vertex.max(u).max(v);
        edges.push((u, v));
    }

    let v_cnt = hinted_v_cnt
        .map(|h| h.max((max_vertex + 1).max(0) as usize))
        .unwrap_or((max_vertex + 1).max(0) as usize);

    let mut adjacency: Vec<Vec<i32>> = vec![Vec::new(); v_cnt];
    for (u, v) in edges {
        adjacency[u as usize].push(v);
        adjacency[v as usize].push(u);
    }

    Ok(CsrGraph::from_adjacency(&adjacency))
}
