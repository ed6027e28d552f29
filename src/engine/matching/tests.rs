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

fn k5() -> CsrGraph {
    CsrGraph::from_adjacency(&[
        vec![1, 2, 3, 4],
        vec![0, 2, 3, 4],
        vec![0, 1, 3, 4],
        vec![0, 1, 2, 4],
        vec![0, 1, 2, 3],
    ])
}

fn cycle5() -> CsrGraph {
    CsrGraph::from_adjacency(&[
        vec![1, 4],
        vec![0, 2],
        vec![1, 3],
        vec![2, 4],
        vec![3, 0],
    ])
}

fn star_k13() -> CsrGraph {
    CsrGraph::from_adjacency(&[vec![1, 2, 3], vec![0], vec![0], vec![0]])
}

fn raw_sum(graph: &CsrGraph, schedule: &crate::schedule::Schedule) -> i64 {
    (0..graph.node_count() as i32).map(|r| count_from_root(graph, schedule, r)).sum()
}

#[test]
fn triangle_count_on_k4_is_four() {
    let g = k4();
    let schedule = presets::triangle();
    let raw = raw_sum(&g, &schedule);
    assert_eq!(raw / schedule.get_in_exclusion_optimize_redundancy(), 4);
}

#[test]
fn restricted_triangle_agrees_with_unrestricted() {
    let g = k4();
    let plain_raw = raw_sum(&g, &presets::triangle());
    let restricted = presets::triangle_restricted();
    let restricted_raw = raw_sum(&g, &restricted);
    assert_eq!(
        plain_raw / presets::triangle().get_in_exclusion_optimize_redundancy(),
        restricted_raw / restricted.get_in_exclusion_optimize_redundancy()
    );
}

#[test]
fn k4_clique_count_on_k5_is_five() {
    let g = k5();
    let schedule = presets::k4_clique();
    let raw = raw_sum(&g, &schedule);
    assert_eq!(raw / schedule.get_in_exclusion_optimize_redundancy(), 5);
}

#[test]
fn path3_count_on_cycle5_is_five() {
    let g = cycle5();
    let schedule = presets::path3();
    let raw = raw_sum(&g, &schedule);
    assert_eq!(raw / schedule.get_in_exclusion_optimize_redundancy(), 5);
}

#[test]
fn star3_plain_and_in_exclusion_schedules_agree() {
    let g = star_k13();
    let plain = presets::star3_plain();
    let collapsed = presets::star3_in_exclusion();
    let plain_count = raw_sum(&g, &plain) / plain.get_in_exclusion_optimize_redundancy();
    let collapsed_count = raw_sum(&g, &collapsed) / collapsed.get_in_exclusion_optimize_redundancy();
    assert_eq!(plain_count, 3);
    assert_eq!(plain_count, collapsed_count);
}

#[test]
fn father_and_child_mut_works_regardless_of_index_order() {
    let mut prefixes: Vec<VertexSet> = vec![VertexSet::empty(), VertexSet::empty()];
    prefixes[0].copy_from_slice(&[1, 2, 3]);
    prefixes[1].copy_from_slice(&[9]);

    // father index below child index.
    {
        let (father, child) = father_and_child_mut(&mut prefixes, 0, 1);
        assert_eq!(father.as_slice(), &[1, 2, 3]);
        child.copy_from_slice(&[4, 5]);
    }
    assert_eq!(prefixes[1].as_slice(), &[4, 5]);

    // father index above child index.
    {
        let (father, child) = father_and_child_mut(&mut prefixes, 1, 0);
        assert_eq!(father.as_slice(), &[4, 5]);
        child.copy_from_slice(&[6]);
    }
    assert_eq!(prefixes[0].as_slice(), &[6]);
}

#[test]
fn empty_graph_has_no_triangles() {
    let g = CsrGraph::from_adjacency(&[]);
    let schedule = presets::triangle();
    assert_eq!(raw_sum(&g, &schedule), 0);
}
