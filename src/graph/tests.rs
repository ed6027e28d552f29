use super::*;

#[test]
fn empty_graph_has_zero_nodes_and_edges() {
    let g = CsrGraph::from_adjacency(&[]);
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn k4_every_vertex_has_degree_three() {
    let g = CsrGraph::from_adjacency(&[
        vec![1, 2, 3],
        vec![0, 2, 3],
        vec![0, 1, 3],
        vec![0, 1, 2],
    ]);
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 12);
    for v in 0..4 {
        assert_eq!(g.degree(v), 3);
    }
}

#[test]
fn neighbors_are_sorted_and_deduplicated() {
    let g = CsrGraph::from_adjacency(&[vec![2, 1, 2, 1], vec![0], vec![0]]);
    assert_eq!(g.neighbors(0), &[1, 2]);
}

#[test]
#[should_panic(expected = "self-loop")]
fn rejects_self_loops() {
    CsrGraph::from_adjacency(&[vec![0]]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn rejects_out_of_bounds_edges() {
    CsrGraph::from_adjacency(&[vec![5]]);
}

#[test]
fn has_edge_reflects_adjacency() {
    let g = CsrGraph::from_adjacency(&[vec![1], vec![0, 2], vec![1]]);
    assert!(g.has_edge(0, 1));
    assert!(!g.has_edge(0, 2));
    assert!(g.has_edge(1, 2));
}

#[test]
fn from_csr_parts_round_trips_from_adjacency() {
    let g = CsrGraph::from_adjacency(&[vec![1, 2], vec![0], vec![0]]);
    let g2 = CsrGraph::from_csr_parts(vec![0, 2, 3, 4], vec![1, 2, 0, 0]);
    assert_eq!(g.node_count(), g2.node_count());
    for v in 0..3 {
        assert_eq!(g.neighbors(v).to_vec(), g2.neighbors(v).to_vec());
    }
}
