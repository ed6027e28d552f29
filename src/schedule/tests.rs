use super::*;

#[test]
fn accessors_reflect_constructor_arguments() {
    let s = presets::triangle();
    assert_eq!(s.size(), 3);
    assert_eq!(s.get_total_prefix_num(), 2);
    assert_eq!(s.get_loop_set_prefix_id(1), 0);
    assert_eq!(s.get_loop_set_prefix_id(2), 1);
    assert_eq!(s.get_father_prefix_id(0), None);
    assert_eq!(s.get_father_prefix_id(1), Some(0));
    assert_eq!(s.get_last(0), Some(0));
    assert_eq!(s.get_last(1), Some(1));
    assert_eq!(s.get_last(2), None);
    assert_eq!(s.get_total_restrict_num(), 0);
    assert_eq!(s.get_in_exclusion_optimize_redundancy(), 6);
}

#[test]
fn restricted_triangle_chains_its_restriction_lists() {
    let s = presets::triangle_restricted();
    assert_eq!(s.get_total_restrict_num(), 2);
    assert_eq!(s.get_restrict_last(1), Some(0));
    assert_eq!(s.get_restrict_index(0), 0);
    assert_eq!(s.get_restrict_last(2), Some(1));
    assert_eq!(s.get_restrict_index(1), 1);
    assert_eq!(s.get_restrict_next(0), None);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "cycle")]
fn rejects_a_cyclic_father_relation() {
    Schedule::new(
        2,
        vec![0, 0],
        vec![Some(1), Some(0)],
        vec![Some(0), None],
        vec![None, None],
        vec![None, None],
        vec![],
        vec![],
        0,
        vec![],
        vec![],
        1,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of range")]
fn rejects_a_father_index_out_of_range() {
    Schedule::new(
        2,
        vec![0, 0],
        vec![None, Some(7)],
        vec![Some(0), Some(1)],
        vec![None, None],
        vec![None, None],
        vec![],
        vec![],
        0,
        vec![],
        vec![],
        1,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "references index")]
fn rejects_a_restriction_pointing_forward() {
    Schedule::new(
        3,
        vec![0, 0, 0],
        vec![None],
        vec![Some(0), None, None],
        vec![None],
        vec![None, Some(0), None],
        vec![None],
        vec![1],
        0,
        vec![],
        vec![],
        1,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "used twice")]
fn rejects_an_in_exclusion_group_reusing_a_local_index() {
    Schedule::new(
        2,
        vec![0, 0],
        vec![None],
        vec![Some(0), None],
        vec![None],
        vec![None, None],
        vec![],
        vec![],
        2,
        vec![vec![vec![0], vec![0]]],
        vec![1],
        1,
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "redundancy")]
fn rejects_a_non_positive_redundancy() {
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
        0,
    );
}
