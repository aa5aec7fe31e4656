use ghost_overlay::{clip_colinear, ColinearClip, DiagonalSegment, LineDeduplicator};

fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> DiagonalSegment {
    DiagonalSegment::new((x1, y1), (x2, y2))
}

#[test]
fn half_overlapping_colinear_diagonal_yields_only_the_remainder() {
    let mut dedup = LineDeduplicator::new();
    dedup.add_diagonal((0, 0), (8, 8));
    assert_eq!(dedup.add_diagonal((4, 4), (12, 12)), vec![seg(9, 9, 12, 12)]);
}

#[test]
fn fully_contained_diagonal_duplicate_is_suppressed() {
    let mut dedup = LineDeduplicator::new();
    dedup.add_diagonal((0, 0), (8, 8));
    assert!(dedup.add_diagonal((2, 2), (6, 6)).is_empty());
    assert!(dedup.add_diagonal((0, 0), (8, 8)).is_empty());
}

#[test]
fn disjoint_diagonals_never_trim_each_other() {
    let mut a = seg(0, 0, 4, 4);
    let mut b = seg(10, 10, 14, 14);
    assert_eq!(clip_colinear(&mut a, &mut b), ColinearClip::Disjoint);
    assert_eq!(clip_colinear(&mut b, &mut a), ColinearClip::Disjoint);
    assert_eq!(a, seg(0, 0, 4, 4));
    assert_eq!(b, seg(10, 10, 14, 14));
}

#[test]
fn non_colinear_diagonals_with_overlapping_boxes_stay_independent() {
    let mut a = seg(0, 0, 8, 8);
    let mut b = seg(0, 8, 8, 0);
    assert_eq!(clip_colinear(&mut a, &mut b), ColinearClip::Disjoint);
    assert_eq!(clip_colinear(&mut b, &mut a), ColinearClip::Disjoint);
}

#[test]
fn stored_middle_overlap_splits_the_candidate() {
    let mut dedup = LineDeduplicator::new();
    dedup.add_diagonal((4, 4), (6, 6));
    assert_eq!(
        dedup.add_diagonal((0, 0), (10, 10)),
        vec![seg(0, 0, 3, 3), seg(7, 7, 10, 10)]
    );
}

#[test]
fn reversed_endpoint_order_is_still_detected() {
    let mut dedup = LineDeduplicator::new();
    dedup.add_diagonal((8, 8), (0, 0));
    assert!(dedup.add_diagonal((6, 6), (2, 2)).is_empty());
}

#[test]
fn steep_slopes_project_onto_the_y_axis() {
    let mut dedup = LineDeduplicator::new();
    dedup.add_diagonal((0, 0), (4, 8));
    assert_eq!(dedup.add_diagonal((2, 4), (6, 12)), vec![seg(5, 10, 6, 12)]);
}
