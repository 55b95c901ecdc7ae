use std::collections::HashSet;

use voxarray::{indices_of, Array, ErrorKind, Odometer, Shape};

#[test]
fn canonical_order_dimension_0_fastest()
{
    let shape = Shape::from((2, 3));
    let visited: Vec<Vec<usize>> = indices_of(&shape).collect();
    assert_eq!(
        visited,
        vec![
            vec![0, 0],
            vec![1, 0],
            vec![0, 1],
            vec![1, 1],
            vec![0, 2],
            vec![1, 2],
        ]
    );
}

#[test]
fn full_traversal_visits_each_position_once()
{
    let shape = Shape::from((4, 3, 2));
    let mut seen = HashSet::new();
    let mut odo = Odometer::new(&shape);
    let mut count = 0;
    while odo.forward() {
        count += 1;
        assert!(seen.insert(odo.position().unwrap().to_vec()));
    }
    assert_eq!(count, 24);
    assert_eq!(seen.len(), 24);
    assert!(odo.is_exhausted());
}

#[test]
fn rank_3_fill_and_sum_scenario()
{
    let a = Array::<u8>::from_elem((4, 3, 2), 10).unwrap();
    let mut cursor = a.cursor();
    let mut count = 0;
    let mut sum = 0.;
    while cursor.forward() {
        count += 1;
        sum += cursor.get_value().unwrap();
    }
    assert_eq!(count, 24);
    assert_eq!(sum, 240.);
}

#[test]
fn reads_outside_the_positioned_state_are_state_errors()
{
    let a = Array::<u8>::zeros((2, 2)).unwrap();

    // before-first
    let cursor = a.cursor();
    assert_eq!(cursor.get().unwrap_err().kind(), ErrorKind::CursorState);
    assert_eq!(cursor.position().unwrap_err().kind(), ErrorKind::CursorState);

    // exhausted
    let mut cursor = a.cursor();
    while cursor.forward() {}
    assert_eq!(cursor.get().unwrap_err().kind(), ErrorKind::CursorState);
    assert_eq!(cursor.get_value().unwrap_err().kind(), ErrorKind::CursorState);
}

#[test]
fn writes_outside_the_positioned_state_are_state_errors()
{
    let mut a = Array::<u8>::zeros((2, 2)).unwrap();
    let mut cursor = a.cursor_mut();
    assert_eq!(cursor.set(1).unwrap_err().kind(), ErrorKind::CursorState);
    while cursor.forward() {}
    assert_eq!(cursor.set_value(1.).unwrap_err().kind(), ErrorKind::CursorState);
}

#[test]
fn cursor_writes_reach_the_array()
{
    let mut a = Array::<i16>::zeros((3, 2)).unwrap();
    {
        let mut cursor = a.cursor_mut();
        let mut v = 0;
        while cursor.forward() {
            cursor.set(v).unwrap();
            v += 1;
        }
    }
    // canonical order means the flat sequence is 0..6
    let flat: Vec<i16> = a.iter().copied().collect();
    assert_eq!(flat, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn has_next_reports_remaining_positions()
{
    let shape = Shape::from((2, 2));
    let mut odo = Odometer::new(&shape);
    assert!(odo.has_next());
    assert!(odo.forward()); // [0, 0]
    assert!(odo.has_next());
    assert!(odo.forward()); // [1, 0]
    assert!(odo.forward()); // [0, 1]
    assert!(odo.forward()); // [1, 1]
    assert!(!odo.has_next());
    assert!(!odo.forward());
}

#[test]
fn exhaustion_is_permanent()
{
    let shape = Shape::from((2, 1));
    let mut odo = Odometer::new(&shape);
    while odo.forward() {}
    for _ in 0..3 {
        assert!(!odo.forward());
        assert!(!odo.has_next());
        assert!(odo.is_exhausted());
    }
}

#[test]
fn empty_shape_exhausts_immediately()
{
    let shape = Shape::from((3, 0, 2));
    let mut odo = Odometer::new(&shape);
    assert!(!odo.has_next());
    assert!(!odo.forward());
    assert!(odo.is_exhausted());
    assert_eq!(indices_of(&shape).count(), 0);
}

#[test]
fn indices_iterator_matches_cursor_traversal()
{
    let a = Array::<u8>::zeros((3, 2, 2)).unwrap();
    let mut cursor = a.cursor();
    for p in indices_of(a.shape()) {
        assert!(cursor.forward());
        assert_eq!(cursor.position().unwrap(), &p[..]);
    }
    assert!(!cursor.forward());
}

#[test]
fn high_rank_traversal_counts()
{
    // rank 6 goes through the generic addressing path
    let shape = Shape::from(vec![2, 2, 2, 2, 2, 2]);
    assert_eq!(indices_of(&shape).count(), 64);
    let positions: Vec<Vec<usize>> = indices_of(&shape).take(3).collect();
    assert_eq!(positions[0], vec![0; 6]);
    assert_eq!(positions[1], vec![1, 0, 0, 0, 0, 0]);
    assert_eq!(positions[2], vec![0, 1, 0, 0, 0, 0]);
}
