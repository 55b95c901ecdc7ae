use itertools::iproduct;
use voxarray::{Array, ErrorKind};

fn ramp3(extents: (usize, usize, usize)) -> Array<i32>
{
    Array::from_shape_fn(extents, |p| (p[0] + 10 * p[1] + 100 * p[2]) as i32).unwrap()
}

#[test]
fn fixing_one_dimension_lowers_the_rank()
{
    let a = ramp3((5, 4, 3));
    let v = a.slice(&[2], &[1]).unwrap();
    assert_eq!(v.ndim(), 2);
    assert_eq!(v.shape().as_slice(), &[5, 4]);
    assert_eq!(v.get_value(&[4, 3]), a.get_value(&[4, 3, 1]));

    for (i, j) in iproduct!(0..5, 0..4) {
        assert_eq!(v.get(&[i, j]), a.get(&[i, j, 1]));
    }
}

#[test]
fn fixing_two_dimensions()
{
    let a = ramp3((5, 4, 3));
    let lane = a.slice(&[1, 2], &[3, 2]).unwrap();
    assert_eq!(lane.ndim(), 1);
    assert_eq!(lane.shape().as_slice(), &[5]);
    for i in 0..5 {
        assert_eq!(lane.get(&[i]), a.get(&[i, 3, 2]));
    }
}

#[test]
fn remaining_dimensions_keep_relative_order()
{
    let a = ramp3((5, 4, 3));
    // freeze the middle dimension; view axis 0 -> source 0, axis 1 -> source 2
    let v = a.slice(&[1], &[2]).unwrap();
    assert_eq!(v.shape().as_slice(), &[5, 3]);
    for (i, k) in iproduct!(0..5, 0..3) {
        assert_eq!(v.get(&[i, k]), a.get(&[i, 2, k]));
    }
}

#[test]
fn malformed_slices_are_rejected()
{
    let a = ramp3((5, 4, 3));
    assert_eq!(a.slice(&[], &[]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(a.slice(&[1, 1], &[0, 0]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(a.slice(&[1], &[0, 0]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    // removing every dimension leaves no array
    assert_eq!(
        a.slice(&[0, 1, 2], &[0, 0, 0]).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(a.slice(&[3], &[0]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(a.slice(&[2], &[3]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
}

#[test]
fn view_positions_are_bounds_checked()
{
    let a = ramp3((5, 4, 3));
    let v = a.slice(&[2], &[0]).unwrap();
    assert_eq!(v.get(&[5, 0]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(v.get(&[0, 4]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(v.get(&[0, 0, 0]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(v.extent(2).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
}

#[test]
fn writes_through_a_view_mutate_the_source()
{
    let mut a = Array::<u8>::zeros((4, 3, 2)).unwrap();
    {
        let mut plane = a.slice_mut(&[2], &[1]).unwrap();
        plane.set(&[2, 1], 9).unwrap();
        plane.set_value(&[0, 0], 300.).unwrap();
    }
    assert_eq!(a.get(&[2, 1, 1]), Ok(9));
    assert_eq!(a.get(&[0, 0, 1]), Ok(255));
    // the sibling plane is untouched
    assert_eq!(a.get(&[2, 1, 0]), Ok(0));
}

#[test]
fn view_fill_covers_exactly_the_viewed_elements()
{
    let mut a = Array::<u8>::zeros((3, 3, 2)).unwrap();
    a.slice_mut(&[2], &[0]).unwrap().fill(7).unwrap();
    for p in voxarray::indices_of(a.shape()) {
        let expected = if p[2] == 0 { 7 } else { 0 };
        assert_eq!(a.get(&p), Ok(expected));
    }
}

#[test]
fn view_iteration_and_to_owned()
{
    let a = ramp3((3, 2, 2));
    let v = a.slice(&[2], &[1]).unwrap();
    let flat: Vec<i32> = v.iter().collect();
    assert_eq!(flat, vec![100, 101, 102, 110, 111, 112]);

    let owned = v.to_owned().unwrap();
    assert_eq!(owned.shape(), v.shape());
    for (i, j) in iproduct!(0..3, 0..2) {
        assert_eq!(owned.get(&[i, j]), v.get(&[i, j]));
    }
}

#[test]
fn view_cursor_walks_the_reduced_shape()
{
    let a = ramp3((3, 2, 2));
    let v = a.slice(&[2], &[1]).unwrap();
    let mut cursor = v.cursor();

    // before-first
    assert!(cursor.has_next());
    assert_eq!(cursor.get().unwrap_err().kind(), ErrorKind::CursorState);
    assert_eq!(cursor.position().unwrap_err().kind(), ErrorKind::CursorState);

    let mut positions = Vec::new();
    let mut sum = 0.;
    while cursor.forward() {
        positions.push(cursor.position().unwrap().to_vec());
        sum += cursor.get_value().unwrap();
    }
    assert_eq!(
        positions,
        vec![
            vec![0, 0],
            vec![1, 0],
            vec![2, 0],
            vec![0, 1],
            vec![1, 1],
            vec![2, 1],
        ]
    );
    assert_eq!(sum, 100. + 101. + 102. + 110. + 111. + 112.);

    // exhausted, for good
    assert!(!cursor.has_next());
    assert!(!cursor.forward());
    assert_eq!(cursor.get().unwrap_err().kind(), ErrorKind::CursorState);
}

#[test]
fn view_cursor_reads_through_the_translation()
{
    let a = ramp3((5, 4, 3));
    let v = a.slice(&[1], &[2]).unwrap();
    let mut cursor = v.cursor();
    while cursor.forward() {
        let p = cursor.position().unwrap().to_vec();
        assert_eq!(Ok(cursor.get().unwrap()), a.get(&[p[0], 2, p[1]]));
    }
}

#[test]
fn to_owned_is_independent_of_the_source()
{
    let mut a = Array::<u16>::from_elem((3, 3), 4).unwrap();
    let owned = a.slice(&[1], &[0]).unwrap().to_owned().unwrap();
    a.fill(0);
    assert!(owned.iter().all(|&v| v == 4));
}

#[test]
fn permuted_view_transposes()
{
    let a = Array::<i32>::from_shape_fn((4, 3), |p| (p[0] + 10 * p[1]) as i32).unwrap();
    let t = a.permuted_view(&[1, 0]).unwrap();
    assert_eq!(t.shape().as_slice(), &[3, 4]);
    for (i, j) in iproduct!(0..4, 0..3) {
        assert_eq!(t.get(&[j, i]), a.get(&[i, j]));
    }
}

#[test]
fn permuted_view_rejects_non_permutations()
{
    let a = Array::<u8>::zeros((4, 3, 2)).unwrap();
    assert_eq!(a.permuted_view(&[0, 1]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(a.permuted_view(&[0, 1, 1]).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(a.permuted_view(&[0, 1, 3]).unwrap_err().kind(), ErrorKind::IndexOutOfBounds);
}

#[test]
fn permuted_view_mut_writes_through()
{
    let mut a = Array::<u8>::zeros((2, 3)).unwrap();
    {
        let mut t = a.permuted_view_mut(&[1, 0]).unwrap();
        t.set(&[2, 1], 5).unwrap();
        let read_back = t.as_view().get(&[2, 1]);
        assert_eq!(read_back, Ok(5));
    }
    assert_eq!(a.get(&[1, 2]), Ok(5));
}
