// Copyright 2026 voxarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops::Deref;

use crate::error::{from_kind, ArrayError, ErrorKind};

/// Ranks up to this size are stored inline without heap allocation.
const CAP: usize = 4;

#[derive(Clone)]
enum ShapeRepr
{
    Inline(u32, [usize; CAP]),
    Alloc(Box<[usize]>),
}

/// An immutable ordered list of per-dimension extents.
///
/// A shape of rank *n* describes an *n*-dimensional array; `extent(d)` is the
/// number of valid coordinate values along dimension `d`. Dimension 0 is the
/// fastest-varying dimension in the canonical element order, the last
/// dimension is the outermost (slowest-varying) one.
///
/// Shapes convert from tuples (rank 2 and 3), fixed-size arrays, slices and
/// vectors:
///
/// ```
/// use voxarray::Shape;
///
/// let plane = Shape::from((640, 480));
/// let stack = Shape::from((640, 480, 32));
/// let nd = Shape::from(vec![6, 5, 4, 3, 2]);
/// assert_eq!(plane.rank(), 2);
/// assert_eq!(stack.rank(), 3);
/// assert_eq!(nd.rank(), 5);
/// ```
#[derive(Clone)]
pub struct Shape
{
    repr: ShapeRepr,
}

impl Shape
{
    /// Create a shape from a slice of extents.
    pub fn from_slice(extents: &[usize]) -> Shape
    {
        if extents.len() <= CAP {
            let mut arr = [0; CAP];
            arr[..extents.len()].copy_from_slice(extents);
            Shape {
                repr: ShapeRepr::Inline(extents.len() as u32, arr),
            }
        } else {
            Shape {
                repr: ShapeRepr::Alloc(extents.to_vec().into_boxed_slice()),
            }
        }
    }

    /// Return the number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize
    {
        self.as_slice().len()
    }

    /// Return the extent of dimension `d`, or an index error if `d` is not
    /// in `0..rank()`.
    pub fn extent(&self, d: usize) -> Result<usize, ArrayError>
    {
        self.as_slice()
            .get(d)
            .copied()
            .ok_or_else(|| from_kind(ErrorKind::IndexOutOfBounds))
    }

    /// Return the extents as a slice, one per dimension.
    #[inline]
    pub fn as_slice(&self) -> &[usize]
    {
        match self.repr {
            ShapeRepr::Inline(len, ref arr) => {
                debug_assert!(len as usize <= arr.len());
                &arr[..len as usize]
            }
            ShapeRepr::Alloc(ref extents) => extents,
        }
    }

    /// Return the total number of elements, the product of all extents.
    ///
    /// Computed in a 128-bit integer so the count is exact even when it
    /// exceeds the linear addressing ceiling or the platform word size.
    /// Products past `u128::MAX` saturate, which keeps every capacity
    /// comparison sound; a zero extent still yields a zero count.
    pub fn element_count(&self) -> u128
    {
        self.as_slice()
            .iter()
            .fold(1u128, |acc, &e| acc.checked_mul(e as u128).unwrap_or(u128::MAX))
    }

    /// Map a full-rank position to its linear offset in canonical order:
    /// row-major with dimension 0 fastest-varying.
    ///
    /// Ranks 2 and 3 take dedicated paths; every other rank goes through the
    /// generic loop.
    pub(crate) fn offset_of(&self, position: &[usize]) -> Result<u128, ArrayError>
    {
        let extents = self.as_slice();
        if position.len() != extents.len() {
            return Err(from_kind(ErrorKind::IndexOutOfBounds));
        }
        match (extents, position) {
            (&[e0, e1], &[p0, p1]) => {
                if p0 >= e0 || p1 >= e1 {
                    return Err(from_kind(ErrorKind::IndexOutOfBounds));
                }
                Ok(p0 as u128 + e0 as u128 * p1 as u128)
            }
            (&[e0, e1, e2], &[p0, p1, p2]) => {
                if p0 >= e0 || p1 >= e1 || p2 >= e2 {
                    return Err(from_kind(ErrorKind::IndexOutOfBounds));
                }
                Ok(p0 as u128 + e0 as u128 * (p1 as u128 + e1 as u128 * p2 as u128))
            }
            _ => {
                let mut offset = 0u128;
                let mut stride = 1u128;
                for (&p, &e) in position.iter().zip(extents) {
                    if p >= e {
                        return Err(from_kind(ErrorKind::IndexOutOfBounds));
                    }
                    offset += stride * p as u128;
                    stride *= e as u128;
                }
                Ok(offset)
            }
        }
    }
}

impl Deref for Shape
{
    type Target = [usize];
    #[inline]
    fn deref(&self) -> &[usize]
    {
        self.as_slice()
    }
}

impl PartialEq for Shape
{
    fn eq(&self, rhs: &Self) -> bool
    {
        self.as_slice() == rhs.as_slice()
    }
}

impl Eq for Shape {}

impl fmt::Debug for Shape
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "Shape{:?}", self.as_slice())
    }
}

impl fmt::Display for Shape
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "(")?;
        for (d, &e) in self.as_slice().iter().enumerate() {
            if d > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, ")")
    }
}

impl From<usize> for Shape
{
    fn from(extent: usize) -> Shape
    {
        Shape::from_slice(&[extent])
    }
}

impl From<(usize, usize)> for Shape
{
    fn from((e0, e1): (usize, usize)) -> Shape
    {
        Shape::from_slice(&[e0, e1])
    }
}

impl From<(usize, usize, usize)> for Shape
{
    fn from((e0, e1, e2): (usize, usize, usize)) -> Shape
    {
        Shape::from_slice(&[e0, e1, e2])
    }
}

impl From<(usize, usize, usize, usize)> for Shape
{
    fn from((e0, e1, e2, e3): (usize, usize, usize, usize)) -> Shape
    {
        Shape::from_slice(&[e0, e1, e2, e3])
    }
}

impl<const N: usize> From<[usize; N]> for Shape
{
    fn from(extents: [usize; N]) -> Shape
    {
        Shape::from_slice(&extents)
    }
}

impl From<&[usize]> for Shape
{
    fn from(extents: &[usize]) -> Shape
    {
        Shape::from_slice(extents)
    }
}

impl From<Vec<usize>> for Shape
{
    fn from(extents: Vec<usize>) -> Shape
    {
        Shape::from_slice(&extents)
    }
}

impl From<&Shape> for Shape
{
    fn from(shape: &Shape) -> Shape
    {
        shape.clone()
    }
}
