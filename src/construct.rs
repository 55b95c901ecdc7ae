// Copyright 2026 voxarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for arrays.
//!
//! All constructors accept anything convertible into a [`Shape`]: tuples for
//! ranks 2 and 3, fixed-size arrays, slices and vectors for arbitrary rank.
//! The storage strategy is chosen here: a single contiguous buffer when the
//! element count fits the addressing ceiling, otherwise one buffer per index
//! along the outermost dimension.

use crate::array::Array;
use crate::cursor::Odometer;
use crate::element::Element;
use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::progress::BuildProgress;
use crate::shape::Shape;
use crate::storage::{Storage, ADDRESS_CEILING};

fn checked_shape(shape: impl Into<Shape>) -> Result<Shape, ArrayError>
{
    let shape = shape.into();
    if shape.rank() == 0 {
        return Err(from_kind(ErrorKind::InvalidArgument));
    }
    Ok(shape)
}

impl<A: Element> Array<A>
{
    /// Create an array filled with the element kind's zero value.
    ///
    /// ```
    /// use voxarray::Array;
    ///
    /// let a = Array::<u8>::zeros((6, 5)).unwrap();
    /// assert_eq!(a.len(), 30);
    /// assert!(a.iter().all(|&v| v == 0));
    /// ```
    pub fn zeros(shape: impl Into<Shape>) -> Result<Self, ArrayError>
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array with every element set to `elem`.
    ///
    /// Fails with a capacity error if an outermost slice of the shape would
    /// itself exceed the addressing ceiling, and with an argument error for
    /// a rank-0 shape.
    pub fn from_elem(shape: impl Into<Shape>, elem: A) -> Result<Self, ArrayError>
    {
        let shape = checked_shape(shape)?;
        let storage = Storage::allocate(&shape, elem)?;
        Ok(Array::from_parts(shape, storage))
    }

    /// Like [`from_elem`](Array::from_elem), reporting coarse progress to
    /// `update_progress` before allocation and before the fill.
    pub fn from_elem_with_progress(
        shape: impl Into<Shape>,
        elem: A,
        update_progress: &mut dyn FnMut(BuildProgress),
    ) -> Result<Self, ArrayError>
    {
        let shape = checked_shape(shape)?;
        let element_count = shape.element_count();
        update_progress(BuildProgress::Allocating { element_count });
        let mut storage = Storage::allocate(&shape, A::zero())?;
        let total = element_count.min(u64::MAX as u128) as u64;
        update_progress(BuildProgress::Filling { step: 0, total });
        storage.fill(elem);
        Ok(Array::from_parts(shape, storage))
    }

    /// Create an array from elements laid out in canonical order (row-major,
    /// dimension 0 fastest-varying). The vector length must equal the
    /// shape's element count.
    pub fn from_shape_vec(shape: impl Into<Shape>, data: Vec<A>) -> Result<Self, ArrayError>
    {
        let shape = checked_shape(shape)?;
        let storage = Storage::from_vec(&shape, data, ADDRESS_CEILING)?;
        Ok(Array::from_parts(shape, storage))
    }

    /// Create an array by calling `f` once per position, in canonical order.
    ///
    /// ```
    /// use voxarray::Array;
    ///
    /// let a = Array::<i32>::from_shape_fn((3, 2), |p| (p[0] + 10 * p[1]) as i32).unwrap();
    /// assert_eq!(a.get(&[2, 1]), Ok(12));
    /// ```
    pub fn from_shape_fn<F>(shape: impl Into<Shape>, mut f: F) -> Result<Self, ArrayError>
    where F: FnMut(&[usize]) -> A
    {
        let shape = checked_shape(shape)?;
        let mut data = Vec::new();
        let mut odo = Odometer::new(&shape);
        while odo.forward() {
            let elem = f(odo.position()?);
            data.push(elem);
        }
        let storage = Storage::from_vec(&shape, data, ADDRESS_CEILING)?;
        Ok(Array::from_parts(shape, storage))
    }

    #[cfg(test)]
    pub(crate) fn from_elem_with_ceiling(
        shape: impl Into<Shape>,
        elem: A,
        ceiling: u128,
    ) -> Result<Self, ArrayError>
    {
        let shape = checked_shape(shape)?;
        let storage = Storage::allocate_with_ceiling(&shape, elem, ceiling)?;
        Ok(Array::from_parts(shape, storage))
    }
}
