// Copyright 2026 voxarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Methods for the owned array type.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cursor::{Cursor, CursorMut};
use crate::element::Element;
use crate::error::ArrayError;
use crate::shape::Shape;
use crate::storage::{Storage, StorageIter};

/// A dense array of arbitrary rank.
///
/// An array owns exactly one storage strategy instance and is bound to one
/// [`Shape`] and one element kind for its lifetime. Whether the storage is a
/// single contiguous buffer or sliced along the outermost dimension is an
/// internal decision; the two are observably equivalent here.
///
/// ```
/// use voxarray::Array;
///
/// let mut a = Array::<u8>::zeros((4, 3)).unwrap();
/// a.set(&[2, 1], 7).unwrap();
/// assert_eq!(a.get(&[2, 1]), Ok(7));
/// assert_eq!(a.get_value(&[2, 1]), Ok(7.0));
/// ```
pub struct Array<A: Element>
{
    shape: Shape,
    storage: Storage<A>,
}

impl<A: Element> Array<A>
{
    pub(crate) fn from_parts(shape: Shape, storage: Storage<A>) -> Self
    {
        debug_assert_eq!(shape.element_count(), storage.len());
        Array { shape, storage }
    }

    /// Return the number of dimensions (rank).
    #[inline]
    pub fn ndim(&self) -> usize
    {
        self.shape.rank()
    }

    /// Return the extent of dimension `d`.
    pub fn extent(&self, d: usize) -> Result<usize, ArrayError>
    {
        self.shape.extent(d)
    }

    /// Return the shape of the array.
    #[inline]
    pub fn shape(&self) -> &Shape
    {
        &self.shape
    }

    /// Return the total number of elements.
    pub fn len(&self) -> u128
    {
        self.shape.element_count()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Read the element at `position`, a coordinate vector of length
    /// [`ndim()`](Array::ndim). Every coordinate must lie within its
    /// dimension's extent.
    pub fn get(&self, position: &[usize]) -> Result<A, ArrayError>
    {
        let offset = self.shape.offset_of(position)?;
        Ok(*self.storage.get_linear(offset))
    }

    /// Write the element at `position`.
    pub fn set(&mut self, position: &[usize], value: A) -> Result<(), ArrayError>
    {
        let offset = self.shape.offset_of(position)?;
        *self.storage.get_linear_mut(offset) = value;
        Ok(())
    }

    /// Read the decoded value at `position`.
    pub fn get_value(&self, position: &[usize]) -> Result<f64, ArrayError>
    {
        Ok(self.get(position)?.decode())
    }

    /// Encode `value` per the element kind's rule and write it at
    /// `position`. Out-of-range values saturate or truncate silently.
    pub fn set_value(&mut self, position: &[usize], value: f64) -> Result<(), ArrayError>
    {
        self.set(position, A::encode(value))
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: A)
    {
        self.storage.fill(value);
    }

    /// Encode `value` and overwrite every element with it.
    pub fn fill_value(&mut self, value: f64)
    {
        self.fill(A::encode(value));
    }

    /// Create a new zero-filled array of the same element kind and the given
    /// shape. The new shape need not have the same rank.
    pub fn new_instance(&self, shape: impl Into<Shape>) -> Result<Array<A>, ArrayError>
    {
        Array::zeros(shape)
    }

    /// Deep copy: same shape and elements, independently owned storage.
    pub fn duplicate(&self) -> Array<A>
    {
        self.clone()
    }

    /// Iterate the elements in canonical order (row-major, dimension 0
    /// fastest-varying).
    pub fn iter(&self) -> ElementIter<'_, A>
    {
        ElementIter {
            inner: self.storage.iter(),
        }
    }

    /// A read cursor starting before the first position.
    pub fn cursor(&self) -> Cursor<'_, A>
    {
        Cursor::new(self)
    }

    /// A read-write cursor starting before the first position.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, A>
    {
        CursorMut::new(self)
    }

    /// Whether the elements live in a single contiguous buffer.
    pub fn is_buffered(&self) -> bool
    {
        self.storage.is_buffered()
    }

    /// Whether the elements are sliced along the outermost dimension.
    pub fn is_sliced(&self) -> bool
    {
        !self.storage.is_buffered()
    }
}

impl<A: Element> Clone for Array<A>
{
    fn clone(&self) -> Self
    {
        Array {
            shape: self.shape.clone(),
            storage: self.storage.clone(),
        }
    }
}

impl<A: Element> PartialEq for Array<A>
{
    fn eq(&self, rhs: &Self) -> bool
    {
        self.shape == rhs.shape && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<A: Element> fmt::Debug for Array<A>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "Array {{ shape: {:?}, .. }}", self.shape)
    }
}

/// An iterator over the elements of an array in canonical order.
///
/// Iterator element type is `&'a A`.
pub struct ElementIter<'a, A: Element>
{
    inner: StorageIter<'a, A>,
}

impl<'a, A: Element> Iterator for ElementIter<'a, A>
{
    type Item = &'a A;

    fn next(&mut self) -> Option<&'a A>
    {
        self.inner.next()
    }
}

impl<'a, A: Element> IntoIterator for &'a Array<A>
{
    type Item = &'a A;
    type IntoIter = ElementIter<'a, A>;

    fn into_iter(self) -> ElementIter<'a, A>
    {
        self.iter()
    }
}

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds() -> !
{
    panic!("voxarray: index out of bounds");
}

/// Indexing sugar with a fixed-size position, `a[[i, j]]`.
///
/// **Panics** if the position is out of bounds; use
/// [`get`](Array::get) for a fallible lookup.
impl<A: Element, const N: usize> Index<[usize; N]> for Array<A>
{
    type Output = A;

    fn index(&self, index: [usize; N]) -> &A
    {
        let offset = self
            .shape
            .offset_of(&index)
            .unwrap_or_else(|_| array_out_of_bounds());
        self.storage.get_linear(offset)
    }
}

impl<A: Element, const N: usize> IndexMut<[usize; N]> for Array<A>
{
    fn index_mut(&mut self, index: [usize; N]) -> &mut A
    {
        let offset = self
            .shape
            .offset_of(&index)
            .unwrap_or_else(|_| array_out_of_bounds());
        self.storage.get_linear_mut(offset)
    }
}
