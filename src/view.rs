// Copyright 2026 voxarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Views: non-owning re-indexings of an existing array.
//!
//! A view fixes one or more source coordinates (slicing, which lowers the
//! rank) and/or remaps the dimension order, without copying data. Every view
//! position translates into exactly one source position. [`ViewMut`] writes
//! through to the source array; the borrow checker ties a view's lifetime to
//! its source.

use crate::array::Array;
use crate::cursor::Odometer;
use crate::element::Element;
use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::shape::Shape;

/// The translation from view positions to source positions.
#[derive(Clone, Debug)]
struct ViewMap
{
    /// Source dimension exposed by each view axis, in view-axis order.
    dims: Vec<usize>,
    /// Frozen (source dimension, coordinate) pairs, ordered by dimension.
    fixed: Vec<(usize, usize)>,
    /// The view's shape.
    shape: Shape,
    source_rank: usize,
}

impl ViewMap
{
    fn slicing(source: &Shape, fixed_dims: &[usize], fixed_coords: &[usize])
        -> Result<ViewMap, ArrayError>
    {
        if fixed_dims.is_empty() || fixed_dims.len() != fixed_coords.len() {
            return Err(from_kind(ErrorKind::InvalidArgument));
        }
        let rank = source.rank();
        if fixed_dims.len() >= rank {
            // the resulting rank must stay >= 1
            return Err(from_kind(ErrorKind::InvalidArgument));
        }
        let mut frozen: Vec<Option<usize>> = vec![None; rank];
        for (&d, &c) in fixed_dims.iter().zip(fixed_coords) {
            if d >= rank {
                return Err(from_kind(ErrorKind::IndexOutOfBounds));
            }
            if frozen[d].is_some() {
                return Err(from_kind(ErrorKind::InvalidArgument));
            }
            if c >= source.as_slice()[d] {
                return Err(from_kind(ErrorKind::IndexOutOfBounds));
            }
            frozen[d] = Some(c);
        }
        let mut dims = Vec::with_capacity(rank - fixed_dims.len());
        let mut extents = Vec::with_capacity(rank - fixed_dims.len());
        let mut fixed = Vec::with_capacity(fixed_dims.len());
        for (d, slot) in frozen.into_iter().enumerate() {
            match slot {
                Some(c) => fixed.push((d, c)),
                None => {
                    dims.push(d);
                    extents.push(source.as_slice()[d]);
                }
            }
        }
        Ok(ViewMap {
            dims,
            fixed,
            shape: Shape::from_slice(&extents),
            source_rank: rank,
        })
    }

    fn permuting(source: &Shape, order: &[usize]) -> Result<ViewMap, ArrayError>
    {
        let rank = source.rank();
        if order.len() != rank {
            return Err(from_kind(ErrorKind::InvalidArgument));
        }
        let mut seen = vec![false; rank];
        for &d in order {
            if d >= rank {
                return Err(from_kind(ErrorKind::IndexOutOfBounds));
            }
            if seen[d] {
                return Err(from_kind(ErrorKind::InvalidArgument));
            }
            seen[d] = true;
        }
        let extents: Vec<usize> = order.iter().map(|&d| source.as_slice()[d]).collect();
        Ok(ViewMap {
            dims: order.to_vec(),
            fixed: Vec::new(),
            shape: Shape::from_slice(&extents),
            source_rank: rank,
        })
    }

    /// Re-insert the frozen coordinates into a full source position, in
    /// original dimension order.
    fn translate(&self, position: &[usize]) -> Result<Vec<usize>, ArrayError>
    {
        if position.len() != self.shape.rank() {
            return Err(from_kind(ErrorKind::IndexOutOfBounds));
        }
        for (&p, &e) in position.iter().zip(self.shape.as_slice()) {
            if p >= e {
                return Err(from_kind(ErrorKind::IndexOutOfBounds));
            }
        }
        let mut full = vec![0; self.source_rank];
        for (&d, &p) in self.dims.iter().zip(position) {
            full[d] = p;
        }
        for &(d, c) in &self.fixed {
            full[d] = c;
        }
        Ok(full)
    }
}

/// A read-only view of an [`Array`].
#[derive(Debug)]
pub struct View<'a, A: Element>
{
    source: &'a Array<A>,
    map: ViewMap,
}

/// A read-write view of an [`Array`]; writes mutate the source.
#[derive(Debug)]
pub struct ViewMut<'a, A: Element>
{
    source: &'a mut Array<A>,
    map: ViewMap,
}

impl<'a, A: Element> View<'a, A>
{
    #[inline]
    pub fn ndim(&self) -> usize
    {
        self.map.shape.rank()
    }

    pub fn extent(&self, d: usize) -> Result<usize, ArrayError>
    {
        self.map.shape.extent(d)
    }

    #[inline]
    pub fn shape(&self) -> &Shape
    {
        &self.map.shape
    }

    pub fn len(&self) -> u128
    {
        self.map.shape.element_count()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Read the source element this view position maps to.
    pub fn get(&self, position: &[usize]) -> Result<A, ArrayError>
    {
        let full = self.map.translate(position)?;
        self.source.get(&full)
    }

    pub fn get_value(&self, position: &[usize]) -> Result<f64, ArrayError>
    {
        Ok(self.get(position)?.decode())
    }

    /// Iterate the view's elements in the view's canonical order.
    pub fn iter(&self) -> ViewIter<'_, 'a, A>
    {
        ViewIter {
            view: self,
            odo: Odometer::new(&self.map.shape),
        }
    }

    /// A read cursor over the view's positions, starting before the first.
    pub fn cursor(&self) -> ViewCursor<'_, 'a, A>
    {
        ViewCursor {
            view: self,
            odo: Odometer::new(&self.map.shape),
        }
    }

    /// Copy the viewed elements into a new independently-owned array.
    pub fn to_owned(&self) -> Result<Array<A>, ArrayError>
    {
        let mut data = Vec::new();
        let mut odo = Odometer::new(&self.map.shape);
        while odo.forward() {
            let elem = self.get(odo.position()?)?;
            data.push(elem);
        }
        Array::from_shape_vec(&self.map.shape, data)
    }
}

/// An iterator over a view's elements in the view's canonical order.
pub struct ViewIter<'v, 'a, A: Element>
{
    view: &'v View<'a, A>,
    odo: Odometer,
}

impl<'v, 'a, A: Element> Iterator for ViewIter<'v, 'a, A>
{
    type Item = A;

    fn next(&mut self) -> Option<A>
    {
        if self.odo.forward() {
            self.view.get(self.odo.position().ok()?).ok()
        } else {
            None
        }
    }
}

/// A read cursor over a [`View`], walking the reduced shape in canonical
/// order. Reads fail with a state error before the first
/// [`forward`](ViewCursor::forward) and after exhaustion.
pub struct ViewCursor<'v, 'a, A: Element>
{
    view: &'v View<'a, A>,
    odo: Odometer,
}

impl<'v, 'a, A: Element> ViewCursor<'v, 'a, A>
{
    pub fn forward(&mut self) -> bool
    {
        self.odo.forward()
    }

    pub fn has_next(&self) -> bool
    {
        self.odo.has_next()
    }

    pub fn position(&self) -> Result<&[usize], ArrayError>
    {
        self.odo.position()
    }

    /// Read the source element the current view position maps to.
    pub fn get(&self) -> Result<A, ArrayError>
    {
        self.view.get(self.odo.position()?)
    }

    pub fn get_value(&self) -> Result<f64, ArrayError>
    {
        Ok(self.get()?.decode())
    }
}

impl<'a, A: Element> ViewMut<'a, A>
{
    #[inline]
    pub fn ndim(&self) -> usize
    {
        self.map.shape.rank()
    }

    pub fn extent(&self, d: usize) -> Result<usize, ArrayError>
    {
        self.map.shape.extent(d)
    }

    #[inline]
    pub fn shape(&self) -> &Shape
    {
        &self.map.shape
    }

    pub fn len(&self) -> u128
    {
        self.map.shape.element_count()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    pub fn get(&self, position: &[usize]) -> Result<A, ArrayError>
    {
        let full = self.map.translate(position)?;
        self.source.get(&full)
    }

    pub fn get_value(&self, position: &[usize]) -> Result<f64, ArrayError>
    {
        Ok(self.get(position)?.decode())
    }

    /// Write through to the source element this view position maps to.
    pub fn set(&mut self, position: &[usize], value: A) -> Result<(), ArrayError>
    {
        let full = self.map.translate(position)?;
        self.source.set(&full, value)
    }

    pub fn set_value(&mut self, position: &[usize], value: f64) -> Result<(), ArrayError>
    {
        self.set(position, A::encode(value))
    }

    /// Overwrite every viewed element with `value`.
    pub fn fill(&mut self, value: A) -> Result<(), ArrayError>
    {
        let mut odo = Odometer::new(&self.map.shape);
        while odo.forward() {
            let full = self.map.translate(odo.position()?)?;
            self.source.set(&full, value)?;
        }
        Ok(())
    }

    /// Downgrade to a read-only view of the same mapping.
    pub fn as_view(&self) -> View<'_, A>
    {
        View {
            source: &*self.source,
            map: self.map.clone(),
        }
    }
}

/// Slicing and dimension remapping.
impl<A: Element> Array<A>
{
    /// Derive a lower-rank read-only view by freezing `fixed_dims[i]` at
    /// coordinate `fixed_coords[i]`. The remaining dimensions keep their
    /// relative order.
    ///
    /// Fails with an argument error if `fixed_dims` is empty, repeats a
    /// dimension, differs in length from `fixed_coords`, or would remove
    /// every dimension; with an index error if a dimension or coordinate is
    /// out of range.
    ///
    /// ```
    /// use voxarray::Array;
    ///
    /// let a = Array::<u8>::from_shape_fn((5, 4, 3), |p| (p[0] + p[1] + p[2]) as u8).unwrap();
    /// let v = a.slice(&[2], &[1]).unwrap();
    /// assert_eq!(v.shape().as_slice(), &[5, 4]);
    /// assert_eq!(v.get_value(&[4, 3]), a.get_value(&[4, 3, 1]));
    /// ```
    pub fn slice(&self, fixed_dims: &[usize], fixed_coords: &[usize])
        -> Result<View<'_, A>, ArrayError>
    {
        let map = ViewMap::slicing(self.shape(), fixed_dims, fixed_coords)?;
        Ok(View { source: self, map })
    }

    /// Like [`slice`](Array::slice), but writable; writes mutate `self`.
    pub fn slice_mut(&mut self, fixed_dims: &[usize], fixed_coords: &[usize])
        -> Result<ViewMut<'_, A>, ArrayError>
    {
        let map = ViewMap::slicing(self.shape(), fixed_dims, fixed_coords)?;
        Ok(ViewMut { source: self, map })
    }

    /// A same-rank view with dimensions remapped so that view axis `i` is
    /// source dimension `order[i]`. `order` must be a permutation of
    /// `0..rank`.
    pub fn permuted_view(&self, order: &[usize]) -> Result<View<'_, A>, ArrayError>
    {
        let map = ViewMap::permuting(self.shape(), order)?;
        Ok(View { source: self, map })
    }

    /// Like [`permuted_view`](Array::permuted_view), but writable.
    pub fn permuted_view_mut(&mut self, order: &[usize]) -> Result<ViewMut<'_, A>, ArrayError>
    {
        let map = ViewMap::permuting(self.shape(), order)?;
        Ok(ViewMut { source: self, map })
    }
}
