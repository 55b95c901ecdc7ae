// Copyright 2026 voxarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Cursors: stateful position walkers over an array's shape.
//!
//! Traversal order is canonical row-major with dimension 0 fastest-varying.
//! A cursor starts before the first position, is advanced with
//! [`forward`](Odometer::forward), and ends exhausted after one full
//! traversal; it is not reusable.

use crate::array::Array;
use crate::element::Element;
use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::shape::Shape;

#[derive(Clone, Copy, Debug, PartialEq)]
enum State
{
    BeforeFirst,
    Positioned,
    Exhausted,
}

/// A position walker over a [`Shape`].
///
/// Advancing is an odometer increment: dimension 0 is incremented first and
/// overflow carries into the next dimension; when the last dimension
/// overflows the walker is exhausted.
#[derive(Clone, Debug)]
pub struct Odometer
{
    shape: Shape,
    position: Vec<usize>,
    state: State,
}

impl Odometer
{
    /// Create a walker in the before-first state.
    pub fn new(shape: &Shape) -> Odometer
    {
        Odometer {
            position: vec![0; shape.rank()],
            shape: shape.clone(),
            state: State::BeforeFirst,
        }
    }

    /// Whether another call to [`forward`](Odometer::forward) will reach a
    /// position.
    pub fn has_next(&self) -> bool
    {
        match self.state {
            State::BeforeFirst => self.shape.element_count() > 0,
            State::Positioned => self
                .position
                .iter()
                .zip(self.shape.as_slice())
                .any(|(&p, &e)| p + 1 < e),
            State::Exhausted => false,
        }
    }

    /// Advance to the next position in canonical order. Returns `false` once
    /// the traversal is complete; the walker is then exhausted for good.
    pub fn forward(&mut self) -> bool
    {
        match self.state {
            State::BeforeFirst => {
                if self.shape.element_count() == 0 {
                    self.state = State::Exhausted;
                    return false;
                }
                // position is already all zeros
                self.state = State::Positioned;
                true
            }
            State::Positioned => {
                // explicit carry loop, no recursion over the rank
                for (p, &e) in self.position.iter_mut().zip(self.shape.as_slice()) {
                    *p += 1;
                    if *p < e {
                        return true;
                    }
                    *p = 0;
                }
                self.state = State::Exhausted;
                false
            }
            State::Exhausted => false,
        }
    }

    /// The current position, or a state error before the first `forward` or
    /// after exhaustion.
    pub fn position(&self) -> Result<&[usize], ArrayError>
    {
        match self.state {
            State::Positioned => Ok(&self.position),
            _ => Err(from_kind(ErrorKind::CursorState)),
        }
    }

    pub fn is_exhausted(&self) -> bool
    {
        self.state == State::Exhausted
    }

    /// The shape this walker traverses.
    pub fn shape(&self) -> &Shape
    {
        &self.shape
    }
}

/// A read cursor over an [`Array`].
pub struct Cursor<'a, A: Element>
{
    array: &'a Array<A>,
    odo: Odometer,
}

impl<'a, A: Element> Cursor<'a, A>
{
    pub(crate) fn new(array: &'a Array<A>) -> Self
    {
        Cursor {
            odo: Odometer::new(array.shape()),
            array,
        }
    }

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

    /// Read the element at the current position.
    pub fn get(&self) -> Result<A, ArrayError>
    {
        self.array.get(self.odo.position()?)
    }

    /// Read the decoded value at the current position.
    pub fn get_value(&self) -> Result<f64, ArrayError>
    {
        self.array.get_value(self.odo.position()?)
    }
}

/// A read-write cursor over an [`Array`].
pub struct CursorMut<'a, A: Element>
{
    array: &'a mut Array<A>,
    odo: Odometer,
}

impl<'a, A: Element> CursorMut<'a, A>
{
    pub(crate) fn new(array: &'a mut Array<A>) -> Self
    {
        CursorMut {
            odo: Odometer::new(array.shape()),
            array,
        }
    }

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

    pub fn get(&self) -> Result<A, ArrayError>
    {
        self.array.get(self.odo.position()?)
    }

    pub fn get_value(&self) -> Result<f64, ArrayError>
    {
        self.array.get_value(self.odo.position()?)
    }

    /// Write the element at the current position.
    pub fn set(&mut self, value: A) -> Result<(), ArrayError>
    {
        let position = self.odo.position()?.to_vec();
        self.array.set(&position, value)
    }

    /// Encode and write a value at the current position.
    pub fn set_value(&mut self, value: f64) -> Result<(), ArrayError>
    {
        let position = self.odo.position()?.to_vec();
        self.array.set_value(&position, value)
    }
}

/// An iterator of all positions of a shape, in canonical order.
///
/// Iterator element type is `Vec<usize>`.
#[derive(Clone, Debug)]
pub struct Indices
{
    odo: Odometer,
}

/// Create an iterator over the positions of `shape`.
pub fn indices_of(shape: &Shape) -> Indices
{
    Indices {
        odo: Odometer::new(shape),
    }
}

impl Iterator for Indices
{
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>>
    {
        if self.odo.forward() {
            Some(self.odo.position().ok()?.to_vec())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        if self.odo.is_exhausted() {
            return (0, Some(0));
        }
        let total = self.odo.shape.element_count().min(usize::MAX as u128) as usize;
        match self.odo.position() {
            Err(_) => (total, Some(total)),
            Ok(position) => {
                let gone = self
                    .odo
                    .shape
                    .offset_of(position)
                    .map(|o| (o.min(usize::MAX as u128) as usize).saturating_add(1))
                    .unwrap_or(0);
                let left = total.saturating_sub(gone);
                (left, Some(left))
            }
        }
    }
}
