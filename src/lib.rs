// Copyright 2026 voxarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `voxarray` crate provides [`Array`], a dense container of arbitrary
//! rank for the typed elements of an image/geometry processing toolkit:
//! unsigned and signed integers, floats, small double vectors and packed
//! color triples.
//!
//! ## Highlights
//!
//! - Position-based access (`get`/`set`) and value-based access
//!   (`get_value`/`set_value`) through each kind's encode/decode rules.
//! - Transparent storage strategy: one contiguous buffer while the element
//!   count fits a single linear address space, otherwise one buffer per
//!   index of the outermost dimension. Callers never see which is in use.
//! - [`Cursor`]/[`CursorMut`] walk every position in canonical order:
//!   row-major with dimension 0 fastest-varying.
//! - [`View`]/[`ViewMut`] re-index an array without copying, freezing
//!   coordinates (rank reduction) or remapping dimension order; a view's
//!   lifetime is tied to its source by the borrow checker.
//!
//! ## The engine is single-threaded by contract
//!
//! No internal locking or atomics. Shared reads from several threads are
//! safe (`Array<A>` is `Sync` for the provided element kinds); mutation
//! requires `&mut` and therefore external synchronization. No operation
//! blocks or suspends; all are bounded by the element count.
//!
//! ```
//! use voxarray::Array;
//!
//! let stack = Array::<u8>::from_elem((4, 3, 2), 10).unwrap();
//!
//! let mut cursor = stack.cursor();
//! let mut count = 0;
//! let mut sum = 0.;
//! while cursor.forward() {
//!     count += 1;
//!     sum += cursor.get_value().unwrap();
//! }
//! assert_eq!(count, 24);
//! assert_eq!(sum, 240.);
//!
//! let plane = stack.slice(&[2], &[1]).unwrap();
//! assert_eq!(plane.shape().as_slice(), &[4, 3]);
//! ```

mod array;
mod construct;
mod cursor;
mod element;
mod error;
mod progress;
mod shape;
mod storage;
mod view;

pub use crate::array::{Array, ElementIter};
pub use crate::cursor::{indices_of, Cursor, CursorMut, Indices, Odometer};
pub use crate::element::{Element, ElementKind, Rgb, Vector};
pub use crate::error::{ArrayError, ErrorKind};
pub use crate::progress::BuildProgress;
pub use crate::shape::Shape;
pub use crate::storage::ADDRESS_CEILING;
pub use crate::view::{View, ViewCursor, ViewIter, ViewMut};
