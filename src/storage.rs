//! Storage strategies for array elements.
//!
//! A dense array either fits one contiguous buffer ("buffered") or, when its
//! element count exceeds the linear addressing ceiling, is split into one
//! buffer per index along the outermost dimension ("sliced"). The two
//! variants are observably equivalent through the array API; nothing outside
//! this crate can tell which one is in use.

use num_integer::Integer;

use crate::error::{from_kind, ArrayError, ErrorKind};
use crate::shape::Shape;

/// Maximum element count addressable by a single linear index.
pub const ADDRESS_CEILING: u128 = i32::MAX as u128;

#[derive(Clone, Debug)]
pub(crate) enum Storage<A>
{
    Buffered(Vec<A>),
    Sliced
    {
        planes: Vec<Vec<A>>,
        plane_len: usize,
    },
}

impl<A: Copy> Storage<A>
{
    pub(crate) fn allocate(shape: &Shape, fill: A) -> Result<Self, ArrayError>
    {
        Self::allocate_with_ceiling(shape, fill, ADDRESS_CEILING)
    }

    /// Allocate storage for `shape`, filled with `fill`.
    ///
    /// The ceiling is a parameter so unit tests can exercise the sliced
    /// variant without multi-gigabyte allocations; everything outside tests
    /// passes [`ADDRESS_CEILING`].
    pub(crate) fn allocate_with_ceiling(shape: &Shape, fill: A, ceiling: u128)
        -> Result<Self, ArrayError>
    {
        let count = shape.element_count();
        if count <= ceiling {
            return Ok(Storage::Buffered(vec![fill; count as usize]));
        }
        // count > 0 here, so every extent is nonzero
        let outer = shape.as_slice()[shape.rank() - 1];
        let plane_count = count / outer as u128;
        if plane_count > ceiling {
            // a single outermost slice already overflows one linear
            // address space; fail fast, never truncate
            return Err(from_kind(ErrorKind::CapacityExceeded));
        }
        let plane_len = plane_count as usize;
        let planes = (0..outer).map(|_| vec![fill; plane_len]).collect();
        Ok(Storage::Sliced { planes, plane_len })
    }

    /// Build storage from elements already laid out in canonical linear
    /// order. The length must match the shape's element count exactly.
    pub(crate) fn from_vec(shape: &Shape, data: Vec<A>, ceiling: u128)
        -> Result<Self, ArrayError>
    {
        let count = shape.element_count();
        if data.len() as u128 != count {
            return Err(from_kind(ErrorKind::InvalidArgument));
        }
        if count <= ceiling {
            return Ok(Storage::Buffered(data));
        }
        let outer = shape.as_slice()[shape.rank() - 1];
        let plane_count = count / outer as u128;
        if plane_count > ceiling {
            return Err(from_kind(ErrorKind::CapacityExceeded));
        }
        let plane_len = plane_count as usize;
        let planes = data.chunks(plane_len).map(<[A]>::to_vec).collect();
        Ok(Storage::Sliced { planes, plane_len })
    }

    pub(crate) fn len(&self) -> u128
    {
        match *self {
            Storage::Buffered(ref buf) => buf.len() as u128,
            Storage::Sliced {
                ref planes,
                plane_len,
            } => planes.len() as u128 * plane_len as u128,
        }
    }

    /// Read the element at a linear offset. The offset must come from
    /// `Shape::offset_of`, which bounds-checks it.
    #[inline]
    pub(crate) fn get_linear(&self, offset: u128) -> &A
    {
        match *self {
            Storage::Buffered(ref buf) => &buf[offset as usize],
            Storage::Sliced {
                ref planes,
                plane_len,
            } => {
                let (plane, within) = offset.div_rem(&(plane_len as u128));
                &planes[plane as usize][within as usize]
            }
        }
    }

    #[inline]
    pub(crate) fn get_linear_mut(&mut self, offset: u128) -> &mut A
    {
        match *self {
            Storage::Buffered(ref mut buf) => &mut buf[offset as usize],
            Storage::Sliced {
                ref mut planes,
                plane_len,
            } => {
                let (plane, within) = offset.div_rem(&(plane_len as u128));
                &mut planes[plane as usize][within as usize]
            }
        }
    }

    pub(crate) fn fill(&mut self, value: A)
    {
        match *self {
            Storage::Buffered(ref mut buf) => buf.fill(value),
            Storage::Sliced { ref mut planes, .. } => {
                for plane in planes {
                    plane.fill(value);
                }
            }
        }
    }

    pub(crate) fn is_buffered(&self) -> bool
    {
        matches!(*self, Storage::Buffered(_))
    }

    /// Iterate elements in canonical linear order; sliced planes chain
    /// seamlessly because each plane covers a contiguous offset range.
    pub(crate) fn iter(&self) -> StorageIter<'_, A>
    {
        match *self {
            Storage::Buffered(ref buf) => StorageIter::Buffered(buf.iter()),
            Storage::Sliced { ref planes, .. } => StorageIter::Sliced {
                planes: planes.iter(),
                current: None,
            },
        }
    }
}

pub(crate) enum StorageIter<'a, A>
{
    Buffered(std::slice::Iter<'a, A>),
    Sliced
    {
        planes: std::slice::Iter<'a, Vec<A>>,
        current: Option<std::slice::Iter<'a, A>>,
    },
}

impl<'a, A> Iterator for StorageIter<'a, A>
{
    type Item = &'a A;

    fn next(&mut self) -> Option<&'a A>
    {
        match self {
            StorageIter::Buffered(it) => it.next(),
            StorageIter::Sliced { planes, current } => loop {
                if let Some(it) = current {
                    if let Some(elt) = it.next() {
                        return Some(elt);
                    }
                }
                match planes.next() {
                    Some(plane) => *current = Some(plane.iter()),
                    None => return None,
                }
            },
        }
    }
}
