use std::error::Error;
use std::fmt;

/// An error from an array, cursor or view operation.
#[derive(Clone, Debug)]
pub struct ArrayError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ArrayError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Create a new `ArrayError`
    pub fn from_kind(error: ErrorKind) -> Self
    {
        from_kind(error)
    }
}

/// Error code for an error from an array, cursor or view operation.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug)]
#[non_exhaustive]
pub enum ErrorKind
{
    /// position coordinate or dimension index outside the declared extents
    IndexOutOfBounds,
    /// malformed view construction or shape mismatch between arrays
    InvalidArgument,
    /// element count exceeds the linear addressing ceiling
    CapacityExceeded,
    /// cursor read or write outside the positioned state
    CursorState,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ArrayError
{
    ArrayError { repr: k }
}

impl PartialEq for ErrorKind
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        *self as u8 == *rhs as u8
    }
}

impl PartialEq for ArrayError
{
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool
    {
        self.repr == rhs.repr
    }
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::IndexOutOfBounds => "position or dimension index out of bounds",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::CapacityExceeded => "element count exceeds the addressing ceiling",
            ErrorKind::CursorState => "cursor is not positioned on an element",
        };
        write!(f, "ArrayError: {}", description)
    }
}
