// Copyright 2026 voxarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element kinds and their value-encoding rules.
//!
//! Every storable element type implements [`Element`], which fixes how a
//! stored raw value maps to and from an `f64` "value". The decode/encode pair
//! round-trips for every raw value of the integer and RGB kinds; encoding an
//! out-of-range value is lossy by contract, not an error: bounded integer
//! kinds saturate to their representable range and truncate toward zero.

use std::fmt::Debug;

use num_traits::{Bounded, Zero};

/// Descriptor of an element kind's representation, for external adapters
/// (e.g. cross-kind conversion built outside this crate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementKind
{
    /// Bit width of one component of the stored value.
    pub bits: u32,
    /// Whether a component can represent negative values.
    pub signed: bool,
    /// Whether a component is floating point.
    pub float: bool,
    /// Number of components per element (1 for scalar kinds).
    pub arity: u32,
}

/// An element type storable in an [`Array`](crate::Array).
///
/// `decode` and `encode` define the value semantics of the kind; array
/// methods `get_value`/`set_value` go through them.
pub trait Element: Copy + PartialEq + Debug + Send + Sync + 'static
{
    /// Describe this kind's representation.
    fn kind() -> ElementKind;

    /// The zero/default raw value.
    fn zero() -> Self;

    /// Map the stored raw value to a double.
    fn decode(self) -> f64;

    /// Map a double to a raw value.
    ///
    /// Out-of-range values are handled silently per the kind's rule; they
    /// never fail.
    fn encode(value: f64) -> Self;
}

macro_rules! int_element {
    ($t:ty, $bits:expr, $signed:expr) => {
        impl Element for $t
        {
            #[inline]
            fn kind() -> ElementKind
            {
                ElementKind {
                    bits: $bits,
                    signed: $signed,
                    float: false,
                    arity: 1,
                }
            }

            #[inline]
            fn zero() -> Self
            {
                <$t as Zero>::zero()
            }

            #[inline]
            fn decode(self) -> f64
            {
                f64::from(self)
            }

            #[inline]
            fn encode(value: f64) -> Self
            {
                let lo = <$t as Bounded>::min_value() as f64;
                let hi = <$t as Bounded>::max_value() as f64;
                // saturate to the representable range, then truncate toward
                // zero; NaN becomes zero through the float-to-int cast
                value.clamp(lo, hi) as $t
            }
        }
    };
}

int_element!(u8, 8, false);
int_element!(u16, 16, false);
int_element!(i16, 16, true);
int_element!(i32, 32, true);

impl Element for f32
{
    #[inline]
    fn kind() -> ElementKind
    {
        ElementKind {
            bits: 32,
            signed: true,
            float: true,
            arity: 1,
        }
    }

    #[inline]
    fn zero() -> Self
    {
        0.
    }

    #[inline]
    fn decode(self) -> f64
    {
        f64::from(self)
    }

    /// Narrows with `as`-cast semantics (round to nearest, overflow to
    /// infinity).
    #[inline]
    fn encode(value: f64) -> Self
    {
        value as f32
    }
}

impl Element for f64
{
    #[inline]
    fn kind() -> ElementKind
    {
        ElementKind {
            bits: 64,
            signed: true,
            float: true,
            arity: 1,
        }
    }

    #[inline]
    fn zero() -> Self
    {
        0.
    }

    #[inline]
    fn decode(self) -> f64
    {
        self
    }

    #[inline]
    fn encode(value: f64) -> Self
    {
        value
    }
}

/// A packed color triple, one byte per channel.
///
/// The value form is the packed 24-bit code `r << 16 | g << 8 | b` as a
/// double, so decode/encode round-trips for every raw triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb
{
    pub fn new(r: u8, g: u8, b: u8) -> Rgb
    {
        Rgb([r, g, b])
    }

    #[inline]
    pub fn red(self) -> u8
    {
        self.0[0]
    }

    #[inline]
    pub fn green(self) -> u8
    {
        self.0[1]
    }

    #[inline]
    pub fn blue(self) -> u8
    {
        self.0[2]
    }
}

impl Element for Rgb
{
    #[inline]
    fn kind() -> ElementKind
    {
        ElementKind {
            bits: 8,
            signed: false,
            float: false,
            arity: 3,
        }
    }

    #[inline]
    fn zero() -> Self
    {
        Rgb([0; 3])
    }

    #[inline]
    fn decode(self) -> f64
    {
        let code = (self.0[0] as u32) << 16 | (self.0[1] as u32) << 8 | self.0[2] as u32;
        code as f64
    }

    #[inline]
    fn encode(value: f64) -> Self
    {
        // truncate toward zero, saturate to the 24-bit code range
        let code = (value as i64).clamp(0, 0xFF_FFFF) as u32;
        Rgb([(code >> 16) as u8, (code >> 8) as u8, code as u8])
    }
}

/// An `N`-tuple of doubles, e.g. a displacement or gradient vector.
///
/// The scalar value form is component 0; encoding a double broadcasts it to
/// all components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize>(pub [f64; N]);

impl<const N: usize> Element for Vector<N>
{
    #[inline]
    fn kind() -> ElementKind
    {
        ElementKind {
            bits: 64,
            signed: true,
            float: true,
            arity: N as u32,
        }
    }

    #[inline]
    fn zero() -> Self
    {
        Vector([0.; N])
    }

    #[inline]
    fn decode(self) -> f64
    {
        self.0.first().copied().unwrap_or(0.)
    }

    #[inline]
    fn encode(value: f64) -> Self
    {
        Vector([value; N])
    }
}

impl<const N: usize> Default for Vector<N>
{
    fn default() -> Self
    {
        <Vector<N> as Element>::zero()
    }
}
