//! Progress notifications emitted while building large arrays.
//!
//! Constructors that take an `update_progress` callback invoke it
//! synchronously at well-defined points: once before allocation and once
//! before a fill. The engine never reads anything back; correctness never
//! depends on the callback.

/// A coarse-grained progress event from array construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildProgress
{
    /// Storage for `element_count` elements is about to be allocated.
    Allocating
    {
        element_count: u128,
    },
    /// The elements are about to be filled; `step` out of `total` elements
    /// written so far. Reporting is coarse: one event at the start of the
    /// fill, none in between.
    Filling
    {
        step: u64,
        total: u64,
    },
}
