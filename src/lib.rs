//! Empty, one-dimensional and multi-dimensional numeric ranges.
//!
//! Ranges can be handled in two ways:
//!
//! - as typed values ([`Range`], [`Range1D`], [`MultiDimRange`],
//!   [`Range2D`]), whose methods never fail on their receiver;
//! - as untyped [`Value`]s, through the functions in [`ops`], which classify
//!   their input by shape (see [`shape`]) and fail with a type error if it is
//!   not a range.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

#[macro_use]
extern crate log;

#[macro_use]
pub mod combinators;
pub mod axis;
pub mod errors;
pub mod ops;
pub mod range;
pub mod shape;
pub mod value;

pub use axis::Axis;
pub use errors::{Error, ErrorKind, Expected, Result};
pub use range::{Coordinates, Delta, Measure, MultiDimRange, Range, Range1D, Range2D};
pub use value::Value;

/// Number of elements in a one-dimensional range.
pub const RANGE_1D_LEN: usize = 2;
/// Minimum number of dimensions of a multi-dimensional range.
pub const MIN_MULTI_DIM: usize = 2;
/// Number of dimensions of a two-dimensional range.
pub const RANGE_2D_NDIM: usize = 2;

pub mod prelude {
    //! Re-exports of the types and functions most callers need.

    pub use crate::axis::Axis;
    pub use crate::errors::{Error, ErrorKind, Result};
    pub use crate::ops::{
        bottom_left, bottom_right, first, includes, inside, intersect, last, length, max, mean,
        min, part_of, reverse, shift, sort, top_left, top_right,
    };
    pub use crate::range::{Coordinates, Delta, Measure, MultiDimRange, Range, Range1D, Range2D};
    pub use crate::shape::{
        is_empty_range, is_multi_dim_range, is_non_empty_range, is_range, is_range_1d,
        is_range_2d,
    };
    pub use crate::value::Value;
}

#[cfg(test)]
mod tests;
