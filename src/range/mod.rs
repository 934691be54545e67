//! Empty, one-dimensional and multi-dimensional ranges.
//!
//! Every operation on a [`Range`] matches on its variant; the
//! multi-dimensional case applies the one-dimensional case to each dimension
//! and collects the results in dimension order.

use std::fmt;

mod convert;
mod corners;
mod ops;
mod relations;

pub use corners::{Coordinates, Range2D};

use crate::errors::{Error, Expected, Result};
use crate::value::Value;
use crate::MIN_MULTI_DIM;

/// One-dimensional range: an ordered pair of numbers.
///
/// The pair is not required to be sorted; [`Range1D::first()`] and
/// [`Range1D::last()`] preserve the order given at construction, while
/// [`Range1D::min()`], [`Range1D::max()`] and [`Range1D::sort()`] normalize it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Range1D {
    first: f64,
    last: f64,
}

impl Range1D {
    /// Creates a range from its first and last value.
    #[inline]
    pub const fn new(first: f64, last: f64) -> Self {
        Self { first, last }
    }

    /// Returns the first value.
    #[inline]
    pub fn first(self) -> f64 {
        self.first
    }
    /// Returns the last value.
    #[inline]
    pub fn last(self) -> f64 {
        self.last
    }
    /// Returns the lower bound.
    #[inline]
    pub fn min(self) -> f64 {
        self.first.min(self.last)
    }
    /// Returns the upper bound.
    #[inline]
    pub fn max(self) -> f64 {
        self.first.max(self.last)
    }
    /// Returns the arithmetic mean of both values.
    #[inline]
    pub fn mean(self) -> f64 {
        (self.first + self.last) / 2.0
    }
    /// Returns the distance between both values.
    #[inline]
    pub fn length(self) -> f64 {
        (self.first - self.last).abs()
    }

    /// Returns the range with its values ordered from lowest to highest.
    #[inline]
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn sort(self) -> Self {
        Self::new(self.min(), self.max())
    }
    /// Returns the range with its values swapped.
    #[inline]
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn reverse(self) -> Self {
        Self::new(self.last, self.first)
    }

    /// Returns both values as an array.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.first, self.last]
    }
}

/// Multi-dimensional range: one [`Range1D`] per dimension.
///
/// Always has at least two dimensions. Dimensions are matched by position
/// when two ranges are combined.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiDimRange {
    dims: Vec<Range1D>,
}

impl MultiDimRange {
    /// Creates a multi-dimensional range from its dimensions, or returns a
    /// type error if there are fewer than two.
    pub fn new(dims: Vec<Range1D>) -> Result<Self> {
        if dims.len() < MIN_MULTI_DIM {
            let value = Value::List(dims.into_iter().map(Value::from).collect());
            return Err(Error::type_error(&value, Expected::MultiDimRange));
        }
        Ok(Self { dims })
    }

    /// Returns the number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }
    /// Returns the range along each dimension.
    #[inline]
    pub fn dims(&self) -> &[Range1D] {
        &self.dims
    }

    /// Applies `f` to each dimension, keeping dimension count and order.
    #[inline]
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn map(&self, f: impl FnMut(Range1D) -> Range1D) -> Self {
        Self {
            dims: self.dims.iter().copied().map(f).collect(),
        }
    }
    /// Returns `f` of each dimension, in dimension order.
    #[inline]
    pub fn per_dim(&self, f: impl FnMut(Range1D) -> f64) -> Vec<f64> {
        self.dims.iter().copied().map(f).collect()
    }
}

impl std::ops::Index<usize> for MultiDimRange {
    type Output = Range1D;

    #[inline]
    fn index(&self, dim: usize) -> &Range1D {
        &self.dims[dim]
    }
}

/// Any range.
#[derive(Debug, Clone, PartialEq)]
pub enum Range {
    /// No range; undefined extent.
    Empty,
    /// Single interval.
    OneD(Range1D),
    /// One interval per dimension.
    MultiD(MultiDimRange),
}

/// Number, or one number per dimension.
///
/// Returned by the accessors of [`Range`] and accepted as the test point of
/// [`Range::inside()`].
#[derive(Debug, Clone, PartialEq)]
pub enum Measure {
    /// Single number, for one-dimensional ranges.
    Scalar(f64),
    /// One number per dimension, for multi-dimensional ranges.
    PerDim(Vec<f64>),
}

impl Measure {
    /// Returns the number inside if this is a `Scalar`.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(x) => Some(*x),
            Self::PerDim(_) => None,
        }
    }
    /// Returns the numbers inside if this is a `PerDim`.
    pub fn as_per_dim(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::PerDim(xs) => Some(xs),
        }
    }
}

/// Amount to shift a range by.
#[derive(Debug, Clone, PartialEq)]
pub enum Delta {
    /// Same amount along every dimension.
    Uniform(f64),
    /// One amount per dimension. Only valid for multi-dimensional ranges
    /// with the same number of dimensions.
    PerDim(Vec<f64>),
}

impl Range {
    /// Returns the empty range.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Returns `true` if this is the empty range.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
    /// Returns the number of dimensions: 0 for the empty range, 1 for a
    /// one-dimensional range.
    #[inline]
    pub fn ndim(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::OneD(_) => 1,
            Self::MultiD(r) => r.ndim(),
        }
    }
    /// Returns the range along each dimension.
    #[inline]
    pub fn dims(&self) -> &[Range1D] {
        match self {
            Self::Empty => &[],
            Self::OneD(r) => std::slice::from_ref(r),
            Self::MultiD(r) => r.dims(),
        }
    }

    /// Computes a number for each dimension, or `None` for the empty range.
    fn measure(&self, f: impl Fn(Range1D) -> f64) -> Option<Measure> {
        match self {
            Self::Empty => None,
            Self::OneD(r) => Some(Measure::Scalar(f(*r))),
            Self::MultiD(r) => Some(Measure::PerDim(r.per_dim(f))),
        }
    }
    /// Transforms each dimension independently.
    fn transform(&self, f: impl Fn(Range1D) -> Range1D) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::OneD(r) => Self::OneD(f(*r)),
            Self::MultiD(r) => Self::MultiD(r.map(f)),
        }
    }

    /// Returns the first value of each dimension.
    pub fn first(&self) -> Option<Measure> {
        self.measure(Range1D::first)
    }
    /// Returns the last value of each dimension.
    pub fn last(&self) -> Option<Measure> {
        self.measure(Range1D::last)
    }
    /// Returns the lower bound of each dimension.
    pub fn min(&self) -> Option<Measure> {
        self.measure(Range1D::min)
    }
    /// Returns the upper bound of each dimension.
    pub fn max(&self) -> Option<Measure> {
        self.measure(Range1D::max)
    }
    /// Returns the arithmetic mean of each dimension.
    pub fn mean(&self) -> Option<Measure> {
        self.measure(Range1D::mean)
    }
    /// Returns the length of each dimension. The empty range has length 0.
    pub fn length(&self) -> Measure {
        self.measure(Range1D::length).unwrap_or(Measure::Scalar(0.0))
    }

    /// Returns the range with the values of each dimension ordered from
    /// lowest to highest.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn sort(&self) -> Self {
        self.transform(Range1D::sort)
    }
    /// Returns the range with the values of each dimension swapped.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn reverse(&self) -> Self {
        self.transform(Range1D::reverse)
    }

    /// Returns the range moved by `delta`.
    ///
    /// The empty range ignores `delta`. A one-dimensional range requires a
    /// uniform delta; a multi-dimensional range accepts either a uniform
    /// delta or exactly one amount per dimension.
    pub fn shift(&self, delta: &Delta) -> Result<Self> {
        match (self, delta) {
            (Self::Empty, _) => Ok(Self::Empty),
            (_, Delta::Uniform(d)) => Ok(self.transform(|r| r + *d)),
            (Self::OneD(_), Delta::PerDim(ds)) => Err(Error::type_error(
                &Value::from(ds.clone()),
                Expected::Number,
            )),
            (Self::MultiD(r), Delta::PerDim(ds)) => {
                if ds.len() != r.ndim() {
                    return Err(Error::length_error(
                        &Value::from(ds.clone()),
                        r.ndim(),
                        ds.len(),
                    ));
                }
                Ok(Self::MultiD(MultiDimRange {
                    dims: r.dims.iter().zip(ds).map(|(&r, &d)| r + d).collect(),
                }))
            }
        }
    }
}

impl fmt::Display for Range1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Value::from(*self), f)
    }
}
impl fmt::Display for MultiDimRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Value::from(self), f)
    }
}
impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Value::from(self), f)
    }
}
