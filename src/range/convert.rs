//! Conversions between ranges and untyped values.

use std::convert::TryFrom;

use super::{Delta, Measure, MultiDimRange, Range, Range1D, Range2D};
use crate::errors::Error;
use crate::shape;
use crate::value::Value;

impl From<[f64; 2]> for Range1D {
    #[inline]
    fn from([first, last]: [f64; 2]) -> Self {
        Self::new(first, last)
    }
}
impl From<Range1D> for Range {
    #[inline]
    fn from(range: Range1D) -> Self {
        Self::OneD(range)
    }
}
impl From<MultiDimRange> for Range {
    #[inline]
    fn from(range: MultiDimRange) -> Self {
        Self::MultiD(range)
    }
}

impl From<f64> for Measure {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Scalar(x)
    }
}
impl From<Vec<f64>> for Measure {
    #[inline]
    fn from(xs: Vec<f64>) -> Self {
        Self::PerDim(xs)
    }
}
impl From<f64> for Delta {
    #[inline]
    fn from(d: f64) -> Self {
        Self::Uniform(d)
    }
}
impl From<Vec<f64>> for Delta {
    #[inline]
    fn from(ds: Vec<f64>) -> Self {
        Self::PerDim(ds)
    }
}

impl From<Range1D> for Value {
    fn from(range: Range1D) -> Self {
        Self::from(range.to_array())
    }
}
impl From<&MultiDimRange> for Value {
    fn from(range: &MultiDimRange) -> Self {
        Self::List(range.dims().iter().copied().map(Self::from).collect())
    }
}
impl From<MultiDimRange> for Value {
    fn from(range: MultiDimRange) -> Self {
        Self::from(&range)
    }
}
impl From<Range2D> for Value {
    fn from(range: Range2D) -> Self {
        Self::from(MultiDimRange::from(range))
    }
}
impl From<&Range> for Value {
    fn from(range: &Range) -> Self {
        match range {
            Range::Empty => Self::empty_list(),
            Range::OneD(r) => Self::from(*r),
            Range::MultiD(r) => Self::from(r),
        }
    }
}
impl From<Range> for Value {
    fn from(range: Range) -> Self {
        Self::from(&range)
    }
}
impl From<&Measure> for Value {
    fn from(measure: &Measure) -> Self {
        match measure {
            Measure::Scalar(x) => Self::Number(*x),
            Measure::PerDim(xs) => Self::from(xs.clone()),
        }
    }
}
impl From<Measure> for Value {
    fn from(measure: Measure) -> Self {
        Self::from(&measure)
    }
}

impl TryFrom<&Value> for Range {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        shape::as_range(value)
    }
}
impl TryFrom<&Value> for Range1D {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        shape::as_range_1d(value)
    }
}
impl TryFrom<&Value> for MultiDimRange {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        shape::as_multi_dim_range(value)
    }
}
impl TryFrom<&Value> for Range2D {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        shape::as_range_2d(value)
    }
}
