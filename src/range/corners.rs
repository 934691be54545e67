//! Two-dimensional ranges and their corners.

use std::convert::TryFrom;
use std::fmt;
use std::ops::Index;

use super::{MultiDimRange, Range, Range1D};
use crate::axis::Axis;
use crate::errors::{Error, Expected};
use crate::value::Value;

/// Coordinates of a point in a two-dimensional range: `[x, y]`.
pub type Coordinates = [f64; 2];

/// Two-dimensional range: a horizontal and a vertical [`Range1D`].
///
/// Every two-dimensional range is also a [`MultiDimRange`] with two
/// dimensions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Range2D {
    x: Range1D,
    y: Range1D,
}

impl Range2D {
    /// Creates a two-dimensional range from its horizontal and vertical
    /// ranges.
    #[inline]
    pub const fn new(x: Range1D, y: Range1D) -> Self {
        Self { x, y }
    }

    /// Returns the range along the X axis.
    #[inline]
    pub fn x(self) -> Range1D {
        self.x
    }
    /// Returns the range along the Y axis.
    #[inline]
    pub fn y(self) -> Range1D {
        self.y
    }

    /// Returns the corner with the lowest X and lowest Y.
    #[inline]
    pub fn bottom_left(self) -> Coordinates {
        [self.x.min(), self.y.min()]
    }
    /// Returns the corner with the highest X and lowest Y.
    #[inline]
    pub fn bottom_right(self) -> Coordinates {
        [self.x.max(), self.y.min()]
    }
    /// Returns the corner with the lowest X and highest Y.
    #[inline]
    pub fn top_left(self) -> Coordinates {
        [self.x.min(), self.y.max()]
    }
    /// Returns the corner with the highest X and highest Y.
    #[inline]
    pub fn top_right(self) -> Coordinates {
        [self.x.max(), self.y.max()]
    }
}

impl Index<Axis> for Range2D {
    type Output = Range1D;

    #[inline]
    fn index(&self, axis: Axis) -> &Range1D {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl From<Range2D> for MultiDimRange {
    #[inline]
    fn from(range: Range2D) -> Self {
        Self {
            dims: vec![range.x, range.y],
        }
    }
}
impl From<Range2D> for Range {
    #[inline]
    fn from(range: Range2D) -> Self {
        Self::MultiD(range.into())
    }
}

impl TryFrom<&MultiDimRange> for Range2D {
    type Error = Error;

    fn try_from(range: &MultiDimRange) -> Result<Self, Error> {
        match range.dims() {
            &[x, y] => Ok(Self::new(x, y)),
            _ => Err(Error::type_error(&Value::from(range), Expected::Range2D)),
        }
    }
}
impl TryFrom<&Range> for Range2D {
    type Error = Error;

    fn try_from(range: &Range) -> Result<Self, Error> {
        match range {
            Range::MultiD(r) => Self::try_from(r),
            _ => Err(Error::type_error(&Value::from(range), Expected::Range2D)),
        }
    }
}

impl fmt::Display for Range2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&MultiDimRange::from(*self), f)
    }
}
