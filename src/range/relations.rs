//! Inclusion, membership and intersection of ranges.
//!
//! None of these fail: a range of a different kind or dimension count than
//! `self` is never included in it, never part of it, and never intersects
//! it.

use super::*;

impl Range1D {
    /// Returns `true` if `x` lies between the bounds of the range
    /// (inclusive).
    #[inline]
    pub fn contains(self, x: f64) -> bool {
        self.min() <= x && x <= self.max()
    }

    /// Returns `true` if `other` lies entirely within the range.
    #[inline]
    pub fn includes(self, other: Self) -> bool {
        self.min() <= other.min() && self.max() >= other.max()
    }

    /// Returns the overlap of two ranges, sorted, or `None` if neither bound
    /// of `other` lies within `self`.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn intersect(self, other: Self) -> Option<Self> {
        if self.contains(other.min()) {
            Some(Self::new(other.min(), self.max().min(other.max())))
        } else if self.contains(other.max()) {
            Some(Self::new(self.min(), other.max()))
        } else {
            None
        }
    }
}

impl MultiDimRange {
    /// Returns `true` if `point` has one coordinate per dimension and each
    /// coordinate lies within its dimension.
    pub fn contains(&self, point: &[f64]) -> bool {
        point.len() == self.ndim()
            && self.dims.iter().zip(point).all(|(r, &x)| r.contains(x))
    }

    /// Returns `true` if `other` has the same number of dimensions and lies
    /// entirely within the range along each of them.
    pub fn includes(&self, other: &Self) -> bool {
        other.ndim() == self.ndim()
            && self.dims.iter().zip(&other.dims).all(|(r, t)| r.includes(*t))
    }

    /// Returns the overlap of two ranges along each dimension, or `None` if
    /// the dimension counts differ or the ranges do not overlap along some
    /// dimension.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if other.ndim() != self.ndim() {
            return None;
        }
        let dims = self
            .dims
            .iter()
            .zip(&other.dims)
            .map(|(r, t)| r.intersect(*t))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { dims })
    }
}

impl Range {
    /// Returns `true` if `other` lies entirely within the range.
    ///
    /// The empty range includes nothing, and nothing includes the empty
    /// range.
    pub fn includes(&self, other: &Range) -> bool {
        match (self, other) {
            (Self::OneD(r), Self::OneD(t)) => r.includes(*t),
            (Self::MultiD(r), Self::MultiD(t)) => r.includes(t),
            _ => false,
        }
    }

    /// Returns `true` if the range lies entirely within `other`.
    #[inline]
    pub fn part_of(&self, other: &Range) -> bool {
        other.includes(self)
    }

    /// Returns `true` if `point` lies within the range (inclusive).
    ///
    /// One-dimensional ranges take a `Scalar` point; multi-dimensional
    /// ranges take a `PerDim` point with one coordinate per dimension.
    pub fn inside(&self, point: &Measure) -> bool {
        match (self, point) {
            (Self::OneD(r), Measure::Scalar(x)) => r.contains(*x),
            (Self::MultiD(r), Measure::PerDim(xs)) => r.contains(xs),
            _ => false,
        }
    }

    /// Returns the overlap of two ranges, or the empty range if they do not
    /// overlap or are not of the same kind and dimension count.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn intersect(&self, other: &Range) -> Range {
        match (self, other) {
            (Self::OneD(r), Self::OneD(t)) => r.intersect(*t).map_or(Self::Empty, Self::OneD),
            (Self::MultiD(r), Self::MultiD(t)) => r.intersect(t).map_or(Self::Empty, Self::MultiD),
            _ => Self::Empty,
        }
    }
}
