//! Operations involving ranges and numbers.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{MultiDimRange, Range1D};

// Adding or subtracting a number moves both values of a range.
impl Add<f64> for Range1D {
    type Output = Self;

    #[inline]
    fn add(self, operand: f64) -> Self {
        Self::new(self.first + operand, self.last + operand)
    }
}
impl AddAssign<f64> for Range1D {
    #[inline]
    fn add_assign(&mut self, operand: f64) {
        *self = *self + operand;
    }
}
impl Sub<f64> for Range1D {
    type Output = Self;

    #[inline]
    fn sub(self, operand: f64) -> Self {
        Self::new(self.first - operand, self.last - operand)
    }
}
impl SubAssign<f64> for Range1D {
    #[inline]
    fn sub_assign(&mut self, operand: f64) {
        *self = *self - operand;
    }
}

// Multi-dimensional ranges move by the same amount along every dimension.
impl Add<f64> for &MultiDimRange {
    type Output = MultiDimRange;

    #[inline]
    fn add(self, operand: f64) -> MultiDimRange {
        self.map(|r| r + operand)
    }
}
impl Add<f64> for MultiDimRange {
    type Output = Self;

    #[inline]
    fn add(self, operand: f64) -> Self {
        &self + operand
    }
}
impl Sub<f64> for &MultiDimRange {
    type Output = MultiDimRange;

    #[inline]
    fn sub(self, operand: f64) -> MultiDimRange {
        self.map(|r| r - operand)
    }
}
impl Sub<f64> for MultiDimRange {
    type Output = Self;

    #[inline]
    fn sub(self, operand: f64) -> Self {
        &self - operand
    }
}
