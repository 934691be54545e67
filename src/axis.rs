//! Enumeration of axes.
//!
//! These are used for indexing the dimensions of a two-dimensional range.

pub use Axis::*;

/// Enumeration of the two axes of a two-dimensional range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (horizontal; "left" and "right").
    X = 0,
    /// Y axis (vertical; "bottom" and "top").
    Y = 1,
}

impl Axis {
    /// Returns the name of the axis.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
        }
    }

    /// Returns the index of the dimension corresponding to this axis.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// List of axes in order.
pub const AXES: &[Axis] = &[Axis::X, Axis::Y];
