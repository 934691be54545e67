//! Range operations on untyped values.
//!
//! Each function converts its range argument with
//! [`as_range()`](crate::shape::as_range) (or
//! [`as_range_2d()`](crate::shape::as_range_2d) for corners), failing with a
//! type error if it is not one, and then calls the method of the same name on
//! [`Range`].
//!
//! The relations ([`includes()`], [`part_of()`], [`inside()`],
//! [`intersect()`]) are curried: they validate the range they are given and
//! return a function of the value to test. That function never fails; a
//! test value of the wrong shape yields `false` or the empty range.

use crate::errors::{ErrorKind, Result};
use crate::range::{Coordinates, Measure, Range};
use crate::shape::{as_delta, as_point, as_range, as_range_2d};
use crate::value::Value;

/// Returns the first value of each dimension of a range, or `None` for the
/// empty range.
pub fn first(range: &Value) -> Result<Option<Measure>> {
    Ok(as_range(range)?.first())
}
/// Returns the last value of each dimension of a range, or `None` for the
/// empty range.
pub fn last(range: &Value) -> Result<Option<Measure>> {
    Ok(as_range(range)?.last())
}
/// Returns the lower bound of each dimension of a range, or `None` for the
/// empty range.
pub fn min(range: &Value) -> Result<Option<Measure>> {
    Ok(as_range(range)?.min())
}
/// Returns the upper bound of each dimension of a range, or `None` for the
/// empty range.
pub fn max(range: &Value) -> Result<Option<Measure>> {
    Ok(as_range(range)?.max())
}
/// Returns the arithmetic mean of each dimension of a range, or `None` for
/// the empty range.
pub fn mean(range: &Value) -> Result<Option<Measure>> {
    Ok(as_range(range)?.mean())
}
/// Returns the length of each dimension of a range; 0 for the empty range.
pub fn length(range: &Value) -> Result<Measure> {
    Ok(as_range(range)?.length())
}

/// Returns a range with the values of each dimension sorted from lowest to
/// highest.
pub fn sort(range: &Value) -> Result<Range> {
    Ok(as_range(range)?.sort())
}
/// Returns a range with the values of each dimension swapped.
pub fn reverse(range: &Value) -> Result<Range> {
    Ok(as_range(range)?.reverse())
}
/// Returns a range moved by `delta`.
///
/// `delta` is not looked at for the empty range. Otherwise it must be a
/// number, or (for multi-dimensional ranges) a list with one number per
/// dimension; anything else is an error.
pub fn shift(range: &Value, delta: &Value) -> Result<Range> {
    let range = as_range(range)?;
    if range.is_empty() {
        return Ok(Range::Empty);
    }
    range.shift(&as_delta(delta)?)
}

/// Returns a function that checks whether a range lies entirely within
/// `range`.
pub fn includes(range: &Value) -> Result<impl Fn(&Value) -> bool> {
    let range = as_range(range)?;
    Ok(move |test: &Value| or_sentinel(as_range(test).map(|t| range.includes(&t)), false))
}
/// Returns a function that checks whether `range` lies entirely within a
/// range.
pub fn part_of(range: &Value) -> Result<impl Fn(&Value) -> bool> {
    let range = as_range(range)?;
    Ok(move |test: &Value| or_sentinel(as_range(test).map(|t| range.part_of(&t)), false))
}
/// Returns a function that checks whether a point (a number, or a list of
/// numbers with one per dimension) lies within `range`.
pub fn inside(range: &Value) -> Result<impl Fn(&Value) -> bool> {
    let range = as_range(range)?;
    Ok(move |test: &Value| or_sentinel(as_point(test).map(|p| range.inside(&p)), false))
}
/// Returns a function that computes the overlap of a range with `range`.
pub fn intersect(range: &Value) -> Result<impl Fn(&Value) -> Range> {
    let range = as_range(range)?;
    Ok(move |test: &Value| {
        or_sentinel(as_range(test).map(|t| range.intersect(&t)), Range::Empty)
    })
}

/// Returns the bottom-left corner of a two-dimensional range.
pub fn bottom_left(range: &Value) -> Result<Coordinates> {
    Ok(as_range_2d(range)?.bottom_left())
}
/// Returns the bottom-right corner of a two-dimensional range.
pub fn bottom_right(range: &Value) -> Result<Coordinates> {
    Ok(as_range_2d(range)?.bottom_right())
}
/// Returns the top-left corner of a two-dimensional range.
pub fn top_left(range: &Value) -> Result<Coordinates> {
    Ok(as_range_2d(range)?.top_left())
}
/// Returns the top-right corner of a two-dimensional range.
pub fn top_right(range: &Value) -> Result<Coordinates> {
    Ok(as_range_2d(range)?.top_right())
}

/// Replaces a validation error on a test value with `sentinel`.
fn or_sentinel<T>(result: Result<T>, sentinel: T) -> T {
    match result {
        Ok(ret) => ret,
        Err(e) => match e.kind() {
            ErrorKind::Type | ErrorKind::Length | ErrorKind::NoMatch => {
                debug!("test value rejected: {}", e);
                sentinel
            }
        },
    }
}
