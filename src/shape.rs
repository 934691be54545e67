//! Classification of untyped values by shape.
//!
//! A value's kind of range is determined only by its structure:
//!
//! - a list with no elements is the empty range;
//! - a list of exactly two numbers is a one-dimensional range;
//! - a list of two or more one-dimensional ranges is a multi-dimensional
//!   range.
//!
//! A list of exactly two one-dimensional ranges is a two-dimensional range,
//! and is also a multi-dimensional range; anything that needs to treat it
//! differently must check for it first.
//!
//! The `is_*` predicates never fail. The `as_*` coercions return the typed
//! value or a type error naming the value and the expected shape.

use crate::combinators::pipe;
use crate::errors::{Error, Expected, Result};
use crate::range::{Delta, Measure, MultiDimRange, Range, Range1D, Range2D};
use crate::value::Value;
use crate::{MIN_MULTI_DIM, RANGE_1D_LEN, RANGE_2D_NDIM};

/// Returns `true` if the value is a number.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}
/// Returns `true` if the value is a list.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::List(_))
}
/// Returns `true` if the value is a list of exactly two elements.
pub fn is_couple(value: &Value) -> bool {
    value.as_list().map_or(false, |items| items.len() == 2)
}

/// Returns `true` if the value is the empty range.
pub fn is_empty_range(value: &Value) -> bool {
    value.as_list().map_or(false, <[Value]>::is_empty)
}
/// Returns `true` if the value is a one-dimensional range.
pub fn is_range_1d(value: &Value) -> bool {
    value.as_list().map_or(false, |items| {
        items.len() == RANGE_1D_LEN && items.iter().all(is_number)
    })
}
/// Returns `true` if the value is a multi-dimensional range (including a
/// two-dimensional one).
pub fn is_multi_dim_range(value: &Value) -> bool {
    value.as_list().map_or(false, |items| {
        items.len() >= MIN_MULTI_DIM && items.iter().all(is_range_1d)
    })
}
/// Returns `true` if the value is a two-dimensional range.
pub fn is_range_2d(value: &Value) -> bool {
    value.as_list().map_or(false, |items| {
        items.len() == RANGE_2D_NDIM && items.iter().all(is_range_1d)
    })
}
/// Returns `true` if the value is a range of any kind.
pub fn is_range(value: &Value) -> bool {
    is_empty_range(value) || is_range_1d(value) || is_multi_dim_range(value)
}
/// Returns `true` if the value is a one-dimensional or multi-dimensional
/// range.
pub fn is_non_empty_range(value: &Value) -> bool {
    is_range_1d(value) || is_multi_dim_range(value)
}

/// Returns the number inside the value, or a type error if it is not a
/// number.
pub fn as_number(value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| Error::type_error(value, Expected::Number))
}
/// Returns the elements of the value, or a type error if it is not a list.
pub fn as_array(value: &Value) -> Result<&[Value]> {
    value
        .as_list()
        .ok_or_else(|| Error::type_error(value, Expected::Array))
}
/// Returns the numbers in a list, or a type error if the value is not a
/// list or any element is not a number.
pub fn as_numbers(value: &Value) -> Result<Vec<f64>> {
    as_array(value)?.iter().map(as_number).collect()
}

/// Returns a coercion that returns the elements of a list with exactly `len`
/// elements, or fails with a type error (not a list) or a length error
/// (wrong number of elements).
pub fn has_length(len: usize) -> impl Fn(&Value) -> Result<&[Value]> {
    list_coercion(move |value| {
        let items = as_array(value)?;
        if items.len() != len {
            return Err(Error::length_error(value, len, items.len()));
        }
        Ok(items)
    })
}
/// Pins the signature of a closure that borrows its output from its input.
fn list_coercion<F>(f: F) -> F
where
    F: Fn(&Value) -> Result<&[Value]>,
{
    f
}

/// Checks that the value is the empty range.
pub fn as_empty_range(value: &Value) -> Result<()> {
    if is_empty_range(value) {
        Ok(())
    } else {
        Err(Error::type_error(value, Expected::EmptyRange))
    }
}
/// Converts the value to a one-dimensional range.
pub fn as_range_1d(value: &Value) -> Result<Range1D> {
    match value.as_list() {
        Some([Value::Number(first), Value::Number(last)]) => Ok(Range1D::new(*first, *last)),
        _ => Err(Error::type_error(value, Expected::Range1D)),
    }
}
/// Converts the value to a two-dimensional range.
pub fn as_range_2d(value: &Value) -> Result<Range2D> {
    let to_range_2d = |items: &[Value]| -> Result<Range2D> {
        Ok(Range2D::new(as_range_1d(&items[0])?, as_range_1d(&items[1])?))
    };
    pipe(has_length(RANGE_2D_NDIM), to_range_2d)(value)
        .map_err(|_| Error::type_error(value, Expected::Range2D))
}
/// Converts the value to a multi-dimensional range (possibly with only two
/// dimensions).
pub fn as_multi_dim_range(value: &Value) -> Result<MultiDimRange> {
    let to_multi_dim = |items: &[Value]| {
        items
            .iter()
            .map(as_range_1d)
            .collect::<Result<Vec<_>>>()
            .and_then(MultiDimRange::new)
    };
    pipe(as_array, to_multi_dim)(value)
        .map_err(|_| Error::type_error(value, Expected::MultiDimRange))
}
/// Converts the value to a range of any kind.
///
/// Two-dimensional ranges become two-dimensional [`Range::MultiD`]s.
pub fn as_range(value: &Value) -> Result<Range> {
    let classify = alternative!(
        pipe(as_range_1d, |r| Ok(Range::OneD(r))),
        pipe(as_multi_dim_range, |r| Ok(Range::MultiD(r))),
        pipe(as_empty_range, |()| Ok(Range::Empty)),
    );
    classify(value).map_err(|_| Error::type_error(value, Expected::Range))
}
/// Converts the value to a one-dimensional or multi-dimensional range.
pub fn as_non_empty_range(value: &Value) -> Result<Range> {
    let classify = alternative!(
        pipe(as_range_1d, |r| Ok(Range::OneD(r))),
        pipe(as_multi_dim_range, |r| Ok(Range::MultiD(r))),
    );
    classify(value).map_err(|_| Error::type_error(value, Expected::NonEmptyRange))
}

/// Converts the value to a shift amount: a number (uniform) or a list of
/// numbers (one per dimension).
pub fn as_delta(value: &Value) -> Result<Delta> {
    let classify = alternative!(
        pipe(as_number, |d| Ok(Delta::Uniform(d))),
        pipe(as_numbers, |ds| Ok(Delta::PerDim(ds))),
    );
    classify(value).map_err(|_| Error::type_error(value, Expected::Delta))
}
/// Converts the value to a test point: a number (for one-dimensional
/// ranges) or a list of numbers (for multi-dimensional ranges).
pub fn as_point(value: &Value) -> Result<Measure> {
    let classify = alternative!(
        pipe(as_number, |x| Ok(Measure::Scalar(x))),
        pipe(as_numbers, |xs| Ok(Measure::PerDim(xs))),
    );
    classify(value).map_err(|_| Error::type_error(value, Expected::Point))
}
