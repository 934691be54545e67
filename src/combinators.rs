//! Combinators for chaining and selecting between fallible conversions.
//!
//! A handler signals that it does not apply to a value by returning `Err`;
//! [`alternative()`] relies on this to pick the first handler that accepts
//! the value.

use std::fmt;

use crate::errors::{Error, Result};

/// Boxed fallible function from `A` to `B`.
pub type Handler<'h, A, B> = Box<dyn 'h + Fn(A) -> Result<B>>;

/// Boxes a function for use in [`alternative()`].
#[inline]
pub fn handler<'h, A, B>(f: impl 'h + Fn(A) -> Result<B>) -> Handler<'h, A, B> {
    Box::new(f)
}

/// Returns a function that tries each handler in order and returns the
/// result of the first one that succeeds.
///
/// If every handler fails, the returned function fails with
/// [`Error::NoMatchingAlternative`]. Order matters: a value accepted by
/// several handlers is always handled by the first of them.
pub fn alternative<'h, A, B>(handlers: Vec<Handler<'h, A, B>>) -> Handler<'h, A, B>
where
    A: 'h + Copy + fmt::Display,
    B: 'h,
{
    Box::new(move |value| {
        for (i, handler) in handlers.iter().enumerate() {
            match handler(value) {
                Ok(ret) => return Ok(ret),
                Err(e) => trace!("alternative #{} rejected {}: {}", i, value, e),
            }
        }
        Err(Error::no_matching_alternative(value))
    })
}

/// Returns a function that feeds its input through `f` and then `g`,
/// stopping at the first error.
#[inline]
pub fn pipe<A, B, C>(
    f: impl Fn(A) -> Result<B>,
    g: impl Fn(B) -> Result<C>,
) -> impl Fn(A) -> Result<C> {
    move |value| f(value).and_then(&g)
}

/// Builds an [`alternative()`] from a list of handlers.
#[macro_export]
macro_rules! alternative {
    ($($handler:expr),+ $(,)?) => {
        $crate::combinators::alternative(vec![$($crate::combinators::handler($handler)),+])
    };
}

/// Composes any number of fallible functions from left to right using
/// [`pipe()`].
#[macro_export]
macro_rules! pipe {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::pipe($f, $crate::pipe!($($rest),+))
    };
}
