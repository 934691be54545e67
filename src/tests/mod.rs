//! Black-box tests of the range operations on untyped values.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use log::LevelFilter;
use simple_logger::SimpleLogger;

mod relations;

use crate::prelude::*;

lazy_static! {
    /// Values that are not ranges of any kind.
    static ref INVALID_RANGES: Vec<Value> = vec![
        Value::from(42),
        Value::from("foo"),
        Value::Null,
        Value::from(vec![Value::empty_list()]),
        Value::from(
            [("length".to_owned(), Value::from(3))]
                .iter()
                .cloned()
                .collect::<BTreeMap<_, _>>(),
        ),
        Value::from(true),
    ];
    static ref EMPTY_RANGE: Value = Value::empty_list();
    static ref RANGE_1D: Value = Value::from([1, 3]);
    static ref RANGE_2D: Value = Value::from([[4, -1], [2, 5]]);
    static ref MULTI_DIM_RANGE: Value = Value::from([[-1, 0], [4, 2], [3, 3]]);
    static ref MULTI_DIM_RANGES: Vec<Value> = vec![RANGE_2D.clone(), MULTI_DIM_RANGE.clone()];
    static ref RANGES: Vec<Value> = vec![
        EMPTY_RANGE.clone(),
        RANGE_1D.clone(),
        RANGE_2D.clone(),
        MULTI_DIM_RANGE.clone(),
    ];
}

/// Interpolation weights used to build sub-ranges and inner points.
const WEIGHTS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Enables logging for the current test binary, so that rejected
/// alternatives and test values show up in the output of failing tests.
fn init_logging() {
    // Only the first test to get here succeeds; the rest are no-ops.
    let _ = SimpleLogger::new().with_level(LevelFilter::Trace).init();
}

/// Returns the one-dimensional ranges inside a multi-dimensional range
/// value, as pairs of numbers.
fn pairs(range: &Value) -> Vec<(f64, f64)> {
    range
        .as_list()
        .expect("not a list")
        .iter()
        .map(|r| match r.as_list() {
            Some([a, b]) => (a.as_f64().expect("not a number"), b.as_f64().expect("not a number")),
            _ => panic!("not a one-dimensional range: {}", r),
        })
        .collect()
}

/// Returns `f` of each dimension of a multi-dimensional range value.
fn per_dim(range: &Value, f: impl Fn(f64, f64) -> f64) -> Measure {
    Measure::PerDim(pairs(range).into_iter().map(|(a, b)| f(a, b)).collect())
}

/// Returns a multi-dimensional range value with `f` applied to each
/// dimension.
fn map_dims(range: &Value, f: impl Fn(usize, f64, f64) -> [f64; 2]) -> Value {
    Value::from(
        pairs(range)
            .into_iter()
            .enumerate()
            .map(|(i, (a, b))| f(i, a, b))
            .collect::<Vec<_>>(),
    )
}

/// Returns `t * a + (1 - t) * b`.
fn lerp(t: f64, a: f64, b: f64) -> f64 {
    t * a + (1.0 - t) * b
}
