use itertools::iproduct;

use super::*;

/// Returns sub-ranges of a one-dimensional range value, built by
/// interpolating between its ends.
fn sub_ranges_1d(range: &Value) -> Vec<Value> {
    let (a, b) = match range.as_list() {
        Some([a, b]) => (a.as_f64().unwrap(), b.as_f64().unwrap()),
        _ => panic!("not a one-dimensional range: {}", range),
    };
    iproduct!(WEIGHTS.iter(), WEIGHTS.iter())
        .map(|(&t1, &t2)| Value::from([lerp(t1, a, b), lerp(t2, a, b)]))
        .collect()
}

/// Returns sub-ranges of a multi-dimensional range value, built by
/// interpolating between the ends of each dimension.
fn sub_ranges_multi_dim(range: &Value) -> Vec<Value> {
    iproduct!(WEIGHTS.iter(), WEIGHTS.iter())
        .map(|(&t1, &t2)| map_dims(range, |_, a, b| [lerp(t1, a, b), lerp(t2, a, b)]))
        .collect()
}

#[test]
fn test_relations_reject_invalid_ranges() {
    init_logging();
    for invalid in INVALID_RANGES.iter() {
        assert_eq!(ErrorKind::Type, includes(invalid).err().unwrap().kind());
        assert_eq!(ErrorKind::Type, part_of(invalid).err().unwrap().kind());
        assert_eq!(ErrorKind::Type, inside(invalid).err().unwrap().kind());
        assert_eq!(ErrorKind::Type, intersect(invalid).err().unwrap().kind());
    }
}

#[test]
fn test_relations_of_invalid_test_values() {
    init_logging();
    for range in RANGES.iter() {
        let included_in = includes(range).unwrap();
        let is_part_of = part_of(range).unwrap();
        let intersect_with = intersect(range).unwrap();
        for invalid in INVALID_RANGES.iter() {
            assert!(!included_in(invalid));
            assert!(!is_part_of(invalid));
            assert_eq!(Range::Empty, intersect_with(invalid));
        }
    }
}

#[test]
fn test_includes() {
    // The empty range includes nothing and is included in nothing.
    let included_in_empty = includes(&EMPTY_RANGE).unwrap();
    for range in RANGES.iter() {
        assert!(!included_in_empty(range));
        assert!(!includes(range).unwrap()(&*EMPTY_RANGE));
    }

    let included_in_range_1d = includes(&RANGE_1D).unwrap();
    assert!(included_in_range_1d(&*RANGE_1D));
    for sub_range in sub_ranges_1d(&RANGE_1D) {
        assert!(included_in_range_1d(&sub_range), "{}", sub_range);
    }
    for range in MULTI_DIM_RANGES.iter() {
        assert!(!included_in_range_1d(range));
    }
    assert!(!included_in_range_1d(&Value::from([0, 2])));
    assert!(!included_in_range_1d(&Value::from([2, 4])));

    for range in MULTI_DIM_RANGES.iter() {
        let included_in_range = includes(range).unwrap();
        assert!(included_in_range(range));
        for sub_range in sub_ranges_multi_dim(range) {
            assert!(included_in_range(&sub_range), "{}", sub_range);
        }
        assert!(!included_in_range(&*RANGE_1D));
        let grown = map_dims(range, |_, a, b| [a.min(b) - 1.0, a.max(b)]);
        assert!(!included_in_range(&grown));
    }
    assert!(!includes(&MULTI_DIM_RANGE).unwrap()(&*RANGE_2D));
    assert!(!includes(&RANGE_2D).unwrap()(&*MULTI_DIM_RANGE));
}

#[test]
fn test_part_of() {
    let empty_range_part_of = part_of(&EMPTY_RANGE).unwrap();
    for range in RANGES.iter() {
        assert!(!empty_range_part_of(range));
    }

    assert!(part_of(&RANGE_1D).unwrap()(&*RANGE_1D));
    for sub_range in sub_ranges_1d(&RANGE_1D) {
        assert!(part_of(&sub_range).unwrap()(&*RANGE_1D), "{}", sub_range);
    }
    let range_1d_part_of = part_of(&RANGE_1D).unwrap();
    assert!(!range_1d_part_of(&*EMPTY_RANGE));
    for range in MULTI_DIM_RANGES.iter() {
        assert!(!range_1d_part_of(range));
    }

    for range in MULTI_DIM_RANGES.iter() {
        assert!(part_of(range).unwrap()(range));
        for sub_range in sub_ranges_multi_dim(range) {
            assert!(part_of(&sub_range).unwrap()(range), "{}", sub_range);
        }
        let range_part_of = part_of(range).unwrap();
        assert!(!range_part_of(&*EMPTY_RANGE));
        assert!(!range_part_of(&*RANGE_1D));
    }
}

#[test]
fn test_inside() {
    init_logging();

    let inside_range_1d = inside(&RANGE_1D).unwrap();
    for non_numeric in &[
        Value::from(BTreeMap::<String, Value>::new()),
        Value::from("3.14"),
        Value::from(true),
        Value::empty_list(),
        Value::from(vec![Value::from(1), Value::from(2), Value::from("foo")]),
    ] {
        assert!(!inside_range_1d(non_numeric), "{}", non_numeric);
    }
    assert!(inside_range_1d(&Value::from(1)));
    assert!(inside_range_1d(&Value::from(3)));
    for &t in WEIGHTS.iter() {
        assert!(inside_range_1d(&Value::from(lerp(t, 1.0, 3.0))));
    }
    assert!(!inside_range_1d(&Value::from(0)));
    assert!(!inside_range_1d(&Value::from(4)));
    assert!(!inside_range_1d(&Value::from([2])));

    let inside_empty = inside(&EMPTY_RANGE).unwrap();
    for numeric in &[
        Value::from(0),
        Value::from(2.5),
        Value::from(42),
        Value::from(-99),
        Value::from([1, 2, 3, 4]),
    ] {
        assert!(!inside_empty(numeric), "{}", numeric);
    }

    for range in MULTI_DIM_RANGES.iter() {
        let inside_range = inside(range).unwrap();
        assert!(inside_range(&Value::from(per_dim(range, |a, _| a))));
        assert!(inside_range(&Value::from(per_dim(range, |_, b| b))));
        for &t in WEIGHTS.iter() {
            let point = Value::from(per_dim(range, |a, b| lerp(t, a, b)));
            assert!(inside_range(&point), "{}", point);
        }
        let outside = Value::from(per_dim(range, |a, b| a.max(b) + 1.0));
        assert!(!inside_range(&outside));

        for not_inside in &[
            Value::from(4),
            Value::from("foo"),
            Value::from(false),
            Value::from([1]),
            Value::empty_list(),
        ] {
            assert!(!inside_range(not_inside), "{}", not_inside);
        }
    }
}

#[test]
fn test_intersect_empty() {
    let intersect_empty = intersect(&EMPTY_RANGE).unwrap();
    for range in RANGES.iter() {
        assert_eq!(Range::Empty, intersect_empty(range));
        assert_eq!(Range::Empty, intersect(range).unwrap()(&*EMPTY_RANGE));
    }
}

#[test]
fn test_intersect_range_1d() {
    let intersect_range_1d = intersect(&RANGE_1D).unwrap();
    assert_eq!(Value::from([1, 3]), Value::from(intersect_range_1d(&*RANGE_1D)));
    assert_eq!(Value::from([1, 2]), Value::from(intersect_range_1d(&Value::from([0, 2]))));

    // Touching at either end.
    let touching = Value::from(shift(&RANGE_1D, &Value::from(2)).unwrap());
    assert_eq!(Value::from([3, 3]), Value::from(intersect_range_1d(&touching)));
    let touching = Value::from(shift(&RANGE_1D, &Value::from(-2)).unwrap());
    assert_eq!(Value::from([1, 1]), Value::from(intersect_range_1d(&touching)));

    // Just apart at either end.
    for &delta in &[2.1, -2.1] {
        let apart = Value::from(shift(&RANGE_1D, &Value::from(delta)).unwrap());
        assert_eq!(Range::Empty, intersect_range_1d(&apart));
    }

    // Ranges of other kinds.
    for range in MULTI_DIM_RANGES.iter() {
        assert_eq!(Range::Empty, intersect_range_1d(range));
    }
}

#[test]
fn test_intersect_multi_dim_range() {
    for range in MULTI_DIM_RANGES.iter() {
        let intersect_range = intersect(range).unwrap();
        assert_eq!(
            map_dims(range, |_, a, b| [a.min(b), a.max(b)]),
            Value::from(intersect_range(range)),
        );

        let intersecting = map_dims(range, |_, a, b| [(a + b) / 2.0, b]);
        assert_eq!(
            map_dims(&intersecting, |_, a, b| [a.min(b), a.max(b)]),
            Value::from(intersect_range(&intersecting)),
        );

        for not_intersecting in &[
            Value::from(4),
            Value::from("foo"),
            Value::from(false),
            Value::from([1]),
            Value::empty_list(),
            RANGE_1D.clone(),
        ] {
            assert_eq!(Range::Empty, intersect_range(not_intersecting));
        }

        // Apart along a single dimension.
        let apart = map_dims(range, |i, a, b| match i {
            0 => [a.max(b) + 1.0, a.max(b) + 2.0],
            _ => [a, b],
        });
        assert_eq!(Range::Empty, intersect_range(&apart));
    }
}

#[test]
fn test_intersect_unequal_dimension_count() {
    let mut dims = MULTI_DIM_RANGE.as_list().unwrap().to_vec();
    dims.push(RANGE_1D.clone());
    let longer = Value::from(dims);
    assert!(is_multi_dim_range(&longer));
    assert_eq!(Range::Empty, intersect(&MULTI_DIM_RANGE).unwrap()(&longer));
    assert_eq!(Range::Empty, intersect(&longer).unwrap()(&*MULTI_DIM_RANGE));
    assert_eq!(Range::Empty, intersect(&RANGE_2D).unwrap()(&*MULTI_DIM_RANGE));
}
