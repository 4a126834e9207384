// File: crates/livechart-core/tests/point.rs
// Purpose: Tolerant equality and int/float interchangeability of points.

use livechart_core::{Coordinate, FloatPoint, IntPoint, EPSILON};

#[test]
fn float_points_equal_within_epsilon() {
    let a = FloatPoint::new(1.0, 2.0);
    assert!(a.approx_eq(&FloatPoint::new(1.0 + EPSILON / 2.0, 2.0 - EPSILON / 2.0)));
    assert!(!a.approx_eq(&FloatPoint::new(1.0 + 1e-6, 2.0)));
    assert!(!a.approx_eq(&FloatPoint::new(1.0, 2.5)));
}

#[test]
fn int_and_float_points_interchange() {
    let i = IntPoint::new(3, -7);
    let f = FloatPoint::new(3.0, -7.0);
    assert!(i.approx_eq(&f));
    assert!(f.approx_eq(&i));
    assert_eq!(i.coordinates(), (3.0, -7.0));

    let converted: FloatPoint = i.into();
    assert!(converted.approx_eq(&f));
}

#[test]
fn coordinates_round_trip_through_tuple() {
    let p = FloatPoint::from((0.25, 1e6));
    assert_eq!(p.coordinates(), (0.25, 1e6));
    assert_eq!((p.x(), p.y()), (0.25, 1e6));
}
