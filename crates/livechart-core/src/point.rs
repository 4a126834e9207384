// File: crates/livechart-core/src/point.rs
// Summary: Immutable 2D coordinates (integer and float variants) with tolerant equality.

/// Absolute tolerance used by [`Coordinate::approx_eq`].
pub const EPSILON: f64 = 1e-10;

/// Anything that can stand in for a data point.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn coordinates(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    /// Equal when both axes differ by at most [`EPSILON`].
    fn approx_eq<C: Coordinate>(&self, other: &C) -> bool {
        (self.x() - other.x()).abs() <= EPSILON && (self.y() - other.y()).abs() <= EPSILON
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FloatPoint {
    pub x: f64,
    pub y: f64,
}

impl FloatPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_coordinate<C: Coordinate>(c: &C) -> Self {
        let (x, y) = c.coordinates();
        Self { x, y }
    }
}

impl Coordinate for FloatPoint {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntPoint {
    pub x: i64,
    pub y: i64,
}

impl IntPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Coordinate for IntPoint {
    fn x(&self) -> f64 { self.x as f64 }
    fn y(&self) -> f64 { self.y as f64 }
}

impl From<IntPoint> for FloatPoint {
    fn from(p: IntPoint) -> Self {
        FloatPoint::from_coordinate(&p)
    }
}

impl From<(f64, f64)> for FloatPoint {
    fn from((x, y): (f64, f64)) -> Self {
        FloatPoint { x, y }
    }
}

impl<C: Coordinate> Coordinate for &C {
    fn x(&self) -> f64 { (**self).x() }
    fn y(&self) -> f64 { (**self).y() }
}
