// File: crates/livechart-core/src/scale.rs
// Summary: Affine data <-> pixel mapping built from two known (data, pixel) pairs per axis.

use crate::axis::{AxisRange, Bounds};
use crate::point::{Coordinate, FloatPoint};
use crate::types::PlotArea;

/// Smallest pixel span a mapping is built over; keeps slopes finite on tiny surfaces.
const MIN_PIXEL_SPAN: f64 = 1.0;

/// General scale transform between data space and local (pixel) space.
pub trait ScaleTransform {
    fn to_local_coordinates<C: Coordinate>(&self, p: &C) -> FloatPoint;
    fn to_real_coordinates<C: Coordinate>(&self, p: &C) -> FloatPoint;
}

/// Point on the line through `(min, offset)` with slope `a`.
#[inline]
pub fn point_on_line(value: f64, a: f64, min: f64, offset: f64) -> f64 {
    (value - min) * a + offset
}

/// One axis of the mapping: `local = (value - data_min) * a + pixel_offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisMap {
    pub a: f64,
    pub data_min: f64,
    pub pixel_offset: f64,
}

impl AxisMap {
    /// Line through `(range.min, pixel_at_min)` and `(range.max, pixel_at_max)`.
    pub fn through(range: &AxisRange, pixel_at_min: f64, pixel_at_max: f64) -> Self {
        let mut span = pixel_at_max - pixel_at_min;
        if span.abs() < MIN_PIXEL_SPAN {
            span = if span < 0.0 { -MIN_PIXEL_SPAN } else { MIN_PIXEL_SPAN };
        }
        Self { a: span / range.span(), data_min: range.min(), pixel_offset: pixel_at_min }
    }

    #[inline]
    pub fn to_local(&self, value: f64) -> f64 {
        point_on_line(value, self.a, self.data_min, self.pixel_offset)
    }

    #[inline]
    pub fn to_real(&self, local: f64) -> f64 {
        point_on_line(local, 1.0 / self.a, self.pixel_offset, self.data_min)
    }
}

/// Both axes. Y is flipped: `min_y` lands on `plot.bottom`, `max_y` on `plot.top`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mapping {
    pub x: AxisMap,
    pub y: AxisMap,
}

impl Mapping {
    pub fn new(plot: &PlotArea, bounds: &Bounds) -> Self {
        Self {
            x: AxisMap::through(&bounds.x, plot.left, plot.right),
            y: AxisMap::through(&bounds.y, plot.bottom, plot.top),
        }
    }
}

impl ScaleTransform for Mapping {
    fn to_local_coordinates<C: Coordinate>(&self, p: &C) -> FloatPoint {
        let (x, y) = p.coordinates();
        FloatPoint::new(self.x.to_local(x), self.y.to_local(y))
    }

    fn to_real_coordinates<C: Coordinate>(&self, p: &C) -> FloatPoint {
        let (x, y) = p.coordinates();
        FloatPoint::new(self.x.to_real(x), self.y.to_real(y))
    }
}
