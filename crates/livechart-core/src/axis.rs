// File: crates/livechart-core/src/axis.rs
// Summary: Validated per-axis data ranges and the auto-ranging growth rule.

use log::warn;

use crate::error::{ChartError, Result};

/// Fraction of the incoming value added as margin when a bound grows.
pub const AUTO_RANGE_MARGIN: f64 = 0.05;

/// Visible data interval on one axis.
/// Contract: both ends and the span finite, `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::invalid(format!("axis bounds must be finite, got [{min}, {max}]")));
        }
        if max <= min {
            return Err(ChartError::invalid(format!("axis max must exceed min, got [{min}, {max}]")));
        }
        if !(max - min).is_finite() {
            return Err(ChartError::invalid(format!("axis span overflows, got [{min}, {max}]")));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 { self.min }
    pub fn max(&self) -> f64 { self.max }
    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn with_min(&self, min: f64) -> Result<Self> {
        Self::new(min, self.max)
    }

    pub fn with_max(&self, max: f64) -> Result<Self> {
        Self::new(self.min, max)
    }

    /// Widen the range so that `v` is visible, leaving a 5% margin rounded
    /// outward to whole units. Returns `true` when a bound moved.
    /// Values below `min` lower `min`; values above `max` raise `max`.
    /// Growth that would overflow the range is refused and the range kept.
    pub fn extend_to(&mut self, v: f64) -> bool {
        if !v.is_finite() {
            return false;
        }
        let grown = if v < self.min {
            Self::new((v - (v * AUTO_RANGE_MARGIN).abs()).floor(), self.max)
        } else if v > self.max {
            Self::new(self.min, (v + (v * AUTO_RANGE_MARGIN).abs()).ceil())
        } else {
            return false;
        };
        match grown {
            Ok(range) => {
                *self = range;
                true
            }
            Err(e) => {
                warn!("auto-range ignored {v}: {e}");
                false
            }
        }
    }

    /// Clamp `v` into the range.
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

/// Visible data rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl Bounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self> {
        Ok(Self { x: AxisRange::new(min_x, max_x)?, y: AxisRange::new(min_y, max_y)? })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x: AxisRange { min: 0.0, max: 100.0 },
            y: AxisRange { min: 0.0, max: 100.0 },
        }
    }
}

/// Per-axis auto-ranging switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoRange {
    pub x: bool,
    pub y: bool,
}

impl Default for AutoRange {
    fn default() -> Self {
        Self { x: true, y: true }
    }
}
