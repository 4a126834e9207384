// File: crates/livechart-core/src/grid.rs
// Summary: Tick/gridline layout helpers: how many labels fit, step size, tick values, label text.

use crate::axis::AxisRange;

/// Fraction of an axis' pixel length that labels may occupy.
const LABEL_FILL: f64 = 0.25;
/// Never place fewer labels than this.
pub const MIN_LABELS: f64 = 2.0;
/// Upper bound on generated ticks, whatever the step.
const MAX_TICKS: usize = 512;

/// Step selection policy for axis labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickMode {
    /// Whole-number steps, labels without decimals.
    #[default]
    Integer,
    /// Whole-number steps for spans above 10, otherwise fractional steps
    /// labelled with two decimals.
    Decimal,
}

/// Chosen spacing between ticks and the label precision that goes with it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStep {
    pub step: f64,
    pub precision: usize,
}

impl TickStep {
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

/// How many labels of `label_extent` pixels fit along `axis_pixels`.
pub fn label_count(axis_pixels: f64, label_extent: f64) -> f64 {
    if !(label_extent > 0.0) || !axis_pixels.is_finite() {
        return MIN_LABELS;
    }
    let count = axis_pixels * LABEL_FILL / label_extent;
    if count < MIN_LABELS { MIN_LABELS } else { count }
}

pub fn tick_step(range: &AxisRange, count: f64, mode: TickMode) -> TickStep {
    let span = range.span();
    match mode {
        TickMode::Integer => TickStep { step: (span / count).ceil(), precision: 0 },
        TickMode::Decimal if span > 10.0 => TickStep { step: (span / count).ceil(), precision: 0 },
        TickMode::Decimal => TickStep { step: span / count, precision: 2 },
    }
}

/// Tick positions `min + i * step` for `i >= 1`, stopping past `max`.
pub fn tick_values(range: &AxisRange, step: f64) -> Vec<f64> {
    if !(step > 0.0) {
        return Vec::new();
    }
    let limit = range.max() + step * 1e-9;
    (1..=MAX_TICKS)
        .map(|i| range.min() + i as f64 * step)
        .take_while(|v| *v <= limit)
        .collect()
}
