// File: crates/livechart-core/src/series.rs
// Summary: Append-only point series with dirty tracking, and the handle used to mutate one
// while it is attached to a chart.
// Notes:
// - A `Series` is built detached, then moved into a chart by `Chart::attach_series`.
//   From then on the chart owns it and callers address it through a `SeriesId`.
// - `SeriesMut` borrows the chart mutably, so auto-ranging and repaint requests reach the
//   owner without a back-reference cycle.

use crate::backend::HostSurface;
use crate::chart::Chart;
use crate::error::{ChartError, Result};
use crate::point::{Coordinate, FloatPoint};

/// Handle to a series inside its owning chart. Index into the chart's series table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeriesId(pub(crate) usize);

impl SeriesId {
    /// Position in attach order, which is also z-order and palette order.
    pub fn index(&self) -> usize { self.0 }
}

/// Read access to a point collection with dirty tracking, as consumed by the renderer.
pub trait PointSeries {
    fn points(&self) -> &[FloatPoint];
    /// Points were appended (or the series was cleared) since it was last drawn.
    fn is_invalidated(&self) -> bool;
    /// Index up to which this series' pixels are already present in the chart cache.
    fn last_drawn_index(&self) -> usize;
    fn label(&self) -> Option<&str>;

    fn len(&self) -> usize {
        self.points().len()
    }

    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Point at `index`; valid indices are `0..len`.
    fn get(&self, index: isize) -> Result<FloatPoint> {
        let len = self.len();
        if index < 0 || index as usize >= len {
            return Err(ChartError::OutOfRange { index, len });
        }
        Ok(self.points()[index as usize])
    }
}

#[derive(Clone, Debug, Default)]
pub struct Series {
    points: Vec<FloatPoint>,
    invalidated: bool,
    last_drawn_index: usize,
    label: Option<String>,
}

impl Series {
    /// `capacity` is the initial size of the backing storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity), ..Self::default() }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Prefill a detached series. No auto-ranging happens for these points.
    pub fn with_points<I, C>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Coordinate,
    {
        self.points.extend(points.into_iter().map(|p| FloatPoint::from_coordinate(&p)));
        self
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    pub(crate) fn push(&mut self, p: FloatPoint) {
        self.points.push(p);
        self.invalidated = true;
    }

    /// Logical truncation; storage is kept.
    pub(crate) fn truncate(&mut self) {
        self.points.clear();
        self.invalidated = true;
        self.last_drawn_index = 0;
    }

    /// Truncation with fresh storage of `capacity`.
    pub(crate) fn reset_storage(&mut self, capacity: usize) {
        self.points = Vec::with_capacity(capacity);
        self.invalidated = true;
        self.last_drawn_index = 0;
    }

    pub(crate) fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub(crate) fn invalidate(&mut self) {
        self.invalidated = true;
    }

    pub(crate) fn mark_validated(&mut self) {
        self.invalidated = false;
    }

    pub(crate) fn reset_last_drawn(&mut self) {
        self.last_drawn_index = 0;
    }

    /// Record that every current point is present in the cache.
    pub(crate) fn mark_drawn_through_end(&mut self) {
        self.last_drawn_index = self.points.len().saturating_sub(1);
    }
}

impl PointSeries for Series {
    fn points(&self) -> &[FloatPoint] { &self.points }
    fn is_invalidated(&self) -> bool { self.invalidated }
    fn last_drawn_index(&self) -> usize { self.last_drawn_index }
    fn label(&self) -> Option<&str> { self.label.as_deref() }
}

/// Mutable access to an attached series. Obtained from [`Chart::series_mut`].
pub struct SeriesMut<'a, H: HostSurface> {
    chart: &'a mut Chart<H>,
    id: SeriesId,
}

impl<'a, H: HostSurface> SeriesMut<'a, H> {
    pub(crate) fn new(chart: &'a mut Chart<H>, id: SeriesId) -> Self {
        Self { chart, id }
    }

    fn series(&self) -> &Series {
        &self.chart.series_table()[self.id.0]
    }

    pub fn id(&self) -> SeriesId { self.id }

    /// Append a point. Widens auto-ranged bounds if needed (forcing a full redraw),
    /// flags the series dirty and asks the host for a repaint.
    pub fn add<C: Coordinate>(&mut self, p: C) {
        let p = FloatPoint::from_coordinate(&p);
        self.chart.auto_extend(&p);
        self.chart.series_table_mut()[self.id.0].push(p);
        self.chart.request_repaint();
    }

    pub fn get(&self, index: isize) -> Result<FloatPoint> {
        self.series().get(index)
    }

    pub fn size(&self) -> usize {
        self.series().len()
    }

    pub fn points(&self) -> &[FloatPoint] {
        self.series().points()
    }

    /// Empty the series, keeping its storage. The next frame is a full redraw.
    pub fn clear(&mut self) {
        self.chart.series_table_mut()[self.id.0].truncate();
        self.chart.schedule_full_redraw();
    }

    /// Empty the series and replace its storage with one of `capacity`.
    /// The next frame is a full redraw.
    pub fn clear_and_shrink(&mut self, capacity: usize) {
        self.chart.series_table_mut()[self.id.0].reset_storage(capacity);
        self.chart.schedule_full_redraw();
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.chart.series_table_mut()[self.id.0].set_label(label);
        if self.chart.style().show_legend {
            self.chart.schedule_full_redraw();
        }
    }
}
