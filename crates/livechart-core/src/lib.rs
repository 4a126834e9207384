// File: crates/livechart-core/src/lib.rs
// Summary: Core library entry point; exports the incremental line-chart API.

pub mod axis;
pub mod backend;
pub mod chart;
pub mod error;
pub mod grid;
pub mod point;
mod render;
pub mod scale;
pub mod series;
pub mod style;
pub mod theme;
pub mod types;

pub use axis::{AutoRange, AxisRange, Bounds};
pub use backend::{BackendError, Canvas, FrameCanvas, HostSurface, ImageSurface, Rgba, TextExtents};
pub use chart::{Chart, FrameStats};
pub use error::{ChartError, Result};
pub use grid::TickMode;
pub use point::{Coordinate, FloatPoint, IntPoint, EPSILON};
pub use scale::{Mapping, ScaleTransform};
pub use series::{PointSeries, Series, SeriesId, SeriesMut};
pub use style::ChartStyle;
pub use theme::Theme;
pub use types::PlotArea;
