// File: crates/livechart-core/src/chart.rs
// Summary: Chart struct: series ownership, bounds and styling, and the per-frame
// full-vs-incremental redraw pipeline over a cached offscreen image.
// Notes:
// - All mutation and painting happen on the host's UI thread; nothing here locks.
// - The cache holds axes, title, legend and every already-drawn series segment.
//   Incremental frames only add new segments on top of it.

use log::{debug, warn};

use crate::axis::{AutoRange, Bounds};
use crate::backend::{FrameCanvas, HostSurface, ImageSurface, Rgba};
use crate::error::{ChartError, Result};
use crate::grid::TickMode;
use crate::point::{Coordinate, FloatPoint};
use crate::render;
use crate::scale::{Mapping, ScaleTransform};
use crate::series::{PointSeries, Series, SeriesId, SeriesMut};
use crate::style::{check_size, ChartStyle};
use crate::theme::Theme;
use crate::types::PlotArea;

/// What a call to [`Chart::paint`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Axes and every series were regenerated into a fresh cache.
    pub full_redraw: bool,
    /// Series that had a path stroked this frame.
    pub series_drawn: usize,
    /// Points projected to pixel space this frame, over all series.
    pub points_projected: usize,
}

pub struct Chart<H: HostSurface> {
    surface: H,
    series: Vec<Series>,
    bounds: Bounds,
    auto_range: AutoRange,
    style: ChartStyle,
    dpi: f64,
    plot: PlotArea,
    mapping: Mapping,
    cache: Option<H::Image>,
    full_redraw_pending: bool,
}

impl<H: HostSurface> Chart<H> {
    /// Bind a chart to `surface`. Fails when the surface cannot report its metrics.
    pub fn new(surface: H) -> Result<Self> {
        Self::with_style(surface, ChartStyle::default())
    }

    pub fn with_style(surface: H, style: ChartStyle) -> Result<Self> {
        style.validate()?;
        let dpi = surface.dpi()?;
        let (width, height) = surface.size();
        let bounds = Bounds::default();
        let plot = PlotArea::initial(width, height);
        Ok(Self {
            surface,
            series: Vec::new(),
            bounds,
            auto_range: AutoRange::default(),
            style,
            dpi,
            plot,
            mapping: Mapping::new(&plot, &bounds),
            cache: None,
            full_redraw_pending: true,
        })
    }

    pub fn surface(&self) -> &H { &self.surface }
    pub fn surface_mut(&mut self) -> &mut H { &mut self.surface }

    // ---- series -------------------------------------------------------------

    /// Take ownership of `series`. Attach order fixes z-order and palette color.
    pub fn attach_series(&mut self, mut series: Series) -> SeriesId {
        let id = SeriesId(self.series.len());
        let non_empty = !series.is_empty();
        if non_empty {
            series.invalidate();
        }
        let labelled = series.label().is_some();
        series.reset_last_drawn();
        self.series.push(series);

        if self.style.show_legend && labelled {
            self.schedule_full_redraw();
        } else if non_empty {
            self.request_repaint();
        }
        id
    }

    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.series.get(id.0)
    }

    pub fn series_mut(&mut self, id: SeriesId) -> Option<SeriesMut<'_, H>> {
        if id.0 < self.series.len() {
            Some(SeriesMut::new(self, id))
        } else {
            None
        }
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub(crate) fn series_table(&self) -> &[Series] { &self.series }
    pub(crate) fn series_table_mut(&mut self) -> &mut [Series] { &mut self.series }

    // ---- bounds -------------------------------------------------------------

    pub fn bounds(&self) -> Bounds { self.bounds }
    pub fn min_x(&self) -> f64 { self.bounds.x.min() }
    pub fn max_x(&self) -> f64 { self.bounds.x.max() }
    pub fn min_y(&self) -> f64 { self.bounds.y.min() }
    pub fn max_y(&self) -> f64 { self.bounds.y.max() }

    pub fn set_min_x(&mut self, v: f64) -> Result<()> {
        let x = self.bounds.x.with_min(v)?;
        self.set_bounds(Bounds { x, ..self.bounds });
        Ok(())
    }

    pub fn set_max_x(&mut self, v: f64) -> Result<()> {
        let x = self.bounds.x.with_max(v)?;
        self.set_bounds(Bounds { x, ..self.bounds });
        Ok(())
    }

    pub fn set_min_y(&mut self, v: f64) -> Result<()> {
        let y = self.bounds.y.with_min(v)?;
        self.set_bounds(Bounds { y, ..self.bounds });
        Ok(())
    }

    pub fn set_max_y(&mut self, v: f64) -> Result<()> {
        let y = self.bounds.y.with_max(v)?;
        self.set_bounds(Bounds { y, ..self.bounds });
        Ok(())
    }

    /// Set both X bounds at once, so the range can move past its old extent.
    pub fn set_x_range(&mut self, min: f64, max: f64) -> Result<()> {
        let b = Bounds::new(min, max, self.min_y(), self.max_y())?;
        self.set_bounds(b);
        Ok(())
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) -> Result<()> {
        let b = Bounds::new(self.min_x(), self.max_x(), min, max)?;
        self.set_bounds(b);
        Ok(())
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.remap();
        self.schedule_full_redraw();
    }

    pub fn auto_ranging_x(&self) -> bool { self.auto_range.x }
    pub fn auto_ranging_y(&self) -> bool { self.auto_range.y }
    pub fn set_auto_ranging_x(&mut self, on: bool) { self.auto_range.x = on; }
    pub fn set_auto_ranging_y(&mut self, on: bool) { self.auto_range.y = on; }

    /// Grow auto-ranged bounds so `p` is visible. Any growth invalidates the cache.
    pub(crate) fn auto_extend(&mut self, p: &FloatPoint) {
        let mut grown = false;
        if self.auto_range.y {
            grown |= self.bounds.y.extend_to(p.y);
        }
        if self.auto_range.x {
            grown |= self.bounds.x.extend_to(p.x);
        }
        if grown {
            debug!(
                "auto-range grew bounds to x:[{}, {}] y:[{}, {}]",
                self.min_x(), self.max_x(), self.min_y(), self.max_y()
            );
            self.remap();
            self.full_redraw_pending = true;
        }
    }

    // ---- style --------------------------------------------------------------

    pub fn style(&self) -> &ChartStyle { &self.style }

    pub fn title(&self) -> Option<&str> { self.style.title.as_deref() }

    /// An empty string removes the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.style.title = if title.is_empty() { None } else { Some(title) };
        self.schedule_full_redraw();
    }

    pub fn legend_visible(&self) -> bool { self.style.show_legend }

    pub fn show_legend(&mut self, show: bool) {
        if self.style.show_legend != show {
            self.style.show_legend = show;
            self.schedule_full_redraw();
        }
    }

    pub fn draws_markers(&self) -> bool { self.style.draw_markers }
    pub fn set_draw_markers(&mut self, on: bool) { self.style.draw_markers = on; }

    pub fn marker_size(&self) -> f64 { self.style.marker_size }

    pub fn set_marker_size(&mut self, radius: f64) -> Result<()> {
        check_size("marker size", radius)?;
        self.style.marker_size = radius;
        Ok(())
    }

    pub fn line_width(&self) -> f64 { self.style.line_width }

    pub fn set_line_width(&mut self, width: f64) -> Result<()> {
        check_size("line width", width)?;
        self.style.line_width = width;
        Ok(())
    }

    pub fn palette(&self) -> &[Rgba] { &self.style.theme.palette }

    pub fn set_palette(&mut self, palette: Vec<Rgba>) -> Result<()> {
        if palette.is_empty() {
            return Err(ChartError::invalid("color palette must not be empty"));
        }
        self.style.theme.palette = palette;
        self.schedule_full_redraw();
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        if theme.palette.is_empty() {
            return Err(ChartError::invalid("color palette must not be empty"));
        }
        self.style.theme = theme;
        self.schedule_full_redraw();
        Ok(())
    }

    pub fn set_tick_mode(&mut self, mode: TickMode) {
        if self.style.tick_mode != mode {
            self.style.tick_mode = mode;
            self.schedule_full_redraw();
        }
    }

    // ---- geometry -----------------------------------------------------------

    /// Pixel rectangle the bounds map onto, as of the last full redraw.
    pub fn plot_area(&self) -> PlotArea { self.plot }

    pub fn mapping(&self) -> &Mapping { &self.mapping }

    pub fn full_redraw_pending(&self) -> bool { self.full_redraw_pending }

    fn remap(&mut self) {
        self.mapping = Mapping::new(&self.plot, &self.bounds);
    }

    pub(crate) fn schedule_full_redraw(&mut self) {
        self.full_redraw_pending = true;
        self.request_repaint();
    }

    pub(crate) fn request_repaint(&self) {
        self.surface.request_repaint();
    }

    // ---- painting -----------------------------------------------------------

    /// Paint callback. Brings the cache up to date and composites it onto `frame`.
    ///
    /// A backend failure skips the frame: it is logged, returned, and the next
    /// frame is forced to be a full redraw.
    pub fn paint<F>(&mut self, frame: &mut F) -> Result<FrameStats>
    where
        F: FrameCanvas<Image = H::Image>,
    {
        match self.paint_frame(frame) {
            Ok(stats) => Ok(stats),
            Err(e) => {
                warn!("skipping frame: {e}");
                self.full_redraw_pending = true;
                Err(e)
            }
        }
    }

    fn paint_frame<F>(&mut self, frame: &mut F) -> Result<FrameStats>
    where
        F: FrameCanvas<Image = H::Image>,
    {
        let (width, height) = self.surface.size();
        if width <= 0 || height <= 0 {
            debug!("nothing to paint on a {width}x{height} surface");
            return Ok(FrameStats::default());
        }
        self.dpi = self.surface.dpi()?;

        let resized = match &self.cache {
            Some(img) => img.width() != width || img.height() != height,
            None => true,
        };
        let full = self.full_redraw_pending || resized;
        let mut stats = FrameStats { full_redraw: full, ..FrameStats::default() };

        if full {
            debug!(
                "full redraw: pending={} resized={} size={width}x{height}",
                self.full_redraw_pending, resized
            );
            let mut image = frame.create_image(width, height)?;
            self.rebuild(&mut image, width, height, &mut stats)?;
            self.cache = Some(image);
        } else if let Some(cache) = self.cache.as_mut() {
            draw_dirty(cache, &mut self.series, &self.mapping, &self.style, false, &mut stats)?;
        }

        if let Some(cache) = self.cache.as_mut() {
            frame.composite(cache, 0.0, 0.0)?;
        }
        self.full_redraw_pending = false;
        Ok(stats)
    }

    /// Regenerate layout, mapping and every pixel into `image`.
    fn rebuild(&mut self, image: &mut H::Image, width: i32, height: i32, stats: &mut FrameStats) -> Result<()> {
        let layout = render::measure_layout(image, &self.bounds, self.style.title.as_deref(), self.dpi, width, height);
        self.plot = layout.plot;
        self.remap();
        debug!("layout {:?}", self.plot);

        render::draw_background(image, self.style.theme.background, width, height)?;
        render::draw_axes(image, &layout, &self.mapping, &self.bounds, &self.style, self.dpi)?;
        draw_dirty(image, &mut self.series, &self.mapping, &self.style, true, stats)?;
        if let Some(title) = self.style.title.as_deref() {
            render::draw_title(image, title, &self.style, width, self.dpi)?;
        }
        if self.style.show_legend {
            render::draw_legend(image, &self.series, &self.plot, &self.style, self.dpi)?;
        }
        Ok(())
    }
}

/// Draw each series that needs it: all of them from scratch when `full`,
/// otherwise only dirty ones from their last drawn index.
fn draw_dirty<I: ImageSurface>(
    canvas: &mut I,
    series: &mut [Series],
    mapping: &Mapping,
    style: &ChartStyle,
    full: bool,
    stats: &mut FrameStats,
) -> Result<()> {
    for (i, s) in series.iter_mut().enumerate() {
        if full {
            s.reset_last_drawn();
        } else if !s.is_invalidated() {
            continue;
        }
        let from = s.last_drawn_index();
        let color = style.theme.series_color(i);
        let projected = render::draw_series_from(canvas, mapping, &*s, from, color, style)?;
        if projected > 0 {
            stats.series_drawn += 1;
            stats.points_projected += projected;
        }
        s.mark_validated();
        s.mark_drawn_through_end();
    }
    Ok(())
}

impl<H: HostSurface> ScaleTransform for Chart<H> {
    fn to_local_coordinates<C: Coordinate>(&self, p: &C) -> FloatPoint {
        self.mapping.to_local_coordinates(p)
    }

    fn to_real_coordinates<C: Coordinate>(&self, p: &C) -> FloatPoint {
        self.mapping.to_real_coordinates(p)
    }
}
