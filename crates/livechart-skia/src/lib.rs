// File: crates/livechart-skia/src/lib.rs
// Summary: Skia CPU-raster backend for livechart-core: canvas, offscreen images, frame
// compositing, plus a headless host surface and PNG/RGBA readback.
// Notes:
// - Path calls accumulate into a `skia::Path`; `stroke`/`fill` draw and reset it, matching
//   the cairo-style contract of `livechart_core::Canvas`.
// - `show_text` draws at the last `move_to` and drops the pending path.

use std::cell::Cell;

use livechart_core::{BackendError, Canvas, FrameCanvas, HostSurface, ImageSurface, Rgba, TextExtents};
use log::debug;
use skia_safe as skia;

/// Resolution reported by [`HeadlessSurface`] unless overridden.
pub const DEFAULT_DPI: f64 = 96.0;

fn to_color(c: Rgba) -> skia::Color {
    let u = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(u(c.a), u(c.r), u(c.g), u(c.b))
}

/// A raster surface plus the drawing state the core's canvas contract needs.
/// Serves both as the per-frame target and as the chart's offscreen cache.
pub struct SkiaCanvas {
    surface: skia::Surface,
    path: skia::Path,
    paint: skia::Paint,
    font: skia::Font,
    current: Option<skia::Point>,
}

impl SkiaCanvas {
    pub fn new(width: i32, height: i32) -> Result<Self, BackendError> {
        if width <= 0 || height <= 0 {
            return Err(BackendError::Surface(format!("cannot create a {width}x{height} raster surface")));
        }
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| BackendError::Surface(format!("failed to create {width}x{height} raster surface")))?;

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(skia::Color::BLACK);

        let mut font = skia::Font::default();
        if let Some(tf) = skia::FontMgr::default().legacy_make_typeface(None, skia::FontStyle::default()) {
            font.set_typeface(tf);
        }

        Ok(Self { surface, path: skia::Path::new(), paint, font, current: None })
    }

    /// Fill the whole surface with `color`, ignoring the pending path.
    pub fn clear(&mut self, color: Rgba) {
        self.surface.canvas().clear(to_color(color));
    }

    /// Read back pixels as tightly packed, unpremultiplied RGBA8.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>, BackendError> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(BackendError::Surface("pixel readback failed".into()));
        }
        Ok(pixels)
    }

    /// Encode the current contents as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>, BackendError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| BackendError::Surface("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    fn draw_pending(&mut self, style: skia::paint::Style) {
        let mut paint = self.paint.clone();
        paint.set_style(style);
        if matches!(style, skia::paint::Style::Fill) {
            paint.set_path_effect(None);
        }
        self.surface.canvas().draw_path(&self.path, &paint);
        self.path.reset();
        self.current = None;
    }
}

impl Canvas for SkiaCanvas {
    fn set_source_rgba(&mut self, color: Rgba) {
        self.paint.set_color(to_color(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.paint.set_stroke_width(width as f32);
    }

    fn set_dash(&mut self, dashes: &[f64], offset: f64) {
        if dashes.is_empty() {
            self.paint.set_path_effect(None);
            return;
        }
        let mut intervals: Vec<f32> = dashes.iter().map(|d| *d as f32).collect();
        // Skia wants an even count; an odd pattern repeats with on/off swapped.
        if intervals.len() % 2 == 1 {
            intervals.extend_from_within(..);
        }
        self.paint.set_path_effect(skia::PathEffect::dash(&intervals, offset as f32));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = skia::Point::new(x as f32, y as f32);
        self.path.move_to(p);
        self.current = Some(p);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = skia::Point::new(x as f32, y as f32);
        if self.current.is_none() {
            self.path.move_to(p);
        } else {
            self.path.line_to(p);
        }
        self.current = Some(p);
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        let sweep = (angle2 - angle1).to_degrees();
        let center = skia::Point::new(xc as f32, yc as f32);
        if sweep.abs() >= 360.0 {
            self.path.add_circle(center, radius as f32, None);
        } else {
            let r = radius as f32;
            let oval = skia::Rect::from_xywh(center.x - r, center.y - r, 2.0 * r, 2.0 * r);
            self.path.arc_to(oval, angle1.to_degrees() as f32, sweep as f32, self.current.is_none());
        }
        let end = (xc + radius * angle2.cos(), yc + radius * angle2.sin());
        self.current = Some(skia::Point::new(end.0 as f32, end.1 as f32));
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let rect = skia::Rect::from_xywh(x as f32, y as f32, width as f32, height as f32);
        self.path.add_rect(rect, None);
        self.current = Some(skia::Point::new(x as f32, y as f32));
    }

    fn stroke(&mut self) -> Result<(), BackendError> {
        self.draw_pending(skia::paint::Style::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> Result<(), BackendError> {
        self.draw_pending(skia::paint::Style::Fill);
        Ok(())
    }

    fn set_font_size(&mut self, size: f64) {
        self.font.set_size(size as f32);
    }

    fn text_extents(&mut self, text: &str) -> TextExtents {
        let (_, bounds) = self.font.measure_str(text, Some(&self.paint));
        TextExtents { width: bounds.width() as f64, height: bounds.height() as f64 }
    }

    fn show_text(&mut self, text: &str) -> Result<(), BackendError> {
        let origin = self.current.ok_or_else(|| BackendError::Draw("show_text without a current point".into()))?;
        let mut paint = self.paint.clone();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_path_effect(None);
        self.surface.canvas().draw_str(text, origin, &self.font, &paint);
        self.path.reset();
        self.current = None;
        Ok(())
    }
}

impl ImageSurface for SkiaCanvas {
    fn width(&self) -> i32 {
        self.surface.width()
    }

    fn height(&self) -> i32 {
        self.surface.height()
    }
}

impl FrameCanvas for SkiaCanvas {
    type Image = SkiaCanvas;

    fn create_image(&mut self, width: i32, height: i32) -> Result<SkiaCanvas, BackendError> {
        debug!("allocating {width}x{height} cache image");
        SkiaCanvas::new(width, height)
    }

    fn composite(&mut self, image: &mut SkiaCanvas, x: f64, y: f64) -> Result<(), BackendError> {
        let snapshot = image.surface.image_snapshot();
        self.surface.canvas().draw_image(&snapshot, (x as f32, y as f32), None);
        Ok(())
    }
}

/// Host surface without a window: fixed size and DPI, and a flag recording
/// whether a repaint was requested since it was last taken.
#[derive(Debug)]
pub struct HeadlessSurface {
    width: i32,
    height: i32,
    dpi: f64,
    repaint_requested: Cell<bool>,
}

impl HeadlessSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, dpi: DEFAULT_DPI, repaint_requested: Cell::new(false) }
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.repaint_requested.set(true);
    }

    /// Whether a repaint was requested since the last call.
    pub fn take_repaint_request(&self) -> bool {
        self.repaint_requested.replace(false)
    }

    /// A frame canvas matching the current size.
    pub fn frame(&self) -> Result<SkiaCanvas, BackendError> {
        SkiaCanvas::new(self.width, self.height)
    }
}

impl HostSurface for HeadlessSurface {
    type Image = SkiaCanvas;

    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn dpi(&self) -> Result<f64, BackendError> {
        if self.dpi.is_finite() && self.dpi > 0.0 {
            Ok(self.dpi)
        } else {
            Err(BackendError::Metrics(format!("invalid resolution {}", self.dpi)))
        }
    }

    fn request_repaint(&self) {
        self.repaint_requested.set(true);
    }
}
