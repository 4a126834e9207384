// File: crates/livechart-core/src/backend.rs
// Summary: Contracts for the host widget and the imperative 2D drawing backend.
// Notes:
// - The chart never talks to a concrete toolkit; everything goes through these traits.
// - Path construction follows cairo semantics: `stroke`/`fill` consume the current path.

use thiserror::Error;

/// Straight (non-premultiplied) color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )
    }

    /// Same color with alpha scaled by `factor`.
    pub fn fade(self, factor: f64) -> Self {
        Self { a: (self.a * factor).clamp(0.0, 1.0), ..self }
    }
}

/// Ink extents of a string at the current font size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("surface error: {0}")]
    Surface(String),
    #[error("cannot query screen metrics: {0}")]
    Metrics(String),
    #[error("drawing failed: {0}")]
    Draw(String),
}

/// Imperative 2D drawing context.
pub trait Canvas {
    fn set_source_rgba(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
    /// Empty `dashes` restores solid strokes.
    fn set_dash(&mut self, dashes: &[f64], offset: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Angles in radians, clockwise in pixel space.
    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64);
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke(&mut self) -> Result<(), BackendError>;
    fn fill(&mut self) -> Result<(), BackendError>;
    fn set_font_size(&mut self, size: f64);
    fn text_extents(&mut self, text: &str) -> TextExtents;
    /// Draws `text` with its baseline origin at the current point.
    fn show_text(&mut self, text: &str) -> Result<(), BackendError>;
}

/// Offscreen pixel buffer that can be drawn into.
pub trait ImageSurface: Canvas {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
}

/// The visible surface handed to the paint callback for one frame.
pub trait FrameCanvas: Canvas {
    type Image: ImageSurface;

    fn create_image(&mut self, width: i32, height: i32) -> Result<Self::Image, BackendError>;
    fn composite(&mut self, image: &mut Self::Image, x: f64, y: f64) -> Result<(), BackendError>;
}

/// The host widget the chart is bound to.
pub trait HostSurface {
    type Image: ImageSurface;

    /// Allocated size in device pixels.
    fn size(&self) -> (i32, i32);
    fn dpi(&self) -> Result<f64, BackendError>;
    /// Fire-and-forget; the host coalesces requests into the next frame.
    fn request_repaint(&self);
}
