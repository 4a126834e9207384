// File: crates/livechart-core/src/types.rs
// Summary: Shared layout types and constants (paddings, plot rectangle).

/// Gap between the surface edge (or a label) and the plot, in pixels.
pub const EDGE_GAP: f64 = 20.0;
/// Fixed right padding in pixels.
pub const RIGHT_PADDING: f64 = 20.0;
/// Top padding when no title is set.
pub const MIN_TOP_PADDING: f64 = 20.0;
/// Half length of a tick mark in pixels.
pub const TICK_HALF: f64 = 5.0;
/// Narrowest plot extent kept on either axis when paddings outgrow the surface.
pub const MIN_PLOT_EXTENT: f64 = 1.0;

/// Pixel rectangle the data bounds are mapped onto.
/// `bottom` is the pixel row of `min_y`, `top` the row of `max_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Placeholder used before the first frame measures any text.
    pub fn initial(width: i32, height: i32) -> Self {
        Self::from_paddings(
            EDGE_GAP,
            width as f64 - RIGHT_PADDING,
            MIN_TOP_PADDING,
            height as f64 - EDGE_GAP,
        )
    }

    /// Plot rectangle from measured edges. On surfaces too small for the
    /// paddings, `right` and `bottom` are pushed out so that the rectangle keeps
    /// `left < right` and `top < bottom`.
    pub fn from_paddings(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right: right.max(left + MIN_PLOT_EXTENT),
            top,
            bottom: bottom.max(top + MIN_PLOT_EXTENT),
        }
    }

    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}
