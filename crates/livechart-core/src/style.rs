// File: crates/livechart-core/src/style.rs
// Summary: Chart styling configuration with defaults and validation.

use crate::error::{ChartError, Result};
use crate::grid::TickMode;
use crate::theme::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    pub title: Option<String>,
    pub show_legend: bool,
    pub draw_markers: bool,
    /// Marker radius in pixels.
    pub marker_size: f64,
    /// Series stroke width in pixels.
    pub line_width: f64,
    pub tick_mode: TickMode,
    pub theme: Theme,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: None,
            show_legend: false,
            draw_markers: false,
            marker_size: 3.0,
            line_width: 2.0,
            tick_mode: TickMode::Integer,
            theme: Theme::default(),
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> Result<()> {
        check_size("marker size", self.marker_size)?;
        check_size("line width", self.line_width)?;
        if self.theme.palette.is_empty() {
            return Err(ChartError::invalid("color palette must not be empty"));
        }
        Ok(())
    }
}

pub(crate) fn check_size(what: &str, v: f64) -> Result<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(ChartError::invalid(format!("{what} must be finite and non-negative, got {v}")));
    }
    Ok(())
}
