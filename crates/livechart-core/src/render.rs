// File: crates/livechart-core/src/render.rs
// Summary: Drawing routines that write axes, title, legend and series paths into a canvas.
// Notes:
// - These functions only issue canvas calls; deciding what to redraw lives in `chart.rs`.
// - Font sizes scale with screen DPI: labels at dpi/6, the title at dpi/4.

use std::f64::consts::TAU;

use log::trace;

use crate::axis::Bounds;
use crate::backend::{BackendError, Canvas, Rgba, TextExtents};
use crate::grid::{label_count, tick_step, tick_values};
use crate::point::FloatPoint;
use crate::scale::{Mapping, ScaleTransform};
use crate::series::PointSeries;
use crate::style::ChartStyle;
use crate::types::{PlotArea, EDGE_GAP, MIN_TOP_PADDING, RIGHT_PADDING, TICK_HALF};

const GRID_DASH: [f64; 2] = [2.0, 2.0];
const LEGEND_SWATCH: f64 = 10.0;
const LEGEND_GAP: f64 = 6.0;

pub(crate) fn label_font_size(dpi: f64) -> f64 {
    (dpi / 6.0).floor().max(1.0)
}

pub(crate) fn title_font_size(dpi: f64) -> f64 {
    (dpi / 4.0).max(1.0)
}

/// Paddings and the label metrics they were derived from.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Layout {
    pub plot: PlotArea,
    pub x_label: TextExtents,
    pub y_label: TextExtents,
}

/// Measure labels and title to size the paddings around the plot area.
pub(crate) fn measure_layout(
    canvas: &mut impl Canvas,
    bounds: &Bounds,
    title: Option<&str>,
    dpi: f64,
    width: i32,
    height: i32,
) -> Layout {
    let top = match title {
        Some(t) => {
            canvas.set_font_size(title_font_size(dpi));
            canvas.text_extents(t).height + EDGE_GAP
        }
        None => MIN_TOP_PADDING,
    };

    canvas.set_font_size(label_font_size(dpi));
    let x_label = canvas.text_extents(&bounds.x.max().to_string());
    // Negative minimums carry a sign, so the widest Y label is either end.
    let y_max = canvas.text_extents(&bounds.y.max().to_string());
    let y_min = canvas.text_extents(&bounds.y.min().to_string());
    let y_label = if y_min.width > y_max.width { y_min } else { y_max };

    let plot = PlotArea::from_paddings(
        y_label.width + EDGE_GAP,
        width as f64 - RIGHT_PADDING,
        top,
        height as f64 - (x_label.height + EDGE_GAP),
    );
    Layout { plot, x_label, y_label }
}

pub(crate) fn draw_background(canvas: &mut impl Canvas, color: Rgba, width: i32, height: i32) -> Result<(), BackendError> {
    if color.a <= 0.0 {
        return Ok(());
    }
    canvas.set_source_rgba(color);
    canvas.rectangle(0.0, 0.0, width as f64, height as f64);
    canvas.fill()
}

/// Axis lines through the (clamped) data origin, ticks, dashed gridlines and labels.
pub(crate) fn draw_axes(
    canvas: &mut impl Canvas,
    layout: &Layout,
    mapping: &Mapping,
    bounds: &Bounds,
    style: &ChartStyle,
    dpi: f64,
) -> Result<(), BackendError> {
    let plot = &layout.plot;
    let ink = style.theme.axis;
    let grid_ink = ink.fade(1.0 / 3.0);

    canvas.set_source_rgba(ink);
    canvas.set_line_width(1.0);
    canvas.set_dash(&[], 0.0);
    canvas.set_font_size(label_font_size(dpi));

    let origin = FloatPoint::new(bounds.x.clamp(0.0), bounds.y.clamp(0.0));
    let zero = mapping.to_local_coordinates(&origin);
    let lo = mapping.to_local_coordinates(&FloatPoint::new(bounds.x.min(), bounds.y.min()));
    let hi = mapping.to_local_coordinates(&FloatPoint::new(bounds.x.max(), bounds.y.max()));

    canvas.move_to(zero.x, hi.y);
    canvas.line_to(zero.x, lo.y + TICK_HALF);
    canvas.move_to(lo.x, zero.y);
    canvas.line_to(hi.x, zero.y);
    canvas.stroke()?;

    // X axis
    let count = label_count(plot.width(), layout.x_label.width);
    let step = tick_step(&bounds.x, count, style.tick_mode);
    let label_y = zero.y + layout.x_label.height + dpi / 12.0;

    let text = step.format(origin.x);
    let ext = canvas.text_extents(&text);
    canvas.move_to(zero.x - ext.width / 2.0, label_y);
    canvas.show_text(&text)?;

    for v in tick_values(&bounds.x, step.step) {
        if (v - origin.x).abs() < step.step * 1e-9 {
            continue;
        }
        let px = mapping.x.to_local(v);
        canvas.move_to(px, zero.y + TICK_HALF);
        canvas.line_to(px, zero.y - TICK_HALF);
        canvas.stroke()?;

        gridline(canvas, grid_ink, (px, plot.bottom), (px, plot.top))?;
        canvas.set_source_rgba(ink);

        let text = step.format(v);
        let ext = canvas.text_extents(&text);
        canvas.move_to(px - ext.width / 2.0, label_y);
        canvas.show_text(&text)?;
    }

    // Y axis
    let count = label_count(plot.height(), layout.y_label.height);
    let step = tick_step(&bounds.y, count, style.tick_mode);
    for v in tick_values(&bounds.y, step.step) {
        if (v - origin.y).abs() < step.step * 1e-9 {
            continue;
        }
        let py = mapping.y.to_local(v);
        if py < plot.top {
            break;
        }
        canvas.move_to(zero.x - TICK_HALF, py);
        canvas.line_to(zero.x + TICK_HALF, py);
        canvas.stroke()?;

        gridline(canvas, grid_ink, (plot.left, py), (plot.right, py))?;
        canvas.set_source_rgba(ink);

        // width varies per label, height doesn't
        let text = step.format(v);
        let ext = canvas.text_extents(&text);
        canvas.move_to(zero.x - ext.width - 2.0 * TICK_HALF, py + ext.height / 2.0);
        canvas.show_text(&text)?;
    }
    Ok(())
}

fn gridline(canvas: &mut impl Canvas, ink: Rgba, from: (f64, f64), to: (f64, f64)) -> Result<(), BackendError> {
    canvas.set_source_rgba(ink);
    canvas.set_dash(&GRID_DASH, 0.0);
    canvas.move_to(from.0, from.1);
    canvas.line_to(to.0, to.1);
    canvas.stroke()?;
    canvas.set_dash(&[], 0.0);
    Ok(())
}

/// Title centered horizontally over a translucent box.
pub(crate) fn draw_title(canvas: &mut impl Canvas, title: &str, style: &ChartStyle, width: i32, dpi: f64) -> Result<(), BackendError> {
    canvas.set_font_size(title_font_size(dpi));
    let ext = canvas.text_extents(title);
    let x = (width as f64 - ext.width) / 2.0;
    let y = ext.height + 5.0;

    canvas.set_source_rgba(style.theme.title_background);
    canvas.rectangle(x - 5.0, y - ext.height, ext.width + 15.0, ext.height + 10.0);
    canvas.fill()?;

    canvas.set_source_rgba(style.theme.title_text);
    canvas.move_to(x, y);
    canvas.show_text(title)
}

/// Swatch + label for every labelled series, boxed in the plot's top-right corner.
pub(crate) fn draw_legend<S: PointSeries>(
    canvas: &mut impl Canvas,
    series: &[S],
    plot: &PlotArea,
    style: &ChartStyle,
    dpi: f64,
) -> Result<(), BackendError> {
    canvas.set_font_size(label_font_size(dpi));
    let entries: Vec<(usize, &str, TextExtents)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.label().map(|l| (i, l)))
        .map(|(i, l)| (i, l, canvas.text_extents(l)))
        .collect();
    if entries.is_empty() {
        return Ok(());
    }

    let text_w = entries.iter().map(|e| e.2.width).fold(0.0, f64::max);
    let row_h = entries.iter().map(|e| e.2.height).fold(LEGEND_SWATCH, f64::max) + LEGEND_GAP;
    let box_w = LEGEND_SWATCH + text_w + 3.0 * LEGEND_GAP;
    let box_h = row_h * entries.len() as f64 + LEGEND_GAP;
    let left = plot.right - box_w - LEGEND_GAP;
    let top = plot.top + LEGEND_GAP;

    canvas.set_source_rgba(style.theme.title_background);
    canvas.rectangle(left, top, box_w, box_h);
    canvas.fill()?;

    for (row, (index, label, ext)) in entries.iter().enumerate() {
        let row_top = top + LEGEND_GAP + row as f64 * row_h;
        canvas.set_source_rgba(style.theme.series_color(*index));
        canvas.rectangle(left + LEGEND_GAP, row_top, LEGEND_SWATCH, LEGEND_SWATCH);
        canvas.fill()?;

        canvas.set_source_rgba(style.theme.axis);
        canvas.move_to(left + 2.0 * LEGEND_GAP + LEGEND_SWATCH, row_top + LEGEND_SWATCH / 2.0 + ext.height / 2.0);
        canvas.show_text(label)?;
    }
    Ok(())
}

/// Stroke the path through `series.points()[from..]` and stamp markers if enabled.
/// Returns the number of points projected; an empty subrange draws nothing.
pub(crate) fn draw_series_from<S: PointSeries>(
    canvas: &mut impl Canvas,
    mapping: &Mapping,
    series: &S,
    from: usize,
    color: Rgba,
    style: &ChartStyle,
) -> Result<usize, BackendError> {
    let points = series.points();
    let Some(subrange) = points.get(from..) else { return Ok(0) };
    if subrange.is_empty() {
        return Ok(0);
    }
    let local: Vec<FloatPoint> = subrange.iter().map(|p| mapping.to_local_coordinates(p)).collect();
    trace!("drawing {} points from index {from}", local.len());

    canvas.set_source_rgba(color);
    canvas.set_line_width(style.line_width);
    canvas.set_dash(&[], 0.0);
    canvas.move_to(local[0].x, local[0].y);
    for p in &local[1..] {
        canvas.line_to(p.x, p.y);
    }
    canvas.stroke()?;

    if style.draw_markers {
        for p in &local {
            canvas.arc(p.x, p.y, style.marker_size, 0.0, TAU);
            canvas.fill()?;
        }
    }
    Ok(local.len())
}
