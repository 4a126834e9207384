// File: crates/chart-examples/src/bin/stream.rs
// Summary: Streams random points into four series, painting one frame per batch and
// writing each composited frame to target/out/stream_NNN.png.
// Usage: example-stream [frames] [width] [height]

use anyhow::{Context, Result};
use livechart_core::{Chart, FloatPoint, Rgba, Series};
use livechart_skia::HeadlessSurface;
use log::info;
use rand::Rng;

const SERIES: usize = 4;

fn arg_or<T: std::str::FromStr>(n: usize, default: T) -> T {
    std::env::args().nth(n).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn main() -> Result<()> {
    env_logger::init();
    let frames: usize = arg_or(1, 12);
    let width: i32 = arg_or(2, 800);
    let height: i32 = arg_or(3, 500);

    let mut chart = Chart::new(HeadlessSurface::new(width, height))?;
    chart.set_draw_markers(true);
    chart.set_marker_size(4.0)?;
    chart.set_line_width(2.0)?;
    chart.set_x_range(0.0, 10.0)?;
    chart.set_y_range(0.0, 100.0)?;
    chart.set_auto_ranging_x(true);
    chart.set_auto_ranging_y(true);
    chart.set_title("Stonks");
    chart.show_legend(true);

    let ids: Vec<_> = (0..SERIES)
        .map(|i| chart.attach_series(Series::with_capacity(60).with_label(format!("series {}", i + 1))))
        .collect();

    let out_dir = std::path::PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = rand::thread_rng();
    let mut grow_y = 0.0;
    for frame_no in 0..frames {
        for id in &ids {
            let y = rng.gen::<f64>() * 20.0 + 57.0 + grow_y;
            if let Some(mut s) = chart.series_mut(*id) {
                s.add(FloatPoint::new(frame_no as f64, y));
            }
        }
        grow_y += 5.0;

        if !chart.surface().take_repaint_request() {
            continue;
        }
        let mut frame = chart.surface().frame()?;
        frame.clear(Rgba::new(1.0, 1.0, 1.0, 1.0));
        let stats = chart.paint(&mut frame)?;
        info!(
            "frame {frame_no}: full={} series={} points={}",
            stats.full_redraw, stats.series_drawn, stats.points_projected
        );

        let path = out_dir.join(format!("stream_{frame_no:03}.png"));
        std::fs::write(&path, frame.encode_png()?).with_context(|| format!("writing {}", path.display()))?;
    }
    println!("Wrote {frames} frames to {}", out_dir.display());
    Ok(())
}
