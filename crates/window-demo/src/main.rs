// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed demo driving the incremental chart through winit + softbuffer.
// Notes:
// - The window is the chart's host surface: mutations call `request_redraw`, and winit
//   coalesces them into one `RedrawRequested`, which runs the paint callback.
// - Each frame composites the chart's cache onto a fresh Skia raster and blits it (CPU).
// Usage: livechart-window-demo [theme]   (light | dark)

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use livechart_core::{theme, BackendError, Chart, FloatPoint, HostSurface, Rgba, Series, SeriesId};
use livechart_skia::{SkiaCanvas, DEFAULT_DPI};
use log::{debug, info, warn};
use rand::Rng;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

const SERIES: usize = 4;

/// The winit window seen as the chart's host surface.
struct WindowSurface {
    window: Rc<Window>,
}

impl HostSurface for WindowSurface {
    type Image = SkiaCanvas;

    fn size(&self) -> (i32, i32) {
        let size = self.window.inner_size();
        (size.width as i32, size.height as i32)
    }

    fn dpi(&self) -> Result<f64, BackendError> {
        let scale = self.window.scale_factor();
        if scale.is_finite() && scale > 0.0 {
            Ok(scale * DEFAULT_DPI)
        } else {
            Err(BackendError::Metrics(format!("bad scale factor {scale}")))
        }
    }

    fn request_repaint(&self) {
        self.window.request_redraw();
    }
}

/// Random walk fed into the series, one point per series per click.
struct Feed {
    ids: Vec<SeriesId>,
    count: u32,
    grow_y: f64,
}

impl Feed {
    fn push_batch(&mut self, chart: &mut Chart<WindowSurface>) {
        let mut rng = rand::thread_rng();
        for id in &self.ids {
            let y = rng.gen::<f64>() * 20.0 + 57.0 + self.grow_y;
            if let Some(mut s) = chart.series_mut(*id) {
                s.add(FloatPoint::new(self.count as f64, y));
            }
        }
        self.count += 1;
        self.grow_y += 5.0;
        debug!("batch {} queued", self.count);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let theme = theme::find(&std::env::args().nth(1).unwrap_or_else(|| "light".to_string()));
    let background = if theme.background.a > 0.0 { theme.background } else { Rgba::new(1.0, 1.0, 1.0, 1.0) };

    let event_loop = EventLoop::new();
    let window = Rc::new(
        WindowBuilder::new()
            .with_title("livechart - click or press Space to add points")
            .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
            .build(&event_loop)?,
    );

    let context = unsafe { softbuffer::Context::new(&*window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &*window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut chart = Chart::new(WindowSurface { window: window.clone() })?;
    chart.set_theme(theme)?;
    chart.set_draw_markers(true);
    chart.set_marker_size(4.0)?;
    chart.set_line_width(2.0)?;
    chart.set_x_range(0.0, 10.0)?;
    chart.set_y_range(0.0, 100.0)?;
    chart.set_auto_ranging_x(true);
    chart.set_auto_ranging_y(true);
    chart.set_title("Stonks");

    let ids = (0..SERIES).map(|_| chart.attach_series(Series::with_capacity(60))).collect();
    let mut feed = Feed { ids, count: 0, grow_y: 0.0 };
    info!("window demo ready");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => window.request_redraw(),
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    feed.push_batch(&mut chart);
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(VirtualKeyCode::Space), .. },
                    ..
                } => feed.push_batch(&mut chart),
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut chart, &mut surface, background) {
                    warn!("frame dropped: {e:#}");
                }
            }
            _ => {}
        }
    });
}

/// Paint callback: bring the chart cache up to date, composite it and blit to the window.
fn present(chart: &mut Chart<WindowSurface>, surface: &mut softbuffer::Surface, background: Rgba) -> Result<()> {
    let (w, h) = chart.surface().size();
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w.max(0) as u32), NonZeroU32::new(h.max(0) as u32)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e}"))?;

    let mut frame = SkiaCanvas::new(w, h)?;
    frame.clear(background);
    let stats = chart.paint(&mut frame)?;
    debug!("painted: {stats:?}");

    let rgba = frame.to_rgba8()?;
    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    for (dst, px) in buffer.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
