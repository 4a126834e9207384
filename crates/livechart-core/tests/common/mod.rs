// File: crates/livechart-core/tests/common/mod.rs
// Purpose: Recording backend and host surface shared by the integration tests.
// Behavior:
// - Every canvas call is appended to a log shared by a frame and the images it creates,
//   so tests can see what was drawn into the chart's private cache.
// - Text metrics are synthetic and deterministic.
// - Failures (metrics, image allocation, strokes) can be injected.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use livechart_core::{BackendError, Canvas, FrameCanvas, HostSurface, ImageSurface, Rgba, TextExtents};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Source(Rgba),
    LineWidth(f64),
    Dash(Vec<f64>),
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc(f64, f64, f64),
    Rect(f64, f64, f64, f64),
    /// Number of path commands consumed by the stroke.
    Stroke(usize),
    Fill,
    FontSize(f64),
    Text(String),
    Composite,
}

#[derive(Debug, Default)]
pub struct Log {
    pub ops: Vec<Op>,
    pub images_created: usize,
    pub strokes: usize,
    /// Fail the stroke whose 1-based number equals this.
    pub fail_stroke_at: Option<usize>,
    pub fail_create: bool,
}

pub type SharedLog = Rc<RefCell<Log>>;

pub struct RecordingCanvas {
    pub log: SharedLog,
    width: i32,
    height: i32,
    pending: usize,
    font: f64,
}

impl RecordingCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self { log: SharedLog::default(), width, height, pending: 0, font: 10.0 }
    }

    fn push(&self, op: Op) {
        self.log.borrow_mut().ops.push(op);
    }

    /// Forget everything recorded so far.
    pub fn reset(&self) {
        self.log.borrow_mut().ops.clear();
    }

    pub fn ops(&self) -> Vec<Op> {
        self.log.borrow().ops.clone()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.log.borrow().ops.iter().filter(|op| pred(op)).count()
    }

    /// Strokes issued right after a series color (i.e. series paths), with their command count.
    pub fn series_strokes(&self, palette: &[Rgba]) -> Vec<(Rgba, usize)> {
        let log = self.log.borrow();
        let mut color = None;
        let mut out = Vec::new();
        for op in &log.ops {
            match op {
                Op::Source(c) => color = Some(*c),
                Op::Stroke(n) => {
                    if let Some(c) = color.filter(|c| palette.contains(c)) {
                        out.push((c, *n));
                    }
                }
                _ => {}
            }
        }
        out
    }
}

impl Canvas for RecordingCanvas {
    fn set_source_rgba(&mut self, color: Rgba) { self.push(Op::Source(color)); }
    fn set_line_width(&mut self, width: f64) { self.push(Op::LineWidth(width)); }
    fn set_dash(&mut self, dashes: &[f64], _offset: f64) { self.push(Op::Dash(dashes.to_vec())); }

    fn move_to(&mut self, x: f64, y: f64) {
        self.pending += 1;
        self.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.pending += 1;
        self.push(Op::LineTo(x, y));
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, _a1: f64, _a2: f64) {
        self.pending += 1;
        self.push(Op::Arc(xc, yc, radius));
    }

    fn rectangle(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.pending += 1;
        self.push(Op::Rect(x, y, w, h));
    }

    fn stroke(&mut self) -> Result<(), BackendError> {
        let n = std::mem::take(&mut self.pending);
        let mut log = self.log.borrow_mut();
        log.strokes += 1;
        if log.fail_stroke_at == Some(log.strokes) {
            return Err(BackendError::Draw("injected stroke failure".into()));
        }
        log.ops.push(Op::Stroke(n));
        Ok(())
    }

    fn fill(&mut self) -> Result<(), BackendError> {
        self.pending = 0;
        self.push(Op::Fill);
        Ok(())
    }

    fn set_font_size(&mut self, size: f64) {
        self.font = size;
        self.push(Op::FontSize(size));
    }

    fn text_extents(&mut self, text: &str) -> TextExtents {
        TextExtents { width: text.chars().count() as f64 * self.font * 0.6, height: self.font * 0.7 }
    }

    fn show_text(&mut self, text: &str) -> Result<(), BackendError> {
        self.pending = 0;
        self.push(Op::Text(text.to_string()));
        Ok(())
    }
}

impl ImageSurface for RecordingCanvas {
    fn width(&self) -> i32 { self.width }
    fn height(&self) -> i32 { self.height }
}

impl FrameCanvas for RecordingCanvas {
    type Image = RecordingCanvas;

    fn create_image(&mut self, width: i32, height: i32) -> Result<RecordingCanvas, BackendError> {
        let mut log = self.log.borrow_mut();
        if log.fail_create {
            return Err(BackendError::Surface("injected allocation failure".into()));
        }
        log.images_created += 1;
        Ok(RecordingCanvas { log: self.log.clone(), width, height, pending: 0, font: 10.0 })
    }

    fn composite(&mut self, _image: &mut RecordingCanvas, _x: f64, _y: f64) -> Result<(), BackendError> {
        self.push(Op::Composite);
        Ok(())
    }
}

/// Host surface with adjustable size/DPI that counts repaint requests.
#[derive(Debug)]
pub struct TestSurface {
    pub size: Cell<(i32, i32)>,
    /// `None` makes the metrics query fail.
    pub dpi: Cell<Option<f64>>,
    pub repaints: Cell<usize>,
}

impl TestSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { size: Cell::new((width, height)), dpi: Cell::new(Some(96.0)), repaints: Cell::new(0) }
    }

    pub fn take_repaints(&self) -> usize {
        self.repaints.replace(0)
    }
}

impl HostSurface for TestSurface {
    type Image = RecordingCanvas;

    fn size(&self) -> (i32, i32) { self.size.get() }

    fn dpi(&self) -> Result<f64, BackendError> {
        self.dpi.get().ok_or_else(|| BackendError::Metrics("no screen".into()))
    }

    fn request_repaint(&self) {
        self.repaints.set(self.repaints.get() + 1);
    }
}

pub const WIDTH: i32 = 640;
pub const HEIGHT: i32 = 480;

/// Chart on a 640x480 test surface with the reference example's bounds: X [0,10], Y [0,100].
pub fn example_chart() -> livechart_core::Chart<TestSurface> {
    let mut chart = livechart_core::Chart::new(TestSurface::new(WIDTH, HEIGHT)).expect("chart");
    chart.set_x_range(0.0, 10.0).expect("x range");
    chart.set_y_range(0.0, 100.0).expect("y range");
    chart
}

pub fn frame() -> RecordingCanvas {
    RecordingCanvas::new(WIDTH, HEIGHT)
}
