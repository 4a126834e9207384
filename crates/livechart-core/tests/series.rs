// File: crates/livechart-core/tests/series.rs
// Purpose: Series access, clearing and attach behavior through the owning chart.

mod common;

use common::{example_chart, frame};
use livechart_core::{ChartError, FloatPoint, IntPoint, PointSeries, Series};

#[test]
fn get_rejects_out_of_range_indices() {
    let mut chart = example_chart();
    let id = chart.attach_series(Series::with_capacity(4));
    let mut s = chart.series_mut(id).expect("attached");
    for i in 0..3 {
        s.add(FloatPoint::new(i as f64, 10.0));
    }

    assert!(matches!(s.get(-1), Err(ChartError::OutOfRange { index: -1, len: 3 })));
    assert!(matches!(s.get(3), Err(ChartError::OutOfRange { index: 3, len: 3 })));
    let last = s.get(2).expect("last point");
    assert_eq!((last.x, last.y), (2.0, 10.0));
}

#[test]
fn get_on_empty_series_fails() {
    let mut chart = example_chart();
    let id = chart.attach_series(Series::with_capacity(0));
    let s = chart.series_mut(id).expect("attached");
    assert!(matches!(s.get(0), Err(ChartError::OutOfRange { index: 0, len: 0 })));
}

#[test]
fn add_accepts_int_points_and_requests_repaint() {
    let mut chart = example_chart();
    let id = chart.attach_series(Series::with_capacity(8));
    chart.surface().take_repaints();

    chart.series_mut(id).unwrap().add(IntPoint::new(2, 40));
    assert_eq!(chart.surface().take_repaints(), 1);

    let s = chart.series(id).unwrap();
    assert_eq!(s.len(), 1);
    assert!(s.is_invalidated());
    assert_eq!(s.get(0).unwrap().y, 40.0);
}

#[test]
fn clear_empties_series_and_forces_full_redraw() {
    let mut chart = example_chart();
    let id = chart.attach_series(Series::with_capacity(16));
    let mut f = frame();
    chart.paint(&mut f).unwrap();

    for i in 0..10 {
        chart.series_mut(id).unwrap().add(FloatPoint::new(i as f64, 50.0));
    }
    let stats = chart.paint(&mut f).unwrap();
    assert!(!stats.full_redraw);
    let capacity = chart.series(id).unwrap().capacity();

    chart.series_mut(id).unwrap().clear();
    assert_eq!(chart.series_mut(id).unwrap().size(), 0);
    assert_eq!(chart.series(id).unwrap().capacity(), capacity);
    assert!(chart.full_redraw_pending());

    let stats = chart.paint(&mut f).unwrap();
    assert!(stats.full_redraw);
    assert_eq!(stats.points_projected, 0);
    assert_eq!(chart.series(id).unwrap().last_drawn_index(), 0);
}

#[test]
fn clear_and_shrink_resets_storage() {
    let mut chart = example_chart();
    let id = chart.attach_series(Series::with_capacity(1024));
    chart.series_mut(id).unwrap().add(FloatPoint::new(1.0, 1.0));
    let mut f = frame();
    chart.paint(&mut f).unwrap();

    chart.series_mut(id).unwrap().clear_and_shrink(2);
    let s = chart.series(id).unwrap();
    assert!(s.is_empty());
    assert!(s.capacity() >= 2 && s.capacity() < 1024);
    assert!(chart.full_redraw_pending());
}

#[test]
fn attaching_prefilled_series_draws_it_incrementally() {
    let mut chart = example_chart();
    let mut f = frame();
    chart.paint(&mut f).unwrap();
    chart.surface().take_repaints();

    let id = chart.attach_series(
        Series::with_capacity(3).with_points([(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)].map(FloatPoint::from)),
    );
    assert_eq!(chart.surface().take_repaints(), 1);

    let stats = chart.paint(&mut f).unwrap();
    assert!(!stats.full_redraw);
    assert_eq!(stats.points_projected, 3);
    assert_eq!(chart.series(id).unwrap().last_drawn_index(), 2);
}

#[test]
fn attaching_empty_series_does_not_repaint() {
    let mut chart = example_chart();
    chart.surface().take_repaints();
    chart.attach_series(Series::with_capacity(3));
    assert_eq!(chart.surface().take_repaints(), 0);
}

#[test]
fn unknown_series_id_yields_none() {
    let mut chart = example_chart();
    let id = chart.attach_series(Series::default());
    let mut other = example_chart();
    assert!(other.series_mut(id).is_none());
    assert!(other.series(id).is_none());
    assert_eq!(id.index(), 0);
}
