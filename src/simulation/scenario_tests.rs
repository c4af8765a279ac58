//! End-to-end burn regression scenarios.
//!
//! Grains are built through the full pipeline (path, tessellation,
//! sequencing, centring) and regressed inside a casing.

use std::f64::consts::PI;
use std::thread;

use approx::assert_relative_eq;
use tracing_subscriber::EnvFilter;

use super::RegressionSimulator;
use crate::config::SimulationConfig;
use crate::error::{GrainError, MetricError};
use crate::geometry::{ArcSegment, CoordinateRing, LineSegment, Path};
use crate::grain::{CasingBoundary, GrainProfile, GrainShape, ScaleFactor};
use crate::math::Point2;
use crate::metrics::MetricExtractor;
use crate::operations::creation::MakePolygon;
use crate::operations::query::{area, perimeter};
use crate::tessellation::TessellationParams;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn circle_path(radius: f64) -> Path {
    Path::new(vec![
        ArcSegment::circular(Point2::origin(), radius, 0.0, PI).unwrap().into(),
        ArcSegment::circular(Point2::origin(), radius, PI, PI).unwrap().into(),
    ])
}

fn circle_grain(radius: f64) -> GrainShape {
    GrainShape::from_path(
        &circle_path(radius),
        TessellationParams::default(),
        ScaleFactor::identity(),
        Point2::origin(),
        CasingBoundary::reference(Point2::origin()).unwrap(),
    )
    .unwrap()
}

fn square_ring(half: f64) -> CoordinateRing {
    CoordinateRing::from_points(vec![
        Point2::new(-half, -half),
        Point2::new(half, -half),
        Point2::new(half, half),
        Point2::new(-half, half),
    ])
}

#[test]
fn contained_circle_is_fully_wetted() {
    init_tracing();
    let grain = circle_grain(10.0);
    let extractor = MetricExtractor::new(grain.casing());
    let metrics = extractor.measure(grain.intersect()).unwrap();

    assert!(extractor.is_clear_of_wall(grain.intersect()));
    assert!((metrics.wetted_perimeter - metrics.raw_perimeter).abs() < 1e-12);
    assert_relative_eq!(metrics.hydraulic_diameter.unwrap(), 20.0, max_relative = 1e-3);
}

#[test]
fn free_circle_grows_by_the_offset() {
    init_tracing();
    let mut grain = circle_grain(10.0);
    let run = RegressionSimulator::new(10, 1.0, 1.0).unwrap().run(&mut grain).unwrap();

    for m in run.metrics() {
        #[allow(clippy::cast_precision_loss)]
        let r = 10.0 + m.step as f64;
        assert_relative_eq!(m.area, PI * r * r, max_relative = 1e-2);
        assert!((m.wetted_perimeter - m.raw_perimeter).abs() < 1e-12);
    }
}

#[test]
fn square_reaching_the_wall_loses_wetted_perimeter() {
    init_tracing();
    let casing = CasingBoundary::reference(Point2::origin()).unwrap();
    let mut grain =
        GrainShape::new(&square_ring(20.0), ScaleFactor::identity(), Point2::origin(), casing).unwrap();
    let run = RegressionSimulator::new(20, 1.0, 1.0).unwrap().run(&mut grain).unwrap();

    let extractor = MetricExtractor::new(grain.casing());
    let first_contact = run
        .history()
        .iter()
        .position(|shape| !extractor.is_clear_of_wall(shape))
        .unwrap();
    // Rounded corners reach the wall near 28.28 + k = 42.86.
    assert!((13..=16).contains(&first_contact), "first contact at {first_contact}");

    for m in &run.metrics()[..first_contact] {
        assert!((m.wetted_perimeter - m.raw_perimeter).abs() < 1e-12);
    }
    for m in &run.metrics()[first_contact + 1..] {
        assert!(
            m.wetted_perimeter < m.raw_perimeter,
            "step {}: wetted {} raw {}",
            m.step,
            m.wetted_perimeter,
            m.raw_perimeter
        );
    }
}

#[test]
fn burned_through_grain_reports_degenerate_metric() {
    init_tracing();
    let mut grain = circle_grain(5.0);
    let run = RegressionSimulator::new(8, -1.0, 1.0).unwrap().run(&mut grain).unwrap();
    assert_eq!(run.len(), 8);

    let last = run.metrics().last().unwrap();
    assert!(last.area.abs() < 1e-12);
    assert!(last.wetted_perimeter.abs() < 1e-12);
    assert!(last.hydraulic_diameter.is_none());

    let extractor = MetricExtractor::new(grain.casing());
    let err = extractor.hydraulic_diameter(grain.intersect()).unwrap_err();
    assert!(matches!(err, GrainError::Metric(MetricError::DegenerateMetric { .. })));
}

#[test]
fn offset_round_trip_restores_convex_area() {
    let casing = CasingBoundary::reference(Point2::origin()).unwrap();
    let mut grain =
        GrainShape::new(&square_ring(5.0), ScaleFactor::identity(), Point2::origin(), casing).unwrap();
    grain.offset(1, 2.0);
    let back = grain.offset(1, -2.0);
    assert_relative_eq!(area(&back[0]), 100.0, max_relative = 1e-2);
}

#[test]
fn hydraulic_diameter_scales_with_the_grain() {
    let small = circle_grain(5.0);
    let large = circle_grain(15.0);
    let d_small = MetricExtractor::new(small.casing())
        .hydraulic_diameter(small.intersect())
        .unwrap();
    let d_large = MetricExtractor::new(large.casing())
        .hydraulic_diameter(large.intersect())
        .unwrap();
    assert_relative_eq!(d_large, 3.0 * d_small, max_relative = 1e-3);
}

#[test]
fn polygon_perimeter_matches_ring() {
    let ring = CoordinateRing::from_points(vec![
        Point2::new(0.0, 0.0),
        Point2::new(7.0, 1.0),
        Point2::new(9.0, 6.0),
        Point2::new(3.0, 8.0),
        Point2::new(-1.0, 4.0),
    ]);
    let shape = MakePolygon::new(&ring).execute().unwrap();
    assert!(area(&shape) > 0.0);
    assert_relative_eq!(perimeter(&shape), ring.perimeter(), max_relative = 1e-12);
}

#[test]
fn drawing_to_time_series() {
    init_tracing();
    let config = SimulationConfig::from_toml_str(
        r"
        steps = 5
        regression_per_step = 0.5
        timestep = 0.1
        grain_steps_per_unit = 2.0
        ",
    )
    .unwrap();

    // Outer wall, a 2-unit scale bar, then a radius 2 bore: scale 5.
    let drawing = Path::new(vec![
        ArcSegment::circular(Point2::origin(), 8.0, 0.0, PI).unwrap().into(),
        ArcSegment::circular(Point2::origin(), 8.0, PI, PI).unwrap().into(),
        LineSegment::new(Point2::new(9.0, 9.0), Point2::new(11.0, 9.0)).into(),
        ArcSegment::circular(Point2::origin(), 2.0, 0.0, PI).unwrap().into(),
        ArcSegment::circular(Point2::origin(), 2.0, PI, PI).unwrap().into(),
    ]);
    let profile = GrainProfile::from_subpaths(&drawing, config.reference_length).unwrap();
    let mut grain = GrainShape::from_profile(
        &profile,
        config.grain_params().unwrap(),
        config.center(),
        config.casing().unwrap(),
    )
    .unwrap();
    assert_relative_eq!(area(grain.original()), PI * 100.0, max_relative = 1e-2);

    let run = config.simulator().unwrap().run(&mut grain).unwrap();
    let series = run.series();
    assert_eq!(series.len(), 5);
    let (time, last_area, _, dh) = series[4];
    assert!((time - 0.5).abs() < 1e-12);
    assert_relative_eq!(last_area, PI * 12.5 * 12.5, max_relative = 1e-2);
    assert_relative_eq!(dh.unwrap(), 25.0, max_relative = 1e-2);
}

#[test]
fn independent_runs_on_separate_threads() {
    let handles: Vec<_> = [0.5, 1.0]
        .into_iter()
        .map(|rate| {
            let mut grain = circle_grain(10.0);
            thread::spawn(move || {
                RegressionSimulator::new(4, rate, 1.0)
                    .unwrap()
                    .run(&mut grain)
                    .unwrap()
                    .metrics()
                    .last()
                    .unwrap()
                    .area
            })
        })
        .collect();
    let areas: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_relative_eq!(areas[0], PI * 144.0, max_relative = 1e-2);
    assert_relative_eq!(areas[1], PI * 196.0, max_relative = 1e-2);
}
