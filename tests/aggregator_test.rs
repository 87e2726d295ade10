// ABOUTME: Integration tests for activity metrics aggregation across segments
// ABOUTME: Verifies pace derivation, rounding, optional fields, and timestamp selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use afterrun_core::formatters::round2;
use afterrun_core::models::{TrackPoint, TrackSegment};
use afterrun_intelligence::{MetricsAccumulator, MetricsAggregator};
use chrono::{Duration, TimeZone, Utc};
use common::{assert_close, morning_start};

fn segment(distance_m: f64, time_s: f64, ascent_m: f64, heart_rates: &[u32]) -> TrackSegment {
    TrackSegment {
        moving_distance_m: distance_m,
        moving_time_s: time_s,
        ascent_m,
        started_at: None,
        points: heart_rates
            .iter()
            .map(|hr| TrackPoint {
                heart_rate: Some(*hr),
                ..TrackPoint::default()
            })
            .collect(),
    }
}

#[test]
#[allow(clippy::float_cmp)]
fn test_pace_matches_duration_over_distance() {
    let metrics = MetricsAggregator::aggregate("long.gpx", &[segment(12_300.0, 3_900.0, 0.0, &[150])]);

    assert_close(metrics.total_distance_km, 12.3, 1e-9);
    assert_close(metrics.duration_s, 3_900.0, 1e-9);
    assert_close(metrics.avg_pace_min_per_km, 5.28, 1e-9);
    assert_eq!(
        metrics.avg_pace_min_per_km,
        round2(metrics.duration_s / 60.0 / metrics.total_distance_km)
    );
    assert_eq!(metrics.pace_formatted(), "05:16");
    assert_eq!(metrics.duration_formatted(), "01:05:00");
}

#[test]
#[allow(clippy::float_cmp)]
fn test_pace_is_derived_from_reported_distance() {
    // 1004 m reports as 1 km, so ten minutes is exactly 10 min/km
    let metrics = MetricsAggregator::aggregate("track.gpx", &[segment(1_004.0, 600.0, 0.0, &[])]);
    assert_eq!(metrics.total_distance_km, 1.0);
    assert_eq!(metrics.avg_pace_min_per_km, 10.0);
    assert_eq!(
        metrics.avg_pace_min_per_km,
        round2(metrics.duration_s / 60.0 / metrics.total_distance_km)
    );
}

#[test]
#[allow(clippy::float_cmp)]
fn test_sub_rounding_distance_has_zero_pace() {
    let metrics = MetricsAggregator::aggregate("blip.gpx", &[segment(4.0, 60.0, 0.0, &[])]);
    assert_eq!(metrics.total_distance_km, 0.0);
    assert_eq!(metrics.duration_s, 60.0);
    assert_eq!(metrics.avg_pace_min_per_km, 0.0);
}

#[test]
fn test_segments_are_summed() {
    let metrics = MetricsAggregator::aggregate(
        "multi.gpx",
        &[
            segment(4_000.0, 1_200.0, 15.5, &[140, 150]),
            segment(1_000.0, 330.0, 4.5, &[170]),
        ],
    );

    assert_close(metrics.total_distance_km, 5.0, 1e-9);
    assert_close(metrics.duration_s, 1_530.0, 1e-9);
    assert_close(metrics.avg_pace_min_per_km, 5.1, 1e-9);
    assert_close(metrics.elevation_gain_m.unwrap(), 20.0, 1e-9);
    // per-point mean, not per-segment: (140 + 150 + 170) / 3
    assert_eq!(metrics.avg_heart_rate, Some(153));
    assert_eq!(metrics.max_heart_rate, Some(170));
}

#[test]
fn test_values_are_rounded_to_two_decimals() {
    let metrics = MetricsAggregator::aggregate("odd.gpx", &[segment(1_234.5678, 400.456, 3.14159, &[])]);
    assert_close(metrics.total_distance_km, 1.23, 1e-9);
    assert_close(metrics.duration_s, 400.46, 1e-9);
    assert_close(metrics.elevation_gain_m.unwrap(), 3.14, 1e-9);
}

#[test]
fn test_empty_activity_yields_zeroes() {
    let metrics = MetricsAggregator::aggregate("empty.gpx", &[]);
    assert!(metrics.total_distance_km.abs() < f64::EPSILON);
    assert!(metrics.duration_s.abs() < f64::EPSILON);
    assert!(metrics.avg_pace_min_per_km.abs() < f64::EPSILON);
    assert_eq!(metrics.elevation_gain_m, None);
    assert_eq!(metrics.avg_heart_rate, None);
    assert_eq!(metrics.max_heart_rate, None);
    assert_eq!(metrics.timestamp, None);
    assert!(!metrics.has_heart_rate());
}

#[test]
fn test_time_without_distance_has_zero_pace() {
    let metrics = MetricsAggregator::aggregate("treadmill.gpx", &[segment(0.0, 1_800.0, 0.0, &[])]);
    assert_close(metrics.duration_s, 1_800.0, 1e-9);
    assert!(metrics.avg_pace_min_per_km.abs() < f64::EPSILON);
}

#[test]
fn test_timestamp_prefers_first_timed_point() {
    let lap_start = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).single().unwrap();
    let first_point = morning_start();

    let untimed = TrackSegment {
        started_at: Some(lap_start),
        ..segment(1_000.0, 300.0, 0.0, &[])
    };
    let timed = TrackSegment {
        points: vec![TrackPoint {
            timestamp: Some(first_point),
            ..TrackPoint::default()
        }],
        started_at: Some(first_point + Duration::minutes(30)),
        ..TrackSegment::default()
    };

    let metrics = MetricsAggregator::aggregate("mixed.tcx", &[untimed.clone(), timed]);
    assert_eq!(metrics.timestamp, Some(first_point));

    let metrics = MetricsAggregator::aggregate("laps.tcx", &[untimed]);
    assert_eq!(metrics.timestamp, Some(lap_start));
}

#[test]
fn test_accumulator_matches_aggregator() {
    let segments = [
        segment(2_500.0, 700.0, 10.0, &[130, 135]),
        segment(2_500.0, 760.0, 0.0, &[160]),
    ];
    let mut accumulator = MetricsAccumulator::new();
    for segment in &segments {
        accumulator.push_segment(segment);
    }
    assert_eq!(accumulator.segment_count(), 2);
    assert_eq!(
        accumulator.finish("run.gpx"),
        MetricsAggregator::aggregate("run.gpx", &segments)
    );
}
