// ABOUTME: Integration tests for the GPX and TCX format adapters
// ABOUTME: Covers metric extraction, stop filtering, missing fields, and rejected files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::path::Path;

use afterrun::importers::{ImportConfig, TrackFormat};
use afterrun::pipeline::ActivityPipeline;
use afterrun_core::errors::ErrorCode;
use afterrun_intelligence::FeedbackConfig;
use chrono::{TimeZone, Utc};
use common::{assert_close, init_test_logging, morning_start};

#[test]
fn test_gpx_metrics_with_elevation_and_heart_rate() {
    init_test_logging();
    let pipeline = ActivityPipeline::default();
    let metrics = pipeline
        .decode_bytes("morning.gpx", common::MORNING_RUN_GPX.as_bytes())
        .unwrap();

    assert_eq!(metrics.source_filename, "morning.gpx");
    assert_close(metrics.total_distance_km, 3.0, 1e-9);
    assert_close(metrics.duration_s, 900.0, 1e-9);
    assert_close(metrics.avg_pace_min_per_km, 5.0, 1e-9);
    // smoothed profile 400, 405.5, 411, 420
    assert_close(metrics.elevation_gain_m.unwrap(), 20.0, 1e-9);
    assert_eq!(metrics.avg_heart_rate, Some(151));
    assert_eq!(metrics.max_heart_rate, Some(160));
    assert_eq!(metrics.timestamp, Some(morning_start()));
}

#[test]
fn test_gpx_stop_is_excluded_from_moving_data() {
    init_test_logging();
    let metrics = ActivityPipeline::default()
        .decode_bytes("stop.gpx", common::RUN_WITH_STOP_GPX.as_bytes())
        .unwrap();

    assert_close(metrics.total_distance_km, 2.0, 1e-9);
    assert_close(metrics.duration_s, 600.0, 1e-9);
    assert_eq!(metrics.elevation_gain_m, None);
    assert_eq!(metrics.avg_heart_rate, None);
    assert_eq!(metrics.max_heart_rate, None);
}

#[test]
fn test_stopped_speed_threshold_is_configurable() {
    init_test_logging();
    // 12 km/h intervals all count as stopped above a 15 km/h threshold
    let pipeline = ActivityPipeline::new(
        ImportConfig {
            stopped_speed_kmh: 15.0,
        },
        FeedbackConfig::default(),
    );
    let metrics = pipeline
        .decode_bytes("morning.gpx", common::MORNING_RUN_GPX.as_bytes())
        .unwrap();
    assert!(metrics.total_distance_km.abs() < f64::EPSILON);
    assert!(metrics.avg_pace_min_per_km.abs() < f64::EPSILON);
}

#[test]
fn test_gpx_without_times_has_zero_pace() {
    init_test_logging();
    let metrics = ActivityPipeline::default()
        .decode_bytes("bare.gpx", common::BARE_GPX.as_bytes())
        .unwrap();

    assert!(metrics.total_distance_km.abs() < f64::EPSILON);
    assert!(metrics.duration_s.abs() < f64::EPSILON);
    assert!(metrics.avg_pace_min_per_km.abs() < f64::EPSILON);
    assert_eq!(metrics.elevation_gain_m, None);
    assert_eq!(metrics.timestamp, None);
}

#[test]
fn test_gpx_segments_are_decoded_separately() {
    let document = r#"<gpx>
      <trk>
        <trkseg><trkpt lat="47.0" lon="8.0"/><trkpt lat="47.001" lon="8.0"/></trkseg>
        <trkseg><trkpt lat="48.0" lon="8.0"/></trkseg>
      </trk>
      <trk><trkseg/></trk>
    </gpx>"#;
    let segments = TrackFormat::Gpx
        .decode(document.as_bytes(), &ImportConfig::default())
        .unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].points.len(), 2);
    assert_eq!(segments[1].points.len(), 1);
    assert!(segments[2].points.is_empty());
}

#[test]
fn test_tcx_laps_sum_totals() {
    init_test_logging();
    let metrics = ActivityPipeline::default()
        .decode_bytes("evening.tcx", common::TWO_LAP_TCX.as_bytes())
        .unwrap();

    assert_close(metrics.total_distance_km, 8.0, 1e-9);
    assert_close(metrics.duration_s, 3000.0, 1e-9);
    assert_close(metrics.avg_pace_min_per_km, 6.25, 1e-9);
    assert_close(metrics.elevation_gain_m.unwrap(), 12.0, 1e-9);
    assert_eq!(metrics.avg_heart_rate, Some(150));
    assert_eq!(metrics.max_heart_rate, Some(161));
    assert_eq!(
        metrics.timestamp,
        Utc.with_ymd_and_hms(2024, 5, 2, 18, 0, 0).single()
    );
}

#[test]
fn test_tcx_lap_start_time_used_without_trackpoints() {
    let document = r#"<TrainingCenterDatabase><Activities><Activity>
        <Lap StartTime="2024-05-03T06:30:00Z">
          <TotalTimeSeconds>600</TotalTimeSeconds>
          <DistanceMeters>2000</DistanceMeters>
        </Lap>
      </Activity></Activities></TrainingCenterDatabase>"#;
    let metrics = ActivityPipeline::default()
        .decode_bytes("laps_only.tcx", document.as_bytes())
        .unwrap();

    assert_close(metrics.total_distance_km, 2.0, 1e-9);
    assert_close(metrics.avg_pace_min_per_km, 5.0, 1e-9);
    assert_eq!(
        metrics.timestamp,
        Utc.with_ymd_and_hms(2024, 5, 3, 6, 30, 0).single()
    );
    assert_eq!(metrics.avg_heart_rate, None);
}

fn lap_with_totals(total_time: &str, distance: &str) -> String {
    format!(
        r#"<TrainingCenterDatabase><Activities><Activity>
        <Lap StartTime="2024-05-03T06:30:00Z">
          <TotalTimeSeconds>{total_time}</TotalTimeSeconds>
          <DistanceMeters>{distance}</DistanceMeters>
        </Lap>
      </Activity></Activities></TrainingCenterDatabase>"#
    )
}

#[test]
fn test_tcx_negative_lap_totals_are_rejected() {
    let pipeline = ActivityPipeline::default();
    for (time, distance) in [("-1800", "5000"), ("1800", "-5000"), ("-1800", "-5000")] {
        let error = pipeline
            .decode_bytes("negative.tcx", lap_with_totals(time, distance).as_bytes())
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ParseError, "{time} s / {distance} m");
        assert!(error.code.is_file_rejection());
    }
}

#[test]
fn test_non_finite_values_are_rejected() {
    let pipeline = ActivityPipeline::default();
    for (time, distance) in [("NaN", "5000"), ("1800", "inf"), ("infinity", "NaN")] {
        let error = pipeline
            .decode_bytes("non_finite.tcx", lap_with_totals(time, distance).as_bytes())
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ParseError, "{time} s / {distance} m");
    }

    let gpx = r#"<gpx><trk><trkseg>
        <trkpt lat="47.0" lon="8.0"><ele>NaN</ele></trkpt>
      </trkseg></trk></gpx>"#;
    let error = pipeline.decode_bytes("nan_ele.gpx", gpx.as_bytes()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ParseError);

    let gpx = r#"<gpx><trk><trkseg><trkpt lat="inf" lon="8.0"/></trkseg></trk></gpx>"#;
    let error = pipeline.decode_bytes("inf_lat.gpx", gpx.as_bytes()).unwrap_err();
    assert_eq!(error.code, ErrorCode::ParseError);
}

#[test]
fn test_negative_elevation_is_accepted() {
    let gpx = r#"<gpx><trk><trkseg>
        <trkpt lat="31.5" lon="35.5"><ele>-430</ele></trkpt>
        <trkpt lat="31.6" lon="35.5"><ele>-420</ele></trkpt>
      </trkseg></trk></gpx>"#;
    let metrics = ActivityPipeline::default()
        .decode_bytes("dead_sea.gpx", gpx.as_bytes())
        .unwrap();
    assert!(metrics.total_distance_km >= 0.0);
    assert!(metrics.duration_s >= 0.0);
}

#[test]
fn test_unsupported_extension_is_file_rejection() {
    let error = ActivityPipeline::default()
        .decode_bytes("run.fit", common::MORNING_RUN_GPX.as_bytes())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::UnsupportedFormat);
    assert!(error.code.is_file_rejection());
    assert_eq!(error.user_message(), "could not process this file");
}

#[test]
fn test_extension_decides_format_not_content() {
    // GPX content under a .tcx name has the wrong root element
    let error = ActivityPipeline::default()
        .decode_bytes("run.tcx", common::MORNING_RUN_GPX.as_bytes())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ParseError);
}

#[test]
fn test_malformed_documents_are_parse_errors() {
    let pipeline = ActivityPipeline::default();
    let cases: [(&str, &[u8]); 5] = [
        ("empty.gpx", b""),
        ("truncated.gpx", b"<gpx><trk><trkseg><trkpt lat=\"1\" lon=\"2\">"),
        ("mismatched.gpx", b"<gpx><trk></trkseg></gpx>"),
        ("binary.gpx", &[0xff, 0xfe, 0x00, 0x3c]),
        ("bad_time.gpx", b"<gpx><trk><trkseg><trkpt lat=\"1\" lon=\"2\"><time>yesterday</time></trkpt></trkseg></trk></gpx>"),
    ];
    for (name, bytes) in cases {
        let error = pipeline.decode_bytes(name, bytes).unwrap_err();
        assert_eq!(error.code, ErrorCode::ParseError, "{name}: {error}");
    }
}

#[test]
fn test_format_lookup() {
    assert_eq!(TrackFormat::from_extension(".TCX").unwrap(), TrackFormat::Tcx);
    assert_eq!(
        TrackFormat::from_path(Path::new("uploads/run_20240501_070000.gpx")).unwrap(),
        TrackFormat::Gpx
    );
    assert_eq!(TrackFormat::Gpx.to_string(), "gpx");
}
