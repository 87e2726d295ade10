// ABOUTME: Shared fixtures and setup for afterrun integration tests
// ABOUTME: Sample GPX/TCX documents, metrics and assessment builders, quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `afterrun`

use std::env;
use std::sync::Once;

use afterrun_core::models::{ActivityMetrics, NormalizedAssessment, RawAssessment};
use chrono::{DateTime, TimeZone, Utc};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Four points 0.009 degrees of latitude apart (about 1000.75 m), five
/// minutes apart, climbing from 400 m to 420 m with heart rate 140..160
pub const MORNING_RUN_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1"
     xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v1">
  <metadata><time>2024-05-01T06:59:00Z</time></metadata>
  <trk>
    <name>Morning Run</name>
    <trkseg>
      <trkpt lat="47.000" lon="8.0">
        <ele>400</ele><time>2024-05-01T07:00:00Z</time>
        <extensions><gpxtpx:TrackPointExtension><gpxtpx:hr>140</gpxtpx:hr></gpxtpx:TrackPointExtension></extensions>
      </trkpt>
      <trkpt lat="47.009" lon="8.0">
        <ele>410</ele><time>2024-05-01T07:05:00Z</time>
        <extensions><gpxtpx:TrackPointExtension><gpxtpx:hr>150</gpxtpx:hr></gpxtpx:TrackPointExtension></extensions>
      </trkpt>
      <trkpt lat="47.018" lon="8.0">
        <ele>405</ele><time>2024-05-01T07:10:00Z</time>
        <extensions><gpxtpx:TrackPointExtension><gpxtpx:hr>160</gpxtpx:hr></gpxtpx:TrackPointExtension></extensions>
      </trkpt>
      <trkpt lat="47.027" lon="8.0">
        <ele>420</ele><time>2024-05-01T07:15:00Z</time>
        <extensions><gpxtpx:TrackPointExtension><gpxtpx:hr>155</gpxtpx:hr></gpxtpx:TrackPointExtension></extensions>
      </trkpt>
    </trkseg>
  </trk>
</gpx>"#;

/// Same route with a two-minute stop at the second point
pub const RUN_WITH_STOP_GPX: &str = r#"<gpx version="1.1">
  <trk><trkseg>
    <trkpt lat="47.000" lon="8.0"><time>2024-05-01T07:00:00Z</time></trkpt>
    <trkpt lat="47.009" lon="8.0"><time>2024-05-01T07:05:00Z</time></trkpt>
    <trkpt lat="47.009" lon="8.0"><time>2024-05-01T07:07:00Z</time></trkpt>
    <trkpt lat="47.018" lon="8.0"><time>2024-05-01T07:12:00Z</time></trkpt>
  </trkseg></trk>
</gpx>"#;

/// Coordinates only: no times, elevation, or heart rate
pub const BARE_GPX: &str = r#"<gpx version="1.1">
  <trk><trkseg>
    <trkpt lat="47.000" lon="8.0"/>
    <trkpt lat="47.009" lon="8.0"/>
  </trkseg></trk>
</gpx>"#;

/// Two laps: 5000 m in 1800 s and 3000 m in 1200 s
pub const TWO_LAP_TCX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities>
    <Activity Sport="Running">
      <Id>2024-05-02T18:00:00Z</Id>
      <Lap StartTime="2024-05-02T18:00:00Z">
        <TotalTimeSeconds>1800</TotalTimeSeconds>
        <DistanceMeters>5000</DistanceMeters>
        <Track>
          <Trackpoint>
            <Time>2024-05-02T18:00:00Z</Time>
            <AltitudeMeters>100</AltitudeMeters>
            <DistanceMeters>0</DistanceMeters>
            <HeartRateBpm><Value>140</Value></HeartRateBpm>
          </Trackpoint>
          <Trackpoint>
            <Time>2024-05-02T18:15:00Z</Time>
            <AltitudeMeters>110</AltitudeMeters>
            <DistanceMeters>2500</DistanceMeters>
            <HeartRateBpm><Value>150</Value></HeartRateBpm>
          </Trackpoint>
          <Trackpoint>
            <Time>2024-05-02T18:30:00Z</Time>
            <AltitudeMeters>105</AltitudeMeters>
            <DistanceMeters>5000</DistanceMeters>
            <HeartRateBpm><Value>161</Value></HeartRateBpm>
          </Trackpoint>
        </Track>
      </Lap>
      <Lap StartTime="2024-05-02T18:30:00Z">
        <TotalTimeSeconds>1200</TotalTimeSeconds>
        <DistanceMeters>3000</DistanceMeters>
        <Track>
          <Trackpoint>
            <Time>2024-05-02T18:30:00Z</Time>
            <AltitudeMeters>105</AltitudeMeters>
            <DistanceMeters>5000</DistanceMeters>
          </Trackpoint>
          <Trackpoint>
            <Time>2024-05-02T18:50:00Z</Time>
            <AltitudeMeters>107</AltitudeMeters>
            <DistanceMeters>8000</DistanceMeters>
          </Trackpoint>
        </Track>
      </Lap>
    </Activity>
  </Activities>
</TrainingCenterDatabase>"#;

/// 2024-05-01 07:00:00 UTC
pub fn morning_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 7, 0, 0).single().unwrap()
}

/// Raw assessment from label strings
pub fn raw(feeling: &str, difficulty: &str, notes: &str) -> RawAssessment {
    RawAssessment {
        feeling: feeling.to_owned(),
        difficulty: difficulty.to_owned(),
        notes: notes.to_owned(),
    }
}

/// Validated assessment from scores
pub fn assessment(feeling: u8, difficulty: u8) -> NormalizedAssessment {
    NormalizedAssessment::new(feeling, difficulty, "").unwrap()
}

/// Metrics with the given distance and pace and nothing optional
pub fn metrics(distance_km: f64, pace_min_per_km: f64) -> ActivityMetrics {
    ActivityMetrics {
        source_filename: "fixture.gpx".to_owned(),
        total_distance_km: distance_km,
        duration_s: distance_km * pace_min_per_km * 60.0,
        avg_pace_min_per_km: pace_min_per_km,
        elevation_gain_m: None,
        max_heart_rate: None,
        avg_heart_rate: None,
        timestamp: None,
    }
}

/// Float comparison with a tolerance suited to rounded metrics
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
