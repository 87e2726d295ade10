// ABOUTME: Garmin TCX decoder producing one TrackSegment per lap
// ABOUTME: Lap totals give moving time and distance; trackpoints give samples and activity-wide ascent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use afterrun_core::errors::AppResult;
use afterrun_core::models::{TrackPoint, TrackSegment};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::xml::{
    parse_measure, parse_non_negative, parse_number, parse_timestamp, path_ends_with, walk, XmlNode,
};

const ROOT: &str = "TrainingCenterDatabase";

#[derive(Debug, Default)]
struct TcxSample {
    time: Option<DateTime<Utc>>,
    altitude_m: Option<f64>,
    cumulative_m: Option<f64>,
    heart_rate: Option<u32>,
}

#[derive(Debug, Default)]
struct LapBuilder {
    start: Option<DateTime<Utc>>,
    total_time_s: Option<f64>,
    distance_m: Option<f64>,
    samples: Vec<TcxSample>,
}

impl LapBuilder {
    fn time_span_s(&self) -> f64 {
        let mut times = self.samples.iter().filter_map(|sample| sample.time);
        match (times.next(), times.last()) {
            (Some(first), Some(last)) => ((last - first).num_milliseconds() as f64 / 1000.0).max(0.0),
            _ => 0.0,
        }
    }

    fn distance_span_m(&self) -> f64 {
        let mut distances = self.samples.iter().filter_map(|sample| sample.cumulative_m);
        match (distances.next(), distances.last()) {
            (Some(first), Some(last)) => (last - first).max(0.0),
            _ => 0.0,
        }
    }

    fn last_altitude_m(&self) -> Option<f64> {
        self.samples.iter().rev().find_map(|sample| sample.altitude_m)
    }

    /// Positive altitude deltas, starting from the previous lap's last altitude
    fn ascent_m(&self, previous_altitude_m: Option<f64>) -> f64 {
        let altitudes: Vec<f64> = previous_altitude_m
            .into_iter()
            .chain(self.samples.iter().filter_map(|s| s.altitude_m))
            .collect();
        altitudes
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .filter(|delta| *delta > 0.0)
            .sum()
    }

    fn finish(self, previous_altitude_m: Option<f64>) -> TrackSegment {
        let moving_time_s = self.total_time_s.unwrap_or_else(|| self.time_span_s());
        let moving_distance_m = self.distance_m.unwrap_or_else(|| self.distance_span_m());
        let ascent_m = self.ascent_m(previous_altitude_m);

        let mut points = Vec::with_capacity(self.samples.len());
        let mut previous: Option<&TcxSample> = None;
        for sample in &self.samples {
            let mut point = TrackPoint {
                timestamp: sample.time,
                heart_rate: sample.heart_rate,
                elevation: sample.altitude_m,
                ..TrackPoint::default()
            };
            if let Some(prev) = previous {
                if let (Some(a), Some(b)) = (prev.cumulative_m, sample.cumulative_m) {
                    point.distance_delta_m = b - a;
                }
                if let (Some(a), Some(b)) = (prev.time, sample.time) {
                    point.time_delta_s = (b - a).num_milliseconds() as f64 / 1000.0;
                }
            }
            points.push(point);
            previous = Some(sample);
        }

        TrackSegment {
            moving_distance_m,
            moving_time_s,
            ascent_m,
            started_at: self.start,
            points,
        }
    }
}

#[derive(Default)]
struct TcxReader {
    laps: Vec<TrackSegment>,
    lap: Option<LapBuilder>,
    sample: Option<TcxSample>,
    last_altitude_m: Option<f64>,
}

impl TcxReader {
    fn visit(&mut self, node: XmlNode<'_>) -> AppResult<()> {
        match node {
            XmlNode::Open { path, attributes } => {
                if path_ends_with(path, &["Activity", "Lap"]) {
                    let start = attributes
                        .get("StartTime")
                        .map(|value| parse_timestamp("StartTime", value))
                        .transpose()?;
                    self.lap = Some(LapBuilder {
                        start,
                        ..LapBuilder::default()
                    });
                } else if path_ends_with(path, &["Track", "Trackpoint"]) && self.lap.is_some() {
                    self.sample = Some(TcxSample::default());
                }
            }
            XmlNode::Text { path, text } => self.read_field(path, text)?,
            XmlNode::Close { path } => {
                if path_ends_with(path, &["Track", "Trackpoint"]) {
                    if let (Some(sample), Some(lap)) = (self.sample.take(), self.lap.as_mut()) {
                        lap.samples.push(sample);
                    }
                } else if path_ends_with(path, &["Activity", "Lap"]) {
                    if let Some(lap) = self.lap.take() {
                        let previous_altitude_m = self.last_altitude_m;
                        self.last_altitude_m = lap.last_altitude_m().or(previous_altitude_m);
                        let segment = lap.finish(previous_altitude_m);
                        debug!(
                            points = segment.points.len(),
                            moving_distance_m = segment.moving_distance_m,
                            moving_time_s = segment.moving_time_s,
                            "decoded TCX lap"
                        );
                        self.laps.push(segment);
                    }
                }
            }
        }
        Ok(())
    }

    fn read_field(&mut self, path: &[String], text: &str) -> AppResult<()> {
        if let Some(sample) = self.sample.as_mut() {
            if path_ends_with(path, &["Trackpoint", "Time"]) {
                sample.time = Some(parse_timestamp("Time", text)?);
            } else if path_ends_with(path, &["Trackpoint", "AltitudeMeters"]) {
                sample.altitude_m = Some(parse_measure("AltitudeMeters", text)?);
            } else if path_ends_with(path, &["Trackpoint", "DistanceMeters"]) {
                sample.cumulative_m = Some(parse_non_negative("DistanceMeters", text)?);
            } else if path_ends_with(path, &["Trackpoint", "HeartRateBpm", "Value"]) {
                sample.heart_rate = Some(parse_number("HeartRateBpm", text)?);
            }
        } else if let Some(lap) = self.lap.as_mut() {
            if path_ends_with(path, &["Lap", "TotalTimeSeconds"]) {
                lap.total_time_s = Some(parse_non_negative("TotalTimeSeconds", text)?);
            } else if path_ends_with(path, &["Lap", "DistanceMeters"]) {
                lap.distance_m = Some(parse_non_negative("DistanceMeters", text)?);
            }
        }
        Ok(())
    }
}

/// Decode a TCX document into one segment per lap
///
/// Courses carry no laps and therefore produce no segments.
///
/// # Errors
///
/// Returns `ParseError` for malformed XML, a missing
/// `<TrainingCenterDatabase>` root, or an unparsable field value
pub fn decode(bytes: &[u8]) -> AppResult<Vec<TrackSegment>> {
    let mut reader = TcxReader::default();
    walk(bytes, ROOT, |node| reader.visit(node))?;
    Ok(reader.laps)
}
