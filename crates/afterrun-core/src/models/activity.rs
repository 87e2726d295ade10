// ABOUTME: Activity models produced by format adapters and the metrics aggregator
// ABOUTME: TrackPoint and TrackSegment stream types plus the immutable ActivityMetrics record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::formatters::{format_duration, format_pace};

/// A single normalized sample of a recorded track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Recording time of the sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Heart rate in beats per minute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    /// Elevation in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    /// Distance covered since the previous point of the segment (meters)
    pub distance_delta_m: f64,
    /// Time elapsed since the previous point of the segment (seconds)
    pub time_delta_s: f64,
}

/// A contiguous part of an activity (GPX track segment or TCX lap)
///
/// Moving distance and time exclude intervals where the athlete was stopped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackSegment {
    /// Distance covered while moving (meters)
    pub moving_distance_m: f64,
    /// Time spent moving (seconds)
    pub moving_time_s: f64,
    /// Cumulative upward elevation change (meters), descents not netted
    pub ascent_m: f64,
    /// Declared start of the segment, if the format records one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    /// Ordered samples of the segment
    pub points: Vec<TrackPoint>,
}

impl TrackSegment {
    /// Heart-rate samples of this segment in recording order
    pub fn heart_rates(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.iter().filter_map(|point| point.heart_rate)
    }

    /// First recorded timestamp of this segment
    #[must_use]
    pub fn first_timestamp(&self) -> Option<DateTime<Utc>> {
        self.points.iter().find_map(|point| point.timestamp)
    }
}

/// Summary metrics of one uploaded activity
///
/// Built once per file by the metrics aggregator. All decimal values are
/// rounded to two places. `avg_pace_min_per_km` is zero whenever the
/// distance is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetrics {
    /// File name the metrics were extracted from
    pub source_filename: String,
    /// Total moving distance in kilometers
    pub total_distance_km: f64,
    /// Total moving time in seconds
    pub duration_s: f64,
    /// Average pace in minutes per kilometer
    pub avg_pace_min_per_km: f64,
    /// Elevation gain in meters, only when positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    /// Maximum heart rate in bpm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heart_rate: Option<u32>,
    /// Average heart rate in bpm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate: Option<u32>,
    /// Start of the activity (first recorded timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ActivityMetrics {
    /// Duration as `HH:MM:SS`
    #[must_use]
    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration_s)
    }

    /// Average pace as `MM:SS`
    #[must_use]
    pub fn pace_formatted(&self) -> String {
        format_pace(self.avg_pace_min_per_km)
    }

    /// Whether any heart-rate samples were recorded
    #[must_use]
    pub const fn has_heart_rate(&self) -> bool {
        self.avg_heart_rate.is_some()
    }
}
