// ABOUTME: Folds decoded track segments into a single ActivityMetrics record
// ABOUTME: Moving distance and time sums, ascent, heart-rate aggregates, pace, representative timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Metrics aggregation
#![allow(clippy::cast_possible_truncation)] // Safe: heart-rate means stay within u32 range
#![allow(clippy::cast_sign_loss)] // Safe: heart-rate samples are unsigned

use afterrun_core::constants::units::{METERS_PER_KM, SECONDS_PER_MINUTE};
use afterrun_core::formatters::round2;
use afterrun_core::models::{ActivityMetrics, TrackSegment};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Running totals over the segments of one activity
///
/// Segments are pushed in recording order. Nothing is rounded until
/// [`MetricsAccumulator::finish`].
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
    distance_m: f64,
    moving_time_s: f64,
    ascent_m: f64,
    heart_rate_sum: u64,
    heart_rate_count: u64,
    max_heart_rate: Option<u32>,
    first_timestamp: Option<DateTime<Utc>>,
    first_segment_start: Option<DateTime<Utc>>,
    segments: usize,
}

impl MetricsAccumulator {
    /// Empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one segment to the totals
    pub fn push_segment(&mut self, segment: &TrackSegment) {
        self.distance_m += segment.moving_distance_m;
        self.moving_time_s += segment.moving_time_s;
        self.ascent_m += segment.ascent_m;

        for heart_rate in segment.heart_rates() {
            self.heart_rate_sum += u64::from(heart_rate);
            self.heart_rate_count += 1;
            self.max_heart_rate = Some(self.max_heart_rate.map_or(heart_rate, |max| max.max(heart_rate)));
        }

        if self.first_timestamp.is_none() {
            self.first_timestamp = segment.first_timestamp();
        }
        if self.segments == 0 {
            self.first_segment_start = segment.started_at;
        }
        self.segments += 1;
    }

    /// Number of segments pushed so far
    #[must_use]
    pub const fn segment_count(&self) -> usize {
        self.segments
    }

    /// Produce the rounded metrics record
    #[must_use]
    pub fn finish(self, source_filename: impl Into<String>) -> ActivityMetrics {
        // pace derives from the reported (rounded) distance and duration
        let distance_km = round2(self.distance_m / METERS_PER_KM);
        let duration_s = round2(self.moving_time_s);
        let avg_pace = if distance_km > 0.0 {
            round2((duration_s / SECONDS_PER_MINUTE) / distance_km)
        } else {
            0.0
        };

        let avg_heart_rate = (self.heart_rate_count > 0).then(|| {
            let mean = self.heart_rate_sum as f64 / self.heart_rate_count as f64;
            mean.round() as u32
        });

        let elevation_gain = round2(self.ascent_m);

        ActivityMetrics {
            source_filename: source_filename.into(),
            total_distance_km: distance_km,
            duration_s,
            avg_pace_min_per_km: avg_pace,
            elevation_gain_m: (self.ascent_m > 0.0).then_some(elevation_gain),
            max_heart_rate: self.max_heart_rate,
            avg_heart_rate,
            timestamp: self.first_timestamp.or(self.first_segment_start),
        }
    }
}

/// Stateless entry point for whole activities
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// Fold all segments of one activity into its metrics
    #[must_use]
    pub fn aggregate(source_filename: &str, segments: &[TrackSegment]) -> ActivityMetrics {
        let mut accumulator = MetricsAccumulator::new();
        for segment in segments {
            accumulator.push_segment(segment);
        }
        let metrics = accumulator.finish(source_filename);

        debug!(
            file = source_filename,
            segments = segments.len(),
            distance_km = metrics.total_distance_km,
            duration_s = metrics.duration_s,
            "aggregated activity metrics"
        );
        metrics
    }
}
