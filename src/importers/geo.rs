// ABOUTME: Geodesic helpers for GPS tracks: haversine distance, moving data, smoothed ascent
// ABOUTME: Turns raw GPX samples into a TrackSegment with per-point deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use afterrun_core::constants::extraction::{
    EARTH_RADIUS_M, ELEVATION_CENTER_WEIGHT, ELEVATION_NEIGHBOUR_WEIGHT,
};
use afterrun_core::models::{TrackPoint, TrackSegment};
use chrono::{DateTime, Utc};

const MS_TO_KMH: f64 = 3.6;

/// A raw GPS sample as read from the file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoSample {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Elevation in meters
    pub elevation: Option<f64>,
    /// Recording time
    pub timestamp: Option<DateTime<Utc>>,
    /// Heart rate in bpm
    pub heart_rate: Option<u32>,
}

/// Great-circle distance between two coordinates in meters
#[must_use]
pub fn haversine_m(from: &GeoSample, to: &GeoSample) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Distance between two samples, 3D when both carry an elevation
#[must_use]
pub fn distance_m(from: &GeoSample, to: &GeoSample) -> f64 {
    let ground = haversine_m(from, to);
    match (from.elevation, to.elevation) {
        (Some(a), Some(b)) => ground.hypot(b - a),
        _ => ground,
    }
}

/// Cumulative ascent over a smoothed elevation profile
///
/// Each inner sample is replaced by a 0.3/0.4/0.3 weighted mean of itself
/// and its neighbours; the first and last samples are kept as recorded.
#[must_use]
pub fn smoothed_ascent(elevations: &[f64]) -> f64 {
    let len = elevations.len();
    let smoothed: Vec<f64> = (0..len)
        .map(|i| {
            if i == 0 || i + 1 >= len {
                elevations[i]
            } else {
                ELEVATION_NEIGHBOUR_WEIGHT * elevations[i - 1]
                    + ELEVATION_CENTER_WEIGHT * elevations[i]
                    + ELEVATION_NEIGHBOUR_WEIGHT * elevations[i + 1]
            }
        })
        .collect();

    smoothed
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|delta| *delta > 0.0)
        .sum()
}

fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}

/// Build a segment from raw samples
///
/// An interval between two timed samples counts as moving when its speed
/// is above `stopped_speed_kmh`; untimed intervals never count.
#[must_use]
pub fn build_segment(samples: &[GeoSample], stopped_speed_kmh: f64) -> TrackSegment {
    let mut segment = TrackSegment {
        points: Vec::with_capacity(samples.len()),
        ..TrackSegment::default()
    };

    let mut previous: Option<&GeoSample> = None;
    for sample in samples {
        let mut point = TrackPoint {
            timestamp: sample.timestamp,
            heart_rate: sample.heart_rate,
            elevation: sample.elevation,
            ..TrackPoint::default()
        };

        if let Some(prev) = previous {
            let distance = distance_m(prev, sample);
            point.distance_delta_m = distance;

            if let (Some(start), Some(end)) = (prev.timestamp, sample.timestamp) {
                let seconds = seconds_between(start, end);
                point.time_delta_s = seconds;
                if seconds > 0.0 && distance / seconds * MS_TO_KMH > stopped_speed_kmh {
                    segment.moving_time_s += seconds;
                    segment.moving_distance_m += distance;
                }
            }
        }

        segment.points.push(point);
        previous = Some(sample);
    }

    let elevations: Vec<f64> = samples.iter().filter_map(|sample| sample.elevation).collect();
    segment.ascent_m = smoothed_ascent(&elevations);
    segment
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(latitude: f64, longitude: f64, second: u32) -> GeoSample {
        GeoSample {
            latitude,
            longitude,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 7, 0, second).single(),
            ..GeoSample::default()
        }
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let distance = haversine_m(&sample(0.0, 0.0, 0), &sample(1.0, 0.0, 0));
        assert!((distance - 111_194.9).abs() < 1.0, "got {distance}");
    }

    #[test]
    fn test_three_dimensional_distance_uses_elevation() {
        let mut low = sample(47.0, 8.0, 0);
        let mut high = sample(47.0, 8.0, 10);
        low.elevation = Some(400.0);
        high.elevation = Some(430.0);
        assert!((distance_m(&low, &high) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_smoothing_removes_single_spike() {
        // 0.3*100 + 0.4*110 + 0.3*100 = 104
        let ascent = smoothed_ascent(&[100.0, 110.0, 100.0]);
        assert!((ascent - 4.0).abs() < 1e-9, "got {ascent}");
    }

    #[test]
    fn test_smoothed_ascent_of_short_profiles() {
        assert!(smoothed_ascent(&[]).abs() < f64::EPSILON);
        assert!(smoothed_ascent(&[120.0]).abs() < f64::EPSILON);
        assert!((smoothed_ascent(&[100.0, 105.0]) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_standing_still_is_not_moving() {
        let segment = build_segment(
            &[sample(47.0, 8.0, 0), sample(47.0, 8.0, 30), sample(47.0009, 8.0, 50)],
            1.0,
        );
        assert!((segment.moving_time_s - 20.0).abs() < 1e-9);
        assert!(segment.moving_distance_m > 99.0 && segment.moving_distance_m < 101.0);
        assert_eq!(segment.points.len(), 3);
        assert!((segment.points[1].time_delta_s - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_untimed_samples_contribute_no_moving_data() {
        let mut untimed = sample(47.0, 8.0, 0);
        untimed.timestamp = None;
        let segment = build_segment(&[untimed, sample(47.01, 8.0, 10)], 1.0);
        assert!(segment.moving_time_s.abs() < f64::EPSILON);
        assert!(segment.points[1].distance_delta_m > 1000.0);
    }
}
