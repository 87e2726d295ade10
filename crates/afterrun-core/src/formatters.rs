// ABOUTME: Display formatting for activity metrics (durations, paces) and metric rounding
// ABOUTME: Produces HH:MM:SS durations with unbounded hours and MM:SS paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: values clamped to >= 0 first

use crate::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Round to two decimal places, the precision of every reported metric
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a duration in seconds as `HH:MM:SS`
///
/// Fractional seconds are truncated. Hours are not wrapped at 24, so a
/// 25-hour ultra reads `25:00:00`. Negative input is treated as zero.
#[must_use]
pub fn format_duration(total_seconds: f64) -> String {
    let total = total_seconds.max(0.0) as u64;
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format a pace in decimal minutes per kilometer as `MM:SS`
///
/// The seconds part is truncated, so 5.28 min/km reads `05:16`.
#[must_use]
pub fn format_pace(pace_min_per_km: f64) -> String {
    let pace = pace_min_per_km.max(0.0);
    let minutes = pace.trunc();
    let seconds = ((pace - minutes) * SECONDS_PER_MINUTE).trunc();
    format!("{:02}:{:02}", minutes as u64, seconds as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "00:00:00");
        assert_eq!(format_duration(3900.0), "01:05:00");
        assert_eq!(format_duration(59.9), "00:00:59");
        assert_eq!(format_duration(3661.0), "01:01:01");
    }

    #[test]
    fn test_format_duration_beyond_one_day() {
        assert_eq!(format_duration(90_000.0), "25:00:00");
        assert_eq!(format_duration(360_005.0), "100:00:05");
    }

    #[test]
    fn test_format_duration_negative_clamps() {
        assert_eq!(format_duration(-5.0), "00:00:00");
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(5.28), "05:16");
        assert_eq!(format_pace(0.0), "00:00");
        assert_eq!(format_pace(6.5), "06:30");
        assert_eq!(format_pace(12.0), "12:00");
    }

    #[test]
    fn test_round2() {
        assert!((round2(5.284_552) - 5.28).abs() < f64::EPSILON);
        assert!((round2(12.345_6) - 12.35).abs() < f64::EPSILON);
        assert!(round2(0.0).abs() < f64::EPSILON);
    }
}
