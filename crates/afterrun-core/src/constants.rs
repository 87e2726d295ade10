// ABOUTME: Named thresholds and limits for activity extraction and feedback rules
// ABOUTME: Distance and pace bands, heart-rate cutoffs, assessment scales, units, and retention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Band boundaries are lower-inclusive: a value equal to a boundary belongs
//! to the band above it.

/// Distance bands used for the context text (kilometers)
pub mod distance_bands {
    /// Runs below this distance are framed as short or recovery runs
    pub const MEDIUM_RUN_MIN_KM: f64 = 5.0;
    /// Runs from this distance on are framed as long endurance runs
    pub const LONG_RUN_MIN_KM: f64 = 10.0;
    /// Runs from this distance on are framed as very long runs
    pub const VERY_LONG_RUN_MIN_KM: f64 = 21.0;
    /// Runs strictly longer than this get the "what sustained you" prompt
    pub const LONG_DISTANCE_PROMPT_KM: f64 = 10.0;
}

/// Pace bands used for the context text (minutes per kilometer)
pub mod pace_bands {
    /// Paces below this are very fast
    pub const BRISK_MIN_PACE: f64 = 4.5;
    /// Paces below this (and at least brisk) are brisk
    pub const MODERATE_MIN_PACE: f64 = 5.5;
    /// Paces from this on are easy or relaxed
    pub const EASY_MIN_PACE: f64 = 6.5;
    /// Paces below this get the breathing prompt, others the energy prompt
    pub const FAST_PACE_PROMPT: f64 = 5.0;
}

/// Heart-rate cutoffs (beats per minute)
pub mod heart_rate {
    /// Average heart rate above this gets the intensity prompt
    pub const HIGH_AVERAGE_HR_BPM: u32 = 160;
}

/// Ordinal assessment scales
pub mod assessment {
    /// Lowest ordinal score
    pub const MIN_SCORE: u8 = 1;
    /// Highest ordinal score
    pub const MAX_SCORE: u8 = 5;
    /// Feeling scores at or above this are "high"
    pub const HIGH_FEELING_MIN: u8 = 4;
    /// Feeling score treated as "mid"
    pub const MID_FEELING: u8 = 3;
    /// Difficulty scores at or below this are "easy"
    pub const EASY_DIFFICULTY_MAX: u8 = 2;
    /// Difficulty scores at or above this are "hard"
    pub const HARD_DIFFICULTY_MIN: u8 = 4;
    /// Maximum length of the free-text notes, in characters
    pub const MAX_NOTES_CHARS: usize = 500;
}

/// Track extraction parameters
pub mod extraction {
    /// Intervals at or below this speed count as stopped (km/h)
    pub const DEFAULT_STOPPED_SPEED_KMH: f64 = 1.0;
    /// Mean Earth radius used for haversine distances (meters)
    pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
    /// Weight of the neighbouring samples in the elevation smoothing window
    pub const ELEVATION_NEIGHBOUR_WEIGHT: f64 = 0.3;
    /// Weight of the center sample in the elevation smoothing window
    pub const ELEVATION_CENTER_WEIGHT: f64 = 0.4;
}

/// Unit conversions
pub mod units {
    /// Meters per kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: u64 = 3600;
    /// Seconds per day
    pub const SECONDS_PER_DAY: u64 = 86_400;
}

/// Upload retention
pub mod retention {
    /// Uploads older than this many whole days are deleted by the sweeper
    pub const DEFAULT_RETENTION_DAYS: u64 = 7;
    /// Default upload directory, relative to the working directory
    pub const DEFAULT_UPLOAD_DIR: &str = "data/uploads";
}
