// ABOUTME: Feedback rule configuration with environment overrides and validation
// ABOUTME: Distance and pace band thresholds, heart-rate cutoff, and output locale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Feedback engine configuration
//!
//! Defaults come from [`afterrun_core::constants`]. Deployments can override
//! individual thresholds through `FEEDBACK_*` environment variables; the
//! result is validated before use. The locale is chosen by the application.

use afterrun_core::constants::{distance_bands, heart_rate, pace_bands};
use afterrun_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::messages::Locale;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable holds a value that does not parse
    #[error("Parse error: {var}={value}")]
    Parse {
        /// Variable name
        var: &'static str,
        /// Offending value
        value: String,
    },

    /// Thresholds are not strictly ascending or not positive
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Locale code is not supported
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

/// Distance band thresholds (kilometers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceBandConfig {
    /// Lower bound of the medium band
    pub medium_min_km: f64,
    /// Lower bound of the long band
    pub long_min_km: f64,
    /// Lower bound of the very long band
    pub very_long_min_km: f64,
    /// Distances strictly above this trigger the long-distance prompt
    pub long_prompt_km: f64,
}

/// Pace band thresholds (minutes per kilometer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceBandConfig {
    /// Lower bound of the brisk band
    pub brisk_min: f64,
    /// Lower bound of the moderate band
    pub moderate_min: f64,
    /// Lower bound of the easy band
    pub easy_min: f64,
    /// Paces strictly below this trigger the breathing prompt
    pub fast_prompt: f64,
}

/// Complete feedback engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Distance bands
    pub distance: DistanceBandConfig,
    /// Pace bands
    pub pace: PaceBandConfig,
    /// Average heart rate strictly above this triggers the intensity prompt
    pub high_avg_heart_rate_bpm: u32,
    /// Language of the generated text
    pub locale: Locale,
}

impl Default for DistanceBandConfig {
    fn default() -> Self {
        Self {
            medium_min_km: distance_bands::MEDIUM_RUN_MIN_KM,
            long_min_km: distance_bands::LONG_RUN_MIN_KM,
            very_long_min_km: distance_bands::VERY_LONG_RUN_MIN_KM,
            long_prompt_km: distance_bands::LONG_DISTANCE_PROMPT_KM,
        }
    }
}

impl Default for PaceBandConfig {
    fn default() -> Self {
        Self {
            brisk_min: pace_bands::BRISK_MIN_PACE,
            moderate_min: pace_bands::MODERATE_MIN_PACE,
            easy_min: pace_bands::EASY_MIN_PACE,
            fast_prompt: pace_bands::FAST_PACE_PROMPT,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            distance: DistanceBandConfig::default(),
            pace: PaceBandConfig::default(),
            high_avg_heart_rate_bpm: heart_rate::HIGH_AVERAGE_HR_BPM,
            locale: Locale::default(),
        }
    }
}

impl FeedbackConfig {
    /// Default thresholds with a different output language
    #[must_use]
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable does not parse or the resulting
    /// thresholds fail validation
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        override_from_env("FEEDBACK_MEDIUM_RUN_KM", &mut config.distance.medium_min_km)?;
        override_from_env("FEEDBACK_LONG_RUN_KM", &mut config.distance.long_min_km)?;
        override_from_env(
            "FEEDBACK_VERY_LONG_RUN_KM",
            &mut config.distance.very_long_min_km,
        )?;
        override_from_env("FEEDBACK_LONG_PROMPT_KM", &mut config.distance.long_prompt_km)?;
        override_from_env("FEEDBACK_BRISK_PACE", &mut config.pace.brisk_min)?;
        override_from_env("FEEDBACK_MODERATE_PACE", &mut config.pace.moderate_min)?;
        override_from_env("FEEDBACK_EASY_PACE", &mut config.pace.easy_min)?;
        override_from_env("FEEDBACK_FAST_PROMPT_PACE", &mut config.pace.fast_prompt)?;
        override_from_env("FEEDBACK_HIGH_HR_BPM", &mut config.high_avg_heart_rate_bpm)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any band is not strictly ascending or a threshold
    /// is not a positive finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        let distance = &self.distance;
        if ![
            distance.medium_min_km,
            distance.long_min_km,
            distance.very_long_min_km,
            distance.long_prompt_km,
        ]
        .into_iter()
        .all(positive)
        {
            return Err(ConfigError::InvalidRange(
                "distance thresholds must be positive",
            ));
        }
        if !(distance.medium_min_km < distance.long_min_km
            && distance.long_min_km < distance.very_long_min_km)
        {
            return Err(ConfigError::InvalidRange(
                "distance bands must be strictly ascending",
            ));
        }

        let pace = &self.pace;
        if ![pace.brisk_min, pace.moderate_min, pace.easy_min, pace.fast_prompt]
            .into_iter()
            .all(positive)
        {
            return Err(ConfigError::InvalidRange("pace thresholds must be positive"));
        }
        if !(pace.brisk_min < pace.moderate_min && pace.moderate_min < pace.easy_min) {
            return Err(ConfigError::InvalidRange(
                "pace bands must be strictly ascending",
            ));
        }

        if self.high_avg_heart_rate_bpm == 0 {
            return Err(ConfigError::InvalidRange(
                "heart-rate threshold must be positive",
            ));
        }
        Ok(())
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn override_from_env<T: FromStr>(var: &'static str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(value) = env::var(var) {
        *target = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { var, value })?;
    }
    Ok(())
}
