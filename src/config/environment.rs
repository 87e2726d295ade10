// ABOUTME: Environment configuration for the AfterRun application
// ABOUTME: Upload directory, retention period, output locale, and stopped-speed threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-only configuration
//!
//! | variable | default |
//! |---|---|
//! | `AFTERRUN_UPLOAD_DIR` | `data/uploads` |
//! | `AFTERRUN_RETENTION_DAYS` | `7` |
//! | `AFTERRUN_LOCALE` | `en` |
//! | `AFTERRUN_STOPPED_SPEED_KMH` | `1.0` |

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use afterrun_core::constants::extraction::DEFAULT_STOPPED_SPEED_KMH;
use afterrun_core::constants::retention::{DEFAULT_RETENTION_DAYS, DEFAULT_UPLOAD_DIR};
use afterrun_core::errors::{AppError, AppResult};
use afterrun_intelligence::{FeedbackConfig, Locale};
use serde::Serialize;
use tracing::info;

use crate::importers::ImportConfig;

/// Upload directory variable
pub const UPLOAD_DIR_VAR: &str = "AFTERRUN_UPLOAD_DIR";
/// Retention period variable
pub const RETENTION_DAYS_VAR: &str = "AFTERRUN_RETENTION_DAYS";
/// Output locale variable
pub const LOCALE_VAR: &str = "AFTERRUN_LOCALE";
/// Stopped-speed threshold variable
pub const STOPPED_SPEED_VAR: &str = "AFTERRUN_STOPPED_SPEED_KMH";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    /// Directory uploads are stored in and swept from
    pub upload_dir: PathBuf,
    /// Uploads older than this many whole days are deleted
    pub retention_days: u64,
    /// Language of the feedback text
    pub locale: Locale,
    /// Intervals at or below this speed count as stopped (km/h)
    pub stopped_speed_kmh: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            retention_days: DEFAULT_RETENTION_DAYS,
            locale: Locale::default(),
            stopped_speed_kmh: DEFAULT_STOPPED_SPEED_KMH,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set to a value that does
    /// not parse or fails validation
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            upload_dir: env::var(UPLOAD_DIR_VAR).map_or(defaults.upload_dir, PathBuf::from),
            retention_days: env_parse(RETENTION_DAYS_VAR, defaults.retention_days)?,
            locale: env_parse(LOCALE_VAR, defaults.locale)?,
            stopped_speed_kmh: env_parse(STOPPED_SPEED_VAR, defaults.stopped_speed_kmh)?,
        };
        config.validate()?;
        info!(
            upload_dir = %config.upload_dir.display(),
            retention_days = config.retention_days,
            locale = %config.locale,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for an empty upload directory or a negative or
    /// non-finite stopped-speed threshold
    pub fn validate(&self) -> AppResult<()> {
        if self.upload_dir.as_os_str().is_empty() {
            return Err(AppError::config(format!("{UPLOAD_DIR_VAR} must not be empty")));
        }
        if !self.stopped_speed_kmh.is_finite() || self.stopped_speed_kmh < 0.0 {
            return Err(AppError::config(format!(
                "{STOPPED_SPEED_VAR} must be a non-negative number, got {}",
                self.stopped_speed_kmh
            )));
        }
        Ok(())
    }

    /// Extraction parameters for the format adapters
    #[must_use]
    pub const fn import_config(&self) -> ImportConfig {
        ImportConfig {
            stopped_speed_kmh: self.stopped_speed_kmh,
        }
    }

    /// Feedback thresholds from `FEEDBACK_*` variables in this locale
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a threshold override is invalid
    pub fn feedback_config(&self) -> AppResult<FeedbackConfig> {
        let mut feedback = FeedbackConfig::from_environment()?;
        feedback.locale = self.locale;
        Ok(feedback)
    }
}

fn env_parse<T>(var: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("invalid {var} value '{value}': {e}"))),
        Err(_) => Ok(default),
    }
}
