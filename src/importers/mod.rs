// ABOUTME: Track file format adapters selected by file extension
// ABOUTME: TrackFormat variant with a shared decode capability over GPX and TCX
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Format Adapters
//!
//! Every supported format is a [`TrackFormat`] variant. Adding a format means
//! adding a variant, its extension mapping, and a decoder module.

use std::fmt;
use std::path::Path;

use afterrun_core::constants::extraction::DEFAULT_STOPPED_SPEED_KMH;
use afterrun_core::errors::{AppError, AppResult};
use afterrun_core::models::TrackSegment;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Geodesic distance, moving-data, and ascent helpers
pub mod geo;
/// GPX decoder
pub mod gpx;
/// TCX decoder
pub mod tcx;
/// Shared XML walker
pub mod xml;

/// Supported track file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackFormat {
    /// GPS Exchange Format
    Gpx,
    /// Garmin Training Center XML
    Tcx,
}

/// Extraction parameters shared by all adapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Intervals at or below this speed count as stopped (km/h)
    pub stopped_speed_kmh: f64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            stopped_speed_kmh: DEFAULT_STOPPED_SPEED_KMH,
        }
    }
}

impl TrackFormat {
    /// All supported formats
    pub const ALL: [Self; 2] = [Self::Gpx, Self::Tcx];

    /// Canonical lowercase file extension
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Gpx => "gpx",
            Self::Tcx => "tcx",
        }
    }

    /// Format for a file extension, compared case-insensitively
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for any other extension
    pub fn from_extension(extension: &str) -> AppResult<Self> {
        let wanted = extension.trim_start_matches('.');
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::unsupported_format(wanted))
    }

    /// Format of a file path, by its extension
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` when the path has no supported extension
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy())
            .unwrap_or_default();
        Self::from_extension(&extension)
    }

    /// Decode raw file bytes into track segments
    ///
    /// # Errors
    ///
    /// Returns `ParseError` when the bytes are not a valid document of this
    /// format
    pub fn decode(self, bytes: &[u8], config: &ImportConfig) -> AppResult<Vec<TrackSegment>> {
        let segments = match self {
            Self::Gpx => gpx::decode(bytes, config.stopped_speed_kmh)?,
            Self::Tcx => tcx::decode(bytes)?,
        };
        debug!(format = %self, bytes = bytes.len(), segments = segments.len(), "decoded track file");
        Ok(segments)
    }
}

impl fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
