// ABOUTME: Unified error type and error codes for the activity feedback pipeline
// ABOUTME: Covers unsupported formats, parse failures, invalid assessments, storage and config errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible stage of the pipeline (format adapters, aggregator input,
//! assessment normalization, upload storage, environment configuration)
//! reports failures through [`AppError`]. The [`ErrorCode`] identifies the
//! failure class; the message carries specifics and `source` keeps the
//! underlying cause for error chains.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Standard error codes used throughout the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// File extension is not one of the supported track formats
    UnsupportedFormat,
    /// File is present but structurally invalid for its claimed format
    ParseError,
    /// Assessment label or score outside the closed set
    InvalidAssessment,
    /// Upload persistence or retention sweep failed
    StorageError,
    /// Environment configuration value could not be parsed or validated
    ConfigInvalid,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnsupportedFormat => "Unsupported activity file format",
            Self::ParseError => "Activity file could not be parsed",
            Self::InvalidAssessment => "Self-assessment input is invalid",
            Self::StorageError => "Storage operation failed",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether the failure was caused by the uploaded activity file
    ///
    /// The presentation layer reports these as "could not process this file"
    /// and lets the user retry with another file.
    #[must_use]
    pub const fn is_file_rejection(self) -> bool {
        matches!(self, Self::UnsupportedFormat | Self::ParseError)
    }
}

/// Unified error type for the pipeline
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Unsupported file extension
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        let shown = if extension.is_empty() {
            "<none>".to_owned()
        } else {
            extension
        };
        Self::new(
            ErrorCode::UnsupportedFormat,
            format!("extension '{shown}' is not one of: gpx, tcx"),
        )
    }

    /// Structurally invalid activity file
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, message)
    }

    /// Assessment label or score outside the closed set
    pub fn invalid_assessment(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAssessment, message)
    }

    /// Upload storage or sweep failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Invalid configuration value
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Message suitable for showing to the person who uploaded the file
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.code.is_file_rejection() {
            "could not process this file".to_owned()
        } else {
            self.code.description().to_owned()
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}
