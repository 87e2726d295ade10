// ABOUTME: Core types and constants for the AfterRun activity feedback engine
// ABOUTME: Foundation crate with error handling, domain models, thresholds, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `AfterRun` Core
//!
//! Foundation crate shared by the intelligence crate and the application
//! crate. It changes rarely and carries no I/O.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `AppResult` alias
//! - **constants**: band thresholds, assessment scales, units, retention
//! - **models**: track stream types, `ActivityMetrics`, assessments, `FeedbackResult`
//! - **formatters**: `HH:MM:SS` durations, `MM:SS` paces, two-decimal rounding

/// Unified error handling with error codes
pub mod errors;

/// Thresholds and limits organized by domain
pub mod constants;

/// Domain models
pub mod models;

/// Duration and pace formatting
pub mod formatters;
