// ABOUTME: Main library entry point for the AfterRun activity feedback tool
// ABOUTME: Track format adapters, the analysis pipeline, upload storage, config, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `AfterRun`
//!
//! Turns a recorded run (GPX or TCX) and a short self-assessment into
//! deterministic feedback comparing objective data with how the run felt.
//!
//! ## Architecture
//!
//! - **importers**: `TrackFormat` variants decoding files into track segments
//! - **pipeline**: file to `ActivityMetrics` to `FeedbackResult`, plus the
//!   explicit `AnalysisSession`
//! - **storage**: upload persistence and the retention sweeper
//! - **config**: environment-only application settings
//! - **logging**: tracing subscriber setup
//!
//! Metrics aggregation, assessment normalization, and the feedback rules live
//! in `afterrun-intelligence`; shared models and errors in `afterrun-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use afterrun::pipeline::ActivityPipeline;
//! use afterrun_core::errors::AppResult;
//! use afterrun_core::models::RawAssessment;
//!
//! fn main() -> AppResult<()> {
//!     let pipeline = ActivityPipeline::default();
//!     let raw = RawAssessment {
//!         feeling: "4 - Good".to_owned(),
//!         difficulty: "Moderate".to_owned(),
//!         notes: String::new(),
//!     };
//!     let report = pipeline.analyze(Path::new("morning_run.gpx"), &raw)?;
//!     println!("{}", report.feedback.summary);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// GPX and TCX format adapters
pub mod importers;

/// Logging configuration and subscriber setup
pub mod logging;

/// Track-to-feedback pipeline and analysis session
pub mod pipeline;

/// Upload persistence and retention
pub mod storage;

pub use config::AppConfig;
pub use importers::{ImportConfig, TrackFormat};
pub use pipeline::{ActivityPipeline, AnalysisReport, AnalysisSession};
pub use storage::{FsUploadStore, RetentionSweeper, SweepReport, UploadStore};
