// ABOUTME: Intelligence layer of AfterRun: aggregation, normalization, and feedback rules
// ABOUTME: Pure, synchronous transformations with no I/O beyond tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `AfterRun` Intelligence
//!
//! Turns decoded track segments into [`ActivityMetrics`](afterrun_core::models::ActivityMetrics)
//! and pairs them with a self-assessment to produce deterministic feedback.

/// Segment folding into activity metrics
pub mod aggregator;

/// Raw label to ordinal score mapping
pub mod assessment;

/// Feedback thresholds and environment overrides
pub mod config;

/// Rule-based feedback generation
pub mod feedback_engine;

/// Localized phrase catalogs
pub mod messages;

pub use aggregator::{MetricsAccumulator, MetricsAggregator};
pub use assessment::AssessmentNormalizer;
pub use config::{ConfigError, FeedbackConfig};
pub use feedback_engine::{DistanceBand, FeedbackEngine, FeelingNarrative, PaceBand};
pub use messages::Locale;
