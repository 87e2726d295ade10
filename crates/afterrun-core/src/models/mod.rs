// ABOUTME: Domain models for the activity feedback pipeline
// ABOUTME: Re-exports activity, assessment, and feedback types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Track points, segments, and aggregated activity metrics
pub mod activity;
/// Raw and normalized self-assessment
pub mod assessment;
/// Structured feedback output
pub mod feedback;

pub use activity::{ActivityMetrics, TrackPoint, TrackSegment};
pub use assessment::{DifficultyLevel, FeelingLevel, NormalizedAssessment, RawAssessment};
pub use feedback::FeedbackResult;
