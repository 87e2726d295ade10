// ABOUTME: End-to-end activity pipeline from track file to metrics and feedback
// ABOUTME: Explicit, immutable analysis session replacing process-wide session state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity Pipeline
//!
//! ```text
//! bytes -> TrackFormat::decode -> MetricsAggregator -> ActivityMetrics
//!                                                           |
//!            RawAssessment -> AssessmentNormalizer ----------+-> FeedbackEngine -> FeedbackResult
//! ```
//!
//! A pipeline holds configuration only, so one instance can serve any
//! number of independent requests.

use std::fs;
use std::path::Path;

use afterrun_core::errors::{AppError, AppResult};
use afterrun_core::models::{ActivityMetrics, FeedbackResult, NormalizedAssessment, RawAssessment};
use afterrun_intelligence::{AssessmentNormalizer, FeedbackConfig, FeedbackEngine, MetricsAggregator};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::importers::{ImportConfig, TrackFormat};

/// Metrics, assessment, and feedback of one analyzed activity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Aggregated activity metrics
    pub metrics: ActivityMetrics,
    /// Normalized self-assessment
    pub assessment: NormalizedAssessment,
    /// Generated feedback
    pub feedback: FeedbackResult,
}

/// Stateless track-to-feedback pipeline
#[derive(Debug, Clone, Default)]
pub struct ActivityPipeline {
    import: ImportConfig,
    engine: FeedbackEngine,
}

impl ActivityPipeline {
    /// Pipeline with explicit extraction and feedback settings
    #[must_use]
    pub const fn new(import: ImportConfig, feedback: FeedbackConfig) -> Self {
        Self {
            import,
            engine: FeedbackEngine::new(feedback),
        }
    }

    /// Pipeline configured from the environment-derived application settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a feedback threshold override is invalid
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        Ok(Self::new(config.import_config(), config.feedback_config()?))
    }

    /// Feedback engine used by this pipeline
    #[must_use]
    pub const fn engine(&self) -> &FeedbackEngine {
        &self.engine
    }

    /// Read and aggregate a track file
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for an unknown extension, `StorageError`
    /// when the file cannot be read, and `ParseError` for invalid content
    pub fn load_activity(&self, path: &Path) -> AppResult<ActivityMetrics> {
        let format = TrackFormat::from_path(path)?;
        let bytes = fs::read(path).map_err(|e| {
            AppError::storage(format!("cannot read {}: {e}", path.display())).with_source(e)
        })?;
        let filename = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        self.decode_with(format, &filename, &bytes)
    }

    /// Aggregate an in-memory upload, choosing the format by `filename`
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` for an unknown extension and `ParseError`
    /// for invalid content
    pub fn decode_bytes(&self, filename: &str, bytes: &[u8]) -> AppResult<ActivityMetrics> {
        let format = TrackFormat::from_path(Path::new(filename))?;
        self.decode_with(format, filename, bytes)
    }

    fn decode_with(
        &self,
        format: TrackFormat,
        filename: &str,
        bytes: &[u8],
    ) -> AppResult<ActivityMetrics> {
        let segments = format.decode(bytes, &self.import).inspect_err(|e| {
            warn!(file = filename, error = %e, "could not process activity file");
        })?;
        let metrics = MetricsAggregator::aggregate(filename, &segments);
        info!(
            file = filename,
            distance_km = metrics.total_distance_km,
            duration_s = metrics.duration_s,
            pace = metrics.avg_pace_min_per_km,
            "activity metrics extracted"
        );
        Ok(metrics)
    }

    /// Feedback for already extracted metrics
    #[must_use]
    pub fn feedback(
        &self,
        metrics: &ActivityMetrics,
        assessment: &NormalizedAssessment,
    ) -> FeedbackResult {
        self.engine.generate(metrics, assessment)
    }

    /// Full run: load the file, normalize the assessment, generate feedback
    ///
    /// # Errors
    ///
    /// Propagates adapter failures and `InvalidAssessment`
    pub fn analyze(&self, path: &Path, raw: &RawAssessment) -> AppResult<AnalysisReport> {
        let assessment = AssessmentNormalizer::normalize(raw)?;
        self.analyze_assessed(path, assessment)
    }

    /// Load the file and generate feedback for an assessment that was
    /// normalized up front
    ///
    /// # Errors
    ///
    /// Propagates adapter failures
    pub fn analyze_assessed(
        &self,
        path: &Path,
        assessment: NormalizedAssessment,
    ) -> AppResult<AnalysisReport> {
        let metrics = self.load_activity(path)?;
        let feedback = self.feedback(&metrics, &assessment);
        Ok(AnalysisReport {
            metrics,
            assessment,
            feedback,
        })
    }
}

/// Explicit session context for one athlete interaction
///
/// Each transition returns a new session. Loading another activity starts
/// a new session, so nothing carries over; submitting an assessment
/// discards earlier feedback.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisSession {
    activity: Option<ActivityMetrics>,
    assessment: Option<NormalizedAssessment>,
    feedback: Option<FeedbackResult>,
}

impl AnalysisSession {
    /// Session for a freshly loaded activity
    #[must_use]
    pub const fn from_activity(metrics: ActivityMetrics) -> Self {
        Self {
            activity: Some(metrics),
            assessment: None,
            feedback: None,
        }
    }

    /// Session with a submitted assessment
    #[must_use]
    pub fn with_assessment(self, assessment: NormalizedAssessment) -> Self {
        Self {
            assessment: Some(assessment),
            feedback: None,
            ..self
        }
    }

    /// Session with feedback generated for its activity and assessment
    ///
    /// # Errors
    ///
    /// Returns `InvalidAssessment` when no assessment has been submitted and
    /// `InternalError` when no activity has been loaded
    pub fn with_feedback(self, pipeline: &ActivityPipeline) -> AppResult<Self> {
        let feedback = match (&self.activity, &self.assessment) {
            (Some(metrics), Some(assessment)) => pipeline.feedback(metrics, assessment),
            (None, _) => return Err(AppError::internal("no activity loaded in this session")),
            (_, None) => {
                return Err(AppError::invalid_assessment(
                    "no assessment submitted in this session",
                ))
            }
        };
        Ok(Self {
            feedback: Some(feedback),
            ..self
        })
    }

    /// Loaded activity metrics
    #[must_use]
    pub const fn activity(&self) -> Option<&ActivityMetrics> {
        self.activity.as_ref()
    }

    /// Submitted assessment
    #[must_use]
    pub const fn assessment(&self) -> Option<&NormalizedAssessment> {
        self.assessment.as_ref()
    }

    /// Generated feedback
    #[must_use]
    pub const fn feedback(&self) -> Option<&FeedbackResult> {
        self.feedback.as_ref()
    }

    /// Whether all three stages are present
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.activity.is_some() && self.assessment.is_some() && self.feedback.is_some()
    }
}
