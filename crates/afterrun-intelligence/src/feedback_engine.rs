// ABOUTME: Deterministic rule engine turning metrics and a self-assessment into feedback
// ABOUTME: Distance and pace banding, data-vs-feeling cross-tab, and ordered reflection prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Feedback Rule Engine
//!
//! A pure function from `(ActivityMetrics, NormalizedAssessment)` to
//! [`FeedbackResult`]. Every branch is total over its domain, so generation
//! cannot fail.
//!
//! Band boundaries are lower-inclusive: 5, 10 and 21 km as well as 4.5, 5.5
//! and 6.5 min/km belong to the band above.
//!
//! Reflection prompts are emitted in a fixed order, which the presentation
//! layer numbers sequentially:
//!
//! 1. distance above the long-distance threshold
//! 2. pace prompt (always)
//! 3. heart-rate prompt (only with heart-rate data)
//! 4. feeling prompt (always)
//! 5. closing prompt (always)

use afterrun_core::models::{
    ActivityMetrics, DifficultyLevel, FeedbackResult, FeelingLevel, NormalizedAssessment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{DistanceBandConfig, FeedbackConfig, PaceBandConfig};
use crate::messages::MessageCatalog;

/// Distance classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceBand {
    /// Below the medium threshold
    Short,
    /// Medium up to the long threshold
    Medium,
    /// Long up to the very long threshold
    Long,
    /// Very long threshold and above
    VeryLong,
}

impl DistanceBand {
    /// Classify a distance in kilometers
    #[must_use]
    pub fn classify(distance_km: f64, bands: &DistanceBandConfig) -> Self {
        if distance_km < bands.medium_min_km {
            Self::Short
        } else if distance_km < bands.long_min_km {
            Self::Medium
        } else if distance_km < bands.very_long_min_km {
            Self::Long
        } else {
            Self::VeryLong
        }
    }

    const fn phrase(self, catalog: &MessageCatalog) -> &'static str {
        match self {
            Self::Short => catalog.short_run,
            Self::Medium => catalog.medium_run,
            Self::Long => catalog.long_run,
            Self::VeryLong => catalog.very_long_run,
        }
    }
}

/// Pace classification of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceBand {
    /// Faster than the brisk threshold
    VeryFast,
    /// Brisk up to the moderate threshold
    Brisk,
    /// Moderate up to the easy threshold
    Moderate,
    /// Easy threshold and slower
    Easy,
}

impl PaceBand {
    /// Classify a pace in minutes per kilometer
    ///
    /// A pace of zero (no distance recorded) falls in the fastest band.
    #[must_use]
    pub fn classify(pace_min_per_km: f64, bands: &PaceBandConfig) -> Self {
        if pace_min_per_km < bands.brisk_min {
            Self::VeryFast
        } else if pace_min_per_km < bands.moderate_min {
            Self::Brisk
        } else if pace_min_per_km < bands.easy_min {
            Self::Moderate
        } else {
            Self::Easy
        }
    }

    const fn phrase(self, catalog: &MessageCatalog) -> &'static str {
        match self {
            Self::VeryFast => catalog.very_fast_pace,
            Self::Brisk => catalog.brisk_pace,
            Self::Moderate => catalog.moderate_pace,
            Self::Easy => catalog.easy_pace,
        }
    }
}

/// Outcome of the data-vs-feeling cross-tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeelingNarrative {
    /// Felt good and easy
    Alignment,
    /// Felt good but not easy
    HiddenFatigue,
    /// Mid feeling
    AverageRun,
    /// Felt bad and hard
    ChallengingDay,
    /// Felt bad but not hard
    Mismatch,
}

impl FeelingNarrative {
    /// Cross-tabulate feeling and difficulty classes
    #[must_use]
    pub const fn classify(assessment: &NormalizedAssessment) -> Self {
        match (assessment.feeling_level(), assessment.difficulty_level()) {
            (FeelingLevel::High, DifficultyLevel::Easy) => Self::Alignment,
            (FeelingLevel::High, _) => Self::HiddenFatigue,
            (FeelingLevel::Mid, _) => Self::AverageRun,
            (FeelingLevel::Low, DifficultyLevel::Hard) => Self::ChallengingDay,
            (FeelingLevel::Low, _) => Self::Mismatch,
        }
    }

    const fn phrase(self, catalog: &MessageCatalog) -> &'static str {
        match self {
            Self::Alignment => catalog.alignment,
            Self::HiddenFatigue => catalog.hidden_fatigue,
            Self::AverageRun => catalog.average_run,
            Self::ChallengingDay => catalog.challenging_day,
            Self::Mismatch => catalog.mismatch,
        }
    }
}

/// Rule-based feedback generator
#[derive(Debug, Clone, Default)]
pub struct FeedbackEngine {
    config: FeedbackConfig,
}

impl FeedbackEngine {
    /// Engine with the given thresholds and locale
    #[must_use]
    pub const fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    fn catalog(&self) -> &'static MessageCatalog {
        self.config.locale.catalog()
    }

    /// Build all four feedback blocks
    #[must_use]
    pub fn generate(
        &self,
        metrics: &ActivityMetrics,
        assessment: &NormalizedAssessment,
    ) -> FeedbackResult {
        let result = FeedbackResult {
            summary: self.summary(metrics),
            context: self.context(metrics),
            data_vs_feeling: self.data_vs_feeling(assessment),
            reflection_prompts: self.reflection_prompts(metrics, assessment),
        };
        debug!(
            file = %metrics.source_filename,
            narrative = ?FeelingNarrative::classify(assessment),
            prompts = result.reflection_prompts.len(),
            "generated feedback"
        );
        result
    }

    /// Recap of distance, duration and pace, plus elevation and heart rate
    /// when recorded
    #[must_use]
    pub fn summary(&self, metrics: &ActivityMetrics) -> String {
        let locale = self.config.locale;
        let mut summary = locale.summary_sentence(
            metrics.total_distance_km,
            &metrics.duration_formatted(),
            &metrics.pace_formatted(),
        );
        if let Some(gain) = metrics.elevation_gain_m {
            summary.push_str(&locale.elevation_sentence(gain));
        }
        if let Some(avg) = metrics.avg_heart_rate {
            summary.push_str(&locale.heart_rate_sentence(avg));
        }
        summary
    }

    /// Distance band phrase followed by the pace band phrase
    #[must_use]
    pub fn context(&self, metrics: &ActivityMetrics) -> String {
        let catalog = self.catalog();
        let distance = DistanceBand::classify(metrics.total_distance_km, &self.config.distance);
        let pace = PaceBand::classify(metrics.avg_pace_min_per_km, &self.config.pace);
        format!("{} {}", distance.phrase(catalog), pace.phrase(catalog))
    }

    /// Heading, narrative, and the athlete's notes when present
    #[must_use]
    pub fn data_vs_feeling(&self, assessment: &NormalizedAssessment) -> String {
        let catalog = self.catalog();
        let narrative = FeelingNarrative::classify(assessment);
        let mut text = format!(
            "{}\n\n{}",
            catalog.data_vs_feeling_heading,
            narrative.phrase(catalog)
        );
        if !assessment.notes().is_empty() {
            text.push_str(&format!("\n\n*{}* {}", catalog.notes_label, assessment.notes()));
        }
        text
    }

    /// Ordered reflection prompts, three to five entries
    #[must_use]
    pub fn reflection_prompts(
        &self,
        metrics: &ActivityMetrics,
        assessment: &NormalizedAssessment,
    ) -> Vec<String> {
        let catalog = self.catalog();
        let mut prompts = Vec::with_capacity(5);

        if metrics.total_distance_km > self.config.distance.long_prompt_km {
            prompts.push(catalog.long_distance_prompt);
        }

        prompts.push(if metrics.avg_pace_min_per_km < self.config.pace.fast_prompt {
            catalog.fast_pace_prompt
        } else {
            catalog.base_endurance_prompt
        });

        if let Some(avg) = metrics.avg_heart_rate {
            prompts.push(if avg > self.config.high_avg_heart_rate_bpm {
                catalog.high_heart_rate_prompt
            } else {
                catalog.moderate_heart_rate_prompt
            });
        }

        prompts.push(if assessment.feeling_level() == FeelingLevel::Low {
            catalog.improve_prompt
        } else {
            catalog.worked_well_prompt
        });

        prompts.push(catalog.closing_prompt);
        prompts.into_iter().map(str::to_owned).collect()
    }
}
