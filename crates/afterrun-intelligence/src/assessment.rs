// ABOUTME: Maps raw self-assessment labels onto ordinal feeling and difficulty scores
// ABOUTME: Single interpreter of UI text; accepts the English and German label sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Assessment normalization
//!
//! Labels are matched against the closed sets in the message catalogs.
//! Surrounding whitespace and letter case are ignored; anything else is
//! rejected with `InvalidAssessment`.

use afterrun_core::errors::{AppError, AppResult};
use afterrun_core::models::{NormalizedAssessment, RawAssessment};
use tracing::debug;

use crate::messages::{Locale, MessageCatalog};

/// Which scale a label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scale {
    Feeling,
    Difficulty,
}

impl Scale {
    const fn labels(self, catalog: &'static MessageCatalog) -> &'static [&'static str; 5] {
        match self {
            Self::Feeling => &catalog.feeling_labels,
            Self::Difficulty => &catalog.difficulty_labels,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Feeling => "feeling",
            Self::Difficulty => "difficulty",
        }
    }
}

/// Converts raw UI selections into a [`NormalizedAssessment`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentNormalizer;

impl AssessmentNormalizer {
    /// Normalize a raw assessment
    ///
    /// # Errors
    ///
    /// Returns `InvalidAssessment` if a label is outside the closed sets or
    /// the notes are too long
    pub fn normalize(raw: &RawAssessment) -> AppResult<NormalizedAssessment> {
        let feeling = Self::feeling_score(&raw.feeling)?;
        let difficulty = Self::difficulty_score(&raw.difficulty)?;
        debug!(feeling, difficulty, "normalized self-assessment");
        NormalizedAssessment::new(feeling, difficulty, raw.notes.clone())
    }

    /// Ordinal score of a feeling label
    ///
    /// # Errors
    ///
    /// Returns `InvalidAssessment` for an unknown label
    pub fn feeling_score(label: &str) -> AppResult<u8> {
        lookup(Scale::Feeling, label)
    }

    /// Ordinal score of a difficulty label
    ///
    /// # Errors
    ///
    /// Returns `InvalidAssessment` for an unknown label
    pub fn difficulty_score(label: &str) -> AppResult<u8> {
        lookup(Scale::Difficulty, label)
    }
}

fn lookup(scale: Scale, label: &str) -> AppResult<u8> {
    let wanted = label.trim().to_lowercase();
    Locale::ALL
        .iter()
        .find_map(|locale| {
            scale
                .labels(locale.catalog())
                .iter()
                .position(|candidate| candidate.to_lowercase() == wanted)
        })
        .and_then(|index| u8::try_from(index + 1).ok())
        .ok_or_else(|| {
            AppError::invalid_assessment(format!("unknown {} label '{}'", scale.name(), label.trim()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_order_defines_score() {
        assert_eq!(AssessmentNormalizer::feeling_score("1 - Very bad").unwrap(), 1);
        assert_eq!(AssessmentNormalizer::feeling_score("5 - Great").unwrap(), 5);
        assert_eq!(AssessmentNormalizer::difficulty_score("Very hard").unwrap(), 5);
    }

    #[test]
    fn test_german_labels_case_insensitive() {
        assert_eq!(AssessmentNormalizer::feeling_score("  4 - gut ").unwrap(), 4);
        assert_eq!(AssessmentNormalizer::difficulty_score("SCHWER").unwrap(), 4);
        assert_eq!(AssessmentNormalizer::feeling_score("5 - GROSSARTIG").ok(), None);
        assert_eq!(AssessmentNormalizer::feeling_score("5 - großartig").unwrap(), 5);
    }

    #[test]
    fn test_substring_is_not_a_match() {
        assert!(AssessmentNormalizer::feeling_score("gut").is_err());
        assert!(AssessmentNormalizer::difficulty_score("hard-ish").is_err());
    }
}
