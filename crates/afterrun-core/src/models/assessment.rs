// ABOUTME: Self-assessment models: raw UI labels and the validated ordinal assessment
// ABOUTME: Feeling and difficulty scores on a 1-5 scale with coarse classification helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::assessment::{
    EASY_DIFFICULTY_MAX, HARD_DIFFICULTY_MIN, HIGH_FEELING_MIN, MAX_NOTES_CHARS, MAX_SCORE,
    MID_FEELING, MIN_SCORE,
};
use crate::errors::{AppError, AppResult};

/// Self-assessment exactly as submitted by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAssessment {
    /// Selected feeling label (e.g. "4 - Good")
    pub feeling: String,
    /// Selected difficulty label (e.g. "Hard")
    pub difficulty: String,
    /// Optional free-text notes
    #[serde(default)]
    pub notes: String,
}

/// Coarse class of the feeling score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeelingLevel {
    /// Score 1 or 2
    Low,
    /// Score 3
    Mid,
    /// Score 4 or 5
    High,
}

/// Coarse class of the perceived difficulty score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Score 1 or 2
    Easy,
    /// Score 3
    Moderate,
    /// Score 4 or 5
    Hard,
}

/// Validated self-assessment on ordinal scales
///
/// Fields are private so every instance satisfies the 1-5 score range and
/// the notes length limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedAssessment {
    feeling_score: u8,
    difficulty_score: u8,
    notes: String,
}

impl NormalizedAssessment {
    /// Build an assessment from ordinal scores
    ///
    /// # Errors
    ///
    /// Returns `InvalidAssessment` if a score is outside 1-5 or the notes
    /// exceed 500 characters
    pub fn new(feeling_score: u8, difficulty_score: u8, notes: impl Into<String>) -> AppResult<Self> {
        validate_score("feeling", feeling_score)?;
        validate_score("difficulty", difficulty_score)?;
        let notes = notes.into();
        let length = notes.chars().count();
        if length > MAX_NOTES_CHARS {
            return Err(AppError::invalid_assessment(format!(
                "notes have {length} characters, at most {MAX_NOTES_CHARS} are allowed"
            )));
        }
        Ok(Self {
            feeling_score,
            difficulty_score,
            notes,
        })
    }

    /// Feeling score, 1 (very bad) to 5 (great)
    #[must_use]
    pub const fn feeling_score(&self) -> u8 {
        self.feeling_score
    }

    /// Difficulty score, 1 (very easy) to 5 (very hard)
    #[must_use]
    pub const fn difficulty_score(&self) -> u8 {
        self.difficulty_score
    }

    /// Free-text notes, unchanged from the input
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Classify the feeling score
    #[must_use]
    pub const fn feeling_level(&self) -> FeelingLevel {
        if self.feeling_score >= HIGH_FEELING_MIN {
            FeelingLevel::High
        } else if self.feeling_score == MID_FEELING {
            FeelingLevel::Mid
        } else {
            FeelingLevel::Low
        }
    }

    /// Classify the difficulty score
    #[must_use]
    pub const fn difficulty_level(&self) -> DifficultyLevel {
        if self.difficulty_score <= EASY_DIFFICULTY_MAX {
            DifficultyLevel::Easy
        } else if self.difficulty_score >= HARD_DIFFICULTY_MIN {
            DifficultyLevel::Hard
        } else {
            DifficultyLevel::Moderate
        }
    }
}

fn validate_score(field: &str, score: u8) -> AppResult<()> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(AppError::invalid_assessment(format!(
            "{field} score {score} is outside {MIN_SCORE}-{MAX_SCORE}"
        )))
    }
}
