// ABOUTME: Feedback result model rendered by the presentation layer
// ABOUTME: Summary, context, data-vs-feeling narrative, and ordered reflection prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Structured feedback for one activity and assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    /// One-paragraph recap of the objective metrics
    pub summary: String,
    /// Distance band phrase followed by pace band phrase
    pub context: String,
    /// Markdown-flavored comparison of data and subjective feeling
    pub data_vs_feeling: String,
    /// Reflection prompts; the order is significant (rendered as a numbered list)
    pub reflection_prompts: Vec<String>,
}

impl FeedbackResult {
    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an internal error if serialization fails
    pub fn to_json_pretty(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AppError::internal(format!("feedback serialization failed: {e}")).with_source(e)
        })
    }

    /// Reflection prompts numbered from 1, one per line
    #[must_use]
    pub fn numbered_prompts(&self) -> String {
        self.reflection_prompts
            .iter()
            .enumerate()
            .map(|(index, prompt)| format!("{}. {prompt}", index + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
