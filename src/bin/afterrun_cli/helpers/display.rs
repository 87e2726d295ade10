// ABOUTME: Text rendering for the afterrun CLI
// ABOUTME: Metrics block, four feedback blocks with numbered prompts, label lists, sweep summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write;

use afterrun::storage::{RetentionSweeper, SweepReport};
use afterrun_core::models::{ActivityMetrics, FeedbackResult};
use afterrun_intelligence::Locale;

const RULE_WIDTH: usize = 60;

/// Metrics of one activity, one value per line
pub fn render_metrics(metrics: &ActivityMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Activity: {}", metrics.source_filename);
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    if let Some(timestamp) = metrics.timestamp {
        let _ = writeln!(out, "Date:            {}", timestamp.format("%Y-%m-%d %H:%M UTC"));
    }
    let _ = writeln!(out, "Distance:        {} km", metrics.total_distance_km);
    let _ = writeln!(out, "Duration:        {}", metrics.duration_formatted());
    let _ = writeln!(out, "Pace:            {} min/km", metrics.pace_formatted());
    if let Some(gain) = metrics.elevation_gain_m {
        let _ = writeln!(out, "Elevation gain:  {gain} m");
    }
    if let (Some(avg), Some(max)) = (metrics.avg_heart_rate, metrics.max_heart_rate) {
        let _ = writeln!(out, "Heart rate:      avg {avg} bpm, max {max} bpm");
    }
    out.trim_end().to_owned()
}

/// Summary, context, data-vs-feeling, and numbered reflection prompts
pub fn render_feedback(feedback: &FeedbackResult) -> String {
    format!(
        "## Summary\n{}\n\n## Context\n{}\n\n{}\n\n## Reflection\n{}",
        feedback.summary,
        feedback.context,
        feedback.data_vs_feeling,
        feedback.numbered_prompts()
    )
}

/// Accepted assessment labels of one locale, in score order
pub fn render_labels(locale: Locale) -> String {
    let catalog = locale.catalog();
    let mut out = String::new();
    let _ = writeln!(out, "Feeling labels ({locale}):");
    for label in catalog.feeling_labels {
        let _ = writeln!(out, "  {label}");
    }
    let _ = writeln!(out, "Difficulty labels ({locale}):");
    for (index, label) in catalog.difficulty_labels.iter().enumerate() {
        let _ = writeln!(out, "  {label} ({})", index + 1);
    }
    out.trim_end().to_owned()
}

/// One-line outcome of a retention sweep plus the deleted files
pub fn render_sweep(sweeper: &RetentionSweeper, report: &SweepReport) -> String {
    let mut out = format!(
        "Swept {} (retention {} days): {} scanned, {} deleted, {} skipped",
        sweeper.directory().display(),
        sweeper.retention_days(),
        report.scanned,
        report.deleted.len(),
        report.skipped
    );
    for path in &report.deleted {
        let _ = write!(out, "\n  removed {}", path.display());
    }
    out
}
