// ABOUTME: Command implementations for the afterrun CLI
// ABOUTME: Analyze, metrics, labels, and sweep handlers on top of the library pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::{Path, PathBuf};

use afterrun::config::AppConfig;
use afterrun::pipeline::ActivityPipeline;
use afterrun::storage::{FsUploadStore, RetentionSweeper, UploadStore};
use afterrun_core::errors::AppError;
use afterrun_core::models::RawAssessment;
use afterrun_intelligence::{AssessmentNormalizer, Locale};
use anyhow::Result;
use tracing::info;

use crate::helpers::display;
use crate::OutputFormat;

/// Inputs of the analyze command
pub struct AnalyzeArgs {
    pub file: PathBuf,
    pub feeling: String,
    pub difficulty: String,
    pub notes: String,
    pub store: bool,
}

pub fn analyze(config: &AppConfig, args: &AnalyzeArgs, format: OutputFormat) -> Result<()> {
    let pipeline = ActivityPipeline::from_config(config)?;
    let raw = RawAssessment {
        feeling: args.feeling.clone(),
        difficulty: args.difficulty.clone(),
        notes: args.notes.clone(),
    };
    // nothing is stored for a rejected assessment
    let assessment = AssessmentNormalizer::normalize(&raw)?;

    let track_path = if args.store {
        store_upload(config, &args.file)?
    } else {
        args.file.clone()
    };

    let report = pipeline.analyze_assessed(&track_path, assessment)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("{}", display::render_metrics(&report.metrics));
            println!();
            println!("{}", display::render_feedback(&report.feedback));
        }
    }
    Ok(())
}

fn store_upload(config: &AppConfig, file: &Path) -> Result<PathBuf> {
    let bytes = fs::read(file).map_err(|e| {
        AppError::storage(format!("cannot read {}: {e}", file.display())).with_source(e)
    })?;
    let name = file.file_name().map_or_else(String::new, |n| n.to_string_lossy().into_owned());

    let store = FsUploadStore::new(&config.upload_dir);
    let stored = store.save(&name, &bytes)?;
    RetentionSweeper::new(store.root(), config.retention_days).sweep()?;
    info!(path = %stored.display(), "analyzing stored upload");
    Ok(stored)
}

pub fn metrics(config: &AppConfig, file: &Path, format: OutputFormat) -> Result<()> {
    let pipeline = ActivityPipeline::from_config(config)?;
    let metrics = pipeline.load_activity(file)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
        OutputFormat::Text => println!("{}", display::render_metrics(&metrics)),
    }
    Ok(())
}

pub fn labels(locale: Locale) {
    println!("{}", display::render_labels(locale));
}

pub fn sweep(
    config: &AppConfig,
    dir: Option<PathBuf>,
    days: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let directory = dir.unwrap_or_else(|| config.upload_dir.clone());
    let sweeper = RetentionSweeper::new(directory, days.unwrap_or(config.retention_days));
    let report = sweeper.sweep()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => println!("{}", display::render_sweep(&sweeper, &report)),
    }
    Ok(())
}
