// ABOUTME: AfterRun CLI - post-run feedback from a GPX/TCX file and a self-assessment
// ABOUTME: Subcommands for full analysis, metrics only, accepted labels, and upload retention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Feedback for a run, in English
//! afterrun analyze morning.gpx --feeling "4 - Good" --difficulty "Hard" --notes "windy"
//!
//! # Same in German, keeping a copy in the upload directory
//! afterrun --locale de analyze lauf.tcx --feeling "4 - Gut" --difficulty "Schwer" --store
//!
//! # Metrics only, as JSON
//! afterrun metrics morning.gpx --format json
//!
//! # Accepted assessment labels
//! afterrun labels
//!
//! # Delete uploads older than the retention period
//! afterrun sweep --days 7
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use afterrun::config::AppConfig;
use afterrun::logging::LoggingConfig;
use afterrun_core::errors::AppError;
use afterrun_intelligence::Locale;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "afterrun",
    version,
    about = "Post-run feedback from a track file and a self-assessment",
    long_about = "Reads a GPX or TCX track, extracts distance, duration, pace, elevation and heart rate, \
                  and compares them with how the run felt."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Feedback language (en, de); overrides AFTERRUN_LOCALE
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze a run and print metrics plus feedback
    Analyze {
        /// GPX or TCX file
        file: PathBuf,

        /// Feeling label, e.g. "4 - Good"
        #[arg(long)]
        feeling: String,

        /// Perceived difficulty label, e.g. "Hard"
        #[arg(long)]
        difficulty: String,

        /// Free-text notes (at most 500 characters)
        #[arg(long, default_value = "")]
        notes: String,

        /// Keep a timestamped copy in the upload directory and sweep expired uploads
        #[arg(long)]
        store: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the extracted metrics of a run
    Metrics {
        /// GPX or TCX file
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the accepted feeling and difficulty labels
    Labels,

    /// Delete uploads older than the retention period
    Sweep {
        /// Upload directory (defaults to AFTERRUN_UPLOAD_DIR)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Retention in days (defaults to AFTERRUN_RETENTION_DAYS)
        #[arg(long)]
        days: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    if let Err(e) = logging.init() {
        eprintln!("logging disabled: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    debug!(?config, "effective configuration");

    match cli.command {
        Command::Analyze {
            file,
            feeling,
            difficulty,
            notes,
            store,
            format,
        } => commands::analyze(
            &config,
            &commands::AnalyzeArgs {
                file,
                feeling,
                difficulty,
                notes,
                store,
            },
            format,
        ),
        Command::Metrics { file, format } => commands::metrics(&config, &file, format),
        Command::Labels => {
            commands::labels(config.locale);
            Ok(())
        }
        Command::Sweep { dir, days, format } => commands::sweep(&config, dir, days, format),
    }
}

fn report_failure(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<AppError>() {
        Some(app_error) if app_error.code.is_file_rejection() => {
            eprintln!("{}: {}", app_error.user_message(), app_error.message);
            eprintln!("Please try again with a different GPX or TCX file.");
            ExitCode::from(2)
        }
        Some(app_error) => {
            eprintln!("{app_error}");
            ExitCode::FAILURE
        }
        None => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
