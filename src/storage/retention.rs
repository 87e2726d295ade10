// ABOUTME: Retention sweeper deleting uploads older than a configured number of days
// ABOUTME: Whole-day age comparison, missing directory tolerated, per-file failures skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs::{self, DirEntry};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use afterrun_core::constants::retention::DEFAULT_RETENTION_DAYS;
use afterrun_core::constants::units::SECONDS_PER_DAY;
use afterrun_core::errors::{AppError, AppResult};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Outcome of one sweep
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Regular files examined
    pub scanned: usize,
    /// Files removed
    pub deleted: Vec<PathBuf>,
    /// Files that could not be inspected or removed
    pub skipped: usize,
}

/// Deletes regular files whose age in whole days exceeds the retention period
#[derive(Debug, Clone)]
pub struct RetentionSweeper {
    directory: PathBuf,
    retention_days: u64,
}

impl RetentionSweeper {
    /// Sweeper for `directory` keeping files for `retention_days` days
    pub fn new(directory: impl Into<PathBuf>, retention_days: u64) -> Self {
        Self {
            directory: directory.into(),
            retention_days,
        }
    }

    /// Sweeper with the default seven-day retention
    pub fn with_default_retention(directory: impl Into<PathBuf>) -> Self {
        Self::new(directory, DEFAULT_RETENTION_DAYS)
    }

    /// Swept directory
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Retention period in days
    #[must_use]
    pub const fn retention_days(&self) -> u64 {
        self.retention_days
    }

    /// Sweep relative to the current time
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory exists but cannot be listed
    pub fn sweep(&self) -> AppResult<SweepReport> {
        self.sweep_at(SystemTime::now())
    }

    /// Sweep relative to `now`
    ///
    /// A file is deleted when `now - modified`, truncated to whole days, is
    /// greater than the retention period. A file modified "in the future"
    /// has age zero.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory exists but cannot be listed
    pub fn sweep_at(&self, now: SystemTime) -> AppResult<SweepReport> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(directory = %self.directory.display(), "upload directory missing, nothing to sweep");
                return Ok(SweepReport::default());
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "cannot list {}: {e}",
                    self.directory.display()
                ))
                .with_source(e));
            }
        };

        let mut report = SweepReport::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    report.skipped += 1;
                    continue;
                }
            };
            match self.sweep_entry(&entry, now) {
                Ok(Some(true)) => {
                    report.scanned += 1;
                    report.deleted.push(entry.path());
                }
                Ok(Some(false)) => report.scanned += 1,
                Ok(None) => {}
                Err(e) => {
                    warn!(path = %entry.path().display(), error = %e, "skipping file during sweep");
                    report.scanned += 1;
                    report.skipped += 1;
                }
            }
        }

        info!(
            directory = %self.directory.display(),
            scanned = report.scanned,
            deleted = report.deleted.len(),
            skipped = report.skipped,
            "retention sweep finished"
        );
        Ok(report)
    }

    /// `None` for non-files, otherwise whether the file was deleted
    fn sweep_entry(&self, entry: &DirEntry, now: SystemTime) -> io::Result<Option<bool>> {
        if !entry.file_type()?.is_file() {
            return Ok(None);
        }
        let modified = entry.metadata()?.modified()?;
        let age_days = now
            .duration_since(modified)
            .map_or(0, |age| age.as_secs() / SECONDS_PER_DAY);
        if age_days > self.retention_days {
            fs::remove_file(entry.path())?;
            debug!(path = %entry.path().display(), age_days, "deleted expired upload");
            return Ok(Some(true));
        }
        Ok(Some(false))
    }
}
