// ABOUTME: Upload persistence for raw track files
// ABOUTME: UploadStore trait with a filesystem implementation using timestamped file names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Upload Storage
//!
//! Uploaded files are written once under a single directory as
//! `<stem>_<YYYYmmdd_HHMMSS><.ext>` and never read back by the store itself.
//! The [`retention`] sweeper removes them after a configurable age.

use std::fs;
use std::path::{Path, PathBuf};

use afterrun_core::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use tracing::info;

/// Age-based cleanup of the upload directory
pub mod retention;

pub use retention::{RetentionSweeper, SweepReport};

/// Persists raw uploads and returns their local path
pub trait UploadStore {
    /// Directory the store writes into
    fn root(&self) -> &Path;

    /// Persist the bytes of one upload
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the name has no file component or the file
    /// cannot be written
    fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<PathBuf>;
}

/// Upload store backed by a local directory
#[derive(Debug, Clone)]
pub struct FsUploadStore {
    root: PathBuf,
}

impl FsUploadStore {
    /// Store writing into `root`, created on first save
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist an upload stamped with the given time
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the name has no file component or the file
    /// cannot be written
    pub fn save_at(
        &self,
        original_name: &str,
        bytes: &[u8],
        received_at: DateTime<Utc>,
    ) -> AppResult<PathBuf> {
        let file_name = stored_file_name(original_name, received_at)?;
        fs::create_dir_all(&self.root).map_err(|e| {
            AppError::storage(format!("cannot create {}: {e}", self.root.display())).with_source(e)
        })?;

        let target = self.root.join(file_name);
        fs::write(&target, bytes).map_err(|e| {
            AppError::storage(format!("cannot write {}: {e}", target.display())).with_source(e)
        })?;

        info!(path = %target.display(), bytes = bytes.len(), "stored upload");
        Ok(target)
    }
}

impl UploadStore for FsUploadStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<PathBuf> {
        self.save_at(original_name, bytes, Utc::now())
    }
}

/// Timestamped name for an upload; directories in the original name are dropped
///
/// # Errors
///
/// Returns `StorageError` when the name has no file component
pub fn stored_file_name(original_name: &str, received_at: DateTime<Utc>) -> AppResult<String> {
    let name = Path::new(original_name);
    let stem = name
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| AppError::storage(format!("upload name '{original_name}' has no file name")))?
        .to_string_lossy();
    let extension = name
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    Ok(format!(
        "{stem}_{}{extension}",
        received_at.format("%Y%m%d_%H%M%S")
    ))
}
