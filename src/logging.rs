// ABOUTME: Logging configuration and tracing subscriber setup
// ABOUTME: Env-driven level, format, and location flags for the CLI and library diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging
//!
//! Log lines go to stderr so that report output on stdout stays
//! machine-readable.

use std::env;
use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log collectors
    Json,
    /// Full human-readable output
    Pretty,
    /// Single-line output
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from `RUST_LOG`, `LOG_FORMAT`, and
    /// `LOG_INCLUDE_LOCATION`
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
        }
    }

    /// Same configuration with debug output for this workspace's crates
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = "afterrun=debug,afterrun_intelligence=debug,info".into();
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("warn"));
        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stderr);
                registry.with(compact_layer).try_init()?;
            }
        }

        info!(
            version = env!("CARGO_PKG_VERSION"),
            log.level = %self.level,
            log.format = ?self.format,
            "logging initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_format_and_location_from_environment() {
        env::set_var("LOG_FORMAT", "json");
        env::set_var("LOG_INCLUDE_LOCATION", "1");
        let config = LoggingConfig::from_env();
        env::remove_var("LOG_FORMAT");
        env::remove_var("LOG_INCLUDE_LOCATION");

        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_location);
    }

    #[test]
    #[serial]
    fn test_unknown_format_falls_back_to_compact() {
        env::set_var("LOG_FORMAT", "xml");
        let config = LoggingConfig::from_env();
        env::remove_var("LOG_FORMAT");

        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn test_verbose_enables_workspace_debug() {
        let config = LoggingConfig::default().verbose();
        assert!(config.level.contains("afterrun=debug"));
        assert_eq!(config.format, LogFormat::Compact);
    }
}
