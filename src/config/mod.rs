// ABOUTME: Configuration module for the AfterRun application
// ABOUTME: Environment-only settings; feedback thresholds live in the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variables and the application configuration
pub mod environment;

pub use environment::AppConfig;
