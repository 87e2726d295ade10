// ABOUTME: Helper modules for the afterrun CLI
// ABOUTME: Provides text rendering of metrics, feedback, labels, and sweep reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
