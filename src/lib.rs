// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Collector module
///
/// Implements the concurrent page-collection engine and the per-category
/// orchestrator
pub mod collector;

/// Configuration module
///
/// Handles application settings: URL template, categories, deadlines
pub mod config;

/// Engine module
///
/// Implements the HTTP body-fetch primitive injected into the collector
pub mod engines;

/// Parsing module
///
/// Markup tree search, pagination resolution and the title scanner
pub mod parsing;

/// Utility module
///
/// Provides telemetry setup
pub mod utils;
