// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Utility module
///
/// Provides telemetry setup for the batch run
pub mod telemetry;
