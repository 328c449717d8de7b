// Copyright (c) 2025 Online Roster Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Configuration module
///
/// Handles application settings loaded from files and environment variables
pub mod settings;
