// ABOUTME: Configuration module for smartbulk-intelligence crate
// ABOUTME: Re-exports calculator configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

/// Calculator configuration (energy, macros, timing, meal and workout plans)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
