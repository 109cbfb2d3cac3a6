// ABOUTME: Configuration management for the SmartBulk application crate
// ABOUTME: Environment settings here; calculator tuning lives in smartbulk-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Configuration module
//!
//! - **Environment**: deployment environment, catalog override, plan seed
//! - **Intelligence**: calculator coefficients and tables, re-exported from
//!   `smartbulk-intelligence`

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, Environment};
pub use smartbulk_intelligence::config::{ConfigError, IntelligenceConfig};
