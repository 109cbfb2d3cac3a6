// ABOUTME: Configuration error types for calculator and catalog validation
// ABOUTME: Defines error variants for invalid ranges, weights, parse failures, and bad catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Configuration error types for calculator and catalog validation.

use std::io;

use smartbulk_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bounds or ordering violated (e.g. activity factors not ascending)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Fractions don't sum to the required total (e.g. meal split not 1.0)
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Catalog document is malformed or internally inconsistent
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Catalog file could not be read
    #[error("Catalog I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match &error {
            ConfigError::Io(_) => ErrorCode::ConfigError,
            _ => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
