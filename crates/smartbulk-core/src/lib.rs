// ABOUTME: Core types and constants for the SmartBulk target calculator
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

#![deny(unsafe_code)]

//! # SmartBulk Core
//!
//! Foundation crate providing shared types for the SmartBulk nutrition and
//! training calculator. This crate changes infrequently, so the algorithm
//! crate and the application crate can compile against it incrementally.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `CalculationError` kinds raised by calculators
//! - **constants**: Energy densities and physiological input limits
//! - **models**: User metrics, derived targets, catalog entries, and assembled plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Energy densities and physiological input bounds
pub mod constants;

/// Core data models (metrics, targets, catalog entries, plans)
pub mod models;
