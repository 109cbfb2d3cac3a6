// ABOUTME: Main library entry point for the SmartBulk target calculator
// ABOUTME: Wires configuration, logging, and the recommendation service over the calculator crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

#![deny(unsafe_code)]

//! # SmartBulk
//!
//! Nutrition and training target calculator. Given a user's body metrics,
//! activity level, and goal it produces a daily calorie target, macronutrient
//! grams, a weekly workout schedule, a daily meal plan with several options
//! per meal, and a shopping list.
//!
//! ## Architecture
//!
//! - **`smartbulk-core`**: error types, constants, and the serializable models
//! - **`smartbulk-intelligence`**: the calculators and the exercise/food catalog
//! - **this crate**: environment configuration, logging, the
//!   [`recommendation::RecommendationService`] facade, and the `smartbulk-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smartbulk::errors::AppResult;
//! use smartbulk::models::{FitnessGoal, Sex, UserMetrics};
//! use smartbulk::recommendation::RecommendationService;
//!
//! fn main() -> AppResult<()> {
//!     let service = RecommendationService::with_defaults()?;
//!     let metrics = UserMetrics::new(25, Sex::Male, 70.0, 175.0)
//!         .with_goal(FitnessGoal::MuscleGain);
//!
//!     let energy = service.energy_targets(&metrics, None)?;
//!     println!("Daily target: {} kcal", energy.target_calories_kcal);
//!     Ok(())
//! }
//! ```

/// Environment-driven application configuration
pub mod config;

/// Error types re-exported from the core crate
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Data models re-exported from the core crate
pub mod models;

/// Facade composing every calculator into a single recommendation
pub mod recommendation;

pub use smartbulk_intelligence as intelligence;
