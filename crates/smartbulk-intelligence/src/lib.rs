// ABOUTME: Nutrition and training target algorithms for the SmartBulk calculator
// ABOUTME: Energy estimation, macro allocation, nutrient timing, catalog, and plan assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

#![deny(unsafe_code)]

//! # SmartBulk Intelligence
//!
//! The calculator pipeline, leaf-first:
//!
//! 1. [`energy_estimator`] - BMR, TDEE, and the goal-adjusted calorie target
//! 2. [`macro_allocator`] - protein, carbohydrate, and fat grams
//! 3. [`plan_assembler`] - weekly workout plan, daily meal plan, shopping list
//!
//! plus [`nutrient_timing`] and [`body_composition`] helpers. Every function
//! is synchronous and pure; the only non-determinism is the random source
//! handed to the meal assembler.

/// Calculator configuration with environment overrides and validation
pub mod config;

/// Exercise and food catalog
pub mod catalog;

/// BMR, TDEE, and calorie target estimation
pub mod energy_estimator;

/// Macronutrient allocation
pub mod macro_allocator;

/// Pre/post-workout nutrient timing
pub mod nutrient_timing;

/// BMI and lean mass
pub mod body_composition;

/// Workout plan, meal plan, and shopping list assembly
pub mod plan_assembler;

pub use catalog::Catalog;
pub use config::{ConfigError, IntelligenceConfig};
