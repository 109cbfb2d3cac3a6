// ABOUTME: Plan assembly: weekly workout schedule, daily meal plan, and shopping list
// ABOUTME: Re-exports the workout, meal, and shopping builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

/// Daily meal plan with randomized food selection
pub mod meal;
/// Shopping list aggregation
pub mod shopping;
/// Weekly workout schedule
pub mod workout;

pub use meal::{assemble_meal_plan, portion_meal, split_daily_targets};
pub use shopping::build_shopping_list;
pub use workout::{assemble_workout_plan, training_days, weekly_frequency, WEEK};
