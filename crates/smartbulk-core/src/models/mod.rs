// ABOUTME: Domain models for the SmartBulk calculator
// ABOUTME: Re-exports metrics, targets, catalog entries, and plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

mod catalog;
mod metrics;
mod plan;
mod targets;

pub use catalog::{ExerciseCategory, ExerciseTemplate, FoodCategory, FoodTemplate};
pub use metrics::{
    ActivityLevel, BmrMethod, DietaryRestriction, ExperienceLevel, FitnessGoal, Sex, UserMetrics,
    WorkoutIntensity,
};
pub use plan::{
    DaySchedule, FoodServing, MealOption, MealPlan, MealTargets, MealType, ShoppingItem,
    ShoppingList, WorkoutPlan,
};
pub use targets::{
    BmiCategory, BodyComposition, EnergyTargets, MacroPercentages, MacroTargets,
    NutrientTimingPlan, PostWorkoutNutrition, PreWorkoutNutrition, ProteinDistribution,
};
