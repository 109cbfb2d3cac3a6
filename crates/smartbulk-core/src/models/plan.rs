// ABOUTME: Assembled plans: weekly workout schedule, daily meal plan, and shopping list
// ABOUTME: Serializable so the persistence collaborator can store them as JSON documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::catalog::{ExerciseTemplate, FoodCategory};
use super::metrics::{DietaryRestriction, ExperienceLevel, FitnessGoal};
use super::targets::MacroTargets;

// ============================================================================
// Workout
// ============================================================================

/// One day of the weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Day of the week (serialized as `"Mon"`..`"Sun"`)
    pub day: Weekday,
    /// Exercises for a training day; empty on rest days
    pub exercises: Vec<ExerciseTemplate>,
    /// Light-activity suggestions for a rest day; empty on training days
    pub rest_activities: Vec<String>,
    /// Estimated session length in minutes; 0 on rest days
    pub estimated_minutes: u32,
}

impl DaySchedule {
    /// Whether this is a rest day
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Weekly workout schedule, Monday through Sunday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Goal the exercises were selected for
    pub goal: FitnessGoal,
    /// Experience level the exercises were selected for
    pub experience_level: ExperienceLevel,
    /// Requested training sessions per week
    pub sessions_per_week: u8,
    /// Seven entries, Monday first
    pub schedule: Vec<DaySchedule>,
    /// Number of training days
    pub total_workouts: u8,
    /// Sum of the daily estimates
    pub estimated_weekly_minutes: u32,
}

impl WorkoutPlan {
    /// Training days in schedule order
    pub fn training_days(&self) -> impl Iterator<Item = &DaySchedule> {
        self.schedule.iter().filter(|day| !day.is_rest_day())
    }
}

// ============================================================================
// Meals
// ============================================================================

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between meals
    Snack,
}

impl MealType {
    /// All meal types in the order they are eaten
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calorie and macro targets for a single meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTargets {
    /// Calories for the meal
    pub calories_kcal: u32,
    /// Protein grams for the meal
    pub protein_g: u32,
    /// Carbohydrate grams for the meal
    pub carbs_g: u32,
    /// Fat grams for the meal
    pub fat_g: u32,
}

/// A portioned food inside a meal option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodServing {
    /// Catalog identifier
    pub food_id: String,
    /// Display name
    pub name: String,
    /// Slot the food fills
    pub category: FoodCategory,
    /// Portion size in whole grams, always positive
    pub grams: u32,
    /// kcal in the portion, one decimal
    pub calories_kcal: f64,
    /// Protein grams in the portion, one decimal
    pub protein_g: f64,
    /// Carbohydrate grams in the portion, one decimal
    pub carbs_g: f64,
    /// Fat grams in the portion, one decimal
    pub fat_g: f64,
}

/// One way of meeting a meal's targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealOption {
    /// Portioned foods, one per composition slot (zero-gram slots dropped)
    pub foods: Vec<FoodServing>,
    /// Sum of portion calories, one decimal
    pub total_calories_kcal: f64,
    /// Sum of portion protein, one decimal
    pub total_protein_g: f64,
    /// Sum of portion carbohydrate, one decimal
    pub total_carbs_g: f64,
    /// Sum of portion fat, one decimal
    pub total_fat_g: f64,
    /// Whether calories and every macro landed within the configured tolerance
    pub within_tolerance: bool,
}

/// Daily meal plan with several options per meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Goal the meal template came from
    pub goal: FitnessGoal,
    /// Restrictions honoured when drawing foods
    pub restrictions: BTreeSet<DietaryRestriction>,
    /// Daily macro targets the plan was split from
    pub daily_targets: MacroTargets,
    /// Per-meal share of the daily targets
    pub meal_targets: BTreeMap<MealType, MealTargets>,
    /// Options per meal
    pub meals: BTreeMap<MealType, Vec<MealOption>>,
}

// ============================================================================
// Shopping
// ============================================================================

/// One aggregated line of the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Food display name (the grouping key)
    pub name: String,
    /// Food category
    pub category: FoodCategory,
    /// Summed grams across every option of every meal
    pub total_grams: u32,
    /// Number of servings that contributed
    pub occurrences: u32,
}

/// Shopping list aggregated from a meal plan, sorted by category then name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShoppingList {
    /// Aggregated items
    pub items: Vec<ShoppingItem>,
    /// Sum of every item's grams
    pub total_grams: u32,
}
