// ABOUTME: Derived daily targets: energy, macronutrients, nutrient timing, body composition
// ABOUTME: Pure value types produced by the calculators and handed to presentation/persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use serde::{Deserialize, Serialize};

use super::metrics::{ActivityLevel, BmrMethod, FitnessGoal, WorkoutIntensity};

/// Daily energy expenditure and goal-adjusted intake, in whole kcal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyTargets {
    /// Basal metabolic rate
    pub bmr_kcal: u32,
    /// Total daily energy expenditure
    pub tdee_kcal: u32,
    /// Goal-adjusted daily calorie target
    pub target_calories_kcal: u32,
    /// Formula used for the BMR
    pub method: BmrMethod,
    /// Activity level the multiplier came from
    pub activity_level: ActivityLevel,
    /// TDEE multiplier applied to the BMR
    pub activity_multiplier: f64,
    /// Goal the adjustment came from
    pub fitness_goal: FitnessGoal,
    /// Factor applied to the TDEE for the goal
    pub goal_adjustment: f64,
}

/// Share of macro calories per nutrient, rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    /// Protein percentage of macro calories
    pub protein_percent: f64,
    /// Carbohydrate percentage of macro calories
    pub carbs_percent: f64,
    /// Fat percentage of macro calories
    pub fat_percent: f64,
}

/// Daily macronutrient targets.
///
/// `protein_kcal + carbs_kcal + fat_kcal` stays within 4 kcal of `total_kcal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein in grams
    pub protein_g: u32,
    /// Carbohydrate in grams
    pub carbs_g: u32,
    /// Fat in grams
    pub fat_g: u32,
    /// Calories from protein
    pub protein_kcal: u32,
    /// Calories from carbohydrate
    pub carbs_kcal: u32,
    /// Calories from fat
    pub fat_kcal: u32,
    /// Calorie target the macros were allocated against
    pub total_kcal: u32,
    /// Share of macro calories per nutrient
    pub percentages: MacroPercentages,
}

impl MacroTargets {
    /// Sum of the per-macro calories
    #[must_use]
    pub const fn macro_kcal(&self) -> u32 {
        self.protein_kcal + self.carbs_kcal + self.fat_kcal
    }
}

/// Pre-workout fueling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreWorkoutNutrition {
    /// Carbohydrate in grams
    pub carbs_g: f64,
    /// Hours before training
    pub timing_hours_before: f64,
    /// Human-readable suggestions
    pub recommendations: Vec<String>,
}

/// Post-workout recovery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostWorkoutNutrition {
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrate in grams
    pub carbs_g: f64,
    /// Hours after training
    pub timing_hours_after: f64,
    /// Human-readable suggestions
    pub recommendations: Vec<String>,
}

/// How the daily protein is spread across meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinDistribution {
    /// Protein-containing meals per day
    pub meals_per_day: u8,
    /// Protein per meal in grams
    pub protein_per_meal_g: f64,
    /// Summary sentence
    pub strategy: String,
}

/// Nutrient timing around a training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientTimingPlan {
    /// Intensity the plan was sized for
    pub intensity: WorkoutIntensity,
    /// Before training
    pub pre_workout: PreWorkoutNutrition,
    /// After training
    pub post_workout: PostWorkoutNutrition,
    /// Across the whole day
    pub daily_protein_distribution: ProteinDistribution,
}

/// WHO adult BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to below 25
    Normal,
    /// BMI 25 to below 30
    Overweight,
    /// BMI 30 and above
    Obese,
}

/// Body composition summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    /// Body mass index, one decimal
    pub bmi: f64,
    /// WHO category for the BMI
    pub bmi_category: BmiCategory,
    /// Lean mass in kg, one decimal; present when body fat is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lean_mass_kg: Option<f64>,
    /// Fat mass in kg, one decimal; present when body fat is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_mass_kg: Option<f64>,
}
