// ABOUTME: Read-only catalog entries: exercise templates and food templates
// ABOUTME: Loaded once from the catalog document and shared by the plan assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exercise category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Steady-state cardio
    Cardio,
    /// High-intensity intervals
    Hiit,
    /// Resistance training
    Strength,
    /// Trunk stability
    Core,
    /// Flexibility and mobility
    Mobility,
}

/// A single exercise with its default prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseTemplate {
    /// Stable identifier referenced by workout templates
    pub id: String,
    /// Display name
    pub name: String,
    /// Exercise category
    pub category: ExerciseCategory,
    /// Muscle groups worked
    pub muscle_groups: Vec<String>,
    /// Number of sets
    pub sets: u8,
    /// Reps or duration per set, e.g. `"8-12"` or `"45 s"`
    pub reps: String,
    /// Rest between sets
    pub rest_seconds: u16,
}

/// Food category; also the slot a food fills in a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    /// Protein source
    Protein,
    /// Carbohydrate source
    Carbs,
    /// Vegetables
    Vegetables,
    /// Fat source
    Fats,
}

impl FoodCategory {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Vegetables => "vegetables",
            Self::Fats => "fats",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A food with its nutrition per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodTemplate {
    /// Stable identifier referenced by restriction exclusions
    pub id: String,
    /// Display name
    pub name: String,
    /// Meal slot the food fills
    pub category: FoodCategory,
    /// kcal per 100 g
    pub calories_per_100g: f64,
    /// Protein grams per 100 g
    pub protein_per_100g: f64,
    /// Carbohydrate grams per 100 g
    pub carbs_per_100g: f64,
    /// Fat grams per 100 g
    pub fat_per_100g: f64,
}

impl FoodTemplate {
    /// kcal in `grams` of this food
    #[must_use]
    pub fn calories_for(&self, grams: f64) -> f64 {
        self.calories_per_100g * grams / 100.0
    }

    /// Protein grams in `grams` of this food
    #[must_use]
    pub fn protein_for(&self, grams: f64) -> f64 {
        self.protein_per_100g * grams / 100.0
    }

    /// Carbohydrate grams in `grams` of this food
    #[must_use]
    pub fn carbs_for(&self, grams: f64) -> f64 {
        self.carbs_per_100g * grams / 100.0
    }

    /// Fat grams in `grams` of this food
    #[must_use]
    pub fn fat_for(&self, grams: f64) -> f64 {
        self.fat_per_100g * grams / 100.0
    }
}
