// ABOUTME: User body metrics and the enumerations that parameterise every calculation
// ABOUTME: Sex, activity level, fitness goal, experience level, dietary restrictions, BMR method
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Biological sex used by the BMR equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male constants
    Male,
    /// Female constants
    Female,
}

/// Habitual activity level, mapped to a TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 days/week
    LightlyActive,
    /// Exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Exercise 6-7 days/week
    VeryActive,
    /// Hard training twice a day or a physical job
    ExtremelyActive,
}

/// What the user is training for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit, high protein
    WeightLoss,
    /// Caloric surplus
    MuscleGain,
    /// Caloric balance
    #[default]
    Maintenance,
    /// Slight surplus, lower fat share
    Endurance,
    /// Caloric balance, high protein
    Strength,
    /// Caloric balance, balanced split
    GeneralFitness,
}

/// Training experience, used for workout frequency and exercise selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Under a year of structured training
    #[default]
    Beginner,
    /// One to three years
    Intermediate,
    /// Three years or more
    Advanced,
}

/// Dietary restriction; each one excludes specific catalog foods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No gluten-containing grains
    GlutenFree,
    /// No dairy products
    DairyFree,
    /// No tree nuts or peanuts
    NutFree,
}

/// BMR estimation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BmrMethod {
    /// Mifflin-St Jeor (1990)
    #[default]
    MifflinStJeor,
    /// Revised Harris-Benedict (Roza & Shizgal, 1984)
    HarrisBenedict,
    /// Katch-McArdle, lean-mass based; needs body fat percentage
    KatchMcArdle,
}

impl BmrMethod {
    /// Display name used in results and error messages
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MifflinStJeor => "Mifflin-St Jeor",
            Self::HarrisBenedict => "Harris-Benedict",
            Self::KatchMcArdle => "Katch-McArdle",
        }
    }
}

/// Workout intensity used for nutrient timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutIntensity {
    /// Below 50% of max heart rate
    Low,
    /// 50-75% of max heart rate
    Moderate,
    /// Above 75% of max heart rate
    High,
}

impl From<ExperienceLevel> for WorkoutIntensity {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Beginner => Self::Low,
            ExperienceLevel::Intermediate => Self::Moderate,
            ExperienceLevel::Advanced => Self::High,
        }
    }
}

/// Body metrics and preferences for one calculation.
///
/// Built from a stored profile or form input; never mutated by the calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMetrics {
    /// Age in whole years
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Habitual activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Primary fitness goal
    #[serde(default)]
    pub fitness_goal: FitnessGoal,
    /// Training experience
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    /// Body fat percentage, required for Katch-McArdle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Foods to exclude from meal plans
    #[serde(default)]
    pub dietary_restrictions: BTreeSet<DietaryRestriction>,
}

impl UserMetrics {
    /// Metrics with default activity (moderate), goal (maintenance), and level (beginner)
    #[must_use]
    pub const fn new(age_years: u32, sex: Sex, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            age_years,
            sex,
            weight_kg,
            height_cm,
            activity_level: ActivityLevel::ModeratelyActive,
            fitness_goal: FitnessGoal::Maintenance,
            experience_level: ExperienceLevel::Beginner,
            body_fat_percent: None,
            dietary_restrictions: BTreeSet::new(),
        }
    }

    /// Set the activity level
    #[must_use]
    pub const fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Set the fitness goal
    #[must_use]
    pub const fn with_goal(mut self, fitness_goal: FitnessGoal) -> Self {
        self.fitness_goal = fitness_goal;
        self
    }

    /// Set the experience level
    #[must_use]
    pub const fn with_experience(mut self, experience_level: ExperienceLevel) -> Self {
        self.experience_level = experience_level;
        self
    }

    /// Set the body fat percentage
    #[must_use]
    pub const fn with_body_fat(mut self, body_fat_percent: f64) -> Self {
        self.body_fat_percent = Some(body_fat_percent);
        self
    }

    /// Add a dietary restriction
    #[must_use]
    pub fn with_restriction(mut self, restriction: DietaryRestriction) -> Self {
        self.dietary_restrictions.insert(restriction);
        self
    }
}

// String forms match the serde names so CLI flags and JSON profiles agree

impl Sex {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtremelyActive => "extremely_active",
        }
    }
}

impl FitnessGoal {
    /// All goals
    pub const ALL: [Self; 6] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Maintenance,
        Self::Endurance,
        Self::Strength,
        Self::GeneralFitness,
    ];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
            Self::Endurance => "endurance",
            Self::Strength => "strength",
            Self::GeneralFitness => "general_fitness",
        }
    }
}

impl ExperienceLevel {
    /// All levels
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl DietaryRestriction {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::GlutenFree => "gluten_free",
            Self::DairyFree => "dairy_free",
            Self::NutFree => "nut_free",
        }
    }
}

impl BmrMethod {
    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MifflinStJeor => "mifflin_st_jeor",
            Self::HarrisBenedict => "harris_benedict",
            Self::KatchMcArdle => "katch_mcardle",
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!("Unknown sex: {other}"))),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" | "light" => Ok(Self::LightlyActive),
            "moderately_active" | "moderate" => Ok(Self::ModeratelyActive),
            "very_active" => Ok(Self::VeryActive),
            "extremely_active" | "extra_active" => Ok(Self::ExtremelyActive),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: {other}"
            ))),
        }
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "weight_loss" | "cut" => Ok(Self::WeightLoss),
            "muscle_gain" | "bulk" => Ok(Self::MuscleGain),
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            "endurance" => Ok(Self::Endurance),
            "strength" => Ok(Self::Strength),
            "general_fitness" | "general" => Ok(Self::GeneralFitness),
            other => Err(AppError::invalid_input(format!(
                "Unknown fitness goal: {other}"
            ))),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown experience level: {other}"
            ))),
        }
    }
}

impl FromStr for DietaryRestriction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "gluten_free" => Ok(Self::GlutenFree),
            "dairy_free" => Ok(Self::DairyFree),
            "nut_free" => Ok(Self::NutFree),
            other => Err(AppError::invalid_input(format!(
                "Unknown dietary restriction: {other}"
            ))),
        }
    }
}

impl FromStr for BmrMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "mifflin_st_jeor" | "mifflin" | "msj" => Ok(Self::MifflinStJeor),
            "harris_benedict" | "harris" => Ok(Self::HarrisBenedict),
            "katch_mcardle" | "katch" => Ok(Self::KatchMcArdle),
            other => Err(AppError::invalid_input(format!("Unknown BMR method: {other}"))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BmrMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_parsing_accepts_aliases() {
        assert_eq!("Muscle-Gain".parse::<FitnessGoal>().unwrap(), FitnessGoal::MuscleGain);
        assert_eq!("extra_active".parse::<ActivityLevel>().unwrap(), ActivityLevel::ExtremelyActive);
        assert_eq!("katch".parse::<BmrMethod>().unwrap(), BmrMethod::KatchMcArdle);
        assert!("sideways".parse::<Sex>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for goal in FitnessGoal::ALL {
            assert_eq!(goal.to_string().parse::<FitnessGoal>().unwrap(), goal);
        }
        for level in ActivityLevel::ALL {
            assert_eq!(level.to_string().parse::<ActivityLevel>().unwrap(), level);
        }
    }

    #[test]
    fn test_metrics_deserialize_with_defaults() {
        let metrics: UserMetrics = serde_json::from_str(
            r#"{"age_years": 30, "sex": "female", "weight_kg": 62.5, "height_cm": 168}"#,
        )
        .unwrap();

        assert_eq!(metrics.activity_level, ActivityLevel::ModeratelyActive);
        assert_eq!(metrics.fitness_goal, FitnessGoal::Maintenance);
        assert!(metrics.body_fat_percent.is_none());
        assert!(metrics.dietary_restrictions.is_empty());
    }
}
