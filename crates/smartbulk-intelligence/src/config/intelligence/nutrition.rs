// ABOUTME: Nutrition configuration for energy estimation, macro allocation, and meal planning
// ABOUTME: Configures BMR coefficients, activity factors, goal presets, timing, and meal splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Nutrition Configuration
//!
//! Every coefficient and lookup table used by the energy estimator, macro
//! allocator, nutrient timing, and meal assembler.
//!
//! # Scientific References
//!
//! - Mifflin-St Jeor: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Harris-Benedict (revised): Roza & Shizgal (1984) DOI: 10.1093/ajcn/40.1.168
//! - Katch-McArdle: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
//! - Timing: Kerksick et al. (2017) DOI: 10.1186/s12970-017-0189-4

use serde::{Deserialize, Serialize};
use smartbulk_core::models::{ActivityLevel, BmrMethod, FitnessGoal, MealType};

use super::error::ConfigError;

/// Nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment per fitness goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein and fat presets per fitness goal
    pub macronutrients: MacronutrientConfig,
    /// Nutrient timing recommendations
    pub nutrient_timing: NutrientTimingConfig,
    /// Meal plan assembly settings
    pub meal_plan: MealPlanConfig,
}

/// BMR formula configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Method used when the caller does not pick one
    pub default_method: BmrMethod,
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Harris-Benedict male constant (88.362)
    pub hb_male_constant: f64,
    /// Harris-Benedict male weight coefficient (13.397)
    pub hb_male_weight_coef: f64,
    /// Harris-Benedict male height coefficient (4.799)
    pub hb_male_height_coef: f64,
    /// Harris-Benedict male age coefficient (-5.677)
    pub hb_male_age_coef: f64,
    /// Harris-Benedict female constant (447.593)
    pub hb_female_constant: f64,
    /// Harris-Benedict female weight coefficient (9.247)
    pub hb_female_weight_coef: f64,
    /// Harris-Benedict female height coefficient (3.098)
    pub hb_female_height_coef: f64,
    /// Harris-Benedict female age coefficient (-4.330)
    pub hb_female_age_coef: f64,
    /// Katch-McArdle constant (370)
    pub km_constant: f64,
    /// Katch-McArdle lean mass coefficient (21.6)
    pub km_lean_mass_coef: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            default_method: BmrMethod::MifflinStJeor,
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            hb_male_constant: 88.362,
            hb_male_weight_coef: 13.397,
            hb_male_height_coef: 4.799,
            hb_male_age_coef: -5.677,
            hb_female_constant: 447.593,
            hb_female_weight_coef: 9.247,
            hb_female_height_coef: 3.098,
            hb_female_age_coef: -4.330,
            km_constant: 370.0,
            km_lean_mass_coef: 21.6,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extremely active (hard training 2x/day): 1.9
    pub extremely_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
        }
    }
}

/// Factor applied to TDEE for each goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Weight loss deficit: 0.85
    pub weight_loss: f64,
    /// Muscle gain surplus: 1.10
    pub muscle_gain: f64,
    /// Maintenance: 1.0
    pub maintenance: f64,
    /// Endurance: 1.05
    pub endurance: f64,
    /// Strength: 1.0
    pub strength: f64,
    /// General fitness: 1.0
    pub general_fitness: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            weight_loss: 0.85,
            muscle_gain: 1.10,
            maintenance: 1.0,
            endurance: 1.05,
            strength: 1.0,
            general_fitness: 1.0,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Adjustment factor for a goal
    #[must_use]
    pub const fn adjustment_for(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::WeightLoss => self.weight_loss,
            FitnessGoal::MuscleGain => self.muscle_gain,
            FitnessGoal::Maintenance => self.maintenance,
            FitnessGoal::Endurance => self.endurance,
            FitnessGoal::Strength => self.strength,
            FitnessGoal::GeneralFitness => self.general_fitness,
        }
    }
}

/// Protein and fat preset for one goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroPreset {
    /// Protein grams per kg of body weight
    pub protein_g_per_kg: f64,
    /// Share of the calorie target given to fat (0.0-1.0)
    pub fat_fraction: f64,
}

impl MacroPreset {
    /// Create a preset
    #[must_use]
    pub const fn new(protein_g_per_kg: f64, fat_fraction: f64) -> Self {
        Self {
            protein_g_per_kg,
            fat_fraction,
        }
    }
}

/// Macronutrient presets per goal; carbohydrate takes the remainder
///
/// Reference: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Weight loss: 2.2 g/kg protein, 30% fat
    pub weight_loss: MacroPreset,
    /// Muscle gain: 2.0 g/kg protein, 25% fat
    pub muscle_gain: MacroPreset,
    /// Maintenance: 1.8 g/kg protein, 28% fat
    pub maintenance: MacroPreset,
    /// Endurance: 1.6 g/kg protein, 20% fat
    pub endurance: MacroPreset,
    /// Strength: 2.0 g/kg protein, 25% fat
    pub strength: MacroPreset,
    /// General fitness: 1.8 g/kg protein, 28% fat
    pub general_fitness: MacroPreset,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroPreset::new(2.2, 0.30),
            muscle_gain: MacroPreset::new(2.0, 0.25),
            maintenance: MacroPreset::new(1.8, 0.28),
            endurance: MacroPreset::new(1.6, 0.20),
            strength: MacroPreset::new(2.0, 0.25),
            general_fitness: MacroPreset::new(1.8, 0.28),
        }
    }
}

impl MacronutrientConfig {
    /// Preset for a goal
    #[must_use]
    pub const fn preset_for(&self, goal: FitnessGoal) -> MacroPreset {
        match goal {
            FitnessGoal::WeightLoss => self.weight_loss,
            FitnessGoal::MuscleGain => self.muscle_gain,
            FitnessGoal::Maintenance => self.maintenance,
            FitnessGoal::Endurance => self.endurance,
            FitnessGoal::Strength => self.strength,
            FitnessGoal::GeneralFitness => self.general_fitness,
        }
    }

    /// Every preset, paired with its goal
    #[must_use]
    pub const fn presets(&self) -> [(FitnessGoal, MacroPreset); 6] {
        [
            (FitnessGoal::WeightLoss, self.weight_loss),
            (FitnessGoal::MuscleGain, self.muscle_gain),
            (FitnessGoal::Maintenance, self.maintenance),
            (FitnessGoal::Endurance, self.endurance),
            (FitnessGoal::Strength, self.strength),
            (FitnessGoal::GeneralFitness, self.general_fitness),
        ]
    }
}

/// Nutrient timing configuration
///
/// References:
/// - Kerksick et al. (2017) DOI: 10.1186/s12970-017-0189-4
/// - Aragon & Schoenfeld (2013) DOI: 10.1186/1550-2783-10-5
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientTimingConfig {
    /// Pre-workout window (hours before): 1-3 hours
    pub pre_workout_window_hours: f64,
    /// Post-workout window (hours): 2 hours
    pub post_workout_window_hours: f64,
    /// Pre-workout carbs (g/kg) at moderate intensity: 0.75
    pub pre_workout_carbs_g_per_kg: f64,
    /// Post-workout protein minimum (g): 20g
    pub post_workout_protein_g_min: f64,
    /// Post-workout protein maximum (g): 40g
    pub post_workout_protein_g_max: f64,
    /// Post-workout carbs (g/kg): 1.0
    pub post_workout_carbs_g_per_kg: f64,
    /// Optimal protein meals per day
    pub protein_meals_per_day: u8,
}

impl Default for NutrientTimingConfig {
    fn default() -> Self {
        Self {
            pre_workout_window_hours: 2.0,
            post_workout_window_hours: 2.0,
            pre_workout_carbs_g_per_kg: 0.75,
            post_workout_protein_g_min: 20.0,
            post_workout_protein_g_max: 40.0,
            post_workout_carbs_g_per_kg: 1.0,
            protein_meals_per_day: 4,
        }
    }
}

/// Share of the daily targets given to each meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MealSplit {
    /// Breakfast fraction
    pub breakfast: f64,
    /// Lunch fraction
    pub lunch: f64,
    /// Dinner fraction
    pub dinner: f64,
    /// Snack fraction
    pub snack: f64,
}

impl MealSplit {
    /// Create a split
    #[must_use]
    pub const fn new(breakfast: f64, lunch: f64, dinner: f64, snack: f64) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
            snack,
        }
    }

    /// Fraction for one meal
    #[must_use]
    pub const fn fraction(&self, meal: MealType) -> f64 {
        match meal {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
        }
    }

    fn sum(&self) -> f64 {
        self.breakfast + self.lunch + self.dinner + self.snack
    }
}

/// Meal split per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealTemplateConfig {
    /// Weight loss split
    pub weight_loss: MealSplit,
    /// Muscle gain split (bigger snack)
    pub muscle_gain: MealSplit,
    /// Maintenance split
    pub maintenance: MealSplit,
    /// Endurance split (carb-heavy breakfast)
    pub endurance: MealSplit,
    /// Strength split
    pub strength: MealSplit,
    /// General fitness split
    pub general_fitness: MealSplit,
}

impl Default for MealTemplateConfig {
    fn default() -> Self {
        Self {
            weight_loss: MealSplit::new(0.25, 0.35, 0.30, 0.10),
            muscle_gain: MealSplit::new(0.25, 0.30, 0.30, 0.15),
            maintenance: MealSplit::new(0.25, 0.35, 0.30, 0.10),
            endurance: MealSplit::new(0.30, 0.30, 0.25, 0.15),
            strength: MealSplit::new(0.25, 0.30, 0.30, 0.15),
            general_fitness: MealSplit::new(0.25, 0.35, 0.30, 0.10),
        }
    }
}

impl MealTemplateConfig {
    /// Split for a goal
    #[must_use]
    pub const fn split_for(&self, goal: FitnessGoal) -> MealSplit {
        match goal {
            FitnessGoal::WeightLoss => self.weight_loss,
            FitnessGoal::MuscleGain => self.muscle_gain,
            FitnessGoal::Maintenance => self.maintenance,
            FitnessGoal::Endurance => self.endurance,
            FitnessGoal::Strength => self.strength,
            FitnessGoal::GeneralFitness => self.general_fitness,
        }
    }

    /// Validate that every split is non-negative and sums to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first goal whose split is off
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in FitnessGoal::ALL {
            let split = self.split_for(goal);
            let negative = MealType::ALL.iter().any(|meal| split.fraction(*meal) < 0.0);
            let sum = split.sum();
            if negative || (sum - 1.0).abs() > 0.001 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{goal} meal fractions must be non-negative and sum to 1.0, got {sum:.3}"
                )));
            }
        }
        Ok(())
    }
}

/// Meal plan assembly settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlanConfig {
    /// Options generated per meal
    pub options_per_meal: u8,
    /// Fixed vegetable serving (g)
    pub vegetable_serving_g: f64,
    /// Vegetables are skipped when they would exceed this share of the meal calories
    pub vegetable_max_calorie_share: f64,
    /// Accepted deviation from the meal calorie target, as a fraction
    pub calorie_tolerance_fraction: f64,
    /// Lower bound on the accepted deviation (kcal)
    pub calorie_tolerance_min_kcal: f64,
    /// Accepted deviation from each meal macro target, as a fraction
    pub macro_tolerance_fraction: f64,
    /// Lower bound on the accepted macro deviation (g)
    pub macro_tolerance_min_g: f64,
    /// Random food draws per option before every combination is tried
    pub max_draw_attempts: u16,
    /// Meal split per goal
    pub templates: MealTemplateConfig,
}

impl Default for MealPlanConfig {
    fn default() -> Self {
        Self {
            options_per_meal: 3,
            vegetable_serving_g: 100.0,
            vegetable_max_calorie_share: 0.5,
            calorie_tolerance_fraction: 0.05,
            calorie_tolerance_min_kcal: 15.0,
            macro_tolerance_fraction: 0.10,
            macro_tolerance_min_g: 3.0,
            max_draw_attempts: 32,
            templates: MealTemplateConfig::default(),
        }
    }
}

impl MealPlanConfig {
    /// Accepted calorie deviation for a meal target
    #[must_use]
    pub fn calorie_tolerance(&self, target_kcal: f64) -> f64 {
        (target_kcal * self.calorie_tolerance_fraction).max(self.calorie_tolerance_min_kcal)
    }

    /// Accepted deviation for a meal protein, carb or fat target
    #[must_use]
    pub fn macro_tolerance(&self, target_g: f64) -> f64 {
        (target_g * self.macro_tolerance_fraction).max(self.macro_tolerance_min_g)
    }
}
