// ABOUTME: Calculator configuration with defaults, environment overrides, and validation
// ABOUTME: Orchestrates nutrition and training configs and exposes a process-wide instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Intelligence Configuration Module
//!
//! Type-safe configuration for every calculator. Values start from the
//! defaults, are overridden by `SMARTBULK_*` environment variables, and are
//! validated once before use.
//!
//! # Module Structure
//!
//! - `nutrition` - BMR coefficients, activity factors, goal presets, nutrient timing, meal plans
//! - `training` - Weekly frequency table and session length estimates
//! - `error` - Configuration error types

pub mod error;
pub mod nutrition;
pub mod training;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroPreset, MacronutrientConfig,
    MealPlanConfig, MealSplit, MealTemplateConfig, NutrientTimingConfig, NutritionConfig,
};
pub use training::{FrequencyTableConfig, LevelFrequency, SessionDurationConfig, TrainingConfig};

use serde::{Deserialize, Serialize};
use smartbulk_core::models::FitnessGoal;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Energy, macro, timing, and meal plan settings
    pub nutrition: NutritionConfig,
    /// Workout plan settings
    pub training: TrainingConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            default_bmr_method = %config.nutrition.bmr.default_method,
            muscle_gain_adjustment = config.nutrition.goal_adjustments.muscle_gain,
            options_per_meal = config.nutrition.meal_plan.options_per_meal,
            "Intelligence configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated bound or ordering constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_nutrition()?;
        self.validate_training()
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0
            || nutr.bmr.msj_height_coef <= 0.0
            || nutr.bmr.hb_male_weight_coef <= 0.0
            || nutr.bmr.hb_female_weight_coef <= 0.0
            || nutr.bmr.km_lean_mass_coef <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight, height, and lean mass coefficients must be positive",
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.extremely_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extremely_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let adjustments = &nutr.goal_adjustments;
        if adjustments.weight_loss >= 1.0 || adjustments.muscle_gain <= 1.0 {
            return Err(ConfigError::InvalidRange(
                "weight_loss adjustment must be < 1.0 and muscle_gain adjustment > 1.0",
            ));
        }
        for goal in FitnessGoal::ALL {
            let adjustment = adjustments.adjustment_for(goal);
            if !(0.5..=1.5).contains(&adjustment) {
                return Err(ConfigError::ValueOutOfRange(
                    "Goal adjustments must be between 0.5 and 1.5",
                ));
            }
        }

        for (_, preset) in nutr.macronutrients.presets() {
            if !(0.5..=3.5).contains(&preset.protein_g_per_kg) {
                return Err(ConfigError::ValueOutOfRange(
                    "Protein presets must be between 0.5 and 3.5 g/kg",
                ));
            }
            if !(0.1..=0.5).contains(&preset.fat_fraction) {
                return Err(ConfigError::ValueOutOfRange(
                    "Fat fractions must be between 0.1 and 0.5",
                ));
            }
        }

        let timing = &nutr.nutrient_timing;
        if timing.pre_workout_window_hours > 6.0 || timing.post_workout_window_hours > 6.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Pre/post workout windows must be <= 6 hours",
            ));
        }
        if timing.post_workout_protein_g_min >= timing.post_workout_protein_g_max {
            return Err(ConfigError::InvalidRange(
                "post_workout_protein_min must be < post_workout_protein_max",
            ));
        }
        if timing.protein_meals_per_day == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein meals per day must be at least 1",
            ));
        }

        let meals = &nutr.meal_plan;
        if meals.options_per_meal == 0 || meals.options_per_meal > 10 {
            return Err(ConfigError::ValueOutOfRange(
                "Options per meal must be between 1 and 10",
            ));
        }
        if meals.vegetable_serving_g <= 0.0
            || meals.vegetable_max_calorie_share <= 0.0
            || meals.vegetable_max_calorie_share > 1.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Vegetable serving must be positive and its calorie share in (0, 1]",
            ));
        }
        if meals.calorie_tolerance_fraction <= 0.0
            || meals.calorie_tolerance_fraction > 0.5
            || meals.calorie_tolerance_min_kcal < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie tolerance must be in (0, 0.5] with a non-negative floor",
            ));
        }
        if meals.macro_tolerance_fraction <= 0.0
            || meals.macro_tolerance_fraction > 0.5
            || meals.macro_tolerance_min_g <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Macro tolerance must be in (0, 0.5] with a positive gram floor",
            ));
        }
        meals.templates.validate()?;

        Ok(())
    }

    fn validate_training(&self) -> Result<(), ConfigError> {
        self.training.frequency.validate()?;
        if self.training.session.minutes_per_exercise == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minutes per exercise must be at least 1",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Energy estimation
        Self::apply_env_var(
            "SMARTBULK_BMR_METHOD",
            &mut self.nutrition.bmr.default_method,
        )?;
        Self::apply_env_var(
            "SMARTBULK_WEIGHT_LOSS_ADJUSTMENT",
            &mut self.nutrition.goal_adjustments.weight_loss,
        )?;
        Self::apply_env_var(
            "SMARTBULK_MUSCLE_GAIN_ADJUSTMENT",
            &mut self.nutrition.goal_adjustments.muscle_gain,
        )?;
        Self::apply_env_var(
            "SMARTBULK_ENDURANCE_ADJUSTMENT",
            &mut self.nutrition.goal_adjustments.endurance,
        )?;

        // Meal plan
        Self::apply_env_var(
            "SMARTBULK_MEAL_OPTIONS",
            &mut self.nutrition.meal_plan.options_per_meal,
        )?;
        Self::apply_env_var(
            "SMARTBULK_VEGETABLE_SERVING_G",
            &mut self.nutrition.meal_plan.vegetable_serving_g,
        )?;
        Self::apply_env_var(
            "SMARTBULK_CALORIE_TOLERANCE",
            &mut self.nutrition.meal_plan.calorie_tolerance_fraction,
        )?;
        Self::apply_env_var(
            "SMARTBULK_MACRO_TOLERANCE",
            &mut self.nutrition.meal_plan.macro_tolerance_fraction,
        )?;

        // Nutrient timing
        Self::apply_env_var(
            "SMARTBULK_PROTEIN_MEALS_PER_DAY",
            &mut self.nutrition.nutrient_timing.protein_meals_per_day,
        )?;

        // Workout plan
        Self::apply_env_var(
            "SMARTBULK_MINUTES_PER_EXERCISE",
            &mut self.training.session.minutes_per_exercise,
        )?;
        Self::apply_env_var(
            "SMARTBULK_WARMUP_COOLDOWN_MINUTES",
            &mut self.training.session.warmup_cooldown_minutes,
        )?;

        Ok(self)
    }
}
