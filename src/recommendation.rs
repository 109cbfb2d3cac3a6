// ABOUTME: Recommendation service composing the energy, macro, timing, and plan calculators
// ABOUTME: Owns validated configuration plus a shared catalog and returns AppResult everywhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Recommendation service
//!
//! [`RecommendationService`] is the single entry point the front ends use.
//! It runs the calculators in pipeline order: energy targets feed the macro
//! allocator, macro targets feed nutrient timing and the meal planner, and the
//! meal plan feeds the shopping list. Calculator errors surface as
//! [`AppError`](crate::errors::AppError) with stable codes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::{thread_rng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use smartbulk_intelligence::body_composition::calculate_body_composition;
use smartbulk_intelligence::energy_estimator::estimate_energy;
use smartbulk_intelligence::macro_allocator::allocate_macros;
use smartbulk_intelligence::nutrient_timing::calculate_nutrient_timing;
use smartbulk_intelligence::plan_assembler::{
    assemble_meal_plan, assemble_workout_plan, build_shopping_list, weekly_frequency,
};
use smartbulk_intelligence::Catalog;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{AppConfig, IntelligenceConfig};
use crate::errors::AppResult;
use crate::models::{
    BmrMethod, BodyComposition, EnergyTargets, MacroTargets, MealPlan, NutrientTimingPlan,
    ShoppingList, UserMetrics, WorkoutIntensity, WorkoutPlan,
};

/// Everything the calculator produces for one user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessRecommendation {
    /// Identifier the persistence layer can key the document by
    pub id: Uuid,
    /// When the recommendation was computed
    pub generated_at: DateTime<Utc>,
    /// Input metrics
    pub metrics: UserMetrics,
    /// BMR, TDEE, and calorie target
    pub energy: EnergyTargets,
    /// Daily macronutrient grams
    pub macros: MacroTargets,
    /// BMI and lean mass
    pub body_composition: BodyComposition,
    /// Training-day nutrient timing
    pub nutrient_timing: NutrientTimingPlan,
    /// Weekly workout schedule
    pub workout_plan: WorkoutPlan,
    /// Daily meal plan with options per meal
    pub meal_plan: MealPlan,
    /// Groceries for every option in the meal plan
    pub shopping_list: ShoppingList,
}

/// Facade over the calculator pipeline
#[derive(Debug, Clone)]
pub struct RecommendationService {
    config: IntelligenceConfig,
    catalog: Arc<Catalog>,
    plan_seed: Option<u64>,
}

impl RecommendationService {
    /// Create a service from an explicit configuration and catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation
    pub fn new(config: IntelligenceConfig, catalog: Arc<Catalog>) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            plan_seed: None,
        })
    }

    /// Service over the global configuration and the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in catalog fails validation
    pub fn with_defaults() -> AppResult<Self> {
        Self::new(IntelligenceConfig::global().clone(), Catalog::builtin()?)
    }

    /// Service configured from the environment
    ///
    /// Loads `SMARTBULK_*` calculator overrides, the catalog override path,
    /// and the plan seed.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is invalid or the catalog cannot be loaded
    pub fn from_app_config(app_config: &AppConfig) -> AppResult<Self> {
        let config = IntelligenceConfig::load()?;
        let catalog = match &app_config.catalog_path {
            Some(path) => {
                info!(path = %path.display(), "Loading catalog override");
                Arc::new(Catalog::from_path(path)?)
            }
            None => Catalog::builtin()?,
        };
        Ok(Self::new(config, catalog)?.with_seed(app_config.plan_seed))
    }

    /// Make meal plans reproducible with a fixed seed
    #[must_use]
    pub const fn with_seed(mut self, plan_seed: Option<u64>) -> Self {
        self.plan_seed = plan_seed;
        self
    }

    /// Calculator configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Catalog in use
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// BMR, TDEE, and goal-adjusted calorie target
    ///
    /// `None` selects the configured default method.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` or `ValueOutOfRange` for unusable metrics
    pub fn energy_targets(
        &self,
        metrics: &UserMetrics,
        method: Option<BmrMethod>,
    ) -> AppResult<EnergyTargets> {
        let method = method.unwrap_or(self.config.nutrition.bmr.default_method);
        Ok(estimate_energy(metrics, method, &self.config.nutrition)?)
    }

    /// Macronutrient grams for an energy target
    ///
    /// # Errors
    ///
    /// Returns `UnsatisfiableTarget` if protein and fat alone exceed the target
    pub fn macro_targets(
        &self,
        metrics: &UserMetrics,
        energy: &EnergyTargets,
    ) -> AppResult<MacroTargets> {
        Ok(allocate_macros(
            energy.target_calories_kcal,
            metrics.fitness_goal,
            metrics.weight_kg,
            &self.config.nutrition.macronutrients,
        )?)
    }

    /// BMI category and lean mass
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for implausible metrics
    #[allow(clippy::unused_self)]
    pub fn body_composition(&self, metrics: &UserMetrics) -> AppResult<BodyComposition> {
        Ok(calculate_body_composition(metrics)?)
    }

    /// Pre/post-workout targets at the intensity matching the user's experience
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if weight or protein target is not positive
    pub fn nutrient_timing(
        &self,
        metrics: &UserMetrics,
        macros: &MacroTargets,
    ) -> AppResult<NutrientTimingPlan> {
        Ok(calculate_nutrient_timing(
            metrics.weight_kg,
            f64::from(macros.protein_g),
            WorkoutIntensity::from(metrics.experience_level),
            &self.config.nutrition.nutrient_timing,
        )?)
    }

    /// Weekly workout plan at the frequency for the user's activity and experience
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the catalog has no exercises for the goal and level
    pub fn workout_plan(&self, metrics: &UserMetrics) -> AppResult<WorkoutPlan> {
        let sessions = weekly_frequency(
            metrics.activity_level,
            metrics.experience_level,
            &self.config.training,
        );
        Ok(assemble_workout_plan(
            metrics.fitness_goal,
            metrics.experience_level,
            sessions,
            &self.catalog,
            &self.config.training,
        )?)
    }

    /// Daily meal plan using the configured seed, or the thread-local generator
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the restrictions leave a meal slot without foods
    pub fn meal_plan(&self, metrics: &UserMetrics, macros: &MacroTargets) -> AppResult<MealPlan> {
        match self.plan_seed {
            Some(seed) => {
                debug!(seed, "Generating seeded meal plan");
                self.meal_plan_with_rng(metrics, macros, &mut ChaCha8Rng::seed_from_u64(seed))
            }
            None => self.meal_plan_with_rng(metrics, macros, &mut thread_rng()),
        }
    }

    /// Daily meal plan drawing foods from `rng`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the restrictions leave a meal slot without foods
    pub fn meal_plan_with_rng<R: Rng + ?Sized>(
        &self,
        metrics: &UserMetrics,
        macros: &MacroTargets,
        rng: &mut R,
    ) -> AppResult<MealPlan> {
        Ok(assemble_meal_plan(
            macros,
            metrics.fitness_goal,
            &metrics.dietary_restrictions,
            &self.catalog,
            &self.config.nutrition.meal_plan,
            rng,
        )?)
    }

    /// Shopping list for every option of every meal
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn shopping_list(&self, plan: &MealPlan) -> ShoppingList {
        build_shopping_list(plan)
    }

    /// Full recommendation using the configured seed, or the thread-local generator
    ///
    /// # Errors
    ///
    /// Returns the first calculator error encountered
    pub fn recommend(
        &self,
        metrics: &UserMetrics,
        method: Option<BmrMethod>,
    ) -> AppResult<FitnessRecommendation> {
        match self.plan_seed {
            Some(seed) => {
                self.recommend_with_rng(metrics, method, &mut ChaCha8Rng::seed_from_u64(seed))
            }
            None => self.recommend_with_rng(metrics, method, &mut thread_rng()),
        }
    }

    /// Full recommendation drawing meal plan foods from `rng`
    ///
    /// # Errors
    ///
    /// Returns the first calculator error encountered
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        metrics: &UserMetrics,
        method: Option<BmrMethod>,
        rng: &mut R,
    ) -> AppResult<FitnessRecommendation> {
        let energy = self.energy_targets(metrics, method)?;
        let macros = self.macro_targets(metrics, &energy)?;
        let body_composition = self.body_composition(metrics)?;
        let nutrient_timing = self.nutrient_timing(metrics, &macros)?;
        let workout_plan = self.workout_plan(metrics)?;
        let meal_plan = self.meal_plan_with_rng(metrics, &macros, rng)?;
        let shopping_list = self.shopping_list(&meal_plan);

        let recommendation = FitnessRecommendation {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            metrics: metrics.clone(),
            energy,
            macros,
            body_composition,
            nutrient_timing,
            workout_plan,
            meal_plan,
            shopping_list,
        };

        info!(
            recommendation_id = %recommendation.id,
            goal = %metrics.fitness_goal,
            target_calories = recommendation.energy.target_calories_kcal,
            sessions_per_week = recommendation.workout_plan.sessions_per_week,
            shopping_items = recommendation.shopping_list.items.len(),
            "Generated fitness recommendation"
        );
        Ok(recommendation)
    }
}
