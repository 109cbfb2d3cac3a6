// ABOUTME: Plan commands for smartbulk-cli
// ABOUTME: Workout plan, meal plan, and shopping list generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use smartbulk::errors::AppResult;
use smartbulk::intelligence::plan_assembler::assemble_workout_plan;
use smartbulk::models::{BmrMethod, MealPlan, UserMetrics};
use smartbulk::recommendation::RecommendationService;
use tracing::info;

use crate::helpers::display::print_json;

/// Print a weekly workout plan, optionally at a fixed frequency
pub fn workout(
    service: &RecommendationService,
    metrics: &UserMetrics,
    sessions: Option<u8>,
) -> AppResult<()> {
    let plan = match sessions {
        Some(sessions_per_week) => assemble_workout_plan(
            metrics.fitness_goal,
            metrics.experience_level,
            sessions_per_week,
            service.catalog(),
            &service.config().training,
        )?,
        None => service.workout_plan(metrics)?,
    };

    info!(
        sessions_per_week = plan.sessions_per_week,
        estimated_weekly_minutes = plan.estimated_weekly_minutes,
        "Generated workout plan"
    );
    print_json(&plan)
}

fn generate_meal_plan(
    service: &RecommendationService,
    metrics: &UserMetrics,
    method: Option<BmrMethod>,
) -> AppResult<MealPlan> {
    let energy = service.energy_targets(metrics, method)?;
    let macros = service.macro_targets(metrics, &energy)?;
    service.meal_plan(metrics, &macros)
}

/// Print a daily meal plan
pub fn meal(
    service: &RecommendationService,
    metrics: &UserMetrics,
    method: Option<BmrMethod>,
) -> AppResult<()> {
    let plan = generate_meal_plan(service, metrics, method)?;
    info!(
        target_calories = plan.daily_targets.total_kcal,
        meals = plan.meals.len(),
        "Generated meal plan"
    );
    print_json(&plan)
}

/// Print the shopping list for a freshly generated meal plan
pub fn shopping(
    service: &RecommendationService,
    metrics: &UserMetrics,
    method: Option<BmrMethod>,
) -> AppResult<()> {
    let plan = generate_meal_plan(service, metrics, method)?;
    let list = service.shopping_list(&plan);
    info!(
        items = list.items.len(),
        total_grams = list.total_grams,
        "Built shopping list"
    );
    print_json(&list)
}
