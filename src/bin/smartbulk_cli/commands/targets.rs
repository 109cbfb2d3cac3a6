// ABOUTME: Targets command for smartbulk-cli
// ABOUTME: Prints energy, macro, body composition, and nutrient timing results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use serde::Serialize;
use smartbulk::errors::AppResult;
use smartbulk::models::{
    BmrMethod, BodyComposition, EnergyTargets, MacroTargets, NutrientTimingPlan, UserMetrics,
};
use smartbulk::recommendation::RecommendationService;
use tracing::info;

use crate::helpers::display::print_json;

#[derive(Serialize)]
struct TargetsReport {
    energy: EnergyTargets,
    macros: MacroTargets,
    body_composition: BodyComposition,
    nutrient_timing: NutrientTimingPlan,
}

/// Compute and print daily targets
pub fn run(
    service: &RecommendationService,
    metrics: &UserMetrics,
    method: Option<BmrMethod>,
) -> AppResult<()> {
    let energy = service.energy_targets(metrics, method)?;
    let macros = service.macro_targets(metrics, &energy)?;
    let body_composition = service.body_composition(metrics)?;
    let nutrient_timing = service.nutrient_timing(metrics, &macros)?;

    info!(
        method = %energy.method,
        bmr_kcal = energy.bmr_kcal,
        tdee_kcal = energy.tdee_kcal,
        target_calories_kcal = energy.target_calories_kcal,
        "Computed daily targets"
    );

    print_json(&TargetsReport {
        energy,
        macros,
        body_composition,
        nutrient_timing,
    })
}
