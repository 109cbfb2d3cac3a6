// ABOUTME: Energy estimation using peer-reviewed BMR formulas and activity multipliers
// ABOUTME: BMR, TDEE, and goal-adjusted daily calorie target from user metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Energy Estimator
//!
//! Three BMR formulas feed one pipeline: `round(bmr)` → `round(bmr × activity)`
//! → `round(tdee × goal adjustment)`. Each stage is computed from the rounded
//! value of the previous one, so the numbers a user sees always multiply out.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use smartbulk_core::constants::limits;
use smartbulk_core::errors::CalculationError;
use smartbulk_core::models::{ActivityLevel, BmrMethod, EnergyTargets, Sex, UserMetrics};
use tracing::debug;

use crate::config::intelligence::{ActivityFactorsConfig, BmrConfig, NutritionConfig};

/// Round a kcal value to the nearest whole kcal
#[must_use]
pub fn round_kcal(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Raw Mifflin-St Jeor BMR (kcal/day), unrounded
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age_years);

    weight_component + height_component + age_component + sex_constant
}

/// Raw revised Harris-Benedict BMR (kcal/day), unrounded
///
/// - Men: 88.362 + 13.397w + 4.799h - 5.677a
/// - Women: 447.593 + 9.247w + 3.098h - 4.330a
#[must_use]
pub fn calculate_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let (constant, weight_coef, height_coef, age_coef) = match sex {
        Sex::Male => (
            config.hb_male_constant,
            config.hb_male_weight_coef,
            config.hb_male_height_coef,
            config.hb_male_age_coef,
        ),
        Sex::Female => (
            config.hb_female_constant,
            config.hb_female_weight_coef,
            config.hb_female_height_coef,
            config.hb_female_age_coef,
        ),
    };

    let weight_component = weight_coef * weight_kg;
    let height_component = height_coef * height_cm;
    let age_component = age_coef * f64::from(age_years);

    constant + weight_component + height_component + age_component
}

/// Raw Katch-McArdle BMR (kcal/day), unrounded
///
/// Formula: BMR = 370 + 21.6 x lean mass, lean mass = w x (1 - bf/100)
#[must_use]
pub fn calculate_katch_mcardle(weight_kg: f64, body_fat_percent: f64, config: &BmrConfig) -> f64 {
    let lean_mass_kg = weight_kg * (1.0 - body_fat_percent / 100.0);
    config.km_lean_mass_coef.mul_add(lean_mass_kg, config.km_constant)
}

/// Reject metrics no formula can make sense of
///
/// # Errors
///
/// Returns `InvalidRange` naming the first implausible field
pub fn validate_metrics(metrics: &UserMetrics) -> Result<(), CalculationError> {
    if !metrics.weight_kg.is_finite()
        || metrics.weight_kg <= 0.0
        || metrics.weight_kg > limits::MAX_WEIGHT_KG
    {
        return Err(CalculationError::out_of_range(
            "weight_kg",
            metrics.weight_kg,
            "must be greater than 0 and at most 400 kg",
        ));
    }
    if !metrics.height_cm.is_finite()
        || metrics.height_cm <= 0.0
        || metrics.height_cm > limits::MAX_HEIGHT_CM
    {
        return Err(CalculationError::out_of_range(
            "height_cm",
            metrics.height_cm,
            "must be greater than 0 and at most 280 cm",
        ));
    }
    if !(limits::MIN_AGE_YEARS..=limits::MAX_AGE_YEARS).contains(&metrics.age_years) {
        return Err(CalculationError::out_of_range(
            "age_years",
            f64::from(metrics.age_years),
            "must be between 1 and 120 years",
        ));
    }
    if let Some(body_fat) = metrics.body_fat_percent {
        if !body_fat.is_finite() || body_fat <= 0.0 || body_fat >= limits::MAX_BODY_FAT_PERCENT {
            return Err(CalculationError::out_of_range(
                "body_fat_percent",
                body_fat,
                "must be strictly between 0 and 100",
            ));
        }
    }
    Ok(())
}

/// Unrounded BMR for the chosen method
///
/// # Errors
///
/// - `MissingInput` if Katch-McArdle is chosen without a body fat percentage
/// - `InvalidRange` if the metrics are implausible or the formula yields a non-positive BMR
pub fn calculate_bmr(
    metrics: &UserMetrics,
    method: BmrMethod,
    config: &BmrConfig,
) -> Result<f64, CalculationError> {
    if method == BmrMethod::KatchMcArdle && metrics.body_fat_percent.is_none() {
        return Err(CalculationError::MissingInput {
            method: method.label(),
            field: "body_fat_percent",
        });
    }
    validate_metrics(metrics)?;

    let bmr = match (method, metrics.body_fat_percent) {
        (BmrMethod::KatchMcArdle, Some(body_fat)) => {
            calculate_katch_mcardle(metrics.weight_kg, body_fat, config)
        }
        (BmrMethod::HarrisBenedict, _) => calculate_harris_benedict(
            metrics.weight_kg,
            metrics.height_cm,
            metrics.age_years,
            metrics.sex,
            config,
        ),
        _ => calculate_mifflin_st_jeor(
            metrics.weight_kg,
            metrics.height_cm,
            metrics.age_years,
            metrics.sex,
            config,
        ),
    };

    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(CalculationError::out_of_range(
            "bmr",
            bmr,
            "formula produced a non-positive BMR for these metrics",
        ));
    }
    Ok(bmr)
}

/// Total Daily Energy Expenditure from a rounded BMR
///
/// Formula: TDEE = round(BMR x Activity Factor)
#[must_use]
pub fn calculate_tdee(
    bmr_kcal: u32,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> u32 {
    round_kcal(f64::from(bmr_kcal) * config.factor_for(activity_level))
}

/// BMR, TDEE, and goal-adjusted calorie target for a user
///
/// # Errors
///
/// See [`calculate_bmr`]
pub fn estimate_energy(
    metrics: &UserMetrics,
    method: BmrMethod,
    config: &NutritionConfig,
) -> Result<EnergyTargets, CalculationError> {
    let bmr_kcal = round_kcal(calculate_bmr(metrics, method, &config.bmr)?);

    let activity_multiplier = config.activity_factors.factor_for(metrics.activity_level);
    let tdee_kcal = calculate_tdee(bmr_kcal, metrics.activity_level, &config.activity_factors);

    let goal_adjustment = config
        .goal_adjustments
        .adjustment_for(metrics.fitness_goal);
    let target_calories_kcal = round_kcal(f64::from(tdee_kcal) * goal_adjustment);

    debug!(
        method = %method,
        bmr_kcal,
        tdee_kcal,
        target_calories_kcal,
        activity_level = %metrics.activity_level,
        fitness_goal = %metrics.fitness_goal,
        "Estimated daily energy"
    );

    Ok(EnergyTargets {
        bmr_kcal,
        tdee_kcal,
        target_calories_kcal,
        method,
        activity_level: metrics.activity_level,
        activity_multiplier,
        fitness_goal: metrics.fitness_goal,
        goal_adjustment,
    })
}
