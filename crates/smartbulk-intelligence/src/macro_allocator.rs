// ABOUTME: Macronutrient allocation from a calorie target, fitness goal, and body weight
// ABOUTME: Protein by g/kg, fat by calorie share, carbohydrate takes the remainder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Macro Allocator
//!
//! Protein is anchored to body weight, fat to a share of the calorie target,
//! and carbohydrate fills what is left. Carbohydrate grams are floored so the
//! macro calories never overshoot the target and land within 4 kcal of it.
//!
//! # Scientific References
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use smartbulk_core::constants::energy_density::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};
use smartbulk_core::constants::limits;
use smartbulk_core::errors::CalculationError;
use smartbulk_core::models::{FitnessGoal, MacroPercentages, MacroTargets};
use tracing::debug;

use crate::config::intelligence::MacronutrientConfig;

/// Percentage of `part` in `total`, rounded to one decimal
fn percent_of(part: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (f64::from(part) * 1000.0 / f64::from(total)).round() / 10.0
}

/// Allocate daily protein, carbohydrate, and fat grams
///
/// - `protein_g = round(weight_kg x protein_g_per_kg[goal])`
/// - `fat_g = round(target x fat_fraction[goal] / 9)`
/// - `carbs_g = floor((target - 4 x protein_g - 9 x fat_g) / 4)`
///
/// # Errors
///
/// - `InvalidRange` if `weight_kg` is outside (0, 400] kg or the target is zero
/// - `MacroAllocation` if protein and fat alone exceed the target
pub fn allocate_macros(
    target_calories: u32,
    goal: FitnessGoal,
    weight_kg: f64,
    config: &MacronutrientConfig,
) -> Result<MacroTargets, CalculationError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > limits::MAX_WEIGHT_KG {
        return Err(CalculationError::out_of_range(
            "weight_kg",
            weight_kg,
            "must be greater than 0 and at most 400 kg",
        ));
    }
    if target_calories == 0 {
        return Err(CalculationError::out_of_range(
            "target_calories",
            0.0,
            "must be positive",
        ));
    }

    let preset = config.preset_for(goal);
    let target = f64::from(target_calories);

    let protein_g = (weight_kg * preset.protein_g_per_kg).round() as u32;
    let fat_g = (target * preset.fat_fraction / FAT_KCAL_PER_G).round() as u32;

    // Protein presets come from configuration, so the products may not fit
    let committed = protein_g
        .checked_mul(PROTEIN_KCAL_PER_G as u32)
        .zip(fat_g.checked_mul(FAT_KCAL_PER_G as u32))
        .and_then(|(protein_kcal, fat_kcal)| {
            protein_kcal
                .checked_add(fat_kcal)
                .map(|committed_kcal| (protein_kcal, fat_kcal, committed_kcal))
        });
    let Some((protein_kcal, fat_kcal, committed_kcal)) = committed else {
        return Err(CalculationError::out_of_range(
            "weight_kg",
            weight_kg,
            "needs more protein calories than can be allocated",
        ));
    };

    let Some(remaining_kcal) = target_calories.checked_sub(committed_kcal) else {
        return Err(CalculationError::MacroAllocation {
            target_calories,
            committed_kcal,
        });
    };

    let carbs_g = remaining_kcal / CARBS_KCAL_PER_G as u32;
    let carbs_kcal = carbs_g * CARBS_KCAL_PER_G as u32;
    // Never exceeds the target, since carbs only take what protein and fat left
    let macro_kcal = committed_kcal + carbs_kcal;

    debug!(
        goal = %goal,
        target_calories,
        protein_g,
        carbs_g,
        fat_g,
        "Allocated macronutrients"
    );

    Ok(MacroTargets {
        protein_g,
        carbs_g,
        fat_g,
        protein_kcal,
        carbs_kcal,
        fat_kcal,
        total_kcal: target_calories,
        percentages: MacroPercentages {
            protein_percent: percent_of(protein_kcal, macro_kcal),
            carbs_percent: percent_of(carbs_kcal, macro_kcal),
            fat_percent: percent_of(fat_kcal, macro_kcal),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maintenance_split() {
        let macros = allocate_macros(
            2595,
            FitnessGoal::Maintenance,
            70.0,
            &MacronutrientConfig::default(),
        )
        .unwrap();

        assert_eq!(macros.protein_g, 126);
        assert_eq!(macros.fat_g, 81);
        assert_eq!(macros.carbs_g, 340);
        assert!(macros.total_kcal - macros.macro_kcal() < 4);
    }

    #[test]
    fn test_percent_of_rounds_to_one_decimal() {
        assert!((percent_of(1, 3) - 33.3).abs() < 1e-9);
        assert!((percent_of(0, 0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = allocate_macros(
            2000,
            FitnessGoal::Maintenance,
            -5.0,
            &MacronutrientConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CalculationError::InvalidRange { .. }));
    }

    #[test]
    fn test_absurd_weight_rejected_without_overflow() {
        for weight_kg in [400.1, 1.0e9, f64::MAX] {
            let err = allocate_macros(
                3000,
                FitnessGoal::WeightLoss,
                weight_kg,
                &MacronutrientConfig::default(),
            )
            .unwrap_err();
            assert!(
                matches!(err, CalculationError::InvalidRange { field: "weight_kg", .. }),
                "{weight_kg}: {err:?}"
            );
        }
    }

    #[test]
    fn test_oversized_protein_preset_is_range_error() {
        let mut config = MacronutrientConfig::default();
        config.weight_loss.protein_g_per_kg = 1.0e8;

        let err = allocate_macros(3000, FitnessGoal::WeightLoss, 100.0, &config).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidRange { .. }));
    }
}
