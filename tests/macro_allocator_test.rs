// ABOUTME: Integration tests for macronutrient allocation across every goal preset
// ABOUTME: Covers worked scenarios, the kcal round trip, low targets, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smartbulk::errors::{AppError, CalculationError, ErrorCode};
use smartbulk::intelligence::config::intelligence::MacronutrientConfig;
use smartbulk::intelligence::energy_estimator::estimate_energy;
use smartbulk::intelligence::macro_allocator::allocate_macros;
use smartbulk::intelligence::IntelligenceConfig;
use smartbulk::models::{BmrMethod, FitnessGoal};

mod common;

fn presets() -> MacronutrientConfig {
    common::init_test_logging();
    MacronutrientConfig::default()
}

#[test]
fn test_muscle_gain_scenario() {
    let macros = allocate_macros(2960, FitnessGoal::MuscleGain, 70.0, &presets()).unwrap();

    assert_eq!(macros.protein_g, 140);
    assert_eq!(macros.fat_g, 82);
    assert_eq!(macros.carbs_g, 415);
    assert_eq!(macros.protein_kcal, 560);
    assert_eq!(macros.fat_kcal, 738);
    assert_eq!(macros.carbs_kcal, 1660);
    assert_eq!(macros.total_kcal, 2960);
}

#[test]
fn test_weight_loss_scenario() {
    let macros = allocate_macros(2287, FitnessGoal::WeightLoss, 70.0, &presets()).unwrap();

    assert_eq!(macros.protein_g, 154);
    assert_eq!(macros.fat_g, 76);
    assert_eq!(macros.carbs_g, 246);
}

#[test]
fn test_percentages_sum_to_one_hundred() {
    let macros = allocate_macros(2595, FitnessGoal::Maintenance, 70.0, &presets()).unwrap();
    let p = &macros.percentages;
    let sum = p.protein_percent + p.carbs_percent + p.fat_percent;

    assert!((sum - 100.0).abs() <= 0.2, "sum = {sum}");
    assert!(p.carbs_percent > p.protein_percent);
}

#[test]
fn test_kcal_round_trip_within_four_for_every_preset() {
    let config = presets();

    for goal in FitnessGoal::ALL {
        for target in (1400..=4200).step_by(23) {
            for weight in [50.0, 62.5, 70.0, 85.0, 100.0] {
                let Ok(macros) = allocate_macros(target, goal, weight, &config) else {
                    continue;
                };
                let drift = macros.total_kcal - macros.macro_kcal();
                assert!(drift < 4, "{goal} {target} kcal {weight} kg drifted {drift}");
            }
        }
    }
}

#[test]
fn test_target_too_low_for_protein_and_fat() {
    let error = allocate_macros(500, FitnessGoal::WeightLoss, 100.0, &presets()).unwrap_err();

    match &error {
        CalculationError::MacroAllocation {
            target_calories,
            committed_kcal,
        } => {
            assert_eq!(*target_calories, 500);
            assert!(*committed_kcal > 500);
        }
        other => panic!("expected MacroAllocation, got {other:?}"),
    }

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::UnsatisfiableTarget);
}

#[test]
fn test_invalid_inputs_rejected() {
    let config = presets();

    assert!(matches!(
        allocate_macros(2000, FitnessGoal::Maintenance, 0.0, &config),
        Err(CalculationError::InvalidRange { field: "weight_kg", .. })
    ));
    assert!(matches!(
        allocate_macros(2000, FitnessGoal::Maintenance, f64::INFINITY, &config),
        Err(CalculationError::InvalidRange { field: "weight_kg", .. })
    ));
    assert!(matches!(
        allocate_macros(0, FitnessGoal::Maintenance, 70.0, &config),
        Err(CalculationError::InvalidRange { .. })
    ));
}

#[test]
fn test_weight_beyond_plausible_range_rejected() {
    let config = presets();

    assert!(allocate_macros(6000, FitnessGoal::WeightLoss, 400.0, &config).is_ok());
    for weight_kg in [400.5, 1.0e9] {
        let error = allocate_macros(3000, FitnessGoal::WeightLoss, weight_kg, &config).unwrap_err();
        assert!(
            matches!(error, CalculationError::InvalidRange { field: "weight_kg", .. }),
            "{weight_kg} kg gave {error:?}"
        );
        assert_eq!(AppError::from(error).code, ErrorCode::ValueOutOfRange);
    }
}

#[test]
fn test_allocation_is_idempotent() {
    let config = presets();

    let first = allocate_macros(2725, FitnessGoal::Endurance, 70.0, &config).unwrap();
    let second = allocate_macros(2725, FitnessGoal::Endurance, 70.0, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_energy_feeds_allocator() {
    common::init_test_logging();
    let config = IntelligenceConfig::default();
    let metrics = common::male_with_goal(FitnessGoal::MuscleGain);

    let energy = estimate_energy(&metrics, BmrMethod::MifflinStJeor, &config.nutrition).unwrap();
    let macros = allocate_macros(
        energy.target_calories_kcal,
        metrics.fitness_goal,
        metrics.weight_kg,
        &config.nutrition.macronutrients,
    )
    .unwrap();

    assert_eq!(macros.total_kcal, energy.target_calories_kcal);
    assert_eq!(macros.protein_g, 140);
}
