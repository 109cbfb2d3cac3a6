// ABOUTME: Nutrient timing around training sessions
// ABOUTME: Pre/post-workout carbohydrate and protein targets plus daily protein distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Nutrient Timing
//!
//! # Scientific References
//!
//! - Kerksick, C.M., et al. (2017). Nutrient timing position stand.
//!   *Journal of the International Society of Sports Nutrition*, 14, 33.
//!   <https://doi.org/10.1186/s12970-017-0189-4>
//!
//! - Aragon, A.A., & Schoenfeld, B.J. (2013). Nutrient timing revisited.
//!   <https://doi.org/10.1186/1550-2783-10-5>

use smartbulk_core::errors::CalculationError;
use smartbulk_core::models::{
    NutrientTimingPlan, PostWorkoutNutrition, PreWorkoutNutrition, ProteinDistribution,
    WorkoutIntensity,
};

use crate::config::intelligence::NutrientTimingConfig;

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate nutrient timing for a training day
///
/// - Pre-workout carbs: `weight x 0.75 g/kg x {0.5, 1.0, 1.3}` for low/moderate/high intensity
/// - Post-workout protein: `daily / 5`, clamped to 20-40 g
/// - Post-workout carbs: `weight x 1.0 g/kg`
/// - Daily protein spread across `protein_meals_per_day` meals
///
/// # Errors
///
/// Returns `InvalidRange` if weight or daily protein is not positive
pub fn calculate_nutrient_timing(
    weight_kg: f64,
    daily_protein_g: f64,
    intensity: WorkoutIntensity,
    config: &NutrientTimingConfig,
) -> Result<NutrientTimingPlan, CalculationError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(CalculationError::out_of_range(
            "weight_kg",
            weight_kg,
            "must be positive",
        ));
    }
    if !daily_protein_g.is_finite() || daily_protein_g <= 0.0 {
        return Err(CalculationError::out_of_range(
            "daily_protein_g",
            daily_protein_g,
            "must be positive",
        ));
    }

    let intensity_factor = match intensity {
        WorkoutIntensity::Low => 0.5,
        WorkoutIntensity::Moderate => 1.0,
        WorkoutIntensity::High => 1.3,
    };
    let pre_workout_carbs =
        one_decimal(weight_kg * config.pre_workout_carbs_g_per_kg * intensity_factor);

    // 20-40 g is the effective range for a single post-workout dose
    let post_workout_protein = one_decimal(
        (daily_protein_g / 5.0)
            .clamp(config.post_workout_protein_g_min, config.post_workout_protein_g_max),
    );
    let post_workout_carbs = one_decimal(weight_kg * config.post_workout_carbs_g_per_kg);

    let meals_per_day = config.protein_meals_per_day;
    let protein_per_meal = one_decimal(daily_protein_g / f64::from(meals_per_day));

    Ok(NutrientTimingPlan {
        intensity,
        pre_workout: PreWorkoutNutrition {
            carbs_g: pre_workout_carbs,
            timing_hours_before: config.pre_workout_window_hours,
            recommendations: vec![
                format!("Consume {pre_workout_carbs:.0}g carbs 1-3 hours before workout"),
                "Focus on easily digestible carbs (banana, oatmeal, toast)".to_owned(),
                "Small amount of protein (10-20g) can be beneficial".to_owned(),
            ],
        },
        post_workout: PostWorkoutNutrition {
            protein_g: post_workout_protein,
            carbs_g: post_workout_carbs,
            timing_hours_after: config.post_workout_window_hours,
            recommendations: vec![
                format!(
                    "Consume {post_workout_protein:.0}g protein + {post_workout_carbs:.0}g carbs within 2 hours"
                ),
                "Window is flexible - total daily intake matters most".to_owned(),
                "Carbs restore glycogen - more important after high-intensity".to_owned(),
            ],
        },
        daily_protein_distribution: ProteinDistribution {
            meals_per_day,
            protein_per_meal_g: protein_per_meal,
            strategy: format!(
                "Distribute {daily_protein_g:.0}g protein across {meals_per_day} meals (~{protein_per_meal:.0}g each)"
            ),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_intensity_pre_workout_carbs() {
        let plan = calculate_nutrient_timing(
            80.0,
            160.0,
            WorkoutIntensity::High,
            &NutrientTimingConfig::default(),
        )
        .unwrap();

        // 80 kg x 0.75 g/kg x 1.3
        assert!((plan.pre_workout.carbs_g - 78.0).abs() < 0.05);
        assert!((plan.post_workout.protein_g - 32.0).abs() < 0.05);
        assert!((plan.post_workout.carbs_g - 80.0).abs() < 0.05);
        assert!((plan.daily_protein_distribution.protein_per_meal_g - 40.0).abs() < 0.05);
    }

    #[test]
    fn test_post_workout_protein_clamped() {
        let config = NutrientTimingConfig::default();
        let low = calculate_nutrient_timing(50.0, 60.0, WorkoutIntensity::Low, &config).unwrap();
        let high = calculate_nutrient_timing(120.0, 260.0, WorkoutIntensity::Low, &config).unwrap();

        assert!((low.post_workout.protein_g - 20.0).abs() < f64::EPSILON);
        assert!((high.post_workout.protein_g - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_weight_rejected() {
        let result = calculate_nutrient_timing(
            0.0,
            120.0,
            WorkoutIntensity::Moderate,
            &NutrientTimingConfig::default(),
        );
        assert!(result.is_err());
    }
}
