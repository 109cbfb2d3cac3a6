// ABOUTME: Body composition summary from height, weight, and optional body fat
// ABOUTME: BMI with WHO category, plus lean and fat mass when body fat is known
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use smartbulk_core::constants::bmi;
use smartbulk_core::errors::CalculationError;
use smartbulk_core::models::{BmiCategory, BodyComposition, UserMetrics};

use crate::energy_estimator::validate_metrics;

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// WHO adult category for a BMI value
#[must_use]
pub fn classify_bmi(bmi_value: f64) -> BmiCategory {
    if bmi_value < bmi::UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi_value < bmi::NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi_value < bmi::OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// BMI, WHO category, and lean/fat mass for a user
///
/// # Errors
///
/// Returns `InvalidRange` if the metrics are implausible
pub fn calculate_body_composition(
    metrics: &UserMetrics,
) -> Result<BodyComposition, CalculationError> {
    validate_metrics(metrics)?;

    let height_m = metrics.height_cm / 100.0;
    let bmi_value = one_decimal(metrics.weight_kg / (height_m * height_m));

    let (lean_mass_kg, fat_mass_kg) = metrics.body_fat_percent.map_or((None, None), |body_fat| {
        let fat_mass = metrics.weight_kg * body_fat / 100.0;
        (
            Some(one_decimal(metrics.weight_kg - fat_mass)),
            Some(one_decimal(fat_mass)),
        )
    });

    Ok(BodyComposition {
        bmi: bmi_value,
        bmi_category: classify_bmi(bmi_value),
        lean_mass_kg,
        fat_mass_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbulk_core::models::Sex;

    #[test]
    fn test_bmi_categories() {
        assert_eq!(classify_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_lean_mass_from_body_fat() {
        let metrics = UserMetrics::new(25, Sex::Male, 70.0, 175.0).with_body_fat(15.0);
        let composition = calculate_body_composition(&metrics).unwrap();

        assert!((composition.bmi - 22.9).abs() < 1e-9);
        assert_eq!(composition.bmi_category, BmiCategory::Normal);
        assert_eq!(composition.lean_mass_kg, Some(59.5));
        assert_eq!(composition.fat_mass_kg, Some(10.5));
    }
}
