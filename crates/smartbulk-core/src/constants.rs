// ABOUTME: Physiological constants and input bounds shared by every calculator
// ABOUTME: Energy densities per macronutrient and plausibility limits for body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

/// Energy density of each macronutrient (Atwater factors)
pub mod energy_density {
    /// Protein: 4 kcal per gram
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate: 4 kcal per gram
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal per gram
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Physically plausible bounds for user-entered metrics.
///
/// Product-level ranges (e.g. age 13-100 on the signup form) are the caller's
/// job; these only reject values no formula can make sense of.
pub mod limits {
    /// Maximum body weight accepted (kg)
    pub const MAX_WEIGHT_KG: f64 = 400.0;
    /// Maximum height accepted (cm)
    pub const MAX_HEIGHT_CM: f64 = 280.0;
    /// Minimum age accepted (years)
    pub const MIN_AGE_YEARS: u32 = 1;
    /// Maximum age accepted (years)
    pub const MAX_AGE_YEARS: u32 = 120;
    /// Body fat must be strictly below this percentage
    pub const MAX_BODY_FAT_PERCENT: f64 = 100.0;
    /// Fewest training sessions a weekly plan may contain
    pub const MIN_SESSIONS_PER_WEEK: u8 = 2;
    /// Most training sessions a weekly plan may contain
    pub const MAX_SESSIONS_PER_WEEK: u8 = 6;
}

/// BMI thresholds (WHO adult classification)
pub mod bmi {
    /// Below this BMI is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this BMI (and at or above underweight) is normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this BMI (and at or above normal) is overweight
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}
