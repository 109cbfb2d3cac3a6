// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference user profiles, and catalog helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `smartbulk`

use std::env;
use std::sync::{Arc, Once};

use smartbulk::intelligence::Catalog;
use smartbulk::models::{ActivityLevel, ExperienceLevel, FitnessGoal, Sex, UserMetrics};
use smartbulk::recommendation::RecommendationService;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Small valid catalog: one maintenance/beginner exercise and one food per category
pub const MINIMAL_CATALOG: &str = r#"{
    "version": 1,
    "exercises": [
        {"id": "squat", "name": "Squat", "category": "strength", "muscle_groups": ["legs"],
         "sets": 3, "reps": "8-10", "rest_seconds": 90}
    ],
    "workout_templates": [
        {"goal": "maintenance", "level": "beginner", "exercise_ids": ["squat"]}
    ],
    "rest_day_activities": ["Easy walk"],
    "foods": [
        {"id": "chicken", "name": "Chicken", "category": "protein", "calories_per_100g": 165.0,
         "protein_per_100g": 31.0, "carbs_per_100g": 0.0, "fat_per_100g": 3.6},
        {"id": "rice", "name": "Rice", "category": "carbs", "calories_per_100g": 112.0,
         "protein_per_100g": 2.6, "carbs_per_100g": 23.0, "fat_per_100g": 0.9},
        {"id": "broccoli", "name": "Broccoli", "category": "vegetables", "calories_per_100g": 34.0,
         "protein_per_100g": 2.8, "carbs_per_100g": 7.0, "fat_per_100g": 0.4},
        {"id": "olive_oil", "name": "Olive Oil", "category": "fats", "calories_per_100g": 884.0,
         "protein_per_100g": 0.0, "carbs_per_100g": 0.0, "fat_per_100g": 100.0}
    ],
    "meal_compositions": {
        "breakfast": ["protein", "carbs", "fats"],
        "lunch": ["protein", "carbs", "vegetables", "fats"],
        "dinner": ["protein", "carbs", "vegetables", "fats"],
        "snack": ["protein", "carbs"]
    },
    "restriction_exclusions": {"vegetarian": ["chicken"]}
}"#;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises the level for debugging a failing test
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 25-year-old male, 70 kg, 175 cm, moderately active
pub fn reference_male() -> UserMetrics {
    UserMetrics::new(25, Sex::Male, 70.0, 175.0)
        .with_activity_level(ActivityLevel::ModeratelyActive)
        .with_experience(ExperienceLevel::Intermediate)
}

/// 30-year-old female, 60 kg, 165 cm, lightly active
pub fn reference_female() -> UserMetrics {
    UserMetrics::new(30, Sex::Female, 60.0, 165.0)
        .with_activity_level(ActivityLevel::LightlyActive)
        .with_experience(ExperienceLevel::Beginner)
}

/// Reference male with a goal
pub fn male_with_goal(goal: FitnessGoal) -> UserMetrics {
    reference_male().with_goal(goal)
}

/// Built-in catalog
pub fn catalog() -> Arc<Catalog> {
    Catalog::builtin().unwrap()
}

/// Parsed [`MINIMAL_CATALOG`]
pub fn minimal_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_json(MINIMAL_CATALOG).unwrap())
}

/// Service over default configuration and the built-in catalog
pub fn service() -> RecommendationService {
    init_test_logging();
    RecommendationService::with_defaults().unwrap()
}
