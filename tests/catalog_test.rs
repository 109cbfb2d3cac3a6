// ABOUTME: Integration tests for catalog loading and validation
// ABOUTME: File loading via tempfile plus rejection of inconsistent catalog documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use serde_json::{json, Value};
use smartbulk::errors::{AppError, ErrorCode};
use smartbulk::intelligence::{Catalog, ConfigError};
use smartbulk::models::{DietaryRestriction, ExperienceLevel, FitnessGoal, FoodCategory, MealType};
use tempfile::NamedTempFile;

mod common;

fn minimal_document() -> Value {
    serde_json::from_str(common::MINIMAL_CATALOG).unwrap()
}

fn expect_invalid(document: &Value, fragment: &str) {
    match Catalog::from_json(&document.to_string()) {
        Err(ConfigError::InvalidCatalog(message)) => {
            assert!(
                message.contains(fragment),
                "`{message}` should mention `{fragment}`"
            );
        }
        Err(other) => panic!("expected InvalidCatalog, got {other:?}"),
        Ok(_) => panic!("catalog should have been rejected ({fragment})"),
    }
}

#[test]
fn test_catalog_loads_from_file() {
    common::init_test_logging();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(common::MINIMAL_CATALOG.as_bytes()).unwrap();

    let catalog = Catalog::from_path(file.path()).unwrap();

    assert_eq!(catalog.exercises().len(), 1);
    assert_eq!(catalog.foods().len(), 4);
    assert_eq!(
        catalog
            .exercises_for(FitnessGoal::Maintenance, ExperienceLevel::Beginner)
            .len(),
        1
    );
    assert!(catalog
        .exercises_for(FitnessGoal::MuscleGain, ExperienceLevel::Advanced)
        .is_empty());
    assert_eq!(catalog.rest_day_activities(), ["Easy walk"]);
}

#[test]
fn test_missing_file_is_io_error() {
    let error = Catalog::from_path(Path::new("/nonexistent/smartbulk/catalog.json")).unwrap_err();
    assert!(matches!(error, ConfigError::Io(_)));

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ConfigError);
}

#[test]
fn test_malformed_json_rejected() {
    let error = Catalog::from_json("{ not json").unwrap_err();
    assert!(matches!(error, ConfigError::InvalidCatalog(_)));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_unsupported_version_rejected() {
    let mut document = minimal_document();
    document["version"] = json!(2);
    expect_invalid(&document, "version");
}

#[test]
fn test_unknown_exercise_reference_rejected() {
    let mut document = minimal_document();
    document["workout_templates"][0]["exercise_ids"] = json!(["squat", "deadlift"]);
    expect_invalid(&document, "deadlift");
}

#[test]
fn test_duplicate_ids_rejected() {
    let mut document = minimal_document();
    let first_food = document["foods"][0].clone();
    document["foods"].as_array_mut().unwrap().push(first_food);
    expect_invalid(&document, "duplicate food id");

    let mut document = minimal_document();
    let first_exercise = document["exercises"][0].clone();
    document["exercises"]
        .as_array_mut()
        .unwrap()
        .push(first_exercise);
    expect_invalid(&document, "duplicate exercise id");
}

#[test]
fn test_zero_sets_rejected() {
    let mut document = minimal_document();
    document["exercises"][0]["sets"] = json!(0);
    expect_invalid(&document, "zero sets");
}

#[test]
fn test_food_without_calories_rejected() {
    let mut document = minimal_document();
    document["foods"][1]["calories_per_100g"] = json!(0.0);
    expect_invalid(&document, "rice");
}

#[test]
fn test_missing_meal_composition_rejected() {
    let mut document = minimal_document();
    document["meal_compositions"]["snack"] = json!([]);
    expect_invalid(&document, "snack");
}

#[test]
fn test_vegetables_only_composition_rejected() {
    let mut document = minimal_document();
    document["meal_compositions"]["snack"] = json!(["vegetables"]);
    expect_invalid(&document, "snack needs a protein, carbs, or fats slot");

    document["meal_compositions"]["snack"] = json!(["vegetables", "protein"]);
    let catalog = Catalog::from_json(&document.to_string()).unwrap();
    assert_eq!(catalog.composition(MealType::Snack).len(), 2);
}

#[test]
fn test_oversized_composition_rejected() {
    let mut document = minimal_document();
    document["meal_compositions"]["lunch"] = Value::Array(vec![json!("protein"); 7]);
    expect_invalid(&document, "at most 6");
}

#[test]
fn test_unknown_exclusion_rejected() {
    let mut document = minimal_document();
    document["restriction_exclusions"]["vegan"] = json!(["bacon"]);
    expect_invalid(&document, "bacon");
}

#[test]
fn test_builtin_restrictions_leave_every_category_stocked() {
    let catalog = common::catalog();
    let every_restriction = BTreeSet::from([
        DietaryRestriction::Vegan,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::DairyFree,
        DietaryRestriction::NutFree,
    ]);

    for category in [
        FoodCategory::Protein,
        FoodCategory::Carbs,
        FoodCategory::Vegetables,
        FoodCategory::Fats,
    ] {
        assert!(
            !catalog.eligible_foods(category, &every_restriction).is_empty(),
            "{category} emptied by restrictions"
        );
    }
}
