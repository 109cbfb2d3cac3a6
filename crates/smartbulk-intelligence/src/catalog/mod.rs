// ABOUTME: Exercise and food catalog loaded from a validated JSON document
// ABOUTME: Embedded default catalog, file override, and restriction-aware food lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Catalog
//!
//! Lookup tables the plan assembler draws from: exercise templates, the
//! exercise list per goal and experience level, rest-day suggestions, foods,
//! meal compositions, and the foods each dietary restriction excludes.
//!
//! The default catalog is compiled into the binary. A catalog file with the
//! same schema can replace it at startup. Either way the document is validated
//! once and shared read-only behind an `Arc`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;
use smartbulk_core::models::{
    DietaryRestriction, ExerciseTemplate, ExperienceLevel, FitnessGoal, FoodCategory,
    FoodTemplate, MealType,
};
use tracing::{debug, info};

use crate::config::intelligence::ConfigError;

/// Catalog document schema version this build understands
pub const CATALOG_VERSION: u32 = 1;

/// Slots per meal; portioning fits every subset of them
const MAX_MEAL_SLOTS: usize = 6;

const DEFAULT_CATALOG_JSON: &str = include_str!("default_catalog.json");

static BUILTIN_CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct WorkoutTemplateEntry {
    goal: FitnessGoal,
    level: ExperienceLevel,
    exercise_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    version: u32,
    exercises: Vec<ExerciseTemplate>,
    workout_templates: Vec<WorkoutTemplateEntry>,
    rest_day_activities: Vec<String>,
    foods: Vec<FoodTemplate>,
    meal_compositions: BTreeMap<MealType, Vec<FoodCategory>>,
    #[serde(default)]
    restriction_exclusions: BTreeMap<DietaryRestriction, Vec<String>>,
}

/// Validated, read-only catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<ExerciseTemplate>,
    workouts: HashMap<(FitnessGoal, ExperienceLevel), Vec<ExerciseTemplate>>,
    rest_day_activities: Vec<String>,
    foods: Vec<FoodTemplate>,
    meal_compositions: BTreeMap<MealType, Vec<FoodCategory>>,
    exclusions: BTreeMap<DietaryRestriction, BTreeSet<String>>,
}

impl Catalog {
    /// Shared instance of the catalog compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCatalog` if the embedded document fails validation
    pub fn builtin() -> Result<Arc<Self>, ConfigError> {
        if let Some(catalog) = BUILTIN_CATALOG.get() {
            return Ok(Arc::clone(catalog));
        }
        let catalog = Arc::new(Self::from_json(DEFAULT_CATALOG_JSON)?);
        Ok(Arc::clone(BUILTIN_CATALOG.get_or_init(|| catalog)))
    }

    /// Load and validate a catalog file
    ///
    /// # Errors
    ///
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::InvalidCatalog` if the document is malformed or inconsistent
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            exercises = catalog.exercises.len(),
            foods = catalog.foods.len(),
            "Loaded catalog from file"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog document
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCatalog` if the document is malformed or inconsistent
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let document: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| ConfigError::InvalidCatalog(format!("malformed document: {e}")))?;
        Self::from_document(document)
    }

    fn from_document(document: CatalogDocument) -> Result<Self, ConfigError> {
        if document.version != CATALOG_VERSION {
            return Err(ConfigError::InvalidCatalog(format!(
                "unsupported version {} (expected {CATALOG_VERSION})",
                document.version
            )));
        }

        let exercise_index = index_exercises(&document.exercises)?;
        validate_foods(&document.foods)?;
        let workouts = resolve_workouts(&document.workout_templates, &exercise_index)?;

        for meal in MealType::ALL {
            validate_composition(
                meal,
                document.meal_compositions.get(&meal).map(Vec::as_slice),
            )?;
        }

        let food_ids: HashSet<&str> = document.foods.iter().map(|f| f.id.as_str()).collect();
        let mut exclusions = BTreeMap::new();
        for (restriction, ids) in &document.restriction_exclusions {
            if let Some(unknown) = ids.iter().find(|id| !food_ids.contains(id.as_str())) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "{restriction} excludes unknown food `{unknown}`"
                )));
            }
            exclusions.insert(*restriction, ids.iter().cloned().collect());
        }

        debug!(
            exercises = document.exercises.len(),
            workout_templates = workouts.len(),
            foods = document.foods.len(),
            "Catalog validated"
        );

        Ok(Self {
            exercises: document.exercises,
            workouts,
            rest_day_activities: document.rest_day_activities,
            foods: document.foods,
            meal_compositions: document.meal_compositions,
            exclusions,
        })
    }

    /// Every exercise template
    #[must_use]
    pub fn exercises(&self) -> &[ExerciseTemplate] {
        &self.exercises
    }

    /// Ordered exercise list for a goal and experience level; empty if none is defined
    #[must_use]
    pub fn exercises_for(
        &self,
        goal: FitnessGoal,
        level: ExperienceLevel,
    ) -> &[ExerciseTemplate] {
        self.workouts
            .get(&(goal, level))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Light-activity suggestions for rest days
    #[must_use]
    pub fn rest_day_activities(&self) -> &[String] {
        &self.rest_day_activities
    }

    /// Every food template
    #[must_use]
    pub fn foods(&self) -> &[FoodTemplate] {
        &self.foods
    }

    /// Food template by id
    #[must_use]
    pub fn food(&self, id: &str) -> Option<&FoodTemplate> {
        self.foods.iter().find(|food| food.id == id)
    }

    /// Food categories that make up a meal, in serving order
    #[must_use]
    pub fn composition(&self, meal: MealType) -> &[FoodCategory] {
        self.meal_compositions
            .get(&meal)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether any of `restrictions` excludes `food`
    #[must_use]
    pub fn is_excluded(
        &self,
        food: &FoodTemplate,
        restrictions: &BTreeSet<DietaryRestriction>,
    ) -> bool {
        restrictions.iter().any(|restriction| {
            self.exclusions
                .get(restriction)
                .is_some_and(|ids| ids.contains(&food.id))
        })
    }

    /// Foods of `category` that no active restriction excludes, in catalog order
    #[must_use]
    pub fn eligible_foods(
        &self,
        category: FoodCategory,
        restrictions: &BTreeSet<DietaryRestriction>,
    ) -> Vec<&FoodTemplate> {
        self.foods
            .iter()
            .filter(|food| food.category == category && !self.is_excluded(food, restrictions))
            .collect()
    }
}

fn index_exercises(
    exercises: &[ExerciseTemplate],
) -> Result<HashMap<&str, &ExerciseTemplate>, ConfigError> {
    let mut index = HashMap::with_capacity(exercises.len());
    for exercise in exercises {
        if exercise.sets == 0 {
            return Err(ConfigError::InvalidCatalog(format!(
                "exercise `{}` has zero sets",
                exercise.id
            )));
        }
        if index.insert(exercise.id.as_str(), exercise).is_some() {
            return Err(ConfigError::InvalidCatalog(format!(
                "duplicate exercise id `{}`",
                exercise.id
            )));
        }
    }
    Ok(index)
}

/// A meal needs at least one slot that can be portioned to its targets
fn validate_composition(
    meal: MealType,
    categories: Option<&[FoodCategory]>,
) -> Result<(), ConfigError> {
    let Some(categories) = categories.filter(|categories| !categories.is_empty()) else {
        return Err(ConfigError::InvalidCatalog(format!(
            "meal composition for {meal} is missing or empty"
        )));
    };
    if categories.len() > MAX_MEAL_SLOTS {
        return Err(ConfigError::InvalidCatalog(format!(
            "meal composition for {meal} has {} slots (at most {MAX_MEAL_SLOTS})",
            categories.len()
        )));
    }
    if categories
        .iter()
        .all(|category| *category == FoodCategory::Vegetables)
    {
        return Err(ConfigError::InvalidCatalog(format!(
            "meal composition for {meal} needs a protein, carbs, or fats slot"
        )));
    }
    Ok(())
}

fn validate_foods(foods: &[FoodTemplate]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(foods.len());
    for food in foods {
        if !seen.insert(food.id.as_str()) {
            return Err(ConfigError::InvalidCatalog(format!(
                "duplicate food id `{}`",
                food.id
            )));
        }
        let nutrients = [
            food.protein_per_100g,
            food.carbs_per_100g,
            food.fat_per_100g,
        ];
        if !food.calories_per_100g.is_finite()
            || food.calories_per_100g <= 0.0
            || nutrients.iter().any(|n| !n.is_finite() || *n < 0.0)
        {
            return Err(ConfigError::InvalidCatalog(format!(
                "food `{}` needs positive calories and non-negative macros",
                food.id
            )));
        }
    }
    Ok(())
}

fn resolve_workouts(
    templates: &[WorkoutTemplateEntry],
    exercise_index: &HashMap<&str, &ExerciseTemplate>,
) -> Result<HashMap<(FitnessGoal, ExperienceLevel), Vec<ExerciseTemplate>>, ConfigError> {
    let mut workouts = HashMap::with_capacity(templates.len());
    for template in templates {
        let exercises = template
            .exercise_ids
            .iter()
            .map(|id| {
                exercise_index
                    .get(id.as_str())
                    .map(|exercise| (*exercise).clone())
                    .ok_or_else(|| {
                        ConfigError::InvalidCatalog(format!(
                            "{} / {} template references unknown exercise `{id}`",
                            template.goal, template.level
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if workouts
            .insert((template.goal, template.level), exercises)
            .is_some()
        {
            return Err(ConfigError::InvalidCatalog(format!(
                "duplicate workout template for {} / {}",
                template.goal, template.level
            )));
        }
    }
    Ok(workouts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = Catalog::builtin().unwrap();

        for goal in FitnessGoal::ALL {
            for level in ExperienceLevel::ALL {
                assert!(
                    !catalog.exercises_for(goal, level).is_empty(),
                    "no exercises for {goal} / {level}"
                );
            }
        }
        for meal in MealType::ALL {
            assert!(!catalog.composition(meal).is_empty());
        }
        assert!(!catalog.rest_day_activities().is_empty());
    }

    #[test]
    fn test_builtin_is_shared() {
        let first = Catalog::builtin().unwrap();
        let second = Catalog::builtin().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_vegan_excludes_animal_protein() {
        let catalog = Catalog::builtin().unwrap();
        let restrictions = BTreeSet::from([DietaryRestriction::Vegan]);

        let proteins = catalog.eligible_foods(FoodCategory::Protein, &restrictions);
        assert!(!proteins.is_empty());
        assert!(proteins.iter().all(|food| food.id != "chicken_breast"));
        assert!(proteins.iter().all(|food| food.id != "greek_yogurt"));
    }
}
