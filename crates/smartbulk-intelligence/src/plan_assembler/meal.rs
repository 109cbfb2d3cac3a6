// ABOUTME: Daily meal plan assembly with randomized, restriction-aware food selection
// ABOUTME: Splits daily macros per meal and portions drawn foods to each meal's targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

//! Meal plan assembly
//!
//! Each meal gets a share of the daily targets from the goal's meal split.
//! For every option one food per composition slot is drawn from the catalog
//! and portioned: vegetables at a fixed serving, then the remaining slots
//! sized jointly so protein, carbs, fat and calories land as close to the
//! meal's targets as the drawn foods allow. Deviations are weighed against
//! each target's tolerance, so a gram of protein off a small snack target
//! counts for more than a gram off a large dinner target.
//!
//! Draws that cannot be portioned within tolerance are redrawn. Once the
//! draw budget is spent every food combination is portioned and one of the
//! fitting ones is picked at random; if none fits, the closest option is
//! kept and flagged.
//!
//! The random source is injected so plans are reproducible under a seed.

use std::collections::{BTreeMap, BTreeSet};

use rand::seq::SliceRandom;
use rand::Rng;
use smartbulk_core::errors::CalculationError;
use smartbulk_core::models::{
    DietaryRestriction, FitnessGoal, FoodCategory, FoodServing, FoodTemplate, MacroTargets,
    MealOption, MealPlan, MealTargets, MealType,
};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::config::intelligence::{MealPlanConfig, MealSplit};

/// Protein, carbs, fat and calories, in that order
type Nutrients = [f64; 4];

/// Upper bound on food combinations portioned once random draws give up
const MAX_ENUMERATED_COMBINATIONS: usize = 100_000;

/// Pivots below this make a portion system singular
const SINGULAR_PIVOT: f64 = 1e-12;

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn share(value: u32, fraction: f64) -> u32 {
    (f64::from(value) * fraction).round().max(0.0) as u32
}

/// Split daily targets into per-meal targets, each rounded to whole units
#[must_use]
pub fn split_daily_targets(
    daily: &MacroTargets,
    split: &MealSplit,
) -> BTreeMap<MealType, MealTargets> {
    MealType::ALL
        .iter()
        .map(|meal| {
            let fraction = split.fraction(*meal);
            let targets = MealTargets {
                calories_kcal: share(daily.total_kcal, fraction),
                protein_g: share(daily.protein_g, fraction),
                carbs_g: share(daily.carbs_g, fraction),
                fat_g: share(daily.fat_g, fraction),
            };
            (*meal, targets)
        })
        .collect()
}

fn per_gram(food: &FoodTemplate) -> Nutrients {
    [
        food.protein_per_100g / 100.0,
        food.carbs_per_100g / 100.0,
        food.fat_per_100g / 100.0,
        food.calories_per_100g / 100.0,
    ]
}

fn target_nutrients(targets: &MealTargets) -> Nutrients {
    [
        f64::from(targets.protein_g),
        f64::from(targets.carbs_g),
        f64::from(targets.fat_g),
        f64::from(targets.calories_kcal),
    ]
}

fn tolerances(targets: &MealTargets, config: &MealPlanConfig) -> Nutrients {
    [
        config.macro_tolerance(f64::from(targets.protein_g)),
        config.macro_tolerance(f64::from(targets.carbs_g)),
        config.macro_tolerance(f64::from(targets.fat_g)),
        config.calorie_tolerance(f64::from(targets.calories_kcal)),
    ]
    .map(|tolerance| tolerance.max(f64::EPSILON))
}

/// Worst deviation of an option from its targets, in units of tolerance
///
/// The option is within tolerance when this is at most 1.
fn tolerance_ratio(option: &MealOption, targets: &MealTargets, config: &MealPlanConfig) -> f64 {
    let totals = [
        option.total_protein_g,
        option.total_carbs_g,
        option.total_fat_g,
        option.total_calories_kcal,
    ];
    totals
        .iter()
        .zip(target_nutrients(targets))
        .zip(tolerances(targets, config))
        .map(|((have, want), tolerance)| (have - want).abs() / tolerance)
        .fold(0.0, f64::max)
}

fn dot(a: &Nutrients, b: &Nutrients, weights: &Nutrients) -> f64 {
    a.iter()
        .zip(b)
        .zip(weights)
        .map(|((x, y), w)| x * y * w)
        .sum()
}

/// Weighted least-squares portions for `columns` against `residual`
///
/// Returns `None` when the normal equations are singular or the best
/// unconstrained fit needs a negative portion.
fn fit_portions(
    columns: &[Nutrients],
    residual: &Nutrients,
    weights: &Nutrients,
) -> Option<Vec<f64>> {
    let size = columns.len();
    let mut system: Vec<Vec<f64>> = columns
        .iter()
        .map(|row| {
            let mut equation: Vec<f64> =
                columns.iter().map(|col| dot(row, col, weights)).collect();
            equation.push(dot(row, residual, weights));
            equation
        })
        .collect();

    // Gauss-Jordan elimination with partial pivoting
    for col in 0..size {
        let pivot = (col..size)
            .max_by(|&a, &b| system[a][col].abs().total_cmp(&system[b][col].abs()))?;
        if system[pivot][col].abs() < SINGULAR_PIVOT {
            return None;
        }
        system.swap(col, pivot);
        let pivot_row = system[col].clone();
        for (row, equation) in system.iter_mut().enumerate() {
            if row == col {
                continue;
            }
            let factor = equation[col] / pivot_row[col];
            for (value, pivot_value) in equation.iter_mut().zip(&pivot_row).skip(col) {
                *value = factor.mul_add(-pivot_value, *value);
            }
        }
    }

    let portions: Vec<f64> = system
        .iter()
        .enumerate()
        .map(|(row, equation)| equation[size] / equation[row])
        .collect();
    if portions.iter().any(|grams| *grams < -1e-9) {
        return None;
    }
    Some(portions.into_iter().map(|grams| grams.max(0.0)).collect())
}

fn weighted_misfit(
    columns: &[Nutrients],
    portions: &[f64],
    residual: &Nutrients,
    weights: &Nutrients,
) -> f64 {
    let mut left = *residual;
    for (column, grams) in columns.iter().zip(portions) {
        for (value, per_g) in left.iter_mut().zip(column) {
            *value = per_g.mul_add(-grams, *value);
        }
    }
    dot(&left, &left, weights)
}

/// Best non-negative portions for the given slots
///
/// Every subset of slots is fitted and the subset with the smallest weighted
/// misfit wins, which yields the constrained optimum since the meal has at
/// most a handful of slots.
fn best_portions(columns: &[Nutrients], residual: &Nutrients, weights: &Nutrients) -> Vec<f64> {
    let mut portions = vec![0.0; columns.len()];
    let mut best_misfit = dot(residual, residual, weights);

    for mask in 1_usize..(1_usize << columns.len()) {
        let chosen: Vec<usize> = (0..columns.len())
            .filter(|&bit| mask & (1_usize << bit) != 0)
            .collect();
        let subset: Vec<Nutrients> = chosen.iter().map(|&slot| columns[slot]).collect();
        let Some(fitted) = fit_portions(&subset, residual, weights) else {
            continue;
        };
        let misfit = weighted_misfit(&subset, &fitted, residual, weights);
        if misfit < best_misfit {
            best_misfit = misfit;
            portions.fill(0.0);
            for (slot, grams) in chosen.into_iter().zip(fitted) {
                portions[slot] = grams;
            }
        }
    }
    portions
}

/// Portion one food per slot so the option meets `targets`
///
/// Vegetables get a fixed serving while they stay under their calorie share.
/// The other slots are fitted jointly to protein, carbs, fat and calories.
/// Grams are rounded to whole numbers and zero-gram slots are dropped.
#[must_use]
pub fn portion_meal(
    foods: &[&FoodTemplate],
    targets: &MealTargets,
    config: &MealPlanConfig,
) -> MealOption {
    let target_kcal = f64::from(targets.calories_kcal);
    let weights = tolerances(targets, config).map(|tolerance| tolerance.powi(-2));
    let mut grams = vec![0.0_f64; foods.len()];
    let mut residual = target_nutrients(targets);

    // Vegetables first, at a fixed serving, unless they would dominate the meal
    let mut vegetable_kcal = 0.0;
    let vegetable_budget = target_kcal * config.vegetable_max_calorie_share;
    for (slot, food) in foods.iter().enumerate() {
        if food.category != FoodCategory::Vegetables {
            continue;
        }
        let serving_kcal = food.calories_for(config.vegetable_serving_g);
        if vegetable_kcal + serving_kcal < vegetable_budget {
            grams[slot] = config.vegetable_serving_g;
            vegetable_kcal += serving_kcal;
            for (left, per_g) in residual.iter_mut().zip(per_gram(food)) {
                *left = per_g.mul_add(-config.vegetable_serving_g, *left);
            }
        }
    }

    let fitted_slots: Vec<usize> = foods
        .iter()
        .enumerate()
        .filter(|(_, food)| food.category != FoodCategory::Vegetables)
        .map(|(slot, _)| slot)
        .collect();
    let columns: Vec<Nutrients> = fitted_slots
        .iter()
        .map(|&slot| per_gram(foods[slot]))
        .collect();
    let portions = best_portions(&columns, &residual, &weights);
    for (slot, portion) in fitted_slots.into_iter().zip(portions) {
        grams[slot] = portion;
    }

    build_option(foods, &grams, targets, config)
}

fn build_option(
    foods: &[&FoodTemplate],
    grams: &[f64],
    targets: &MealTargets,
    config: &MealPlanConfig,
) -> MealOption {
    let mut servings = Vec::with_capacity(foods.len());
    let (mut calories, mut protein, mut carbs, mut fat) = (0.0, 0.0, 0.0, 0.0);

    for (food, raw_grams) in foods.iter().zip(grams) {
        let rounded = raw_grams.round().max(0.0);
        if rounded < 1.0 {
            continue;
        }
        let serving_kcal = food.calories_for(rounded);
        let serving_protein = food.protein_for(rounded);
        let serving_carbs = food.carbs_for(rounded);
        let serving_fat = food.fat_for(rounded);

        calories += serving_kcal;
        protein += serving_protein;
        carbs += serving_carbs;
        fat += serving_fat;

        servings.push(FoodServing {
            food_id: food.id.clone(),
            name: food.name.clone(),
            category: food.category,
            grams: rounded as u32,
            calories_kcal: one_decimal(serving_kcal),
            protein_g: one_decimal(serving_protein),
            carbs_g: one_decimal(serving_carbs),
            fat_g: one_decimal(serving_fat),
        });
    }

    let mut option = MealOption {
        foods: servings,
        total_calories_kcal: one_decimal(calories),
        total_protein_g: one_decimal(protein),
        total_carbs_g: one_decimal(carbs),
        total_fat_g: one_decimal(fat),
        within_tolerance: false,
    };
    option.within_tolerance = tolerance_ratio(&option, targets, config) <= 1.0;
    option
}

/// Food combination number `index`, counting in mixed radix over the pools
fn combination_at<'a>(
    candidates: &[Vec<&'a FoodTemplate>],
    mut index: usize,
) -> Vec<&'a FoodTemplate> {
    candidates
        .iter()
        .filter_map(|pool| {
            let food = index.checked_rem(pool.len()).and_then(|i| pool.get(i)).copied();
            index /= pool.len().max(1);
            food
        })
        .collect()
}

/// Portion every food combination and pick one that fits at random
///
/// Falls back to `closest` when nothing fits or there are too many combinations.
fn enumerate_option<R: Rng + ?Sized>(
    candidates: &[Vec<&FoodTemplate>],
    targets: &MealTargets,
    config: &MealPlanConfig,
    rng: &mut R,
    mut closest: (f64, MealOption),
) -> MealOption {
    let combinations = candidates
        .iter()
        .try_fold(1_usize, |total, pool| total.checked_mul(pool.len()))
        .filter(|total| *total <= MAX_ENUMERATED_COMBINATIONS)
        .unwrap_or(0);

    let mut fitting = 0_usize;
    let mut picked = None;
    for index in 0..combinations {
        let option = portion_meal(&combination_at(candidates, index), targets, config);
        if option.within_tolerance {
            // Reservoir sampling keeps the pick uniform over fitting combinations
            fitting += 1;
            if rng.gen_range(0..fitting) == 0 {
                picked = Some(option);
            }
        } else {
            let ratio = tolerance_ratio(&option, targets, config);
            if ratio < closest.0 {
                closest = (ratio, option);
            }
        }
    }

    picked.unwrap_or(closest.1)
}

/// Draw foods for one option until they can be portioned within tolerance
fn draw_option<R: Rng + ?Sized>(
    meal: MealType,
    candidates: &[Vec<&FoodTemplate>],
    targets: &MealTargets,
    config: &MealPlanConfig,
    rng: &mut R,
) -> MealOption {
    let draw = |rng: &mut R| {
        let drawn: Vec<&FoodTemplate> = candidates
            .iter()
            .filter_map(|pool| pool.choose(rng).copied())
            .collect();
        portion_meal(&drawn, targets, config)
    };

    let first = draw(&mut *rng);
    if first.within_tolerance {
        return first;
    }
    let mut closest = (tolerance_ratio(&first, targets, config), first);
    for _ in 1..config.max_draw_attempts {
        let option = draw(&mut *rng);
        if option.within_tolerance {
            return option;
        }
        let ratio = tolerance_ratio(&option, targets, config);
        if ratio < closest.0 {
            closest = (ratio, option);
        }
    }

    let option = enumerate_option(candidates, targets, config, rng, closest);
    if !option.within_tolerance {
        warn!(
            meal = meal.as_str(),
            target_calories = targets.calories_kcal,
            "No food combination meets the meal targets within tolerance, using the closest fit"
        );
    }
    option
}

fn restriction_context(goal: FitnessGoal, restrictions: &BTreeSet<DietaryRestriction>) -> String {
    if restrictions.is_empty() {
        return format!("{goal}, no restrictions");
    }
    let names: Vec<&str> = restrictions.iter().map(DietaryRestriction::as_str).collect();
    format!("{goal}, restrictions: {}", names.join(", "))
}

/// Assemble a daily meal plan with `options_per_meal` options per meal
///
/// # Errors
///
/// Returns `EmptyCatalog` if a meal slot has no food left after applying the restrictions
pub fn assemble_meal_plan<R: Rng + ?Sized>(
    daily_targets: &MacroTargets,
    goal: FitnessGoal,
    restrictions: &BTreeSet<DietaryRestriction>,
    catalog: &Catalog,
    config: &MealPlanConfig,
    rng: &mut R,
) -> Result<MealPlan, CalculationError> {
    let meal_targets = split_daily_targets(daily_targets, &config.templates.split_for(goal));
    let mut meals = BTreeMap::new();

    for (meal, targets) in &meal_targets {
        // Resolve every slot's candidates before drawing anything
        let candidates: Vec<Vec<&FoodTemplate>> = catalog
            .composition(*meal)
            .iter()
            .map(|category| {
                let foods = catalog.eligible_foods(*category, restrictions);
                if foods.is_empty() {
                    Err(CalculationError::empty_catalog(
                        category.as_str(),
                        restriction_context(goal, restrictions),
                    ))
                } else {
                    Ok(foods)
                }
            })
            .collect::<Result<_, _>>()?;

        let options = (0..config.options_per_meal)
            .map(|_| draw_option(*meal, &candidates, targets, config, rng))
            .collect();
        meals.insert(*meal, options);
    }

    debug!(
        goal = %goal,
        restrictions = restrictions.len(),
        options_per_meal = config.options_per_meal,
        target_calories = daily_targets.total_kcal,
        "Assembled meal plan"
    );

    Ok(MealPlan {
        goal,
        restrictions: restrictions.clone(),
        daily_targets: daily_targets.clone(),
        meal_targets,
        meals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbulk_core::models::MacroPercentages;

    fn daily(total_kcal: u32, protein_g: u32, carbs_g: u32, fat_g: u32) -> MacroTargets {
        MacroTargets {
            protein_g,
            carbs_g,
            fat_g,
            protein_kcal: protein_g * 4,
            carbs_kcal: carbs_g * 4,
            fat_kcal: fat_g * 9,
            total_kcal,
            percentages: MacroPercentages {
                protein_percent: 0.0,
                carbs_percent: 0.0,
                fat_percent: 0.0,
            },
        }
    }

    #[test]
    fn test_split_daily_targets_rounds_each_meal() {
        let split = MealSplit::new(0.25, 0.35, 0.30, 0.10);
        let meals = split_daily_targets(&daily(2595, 126, 340, 81), &split);

        assert_eq!(meals[&MealType::Breakfast].calories_kcal, 649);
        assert_eq!(meals[&MealType::Lunch].calories_kcal, 908);
        assert_eq!(meals[&MealType::Snack].protein_g, 13);
    }

    fn foods<'a>(catalog: &'a Catalog, ids: &[&str]) -> Vec<&'a FoodTemplate> {
        ids.iter().filter_map(|id| catalog.food(id)).collect()
    }

    fn assert_within(option: &MealOption, targets: &MealTargets, config: &MealPlanConfig) {
        let macros = [
            (option.total_protein_g, targets.protein_g),
            (option.total_carbs_g, targets.carbs_g),
            (option.total_fat_g, targets.fat_g),
        ];
        for (have, want) in macros {
            let want = f64::from(want);
            assert!((have - want).abs() <= config.macro_tolerance(want), "{have} vs {want}");
        }
        let kcal = f64::from(targets.calories_kcal);
        assert!((option.total_calories_kcal - kcal).abs() <= config.calorie_tolerance(kcal));
        assert!(option.within_tolerance);
    }

    #[test]
    fn test_portioned_option_meets_every_target() {
        let catalog = Catalog::builtin().unwrap();
        let config = MealPlanConfig::default();
        let drawn = foods(&catalog, &["chicken_breast", "brown_rice", "broccoli", "olive_oil"]);
        let targets = MealTargets {
            calories_kcal: 800,
            protein_g: 45,
            carbs_g: 95,
            fat_g: 25,
        };

        let option = portion_meal(&drawn, &targets, &config);

        assert_eq!(option.foods.len(), 4);
        assert!(option.foods.iter().all(|serving| serving.grams > 0));
        assert_within(&option, &targets, &config);
    }

    #[test]
    fn test_snack_fat_slot_reaches_fat_target() {
        let catalog = Catalog::builtin().unwrap();
        let config = MealPlanConfig::default();
        let drawn = foods(&catalog, &["greek_yogurt", "banana", "almonds"]);
        let targets = MealTargets {
            calories_kcal: 390,
            protein_g: 19,
            carbs_g: 51,
            fat_g: 12,
        };

        let option = portion_meal(&drawn, &targets, &config);
        assert_within(&option, &targets, &config);
    }

    #[test]
    fn test_food_that_would_overshoot_is_dropped() {
        let catalog = Catalog::builtin().unwrap();
        let config = MealPlanConfig::default();
        let drawn = foods(&catalog, &["chicken_breast", "brown_rice", "olive_oil"]);
        let targets = MealTargets {
            calories_kcal: 330,
            protein_g: 40,
            carbs_g: 40,
            fat_g: 2,
        };

        let option = portion_meal(&drawn, &targets, &config);

        let ids: Vec<&str> = option.foods.iter().map(|s| s.food_id.as_str()).collect();
        assert_eq!(ids, ["chicken_breast", "brown_rice"]);
        assert!(option.foods.iter().all(|serving| serving.grams > 90));
    }

    #[test]
    fn test_vegetables_skipped_for_tiny_meals() {
        let catalog = Catalog::builtin().unwrap();
        let config = MealPlanConfig::default();
        let drawn = foods(&catalog, &["tofu", "quinoa", "broccoli"]);
        let targets = MealTargets {
            calories_kcal: 60,
            protein_g: 4,
            carbs_g: 6,
            fat_g: 2,
        };

        let option = portion_meal(&drawn, &targets, &config);
        assert!(option.foods.iter().all(|s| s.category != FoodCategory::Vegetables));
    }

    #[test]
    fn test_combination_at_counts_through_every_pool() {
        let catalog = Catalog::builtin().unwrap();
        let candidates = vec![
            foods(&catalog, &["tofu", "eggs"]),
            foods(&catalog, &["oats", "banana", "quinoa"]),
        ];

        let first = combination_at(&candidates, 0);
        let last = combination_at(&candidates, 5);

        assert_eq!(first[0].id, "tofu");
        assert_eq!(first[1].id, "oats");
        assert_eq!(last[0].id, "eggs");
        assert_eq!(last[1].id, "quinoa");
    }
}
