// ABOUTME: Integration tests for meal plan assembly and shopping list aggregation
// ABOUTME: Seeded determinism, calorie and macro tolerance across seeds, restrictions, and catalog gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smartbulk::errors::CalculationError;
use smartbulk::intelligence::config::intelligence::{MacronutrientConfig, MealPlanConfig};
use smartbulk::intelligence::macro_allocator::allocate_macros;
use smartbulk::intelligence::plan_assembler::{assemble_meal_plan, build_shopping_list};
use smartbulk::intelligence::Catalog;
use smartbulk::models::{
    DietaryRestriction, FitnessGoal, FoodCategory, MacroTargets, MealPlan, MealType,
};

mod common;

fn daily_targets(goal: FitnessGoal, target_kcal: u32) -> MacroTargets {
    common::init_test_logging();
    allocate_macros(target_kcal, goal, 70.0, &MacronutrientConfig::default()).unwrap()
}

fn plan_with_seed(
    catalog: &Catalog,
    goal: FitnessGoal,
    restrictions: &BTreeSet<DietaryRestriction>,
    seed: u64,
) -> MealPlan {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    assemble_meal_plan(
        &daily_targets(goal, 2595),
        goal,
        restrictions,
        catalog,
        &MealPlanConfig::default(),
        &mut rng,
    )
    .unwrap()
}

#[test]
fn test_same_seed_same_plan() {
    let catalog = common::catalog();
    let none = BTreeSet::new();

    let first = plan_with_seed(&catalog, FitnessGoal::Maintenance, &none, 42);
    let second = plan_with_seed(&catalog, FitnessGoal::Maintenance, &none, 42);

    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_vary_the_foods() {
    let catalog = common::catalog();
    let none = BTreeSet::new();
    let baseline = plan_with_seed(&catalog, FitnessGoal::Maintenance, &none, 0);

    let varied = (1..=10)
        .map(|seed| plan_with_seed(&catalog, FitnessGoal::Maintenance, &none, seed))
        .any(|plan| plan.meals != baseline.meals);
    assert!(varied);
}

#[test]
fn test_plan_shape_follows_catalog_compositions() {
    let catalog = common::catalog();
    let config = MealPlanConfig::default();
    let plan = plan_with_seed(&catalog, FitnessGoal::MuscleGain, &BTreeSet::new(), 7);

    assert_eq!(plan.meals.len(), 4);
    assert_eq!(plan.meal_targets.len(), 4);
    for meal in MealType::ALL {
        let options = &plan.meals[&meal];
        assert_eq!(options.len(), usize::from(config.options_per_meal));
        for option in options {
            assert!(option.foods.len() <= catalog.composition(meal).len());
            assert!(option.foods.iter().all(|serving| serving.grams > 0));
        }
    }

    let breakfast_has_vegetables = plan.meals[&MealType::Breakfast]
        .iter()
        .flat_map(|option| &option.foods)
        .any(|serving| serving.category == FoodCategory::Vegetables);
    assert!(!breakfast_has_vegetables);
}

#[test]
fn test_meal_targets_add_up_to_daily_targets() {
    let catalog = common::catalog();
    let plan = plan_with_seed(&catalog, FitnessGoal::Endurance, &BTreeSet::new(), 3);

    let calories: u32 = plan.meal_targets.values().map(|t| t.calories_kcal).sum();
    let protein: u32 = plan.meal_targets.values().map(|t| t.protein_g).sum();

    assert!(calories.abs_diff(plan.daily_targets.total_kcal) <= 2);
    assert!(protein.abs_diff(plan.daily_targets.protein_g) <= 2);
}

#[test]
fn test_every_option_within_calorie_tolerance() {
    let catalog = common::catalog();
    let config = MealPlanConfig::default();
    let restriction_sets = [
        BTreeSet::new(),
        BTreeSet::from([DietaryRestriction::Vegan]),
        BTreeSet::from([DietaryRestriction::GlutenFree, DietaryRestriction::NutFree]),
    ];

    for goal in FitnessGoal::ALL {
        for target_kcal in [1600, 2595, 3400] {
            let daily = daily_targets(goal, target_kcal);
            for restrictions in &restriction_sets {
                for seed in 0..25 {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    let plan =
                        assemble_meal_plan(&daily, goal, restrictions, &catalog, &config, &mut rng)
                            .unwrap();

                    for (meal, options) in &plan.meals {
                        let target = f64::from(plan.meal_targets[meal].calories_kcal);
                        let tolerance = config.calorie_tolerance(target);
                        for option in options {
                            let error = (option.total_calories_kcal - target).abs();
                            assert!(
                                error <= tolerance,
                                "{goal} {target_kcal} kcal seed {seed} {meal}: {} vs {target}",
                                option.total_calories_kcal
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_every_option_within_macro_tolerance() {
    let catalog = common::catalog();
    let config = MealPlanConfig::default();
    let restriction_sets = [
        BTreeSet::new(),
        BTreeSet::from([DietaryRestriction::Vegetarian]),
        BTreeSet::from([DietaryRestriction::Vegan]),
        BTreeSet::from([DietaryRestriction::GlutenFree, DietaryRestriction::NutFree]),
        BTreeSet::from([
            DietaryRestriction::Vegan,
            DietaryRestriction::GlutenFree,
            DietaryRestriction::DairyFree,
            DietaryRestriction::NutFree,
        ]),
    ];

    for goal in FitnessGoal::ALL {
        for target_kcal in [1600, 2595, 3400] {
            let daily = daily_targets(goal, target_kcal);
            for restrictions in &restriction_sets {
                for seed in 0..25 {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    let plan =
                        assemble_meal_plan(&daily, goal, restrictions, &catalog, &config, &mut rng)
                            .unwrap();

                    for (meal, options) in &plan.meals {
                        let targets = &plan.meal_targets[meal];
                        for option in options {
                            let macros = [
                                ("protein", option.total_protein_g, targets.protein_g),
                                ("carbs", option.total_carbs_g, targets.carbs_g),
                                ("fat", option.total_fat_g, targets.fat_g),
                            ];
                            for (name, have, want) in macros {
                                let want = f64::from(want);
                                assert!(
                                    (have - want).abs() <= config.macro_tolerance(want),
                                    "{goal} {target_kcal} kcal {restrictions:?} seed {seed} {meal} {name}: {have} vs {want}"
                                );
                            }
                            assert!(option.within_tolerance);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_unreachable_targets_keep_closest_option_flagged() {
    let catalog = common::catalog();
    let config = MealPlanConfig::default();
    let restrictions = BTreeSet::from([DietaryRestriction::Vegan]);
    // 260 g of protein inside 1400 kcal leaves 2 g of carbs for the whole day
    let presets = MacronutrientConfig::default();
    let daily = allocate_macros(1400, FitnessGoal::MuscleGain, 130.0, &presets).unwrap();
    assert_eq!(daily.carbs_g, 2);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let plan = assemble_meal_plan(
        &daily,
        FitnessGoal::MuscleGain,
        &restrictions,
        &catalog,
        &config,
        &mut rng,
    )
    .unwrap();

    let options: Vec<_> = plan.meals.values().flatten().collect();
    assert_eq!(options.len(), 4 * usize::from(config.options_per_meal));
    assert!(options.iter().any(|option| !option.within_tolerance));
    assert!(options.iter().all(|option| !option.foods.is_empty()));
}

#[test]
fn test_restrictions_exclude_foods() {
    let catalog = common::catalog();
    let restrictions = BTreeSet::from([DietaryRestriction::Vegan, DietaryRestriction::GlutenFree]);

    for seed in 0..10 {
        let plan = plan_with_seed(&catalog, FitnessGoal::WeightLoss, &restrictions, seed);
        for serving in plan.meals.values().flatten().flat_map(|o| &o.foods) {
            let food = catalog.food(&serving.food_id).unwrap();
            assert!(
                !catalog.is_excluded(food, &restrictions),
                "{} should be excluded",
                serving.name
            );
        }
    }
}

#[test]
fn test_restriction_emptying_a_category_is_empty_catalog() {
    let catalog = common::minimal_catalog();
    let restrictions = BTreeSet::from([DietaryRestriction::Vegetarian]);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let error = assemble_meal_plan(
        &daily_targets(FitnessGoal::Maintenance, 2595),
        FitnessGoal::Maintenance,
        &restrictions,
        &catalog,
        &MealPlanConfig::default(),
        &mut rng,
    )
    .unwrap_err();

    match error {
        CalculationError::EmptyCatalog { category, context } => {
            assert_eq!(category, "protein");
            assert!(context.contains("vegetarian"));
        }
        other => panic!("expected EmptyCatalog, got {other:?}"),
    }
}

#[test]
fn test_shopping_list_sums_every_serving() {
    let catalog = common::catalog();
    let plan = plan_with_seed(&catalog, FitnessGoal::Maintenance, &BTreeSet::new(), 11);
    let list = build_shopping_list(&plan);

    let servings: Vec<_> = plan.meals.values().flatten().flat_map(|o| &o.foods).collect();
    let planned_grams: u32 = servings.iter().map(|s| s.grams).sum();
    let planned_count = u32::try_from(servings.len()).unwrap();

    assert_eq!(list.total_grams, planned_grams);
    assert_eq!(
        list.items.iter().map(|item| item.occurrences).sum::<u32>(),
        planned_count
    );

    let keys: Vec<(FoodCategory, &str)> = list
        .items
        .iter()
        .map(|item| (item.category, item.name.as_str()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(keys, sorted);
}
