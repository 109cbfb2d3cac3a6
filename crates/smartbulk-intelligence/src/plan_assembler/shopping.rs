// ABOUTME: Shopping list aggregation over every option of every meal in a plan
// ABOUTME: Groups servings by food name, summing grams and counting occurrences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBulk Contributors

use std::collections::BTreeMap;

use smartbulk_core::models::{FoodCategory, MealPlan, ShoppingItem, ShoppingList};

/// Aggregate a meal plan into a shopping list sorted by category, then name
#[must_use]
pub fn build_shopping_list(plan: &MealPlan) -> ShoppingList {
    let mut totals: BTreeMap<(FoodCategory, &str), (u32, u32)> = BTreeMap::new();

    for serving in plan
        .meals
        .values()
        .flatten()
        .flat_map(|option| &option.foods)
    {
        let entry = totals
            .entry((serving.category, serving.name.as_str()))
            .or_default();
        entry.0 += serving.grams;
        entry.1 += 1;
    }

    let items: Vec<ShoppingItem> = totals
        .into_iter()
        .map(|((category, name), (total_grams, occurrences))| ShoppingItem {
            name: name.to_owned(),
            category,
            total_grams,
            occurrences,
        })
        .collect();
    let total_grams = items.iter().map(|item| item.total_grams).sum();

    ShoppingList { items, total_grams }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbulk_core::models::{
        FitnessGoal, FoodServing, MacroPercentages, MacroTargets, MealOption, MealType,
    };
    use std::collections::BTreeSet;

    fn serving(name: &str, category: FoodCategory, grams: u32) -> FoodServing {
        FoodServing {
            food_id: name.to_lowercase(),
            name: name.to_owned(),
            category,
            grams,
            calories_kcal: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
        }
    }

    fn option(foods: Vec<FoodServing>) -> MealOption {
        MealOption {
            foods,
            total_calories_kcal: 0.0,
            total_protein_g: 0.0,
            total_carbs_g: 0.0,
            total_fat_g: 0.0,
            within_tolerance: true,
        }
    }

    #[test]
    fn test_groups_by_name_and_sorts_by_category() {
        let mut meals = BTreeMap::new();
        meals.insert(
            MealType::Lunch,
            vec![
                option(vec![
                    serving("Tofu", FoodCategory::Protein, 150),
                    serving("Avocado", FoodCategory::Fats, 40),
                ]),
                option(vec![serving("Tofu", FoodCategory::Protein, 120)]),
            ],
        );
        meals.insert(
            MealType::Snack,
            vec![option(vec![serving("Banana", FoodCategory::Carbs, 100)])],
        );
        let plan = MealPlan {
            goal: FitnessGoal::Maintenance,
            restrictions: BTreeSet::new(),
            daily_targets: MacroTargets {
                protein_g: 0,
                carbs_g: 0,
                fat_g: 0,
                protein_kcal: 0,
                carbs_kcal: 0,
                fat_kcal: 0,
                total_kcal: 0,
                percentages: MacroPercentages {
                    protein_percent: 0.0,
                    carbs_percent: 0.0,
                    fat_percent: 0.0,
                },
            },
            meal_targets: BTreeMap::new(),
            meals,
        };

        let list = build_shopping_list(&plan);
        let names: Vec<&str> = list.items.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names, ["Tofu", "Banana", "Avocado"]);
        assert_eq!(list.items[0].total_grams, 270);
        assert_eq!(list.items[0].occurrences, 2);
        assert_eq!(list.total_grams, 410);
    }
}
