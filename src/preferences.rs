use clap::ValueEnum;

use crate::recipe::Recipe;

const HIGH_PROTEIN_MIN_G: f32 = 20.0;
const LOW_CARB_MAX_G: f32 = 30.0;
const LOW_FAT_MAX_G: f32 = 15.0;
const LOW_CALORIE_MAX_KCAL: f32 = 450.0;

const MEAT_AND_FISH: &[&str] = &[
    "chicken", "beef", "pork", "bacon", "ham", "lamb", "turkey", "sausage", "salmon", "tuna",
    "shrimp", "prawn", "fish", "anchov",
];

/// Nutrition preference a user can pick alongside the recipe query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum NutritionGoal {
    HighProtein,
    LowCarb,
    LowFat,
    LowCalorie,
    Vegetarian,
}

impl NutritionGoal {
    /// Sentence handed to the model describing this preference.
    pub fn prompt_hint(&self) -> String {
        match self {
            NutritionGoal::HighProtein => format!(
                "High protein: at least {} g of protein per serving.",
                HIGH_PROTEIN_MIN_G
            ),
            NutritionGoal::LowCarb => format!(
                "Low carb: at most {} g of carbohydrates per serving.",
                LOW_CARB_MAX_G
            ),
            NutritionGoal::LowFat => {
                format!("Low fat: at most {} g of fat per serving.", LOW_FAT_MAX_G)
            }
            NutritionGoal::LowCalorie => format!(
                "Low calorie: at most {} kcal per serving.",
                LOW_CALORIE_MAX_KCAL
            ),
            NutritionGoal::Vegetarian => "Vegetarian: no meat or fish.".to_string(),
        }
    }

    /// Whether the recipe satisfies this goal. Numeric goals need the matching
    /// nutrition figure; a recipe without it does not qualify.
    pub fn is_met_by(&self, recipe: &Recipe) -> bool {
        let nutrition = recipe.nutrition.as_ref();
        match self {
            NutritionGoal::HighProtein => nutrition
                .and_then(|n| n.protein_g)
                .is_some_and(|p| p >= HIGH_PROTEIN_MIN_G),
            NutritionGoal::LowCarb => nutrition
                .and_then(|n| n.carbs_g)
                .is_some_and(|c| c <= LOW_CARB_MAX_G),
            NutritionGoal::LowFat => nutrition
                .and_then(|n| n.fat_g)
                .is_some_and(|f| f <= LOW_FAT_MAX_G),
            NutritionGoal::LowCalorie => nutrition
                .and_then(|n| n.calories)
                .is_some_and(|kcal| kcal <= LOW_CALORIE_MAX_KCAL),
            NutritionGoal::Vegetarian => !recipe
                .ingredient_names()
                .any(|name| MEAT_AND_FISH.iter().any(|meat| name.contains(meat))),
        }
    }
}

pub fn meets_all(recipe: &Recipe, goals: &[NutritionGoal]) -> bool {
    goals.iter().all(|goal| goal.is_met_by(recipe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Ingredient, Nutrition};

    fn recipe_with(nutrition: Option<Nutrition>, ingredients: &[&str]) -> Recipe {
        Recipe {
            name: "Test".to_string(),
            servings: 2,
            prep_time: None,
            cook_time: None,
            ingredients: ingredients.iter().map(|n| Ingredient::new("1", *n)).collect(),
            instructions: vec![],
            nutrition,
            source: None,
        }
    }

    #[test]
    fn test_numeric_goals() {
        let recipe = recipe_with(
            Some(Nutrition {
                calories: Some(400.0),
                protein_g: Some(32.0),
                carbs_g: Some(12.0),
                fat_g: Some(18.0),
                fiber_g: None,
            }),
            &["chicken breast"],
        );
        assert!(NutritionGoal::HighProtein.is_met_by(&recipe));
        assert!(NutritionGoal::LowCarb.is_met_by(&recipe));
        assert!(NutritionGoal::LowCalorie.is_met_by(&recipe));
        assert!(!NutritionGoal::LowFat.is_met_by(&recipe));
        assert!(!NutritionGoal::Vegetarian.is_met_by(&recipe));
    }

    #[test]
    fn test_missing_nutrition_fails_numeric_goals() {
        let recipe = recipe_with(None, &["lentils"]);
        assert!(!NutritionGoal::HighProtein.is_met_by(&recipe));
        assert!(NutritionGoal::Vegetarian.is_met_by(&recipe));
        assert!(meets_all(&recipe, &[]));
        assert!(!meets_all(&recipe, &[NutritionGoal::Vegetarian, NutritionGoal::LowFat]));
    }

    #[test]
    fn test_goals_use_kebab_case_names_on_the_command_line() {
        assert_eq!(
            NutritionGoal::from_str("high-protein", false),
            Ok(NutritionGoal::HighProtein)
        );
        assert_eq!(NutritionGoal::from_str("low-calorie", false), Ok(NutritionGoal::LowCalorie));
    }

    #[test]
    fn test_vegetarian_matches_case_insensitively() {
        let recipe = recipe_with(None, &["Smoked Bacon", "eggs"]);
        assert!(!NutritionGoal::Vegetarian.is_met_by(&recipe));
    }
}
