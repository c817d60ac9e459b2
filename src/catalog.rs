//! Offline recipe source. Stands in for a web scraper with a fixed set of
//! sample recipes so the assistant works without network access.

use crate::preferences::{meets_all, NutritionGoal};
use crate::recipe::{Ingredient, Nutrition, Recipe, RecipeSource};

pub const SAMPLE_SOURCE_NAME: &str = "Sample Recipe Collection";

// Query words shorter than this ("a", "of") never count as matches.
const MIN_KEYWORD_LEN: usize = 3;

struct SampleRecipe {
    name: &'static str,
    servings: u32,
    prep_time: &'static str,
    cook_time: &'static str,
    ingredients: &'static [(&'static str, &'static str)],
    instructions: &'static [&'static str],
    // kcal, protein, carbs, fat, fiber per serving
    nutrition: (f32, f32, f32, f32, f32),
}

const SAMPLES: &[SampleRecipe] = &[
    SampleRecipe {
        name: "Classic Pancakes",
        servings: 4,
        prep_time: "10 minutes",
        cook_time: "15 minutes",
        ingredients: &[
            ("1 1/2 cups", "all-purpose flour"),
            ("3 1/2 tsp", "baking powder"),
            ("1 tbsp", "sugar"),
            ("1/4 tsp", "salt"),
            ("1 1/4 cups", "milk"),
            ("1", "egg"),
            ("3 tbsp", "butter"),
        ],
        instructions: &[
            "Whisk the flour, baking powder, sugar and salt together.",
            "Melt the butter, then beat it with the milk and egg.",
            "Stir the wet ingredients into the dry until just combined.",
            "Cook ladlefuls on a hot greased griddle until golden on both sides.",
        ],
        nutrition: (320.0, 9.0, 45.0, 11.0, 1.5),
    },
    SampleRecipe {
        name: "Grilled Chicken Salad",
        servings: 2,
        prep_time: "15 minutes",
        cook_time: "12 minutes",
        ingredients: &[
            ("2", "chicken breasts"),
            ("4 cups", "mixed greens"),
            ("1 cup", "cherry tomatoes"),
            ("1/2", "cucumber"),
            ("2 tbsp", "olive oil"),
            ("1 tbsp", "lemon juice"),
            ("to taste", "salt"),
            ("pinch", "black pepper"),
        ],
        instructions: &[
            "Season the chicken and grill for 5 to 6 minutes per side.",
            "Rest the chicken, then slice it thinly.",
            "Toss the greens, tomatoes and cucumber with oil and lemon juice.",
            "Top with the sliced chicken and season.",
        ],
        nutrition: (380.0, 38.0, 10.0, 20.0, 3.0),
    },
    SampleRecipe {
        name: "Vegetable Stir Fry",
        servings: 3,
        prep_time: "15 minutes",
        cook_time: "10 minutes",
        ingredients: &[
            ("2 cups", "broccoli florets"),
            ("1", "red bell pepper"),
            ("1", "carrot"),
            ("2 cloves", "garlic"),
            ("1 tbsp", "fresh ginger"),
            ("2 tbsp", "soy sauce"),
            ("1 tsp", "sesame oil"),
            ("2 cups", "cooked rice"),
        ],
        instructions: &[
            "Slice the pepper and carrot into thin strips.",
            "Stir fry garlic and ginger in sesame oil for 30 seconds.",
            "Add the vegetables and cook until crisp-tender.",
            "Add soy sauce and serve over rice.",
        ],
        nutrition: (310.0, 8.0, 52.0, 7.0, 6.0),
    },
    SampleRecipe {
        name: "Hearty Lentil Soup",
        servings: 4,
        prep_time: "10 minutes",
        cook_time: "40 minutes",
        ingredients: &[
            ("1 cup", "dried lentils"),
            ("1", "onion"),
            ("2", "carrots"),
            ("2 stalks", "celery"),
            ("4 cups", "vegetable broth"),
            ("1 can", "diced tomatoes"),
            ("1 tsp", "ground cumin"),
            ("to taste", "salt"),
        ],
        instructions: &[
            "Dice the onion, carrots and celery and soften them in a large pot.",
            "Add lentils, broth, tomatoes and cumin.",
            "Simmer for 35 minutes until the lentils are tender.",
            "Season and serve.",
        ],
        nutrition: (260.0, 16.0, 42.0, 3.0, 15.0),
    },
    SampleRecipe {
        name: "Baked Salmon with Quinoa",
        servings: 2,
        prep_time: "10 minutes",
        cook_time: "20 minutes",
        ingredients: &[
            ("2", "salmon fillets"),
            ("1 cup", "quinoa"),
            ("2 cups", "water"),
            ("1 tbsp", "olive oil"),
            ("1", "lemon"),
            ("2 cloves", "garlic"),
            ("dash", "paprika"),
        ],
        instructions: &[
            "Rinse the quinoa and simmer it in the water for 15 minutes.",
            "Rub the salmon with oil, garlic and paprika.",
            "Bake at 200C for 12 to 15 minutes.",
            "Serve over quinoa with lemon wedges.",
        ],
        nutrition: (520.0, 40.0, 38.0, 22.0, 5.0),
    },
    SampleRecipe {
        name: "Greek Yogurt Parfait",
        servings: 1,
        prep_time: "5 minutes",
        cook_time: "0 minutes",
        ingredients: &[
            ("1 cup", "greek yogurt"),
            ("1/2 cup", "granola"),
            ("1/2 cup", "mixed berries"),
            ("1 tbsp", "honey"),
        ],
        instructions: &[
            "Layer yogurt, granola and berries in a glass.",
            "Drizzle with honey.",
        ],
        nutrition: (350.0, 22.0, 48.0, 8.0, 4.0),
    },
];

impl SampleRecipe {
    fn to_recipe(&self) -> Recipe {
        let (calories, protein, carbs, fat, fiber) = self.nutrition;
        Recipe {
            name: self.name.to_string(),
            servings: self.servings,
            prep_time: Some(self.prep_time.to_string()),
            cook_time: Some(self.cook_time.to_string()),
            ingredients: self
                .ingredients
                .iter()
                .map(|(quantity, name)| Ingredient::new(*quantity, *name))
                .collect(),
            instructions: self.instructions.iter().map(|s| s.to_string()).collect(),
            nutrition: Some(Nutrition {
                calories: Some(calories),
                protein_g: Some(protein),
                carbs_g: Some(carbs),
                fat_g: Some(fat),
                fiber_g: Some(fiber),
            }),
            source: Some(RecipeSource {
                name: SAMPLE_SOURCE_NAME.to_string(),
                url: None,
            }),
        }
    }
}

/// All six sample recipes, in catalog order.
pub fn sample_recipes() -> Vec<Recipe> {
    SAMPLES.iter().map(SampleRecipe::to_recipe).collect()
}

/// Searches the samples by keyword and nutrition goals.
///
/// Each query word (lowercased, at least three characters) scores a point when
/// it appears in the recipe name or any ingredient name. Recipes that score
/// nothing, or that miss any goal, are dropped. Results are ordered by score,
/// best first, then by name. A query with no usable words matches every recipe.
pub fn search_samples(query: &str, goals: &[NutritionGoal]) -> Vec<Recipe> {
    let keywords: Vec<String> = query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.len() >= MIN_KEYWORD_LEN)
        .map(|word| word.to_lowercase())
        .collect();

    let mut scored: Vec<(usize, Recipe)> = sample_recipes()
        .into_iter()
        .filter(|recipe| meets_all(recipe, goals))
        .map(|recipe| (keyword_score(&recipe, &keywords), recipe))
        .filter(|(score, _)| keywords.is_empty() || *score > 0)
        .collect();

    scored.sort_by(|(score_a, a), (score_b, b)| score_b.cmp(score_a).then_with(|| a.name.cmp(&b.name)));
    scored.into_iter().map(|(_, recipe)| recipe).collect()
}

fn keyword_score(recipe: &Recipe, keywords: &[String]) -> usize {
    let name = recipe.name.to_lowercase();
    let ingredient_names: Vec<String> = recipe.ingredient_names().collect();
    keywords
        .iter()
        .filter(|word| {
            name.contains(word.as_str()) || ingredient_names.iter().any(|i| i.contains(word.as_str()))
        })
        .count()
}
