use tracing::warn;

use crate::quantity::{extract_unit, parse_quantity, render_amount, ParsedQuantity};
use crate::recipe::{Ingredient, Recipe};

/// Rescales one ingredient from `from_servings` to `to_servings`.
///
/// Vague quantities ("to taste", "a pinch") and text without a readable number
/// come back unchanged. Otherwise the amount is multiplied by
/// `to_servings / from_servings`, rendered as a kitchen fraction and followed by
/// the first alphabetic token of the original quantity, if there was one.
/// Name and notes are always copied verbatim, and the unit is not re-pluralised.
pub fn scale_ingredient(ingredient: &Ingredient, from_servings: u32, to_servings: u32) -> Ingredient {
    if from_servings == 0 {
        warn!(
            ingredient = %ingredient.name,
            "Cannot scale from zero servings, leaving quantity unchanged"
        );
        return ingredient.clone();
    }

    let amount = match parse_quantity(&ingredient.quantity) {
        ParsedQuantity::Scalable(amount) => amount,
        ParsedQuantity::NonScalable => return ingredient.clone(),
    };

    let scaled = amount * (f64::from(to_servings) / f64::from(from_servings));
    let rendered = render_amount(scaled);
    let quantity = match extract_unit(&ingredient.quantity) {
        Some(unit) => format!("{} {}", rendered, unit),
        None => rendered,
    };

    Ingredient {
        quantity,
        name: ingredient.name.clone(),
        notes: ingredient.notes.clone(),
    }
}

/// Returns a copy of `recipe` sized for `to_servings`, using `recipe.servings`
/// as the starting point. Only `servings` and ingredient quantities change.
pub fn scale_recipe_servings(recipe: &Recipe, to_servings: u32) -> Recipe {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| scale_ingredient(ingredient, recipe.servings, to_servings))
        .collect();

    Recipe {
        servings: to_servings,
        ingredients,
        ..recipe.clone()
    }
}
