use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

use crate::api_connection::Provider;
use crate::assistant::{request_recipe, RecipeQuery};
use crate::catalog::search_samples;
use crate::config::Settings;
use crate::preferences::NutritionGoal;
use crate::recipe::{load_recipe, save_recipe, Recipe};
use crate::scaling::scale_recipe_servings;

/// How many catalog matches are handed to the model as references.
const REFERENCE_LIMIT: usize = 2;

/// Reads a recipe file and rescales it. Writes to `output` when given.
pub fn scale_file(recipe_file: &Path, servings: u32, output: Option<&Path>) -> Result<Recipe> {
    let recipe = load_recipe(recipe_file)?;
    if recipe.servings == 0 {
        anyhow::bail!("Recipe {:?} declares zero servings and cannot be scaled", recipe_file);
    }
    let scaled = scale_recipe_servings(&recipe, servings);
    if let Some(path) = output {
        save_recipe(&scaled, path)?;
    }
    Ok(scaled)
}

/// One line per sample recipe: name, servings and ingredient count.
pub fn describe_samples(query: Option<&str>, goals: &[NutritionGoal]) -> Vec<String> {
    search_samples(query.unwrap_or(""), goals)
        .iter()
        .map(|recipe| {
            format!(
                "{} (serves {}, {} ingredients)",
                recipe.name,
                recipe.servings,
                recipe.ingredients.len()
            )
        })
        .collect()
}

/// Where a suggested recipe came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionOrigin {
    Model,
    Catalog,
}

/// Produces a recipe for `query`, scaled to `servings`.
///
/// The model is asked first unless `offline` is set or no API key is
/// configured. If the model fails, the best catalog match is used instead.
pub async fn suggest(
    settings: &Settings,
    query: &str,
    goals: &[NutritionGoal],
    servings: u32,
    offline: bool,
) -> Result<(Recipe, SuggestionOrigin)> {
    let matches = search_samples(query, goals);

    if !offline && settings.api_key().is_some() {
        let provider = Provider::openrouter(settings);
        let recipe_query = RecipeQuery {
            query,
            goals,
            servings,
            references: &matches[..matches.len().min(REFERENCE_LIMIT)],
        };
        match request_recipe(&provider, &recipe_query).await {
            Ok(mut recipe) => {
                if recipe.servings == 0 {
                    warn!(recipe = %recipe.name, "Model returned zero servings, assuming requested count");
                    recipe.servings = servings;
                }
                return Ok((scale_recipe_servings(&recipe, servings), SuggestionOrigin::Model));
            }
            Err(e) => warn!(error = %e, "Model request failed, falling back to sample recipes"),
        }
    }

    let best = matches
        .into_iter()
        .next()
        .or_else(|| search_samples("", goals).into_iter().next())
        .with_context(|| format!("No sample recipe matches {:?} with the chosen goals", query))?;
    Ok((scale_recipe_servings(&best, servings), SuggestionOrigin::Catalog))
}
