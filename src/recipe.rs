use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Ingredient {
    pub quantity: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Ingredient {
    pub fn new(quantity: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            name: name.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Per-serving nutrition estimate. Every field is optional because the LLM
/// frequently leaves some of them out.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Nutrition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f32>,
    #[serde(default, alias = "protein", skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f32>,
    #[serde(default, alias = "carbs", skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f32>,
    #[serde(default, alias = "fat", skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f32>,
    #[serde(default, alias = "fiber", skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeSource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(alias = "title")]
    pub name: String,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RecipeSource>,
}

impl Recipe {
    /// Lowercased ingredient names, used by keyword search and diet checks.
    pub fn ingredient_names(&self) -> impl Iterator<Item = String> + '_ {
        self.ingredients.iter().map(|i| i.name.to_lowercase())
    }
}

pub fn load_recipe(path: &Path) -> Result<Recipe> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse recipe JSON from {:?}", path))
}

pub fn save_recipe(recipe: &Recipe, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(recipe).context("Failed to serialize recipe")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write recipe to {:?}", path))
}
