use tracing::{debug, info};

use crate::api_connection::{
    ApiConnectionError, ChatCompletionRequest, ChatMessage, Provider, ResponseFormat,
};
use crate::preferences::NutritionGoal;
use crate::recipe::Recipe;

const MAX_RESPONSE_TOKENS: u32 = 2048;

/// Everything the model needs to produce one recipe.
#[derive(Debug, Clone)]
pub struct RecipeQuery<'a> {
    pub query: &'a str,
    pub goals: &'a [NutritionGoal],
    pub servings: u32,
    /// Catalog matches passed along as reference material.
    pub references: &'a [Recipe],
}

fn system_prompt() -> String {
    "/no_thinking
You are a recipe assistant. Answer with exactly one recipe as a JSON object and nothing else: no explanations, no markdown fences.
The object must have these properties:
- \"name\": string
- \"servings\": integer, the number of servings the quantities are written for
- \"prepTime\": string, e.g. \"10 minutes\"
- \"cookTime\": string
- \"ingredients\": array of objects with string properties \"quantity\" (e.g. \"1 1/2 cups\", \"2\", \"to taste\"), \"name\", and optionally \"notes\"
- \"instructions\": array of strings, one step each
- \"nutrition\": object with per-serving numbers \"calories\", \"protein_g\", \"carbs_g\", \"fat_g\", \"fiber_g\"
- \"source\": object with string \"name\" and optional \"url\"
Write quantities with whole numbers and simple fractions (1/4, 1/3, 1/2, 2/3, 3/4) rather than decimals."
        .to_string()
}

fn user_prompt(query: &RecipeQuery<'_>) -> Result<String, ApiConnectionError> {
    let mut prompt = format!(
        "Request: {}\nServings: {}\n",
        query.query.trim(),
        query.servings
    );
    if !query.goals.is_empty() {
        prompt.push_str("Nutrition preferences:\n");
        for goal in query.goals {
            prompt.push_str(&format!("- {}\n", goal.prompt_hint()));
        }
    }
    if !query.references.is_empty() {
        prompt.push_str("Reference recipes you may adapt:\n");
        prompt.push_str(&serde_json::to_string(query.references)?);
        prompt.push('\n');
    }
    Ok(prompt)
}

/// Removes a surrounding markdown code fence (```` ```json ... ``` ````) if present.
pub fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    if !(trimmed.starts_with("```") && trimmed.ends_with("```") && trimmed.len() >= 6) {
        return trimmed;
    }
    let inner = &trimmed[3..trimmed.len() - 3];
    inner.strip_prefix("json").unwrap_or(inner).trim()
}

/// Asks the model for a recipe matching `query` and parses its JSON answer.
pub async fn request_recipe(
    provider: &Provider,
    query: &RecipeQuery<'_>,
) -> Result<Recipe, ApiConnectionError> {
    let settings = provider.settings();
    let request = ChatCompletionRequest {
        model: settings.model.clone(),
        messages: vec![
            ChatMessage::system(system_prompt()),
            ChatMessage::user(user_prompt(query)?),
        ],
        response_format: Some(ResponseFormat::json_object()),
        temperature: Some(settings.temperature),
        max_tokens: Some(MAX_RESPONSE_TOKENS),
    };

    info!(query = query.query, servings = query.servings, "Requesting recipe from model");
    let response = provider.call_chat_completion(&request).await?;
    let content = response
        .first_content()
        .ok_or(ApiConnectionError::EmptyResponse)?;
    debug!("Raw model content:\n{}", content);

    let json = strip_code_fences(content);
    if json.is_empty() {
        return Err(ApiConnectionError::EmptyResponse);
    }
    Ok(serde_json::from_str::<Recipe>(json)?)
}
