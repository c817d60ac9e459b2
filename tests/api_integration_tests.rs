use recipe_assist::api_connection::{
    ApiConnectionError, ChatCompletionRequest, ChatMessage, Provider,
};
use recipe_assist::assistant::{request_recipe, RecipeQuery};
use recipe_assist::catalog::search_samples;
use recipe_assist::config::{Settings, API_KEY_ENV_VAR};
use recipe_assist::preferences::NutritionGoal;
use recipe_assist::scaling::scale_recipe_servings;
use std::env;

fn setup_test_environment() {
    dotenv::dotenv().ok();
}

fn settings_with_key_var(var_name: &str) -> Settings {
    Settings {
        api_key_env_var: var_name.to_string(),
        max_retries: 0,
        ..Settings::default()
    }
}

#[tokio::test]
async fn test_missing_api_key_error() {
    setup_test_environment();
    let provider = Provider::openrouter(&settings_with_key_var("THIS_KEY_SHOULD_NOT_EXIST_IN_ENV_RCPX"));
    let request = ChatCompletionRequest {
        model: provider.settings().model.clone(),
        messages: vec![ChatMessage::user("Hello")],
        response_format: None,
        temperature: None,
        max_tokens: None,
    };
    let result = provider.call_chat_completion(&request).await;
    match result {
        Err(ApiConnectionError::MissingApiKey(key_name)) => {
            assert_eq!(key_name, "THIS_KEY_SHOULD_NOT_EXIST_IN_ENV_RCPX")
        }
        other => panic!("Expected MissingApiKey, got {:?}", other),
    }
}

#[tokio::test]
async fn test_request_recipe_without_key_fails_fast() {
    let provider = Provider::openrouter(&settings_with_key_var("ANOTHER_KEY_THAT_IS_NOT_SET_RCPX"));
    let query = RecipeQuery {
        query: "tomato soup",
        goals: &[],
        servings: 2,
        references: &[],
    };
    let result = request_recipe(&provider, &query).await;
    assert!(matches!(result, Err(ApiConnectionError::MissingApiKey(_))));
}

#[tokio::test]
#[ignore]
async fn test_live_recipe_request_scales() {
    setup_test_environment();
    if env::var(API_KEY_ENV_VAR).is_err() {
        println!("Skipping test_live_recipe_request_scales: {} not set.", API_KEY_ENV_VAR);
        return;
    }

    let settings = Settings::from_env().expect("valid configuration");
    let provider = Provider::openrouter(&settings);
    let references = search_samples("lentil soup", &[NutritionGoal::Vegetarian]);
    let query = RecipeQuery {
        query: "a warming vegetarian lentil soup",
        goals: &[NutritionGoal::Vegetarian],
        servings: 4,
        references: &references,
    };

    let recipe = request_recipe(&provider, &query).await;
    assert!(recipe.is_ok(), "Recipe request failed: {:?}", recipe.as_ref().err());
    let recipe = recipe.unwrap();
    assert!(!recipe.ingredients.is_empty());
    assert!(recipe.servings > 0);

    let doubled = scale_recipe_servings(&recipe, recipe.servings * 2);
    assert_eq!(doubled.ingredients.len(), recipe.ingredients.len());
    assert_eq!(doubled.instructions, recipe.instructions);
}

#[tokio::test]
#[ignore]
async fn test_api_error_with_invalid_key() {
    setup_test_environment();

    const INVALID_KEY_ENV_NAME_FOR_THIS_TEST: &str = "RECIPE_ASSIST_BAD_KEY_FOR_TESTING";
    env::set_var(INVALID_KEY_ENV_NAME_FOR_THIS_TEST, "this_is_a_deliberately_bad_api_key");

    let provider = Provider::openrouter(&settings_with_key_var(INVALID_KEY_ENV_NAME_FOR_THIS_TEST));
    let request = ChatCompletionRequest {
        model: provider.settings().model.clone(),
        messages: vec![ChatMessage::user("This call should fail due to invalid key.")],
        response_format: None,
        temperature: None,
        max_tokens: None,
    };

    let result = provider.call_chat_completion(&request).await;
    match &result {
        Err(ApiConnectionError::ApiError { status, .. }) => {
            assert_eq!(*status, reqwest::StatusCode::UNAUTHORIZED)
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }

    env::remove_var(INVALID_KEY_ENV_NAME_FOR_THIS_TEST);
}
