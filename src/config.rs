//! Runtime settings read from the environment (and `.env`, when present).

use std::env;
use thiserror::Error;

pub const API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";

pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "qwen/qwen3-32b";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_APP_NAME: &str = "RecipeAssist";
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Serving counts the assistant accepts from users.
pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 8;
pub const DEFAULT_SERVINGS: u32 = 2;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Name of the environment variable holding the OpenRouter key. The key
    /// itself is read at request time so it never ends up in logs.
    pub api_key_env_var: String,
    pub api_url: String,
    pub model: String,
    pub site_url: String,
    pub app_name: String,
    pub max_retries: u32,
    pub temperature: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key_env_var: API_KEY_ENV_VAR.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// Optional:
    /// - `RECIPE_API_URL`: chat completions endpoint (default: OpenRouter)
    /// - `RECIPE_MODEL`: model name (default: "qwen/qwen3-32b")
    /// - `SITE_URL`, `APP_NAME`: OpenRouter attribution headers
    /// - `RECIPE_MAX_RETRIES`: retries for transient failures (default: 2)
    /// - `RECIPE_TEMPERATURE`: sampling temperature (default: 0.3)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Settings::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            api_key_env_var: defaults.api_key_env_var,
            api_url: lookup("RECIPE_API_URL").unwrap_or(defaults.api_url),
            model: lookup("RECIPE_MODEL").unwrap_or(defaults.model),
            site_url: lookup("SITE_URL").unwrap_or(defaults.site_url),
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            max_retries: parse_var(&lookup, "RECIPE_MAX_RETRIES")?.unwrap_or(defaults.max_retries),
            temperature: parse_var(&lookup, "RECIPE_TEMPERATURE")?.unwrap_or(defaults.temperature),
        })
    }

    /// The API key, if one is configured and non-empty.
    pub fn api_key(&self) -> Option<String> {
        env::var(&self.api_key_env_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name: name.to_string(),
                value,
            }),
    }
}
