use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::endpoints::{ChatCompletionRequest, ChatCompletionResponse, Provider};
use crate::config::Settings;

/// Base delay between retries; attempt `n` waits `n * RETRY_DELAY`.
const RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Error, Debug)]
pub enum ApiConnectionError {
    #[error("API key not found in environment: {0}")]
    MissingApiKey(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("API error {status}: {error_body}")]
    ApiError {
        status: StatusCode,
        error_body: String,
    },

    #[error("API returned no usable content")]
    EmptyResponse,
}

impl ApiConnectionError {
    /// Network failures, rate limiting and server errors are worth another try.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiConnectionError::NetworkError(_) => true,
            ApiConnectionError::ApiError { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            _ => false,
        }
    }
}

impl Provider {
    pub fn openrouter(settings: &Settings) -> Self {
        Self::OpenRouter {
            settings: settings.clone(),
            client: Client::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        match self {
            Provider::OpenRouter { settings, .. } => settings,
        }
    }

    /// Sends a chat completion, retrying transient failures up to
    /// `settings.max_retries` times.
    pub async fn call_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiConnectionError> {
        let max_retries = self.settings().max_retries;
        let mut attempt = 0;
        loop {
            match self.send_once(request).await {
                Err(e) if e.is_transient() && attempt < max_retries => {
                    attempt += 1;
                    warn!(attempt, max_retries, error = %e, "Chat completion failed, retrying");
                    tokio::time::sleep(RETRY_DELAY * attempt).await;
                }
                result => return result,
            }
        }
    }

    async fn send_once(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiConnectionError> {
        match self {
            Provider::OpenRouter { settings, client } => {
                let api_key = settings
                    .api_key()
                    .ok_or_else(|| ApiConnectionError::MissingApiKey(settings.api_key_env_var.clone()))?;

                debug!(model = %request.model, url = %settings.api_url, "Sending chat completion");
                let response = client
                    .post(&settings.api_url)
                    .bearer_auth(api_key)
                    .header("HTTP-Referer", &settings.site_url)
                    .header("X-Title", &settings.app_name)
                    .json(request)
                    .send()
                    .await?;

                let status = response.status();
                if status.is_success() {
                    let body = response.text().await?;
                    Ok(serde_json::from_str::<ChatCompletionResponse>(&body)?)
                } else {
                    let error_body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Failed to read error body".to_string());
                    Err(ApiConnectionError::ApiError { status, error_body })
                }
            }
        }
    }
}
