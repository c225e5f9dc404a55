use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::endpoints::{GenerateContentRequest, GenerateContentResponse, Provider};
use crate::config::{GeminiConfig, API_KEY_ENV_VAR};

#[derive(Debug, Error)]
pub enum ApiConnectionError {
    #[error("API key not found in environment: {0}")]
    MissingApiKey(String),
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("API error {status}: {error_body}")]
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
}

impl Provider {
    pub fn gemini(config: GeminiConfig) -> Self {
        Self::Gemini {
            api_key: config.api_key,
            endpoint: config.endpoint,
            timeout: config.timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Provider::Gemini { endpoint, .. } => endpoint,
        }
    }

    fn http_client(&self) -> Result<Client, ApiConnectionError> {
        match self {
            Provider::Gemini { timeout, .. } => {
                let mut builder = Client::builder();
                if let Some(timeout) = timeout {
                    builder = builder.timeout(*timeout);
                }
                Ok(builder.build()?)
            }
        }
    }

    /// Single POST, no retry. Non-2xx replies surface as `ApiError` with the body text.
    pub async fn call_generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiConnectionError> {
        match self {
            Provider::Gemini {
                api_key, endpoint, ..
            } => {
                let api_key = api_key
                    .as_deref()
                    .ok_or_else(|| ApiConnectionError::MissingApiKey(API_KEY_ENV_VAR.to_string()))?;

                let client = self.http_client()?;
                debug!(endpoint = %endpoint, "sending generateContent request");

                let response = client
                    .post(endpoint.as_str())
                    .query(&[("key", api_key)])
                    .header("Content-Type", "application/json")
                    .json(request)
                    .send()
                    .await?;

                let status = response.status();
                if status.is_success() {
                    let body = response.text().await?;
                    Ok(serde_json::from_str::<GenerateContentResponse>(&body)?)
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
