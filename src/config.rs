use std::env;
use std::time::Duration;

pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
pub const API_URL_ENV_VAR: &str = "GEMINI_API_URL";
pub const TIMEOUT_ENV_VAR: &str = "GEMINI_TIMEOUT_SECS";

pub const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-pro:generateContent";

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    /// `None` leaves the HTTP client's default behaviour in place.
    pub timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl GeminiConfig {
    /// Reads the Gemini settings from the process environment. Call
    /// `dotenv::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_ENV_VAR)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let endpoint = env::var(API_URL_ENV_VAR)
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string());

        let timeout = env::var(TIMEOUT_ENV_VAR)
            .ok()
            .and_then(|t| t.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            api_key,
            endpoint,
            timeout,
        }
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }
}
