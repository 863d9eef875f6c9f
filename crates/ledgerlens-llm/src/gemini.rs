//! Gemini Provider Implementation
//!
//! Integration with the Google Gemini generateContent API.
//!
//! # Features
//!
//! - Async HTTP communication with the Gemini API
//! - Explicit configuration struct (API key, model, endpoint), no global
//!   key state
//! - Retry logic with exponential backoff
//! - Timeout handling

use crate::LlmError;
use ledgerlens_domain::traits::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for statement parsing
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default timeout for LLM requests (120 seconds; statement chunks are large)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for the Gemini provider
///
/// The API key is passed at construction time rather than read from ambient
/// process state.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the Gemini service
    pub api_key: String,

    /// Model identifier (e.g. "gemini-2.5-flash")
    pub model: String,

    /// API endpoint base URL
    pub endpoint: String,
}

impl GeminiConfig {
    /// Create a configuration with the default model and endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Override the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint (useful for proxies and tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Gemini API provider
pub struct GeminiProvider {
    config: GeminiConfig,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider from an explicit configuration
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            config,
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Generate text using the Gemini API
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the API is unreachable
    /// - the model is not available
    /// - the rate limit is exceeded
    /// - the response format is invalid
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        // Retry with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        match response.json::<GenerateContentResponse>().await {
                            Ok(body) => return Self::first_candidate_text(body),
                            Err(e) => {
                                return Err(LlmError::MalformedReply(format!(
                                    "Failed to parse response: {}",
                                    e
                                )));
                            }
                        }
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.config.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimited);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Transport(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Transport(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Transport("Max retries exceeded".to_string())))
    }

    fn first_candidate_text(body: GenerateContentResponse) -> Result<String, LlmError> {
        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::MalformedReply("No candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();

        if text.is_empty() {
            return Err(LlmError::MalformedReply(
                "Empty candidate content".to_string(),
            ));
        }

        Ok(text)
    }
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call; callers dispatch this through
        // spawn_blocking
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Runtime(e.to_string()))?
            .block_on(async { self.generate(prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeminiConfig::new("key-123");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api_key, "key-123");
    }

    #[test]
    fn test_config_overrides() {
        let config = GeminiConfig::new("key")
            .with_model("gemini-2.5-pro")
            .with_endpoint("http://localhost:8080");
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.endpoint, "http://localhost:8080");
    }

    #[test]
    fn test_provider_with_max_retries() {
        let provider = GeminiProvider::new(GeminiConfig::new("key")).with_max_retries(5);
        assert_eq!(provider.max_retries, 5);
    }

    #[tokio::test]
    async fn test_error_handling_unreachable_endpoint() {
        let config = GeminiConfig::new("key").with_endpoint("http://127.0.0.1:9");
        let provider = GeminiProvider::new(config).with_max_retries(1);

        let result = provider.generate("test").await;
        assert!(result.is_err());

        match result {
            Err(LlmError::Transport(_)) => {}
            other => panic!("Expected Transport error, got {:?}", other.err()),
        }
    }

    // Integration test (requires a real API key)
    #[tokio::test]
    #[ignore]
    async fn test_generate_integration() {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let provider = GeminiProvider::new(GeminiConfig::new(api_key));
        let result = provider.generate("Say 'hello' and nothing else").await;

        if let Ok(response) = result {
            assert!(!response.is_empty());
        }
    }
}
