//! HTTP client for the Gemini `generateContent` API.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::RecommendConfig;

use super::error::RecommendError;
use super::types::{GenerateContentRequest, GenerateContentResponse, ModelRecommendation};

/// Gemini API client.
#[derive(Clone)]
pub struct RecommendClient {
    inner: Arc<RecommendClientInner>,
}

struct RecommendClientInner {
    client: reqwest::Client,
    model: String,
    endpoint: String,
}

impl RecommendClient {
    /// Create a new client from the recommendation configuration.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &RecommendConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(config.api_key.expose_secret())
                .expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(RecommendClientInner {
                client,
                model: config.model.clone(),
                endpoint: config.endpoint.trim_end_matches('/').to_string(),
            }),
        }
    }

    /// Send a prompt and parse the model's JSON answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with an
    /// error status, or the candidate text is not the expected JSON.
    #[instrument(skip(self, prompt), fields(model = %self.inner.model))]
    pub async fn generate(&self, prompt: String) -> Result<ModelRecommendation, RecommendError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.inner.endpoint, self.inner.model
        );
        let request = GenerateContentRequest::json_prompt(prompt);

        let response = self.inner.client.post(url).json(&request).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<ModelRecommendation, RecommendError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RecommendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| RecommendError::Parse(format!("Failed to parse response: {e}")))?;

        let text = parsed.first_text().ok_or(RecommendError::Empty)?;
        serde_json::from_str(strip_code_fence(text))
            .map_err(|e| RecommendError::Parse(format!("Failed to parse model answer: {e}")))
    }
}

/// Strip a Markdown code fence the model sometimes wraps JSON in.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence_plain_text() {
        assert_eq!(strip_code_fence(r#"{"a":1}"#), r#"{"a":1}"#);
    }

    #[test]
    fn test_strip_code_fence_json_fence() {
        let fenced = "```json\n{\"a\":1}\n```";
        assert_eq!(strip_code_fence(fenced), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fence_bare_fence() {
        let fenced = "```\n{\"a\":1}\n```";
        assert_eq!(strip_code_fence(fenced), "{\"a\":1}");
    }
}
