//! HTTP client for the Gemini text-generation service.
//!
//! This module provides the [`GeminiClient`] type which implements the
//! [`CompletionClient`] trait over the v1 REST API, plus a helper for
//! listing the models available to the configured key.

use crate::model::{
    Content, ErrorResponse, GenerateContentRequest, GenerateContentResponse, ListModelsResponse,
    ModelInfo,
};
use crate::traits::{CompletionClient, CompletionError};
use async_trait::async_trait;
use tracing::debug;

/// Public endpoint of the hosted generation API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the hosted generation API, one instance per process.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client against the public endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client against `base_url`, e.g. a proxy or a test server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Fetch the names of all models the key can use, following pagination.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, CompletionError> {
        let url = format!("{}/v1/models", self.base_url);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut req = self.http.get(&url).header(API_KEY_HEADER, &self.api_key);
            if let Some(token) = &page_token {
                req = req.query(&[("pageToken", token)]);
            }
            let resp = req
                .send()
                .await
                .map_err(|e| CompletionError::Network(e.to_string()))?;
            if !resp.status().is_success() {
                return Err(api_error(resp).await);
            }
            let page: ListModelsResponse = resp
                .json()
                .await
                .map_err(|e| CompletionError::Network(e.to_string()))?;
            models.extend(page.models);
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        Ok(models)
    }

    /// Qualify bare model names the way the API expects them.
    fn model_path(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        let url = format!(
            "{}/v1/{}:generateContent",
            self.base_url,
            Self::model_path(model)
        );
        let body = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
        };
        debug!(%model, "requesting completion");
        let resp = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(api_error(resp).await);
        }
        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;
        parsed.text().ok_or(CompletionError::EmptyResponse)
    }
}

/// Turn a non-success response into an [`CompletionError::Api`], preferring
/// the message from the structured error envelope when one is present.
async fn api_error(resp: reqwest::Response) -> CompletionError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    CompletionError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_model_names_are_qualified() {
        assert_eq!(
            GeminiClient::model_path("gemini-2.5-flash"),
            "models/gemini-2.5-flash"
        );
        assert_eq!(
            GeminiClient::model_path("models/gemini-2.5-flash"),
            "models/gemini-2.5-flash"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = GeminiClient::with_base_url("k", "http://localhost:1234/");
        assert_eq!(client.base_url, "http://localhost:1234");
    }

    #[test]
    fn new_targets_the_public_endpoint() {
        let client = GeminiClient::new("k");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
