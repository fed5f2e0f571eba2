//! Wire types for the Gemini v1 REST API.
//!
//! These mirror the JSON bodies of `generateContent` and the model listing
//! endpoint. Only the fields this crate reads or writes are modeled;
//! everything else in the upstream payloads is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// One piece of a [`Content`] block. The API also defines non-text parts
/// (inline data, function calls); those deserialize with an empty `text`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// A role-tagged sequence of parts.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part user turn, the only shape this service ever sends.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".into()),
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Request body of `POST /v1/{model}:generateContent`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// One generated answer within a [`GenerateContentResponse`].
#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Response body of `generateContent`.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it produced any.
    ///
    /// A response with no candidates (e.g. fully blocked) or only non-text
    /// parts yields `None`.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut out = String::new();
        for part in &content.parts {
            out.push_str(&part.text);
        }
        if out.is_empty() {
            None
        } else {
            Some(out)
        }
    }
}

/// Error envelope the API returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    /// Symbolic status such as `RESOURCE_EXHAUSTED`.
    #[serde(default)]
    pub status: Option<String>,
}

/// One entry of the model listing endpoint.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Fully qualified name, e.g. `models/gemini-2.5-flash`.
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Response body of `GET /v1/models`, one page at a time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_concatenates_parts_of_first_candidate() {
        let resp: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"there."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.text().as_deref(), Some("Hello there."));
    }

    #[test]
    fn text_is_none_without_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.text().is_none());
    }

    #[test]
    fn text_is_none_for_partless_candidate() {
        let resp: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(resp.text().is_none());
    }

    #[test]
    fn user_content_serializes_role_and_text() {
        let body = serde_json::to_value(GenerateContentRequest {
            contents: vec![Content::user("hi")],
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents":[{"role":"user","parts":[{"text":"hi"}]}]})
        );
    }
}
