//! HTTP surface of the chat service.
//!
//! Two routes: a plain-text liveness check at `/` and the chat endpoint at
//! `/chat`. A chat request moves through a fixed sequence: validate the
//! message, attempt one completion, journal the exchange, respond. The
//! journal step runs after the completion attempt and before the response,
//! whatever the completion outcome was.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use llm::CompletionClient;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, error, info};

use crate::conversation::Message;
use crate::error::{ApiError, FALLBACK_REPLY};
use crate::journal::{Interaction, Journal};
use crate::persona::Persona;

/// State shared across HTTP handlers.
///
/// Everything here is built once at startup and read-only afterwards;
/// requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
    pub persona: Arc<Persona>,
    pub journal: Arc<Journal>,
    pub model: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub history: Vec<Message>,
}

/// Liveness probe.
pub async fn index() -> &'static str {
    info!("index requested");
    "Persona chat backend is running."
}

/// Handle one chat exchange.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    // A body that is absent or not JSON counts the same as an explicit `{}`.
    let request: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();
    if request.message.is_empty() {
        return Err(ApiError::EmptyMessage);
    }
    // The prompt and the journal both get the message exactly as sent.
    let message = request.message;

    debug!(chars = message.len(), "chat message received");
    let prompt = state.persona.full_prompt(&message);
    let (reply, detail) = match state.client.generate(&state.model, &prompt).await {
        Ok(text) => (text, None),
        Err(e) => {
            error!(error = %e, "completion request failed");
            (FALLBACK_REPLY.to_string(), Some(e.to_string()))
        }
    };

    state
        .journal
        .record(Interaction {
            question: &message,
            answer: &reply,
            error: detail.as_deref(),
        })
        .await;

    match detail {
        Some(detail) => Err(ApiError::Unavailable(detail)),
        None => Ok(Json(ChatResponse {
            reply,
            history: Vec::new(),
        })),
    }
}

/// Build the router with all routes and layers attached.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
