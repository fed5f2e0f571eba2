//! Abstractions for the hosted text-generation API.
//!
//! The `llm` crate defines a [`CompletionClient`] trait along with the
//! concrete [`GeminiClient`] implementation. One call to
//! [`CompletionClient::generate`] is one atomic remote operation; the wire
//! types live in [`model`].

pub mod client;
pub mod model;
pub mod traits;

pub use client::{GeminiClient, DEFAULT_BASE_URL};
pub use model::{Content, GenerateContentRequest, GenerateContentResponse, ModelInfo, Part};
pub use traits::{CompletionClient, CompletionError};
