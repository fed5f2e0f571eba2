//! Backend for a personal-site "ask me about my resume" chat widget.
//!
//! The service answers as the person described in a profile document. Each
//! request is one completion call: the fixed system prompt plus the visitor's
//! question goes to the generation API, the generated text comes back as
//! JSON. Exchanges are journaled to an optional form webhook on a
//! best-effort basis. There is no conversation state between requests.

pub mod conversation;
pub mod error;
pub mod journal;
pub mod persona;
pub mod web;

pub use conversation::{Message, Role};
pub use error::{ApiError, FALLBACK_REPLY};
pub use journal::{FieldMap, Interaction, Journal};
pub use persona::Persona;
pub use web::{app, AppState, ChatRequest, ChatResponse};
