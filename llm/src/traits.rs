use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a completion request.
///
/// Every way the generation API can let us down collapses into one of
/// these variants. The raw detail stays inside the error; callers decide
/// what, if anything, the end user gets to see.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The API answered with a non-success status, e.g. quota exhaustion.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
    /// A well-formed response carried no usable text.
    #[error("response contained no text")]
    EmptyResponse,
}

/// A client that can turn a prompt into generated text.
///
/// One call is one atomic remote operation: no retries, no streaming. The
/// trait is the seam between request handling and the remote API, so
/// handlers can be exercised against stub implementations.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a completion for `prompt` using `model`.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, CompletionError>;
}
