use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use llm::GeminiClient;
use persona_server::{app, AppState, FieldMap, Journal, Persona};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:5001")]
    addr: String,

    /// Path to the profile document injected into every prompt
    #[arg(long, env = "PROFILE_PATH", default_value = "profile.txt")]
    profile: PathBuf,

    /// API key for the completion service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Model used for every completion
    #[arg(long, env = "GEMINI_MODEL", default_value = "models/gemini-2.5-flash")]
    model: String,

    /// Base URL of the completion API
    #[arg(long, env = "GEMINI_BASE_URL", default_value = llm::DEFAULT_BASE_URL)]
    base_url: String,

    /// Webhook receiving interaction logs; journaling is off when unset
    #[arg(long, env = "WEBHOOK_URL")]
    webhook_url: Option<String>,

    /// Webhook form field holding the question
    #[arg(long, env = "WEBHOOK_FIELD_QUESTION", default_value = "question")]
    field_question: String,

    /// Webhook form field holding the answer
    #[arg(long, env = "WEBHOOK_FIELD_ANSWER", default_value = "answer")]
    field_answer: String,

    /// Webhook form field holding the timestamp
    #[arg(long, env = "WEBHOOK_FIELD_TIMESTAMP", default_value = "timestamp")]
    field_timestamp: String,

    /// Webhook form field holding the error detail
    #[arg(long, env = "WEBHOOK_FIELD_ERROR", default_value = "error")]
    field_error: String,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let persona = Persona::load(&cli.profile)?;
    info!(path = %cli.profile.display(), chars = persona.profile().len(), "profile loaded");
    let client = GeminiClient::with_base_url(cli.api_key, cli.base_url);
    let journal = Journal::new(
        cli.webhook_url,
        FieldMap {
            question: cli.field_question,
            answer: cli.field_answer,
            timestamp: cli.field_timestamp,
            error: cli.field_error,
        },
    );
    if !journal.enabled() {
        info!("no webhook configured; interaction journaling disabled");
    }

    let state = AppState {
        client: Arc::new(client),
        persona: Arc::new(persona),
        journal: Arc::new(journal),
        model: cli.model,
    };
    let app = app(state);

    let addr: SocketAddr = cli.addr.parse().context("invalid bind address")?;
    info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
