//! Prints the generation models available to the configured API key.

use anyhow::Context;
use clap::Parser;
use llm::GeminiClient;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// API key for the completion service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL of the completion API
    #[arg(long, env = "GEMINI_BASE_URL", default_value = llm::DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let client = GeminiClient::with_base_url(cli.api_key, cli.base_url);
    let models = client
        .list_models()
        .await
        .context("failed to list models")?;

    println!("\nAvailable models for your API key:\n");
    for model in &models {
        println!("- {}", model.name);
    }
    Ok(())
}
