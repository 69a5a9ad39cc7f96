//! One-shot probe: verify the API key with a single generation round trip.

use diagnostics::{GenLangClient, GenLangConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const MODEL: &str = "gemini-1.5-flash";

async fn run() -> anyhow::Result<()> {
    let config = GenLangConfig::from_env()?;
    let client = GenLangClient::new(config)?;

    let text = client.generate(MODEL, "Reply with the word: ready").await?;
    println!("Key accepted. {MODEL} replied: {}", text.trim());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Auth check failed: {e}");
            ExitCode::FAILURE
        }
    }
}
