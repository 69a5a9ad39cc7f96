//! One-shot probe: list the generation models visible to the configured key.
//!
//! Prints the model names matching the probe families, or the literal HTTP
//! status and response body when the listing fails. Exits nonzero on any
//! failure; nothing is retried or persisted.

use diagnostics::{filter_probe_models, GenLangClient, GenLangConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

async fn run() -> anyhow::Result<()> {
    let config = GenLangConfig::from_env()?;
    let client = GenLangClient::new(config)?;

    let models = client.list_models().await?;
    let names: Vec<String> = models.into_iter().map(|m| m.name).collect();
    let candidates = filter_probe_models(&names);

    if candidates.is_empty() {
        println!("No gemini-1.5 or gemini-pro models visible to this key.");
    } else {
        println!("Generation models available:");
        for name in candidates {
            println!("  {name}");
        }
    }

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
            println!("Model listing failed: {e}");
            ExitCode::FAILURE
        }
    }
}
