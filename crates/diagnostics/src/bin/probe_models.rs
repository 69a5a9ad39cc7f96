//! One-shot probe: find the first working generation model.
//!
//! Tries a fixed candidate list in order and stops at the first model that
//! returns generated text. Every attempt is reported; failures are printed,
//! never recovered.

use diagnostics::{GenLangClient, GenLangConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Candidate models, most preferred first
const CANDIDATE_MODELS: [&str; 3] = ["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"];

const PROMPT: &str = "Reply with a single short greeting.";

async fn run() -> anyhow::Result<bool> {
    let config = GenLangConfig::from_env()?;
    let client = GenLangClient::new(config)?;

    println!("Probing {} candidate models...", CANDIDATE_MODELS.len());
    let report = client.probe_first_available(&CANDIDATE_MODELS, PROMPT).await;

    for attempt in &report.attempts {
        match &attempt.result {
            Ok(text) => println!("  [ok]   {} -> {}", attempt.model, text.trim()),
            Err(e) => println!("  [fail] {} -> {}", attempt.model, e),
        }
    }

    match report.succeeded() {
        Some(attempt) => {
            println!("Working model: {}", attempt.model);
            Ok(true)
        }
        None => {
            println!("No candidate model responded successfully.");
            Ok(false)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            println!("Probe failed: {e}");
            ExitCode::FAILURE
        }
    }
}
