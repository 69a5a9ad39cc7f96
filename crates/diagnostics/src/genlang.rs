//! Generative-language API client
//!
//! Wraps the two endpoints the diagnostic binaries exercise: the
//! models-listing query and the per-model content-generation call. The API
//! key rides as a query parameter on every request. Response JSON is
//! deserialized into explicit record types; a response that lacks the
//! expected shape is a distinct [`GenLangError::MalformedResponse`], never a
//! silent default.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable the API key is read from
pub const API_KEY_ENV: &str = "GENLANG_API_KEY";

/// Substrings a model name must contain to count as a probe candidate
const PROBE_NAME_MARKERS: [&str; 2] = ["gemini-1.5", "gemini-pro"];

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur during API probes
#[derive(Debug, Error)]
pub enum GenLangError {
    /// Network/transport error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response, carrying the literal status and raw body
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// API key environment variable not set
    #[error("API key not set - export {0}")]
    MissingApiKey(&'static str),
}

/// Result type for probe operations
pub type Result<T> = std::result::Result<T, GenLangError>;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for [`GenLangClient`]
#[derive(Debug, Clone)]
pub struct GenLangConfig {
    /// API base URL
    pub base_url: String,
    /// API key, sent as a query parameter
    pub api_key: String,
    /// Request timeout
    pub timeout: Duration,
}

impl GenLangConfig {
    /// Create a configuration with the default base URL
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Read the API key from the environment
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| GenLangError::MissingApiKey(API_KEY_ENV))?;
        Ok(Self::new(api_key))
    }

    /// Override the base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// One model in the listing response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Fully qualified model name (e.g., "models/gemini-1.5-flash")
    pub name: String,
    /// Human-readable name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Generation methods the model supports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_generation_methods: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    models: Vec<ModelInfo>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<ResponseCandidate>>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Read the generated text from `candidates[0].content.parts[0].text`,
    /// naming the missing step when the path is absent
    fn first_text(self) -> Result<String> {
        let missing = |what: &str| GenLangError::MalformedResponse(format!("missing {}", what));

        self.candidates
            .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
            .ok_or_else(|| missing("candidates[0]"))?
            .content
            .ok_or_else(|| missing("candidates[0].content"))?
            .parts
            .and_then(|mut p| if p.is_empty() { None } else { Some(p.remove(0)) })
            .ok_or_else(|| missing("candidates[0].content.parts[0]"))?
            .text
            .ok_or_else(|| missing("candidates[0].content.parts[0].text"))
    }
}

// =============================================================================
// Client
// =============================================================================

/// Client for the generative-language API
#[derive(Debug, Clone)]
pub struct GenLangClient {
    config: GenLangConfig,
    http: reqwest::Client,
}

impl GenLangClient {
    /// Create a new client
    pub fn new(config: GenLangConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("Summit-Prep-Diagnostics/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, http })
    }

    /// List the models visible to the configured key
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = format!("{}/v1beta/models", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenLangError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let list: ModelList = serde_json::from_str(&body)
            .map_err(|e| GenLangError::MalformedResponse(format!("model list: {}", e)))?;

        Ok(list.models)
    }

    /// Generate content with one model and return the generated text
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, model
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GenLangError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| GenLangError::MalformedResponse(format!("generate response: {}", e)))?;

        parsed.first_text()
    }

    /// Try each model in list order, stopping at the first success
    ///
    /// Exactly one `generate` call per attempted model; models after the
    /// first success are never called. This loop is the only "retry" the
    /// diagnostics perform.
    pub async fn probe_first_available(&self, models: &[&str], prompt: &str) -> ProbeReport {
        let mut attempts = Vec::new();

        for model in models {
            tracing::debug!(model, "probing");
            let result = self.generate(model, prompt).await;
            let succeeded = result.is_ok();
            attempts.push(ProbeAttempt {
                model: model.to_string(),
                result,
            });
            if succeeded {
                break;
            }
        }

        ProbeReport { attempts }
    }
}

// =============================================================================
// Probe Reporting
// =============================================================================

/// One attempted model in a probe run
#[derive(Debug)]
pub struct ProbeAttempt {
    /// Model name attempted
    pub model: String,
    /// Outcome: generated text or the failure
    pub result: Result<String>,
}

/// The outcome of a first-success probe run
#[derive(Debug)]
pub struct ProbeReport {
    /// Every attempt made, in order
    pub attempts: Vec<ProbeAttempt>,
}

impl ProbeReport {
    /// The successful attempt, if any (always the last one)
    pub fn succeeded(&self) -> Option<&ProbeAttempt> {
        self.attempts.last().filter(|a| a.result.is_ok())
    }
}

/// Keep only the model names worth probing
///
/// The availability check cares about the "gemini-1.5" family and the legacy
/// "gemini-pro" names; everything else in the listing is noise.
pub fn filter_probe_models<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| PROBE_NAME_MARKERS.iter().any(|marker| n.contains(marker)))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> GenLangClient {
        GenLangClient::new(GenLangConfig::new("test-key").base_url(server.uri())).unwrap()
    }

    #[test]
    fn test_filter_probe_models() {
        let names = vec![
            "models/gemini-1.5-flash",
            "models/gemini-1.5-pro",
            "models/gemini-pro",
            "models/embedding-001",
            "models/aqa",
        ];
        let filtered = filter_probe_models(&names);
        assert_eq!(
            filtered,
            vec![
                "models/gemini-1.5-flash",
                "models/gemini-1.5-pro",
                "models/gemini-pro",
            ]
        );
    }

    #[test]
    fn test_filter_probe_models_empty() {
        let names: Vec<&str> = vec!["models/embedding-001"];
        assert!(filter_probe_models(&names).is_empty());
    }

    #[tokio::test]
    async fn test_list_models_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "models": [
                    {"name": "models/gemini-1.5-flash", "displayName": "Gemini 1.5 Flash"},
                    {"name": "models/embedding-001"}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let models = client.list_models().await.unwrap();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name, "models/gemini-1.5-flash");
        assert_eq!(models[0].display_name.as_deref(), Some("Gemini 1.5 Flash"));
    }

    #[tokio::test]
    async fn test_list_models_http_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_string(r#"{"error": {"message": "API key not valid"}}"#),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.list_models().await.unwrap_err();

        match err {
            GenLangError::Http { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("API key not valid"));
            }
            other => panic!("expected Http error, got {other:?}"),
        }

        // The printed form contains the literal status code and the raw body
        let display = client.list_models().await.unwrap_err().to_string();
        assert!(display.contains("403"));
        assert!(display.contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_generate_reads_nested_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{"parts": [{"text": "Say hello"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [
                    {"content": {"parts": [{"text": "Hello there!"}]}}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let text = client.generate("gemini-pro", "Say hello").await.unwrap();
        assert_eq!(text, "Hello there!");
    }

    #[tokio::test]
    async fn test_generate_missing_candidates_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "promptFeedback": {"blockReason": "SAFETY"}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.generate("gemini-pro", "prompt").await.unwrap_err();

        match err {
            GenLangError::MalformedResponse(msg) => assert!(msg.contains("candidates[0]")),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_empty_parts_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": []}}]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.generate("gemini-pro", "prompt").await.unwrap_err();
        assert!(matches!(err, GenLangError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_probe_stops_at_first_success() {
        let server = MockServer::start().await;

        // First two models fail, the third succeeds
        for model in ["gemini-1.5-flash", "gemini-1.5-pro"] {
            Mock::given(method("POST"))
                .and(path(format!("/v1beta/models/{model}:generateContent")))
                .respond_with(
                    ResponseTemplate::new(404)
                        .set_body_string(r#"{"error": {"message": "not found"}}"#),
                )
                .expect(1)
                .mount(&server)
                .await;
        }
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        // A model after the success must never be called
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-ultra:generateContent"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let report = client
            .probe_first_available(
                &["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro", "gemini-ultra"],
                "Say hello",
            )
            .await;

        assert_eq!(report.attempts.len(), 3);
        assert!(report.attempts[0].result.is_err());
        assert!(report.attempts[1].result.is_err());

        let success = report.succeeded().unwrap();
        assert_eq!(success.model, "gemini-pro");
        assert_eq!(success.result.as_deref().unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_probe_all_fail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let report = client
            .probe_first_available(&["gemini-pro", "gemini-1.5-pro"], "prompt")
            .await;

        assert_eq!(report.attempts.len(), 2);
        assert!(report.succeeded().is_none());
    }

    #[test]
    fn test_config_from_env_missing_key() {
        // The variable is cleared in this process unless a caller set it
        std::env::remove_var(API_KEY_ENV);
        match GenLangConfig::from_env().unwrap_err() {
            GenLangError::MissingApiKey(var) => assert_eq!(var, API_KEY_ENV),
            other => panic!("expected MissingApiKey, got {other:?}"),
        }
    }
}
