use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::{
    config::{PlannerConfig, REDACTED},
    error::{PlannerError, Result},
};

/// Anything that can turn a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
    client: Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        build_generate_url(&self.base_url, &self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| PlannerError::Config("GEMINI_API_KEY is not set".to_string()))?;

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&generate_request_body(prompt))
            .send()
            .await
            .map_err(|err| {
                // the URL carries the key
                let err = err.without_url();
                error!(target: "itinerary::provider", error = %err, "request to provider failed");
                PlannerError::Provider(format!("HTTP request failed: {err}"))
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|err| {
            PlannerError::Provider(format!("Failed to read response: {}", err.without_url()))
        })?;

        if !status.is_success() {
            let api_message = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|error| error.get("message"))
                        .and_then(|value| value.as_str())
                        .map(|s| s.to_string())
                })
                .unwrap_or(response_text);

            error!(
                target: "itinerary::provider",
                status = %status,
                message = %api_message,
                "provider returned an error status"
            );
            return Err(PlannerError::Provider(format!(
                "HTTP {} error: {}",
                status, api_message
            )));
        }

        let text = extract_candidate_text(&response_text)?;
        debug!(target: "itinerary::provider", chars = text.len(), "received model output");
        Ok(text)
    }
}

fn build_generate_url(base_url: &str, model: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    format!("{}/models/{}:generateContent", trimmed, model)
}

/// Request body carrying a single user text part.
pub fn generate_request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ]
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Pull `candidates[0].content.parts[0].text` out of a response envelope.
pub fn extract_candidate_text(body: &str) -> Result<String> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let envelope: GenerateContentResponse = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|err| {
            let path = err.path().to_string();
            let location = if path.is_empty() {
                "<root>".to_string()
            } else {
                path
            };
            PlannerError::Provider(format!(
                "failed to decode provider envelope at {}: {}",
                location,
                err.inner()
            ))
        })?;

    let candidate = envelope
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| PlannerError::Provider("response contained no candidates".to_string()))?;

    let content = candidate
        .content
        .ok_or_else(|| PlannerError::Provider("candidate has no content".to_string()))?;

    content
        .parts
        .into_iter()
        .next()
        .and_then(|part| part.text)
        .ok_or_else(|| PlannerError::Provider("candidate content has no text part".to_string()))
}
