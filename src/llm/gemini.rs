use super::{TextGenerator, prompt_builder, truncate};
use crate::error::RemoteFailure;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const MAX_OUTPUT_TOKENS: u32 = 150;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 40;

const CHECK_MAX_OUTPUT_TOKENS: u32 = 50;
const CHECK_TEMPERATURE: f32 = 0.1;

/// Minimal request/response structs for the Gemini generateContent API.
#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
}

impl GenerationConfig {
    fn commit_suggestions() -> Self {
        GenerationConfig {
            max_output_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
            top_p: Some(TOP_P),
            top_k: Some(TOP_K),
        }
    }

    fn connection_check() -> Self {
        GenerationConfig {
            max_output_tokens: CHECK_MAX_OUTPUT_TOKENS,
            temperature: CHECK_TEMPERATURE,
            top_p: None,
            top_k: None,
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub timeout: Duration,
}

/// Gemini-based implementation of TextGenerator.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base_url: String,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(GeminiClient {
            client,
            api_key: settings.api_key,
            model: settings.model,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base_url, self.model)
    }

    /// Send a short fixed prompt and return whatever the model answers.
    pub fn check_connection(&self) -> Result<String, RemoteFailure> {
        log::info!("Testing Gemini connection with model {:?}", self.model);
        self.call(
            prompt_builder::connection_check_prompt(),
            GenerationConfig::connection_check(),
        )
    }

    fn call(&self, prompt: String, generation_config: GenerationConfig) -> Result<String, RemoteFailure> {
        let req = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
            }],
            generation_config,
        };

        log::info!("Calling Gemini model {:?}", self.model);

        let resp = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&req)
            .send()
            .map_err(network_failure)?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            log::debug!("Gemini error body: {}", truncate(&text, 2000));
            return Err(RemoteFailure::from_status(status.as_u16()));
        }

        let body = resp.text().map_err(network_failure)?;
        log::debug!("Gemini raw response: {}", truncate(&body, 4000));

        extract_text(&body)
    }
}

impl TextGenerator for GeminiClient {
    fn request(&self, diff: &str) -> Result<String, RemoteFailure> {
        let prompt = prompt_builder::commit_suggestions_prompt(diff);

        log::trace!("Commit suggestions prompt:\n{}", truncate(&prompt, 3000));

        self.call(prompt, GenerationConfig::commit_suggestions())
    }
}

fn network_failure(err: reqwest::Error) -> RemoteFailure {
    if err.is_timeout() {
        RemoteFailure::Network(format!("request timed out: {err}"))
    } else {
        RemoteFailure::Network(err.to_string())
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
fn extract_text(body: &str) -> Result<String, RemoteFailure> {
    let parsed: GenerateResponse = serde_json::from_str(body).map_err(|e| {
        log::warn!("Gemini response was not the expected JSON: {e}");
        RemoteFailure::EmptyPayload
    })?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.is_empty())
        .ok_or(RemoteFailure::EmptyPayload)
}
