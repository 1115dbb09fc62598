use crate::config::Config;
use crate::llm::gemini::{GeminiClient, GeminiSettings};
use anyhow::{Context, Result};
use log::debug;

/// Build the Gemini client, or `None` when no API key is configured.
pub fn build_gemini_client(cfg: &Config) -> Result<Option<GeminiClient>> {
    let Some(key) = cfg.api_key.clone() else {
        return Ok(None);
    };

    debug!(
        "Using GeminiClient with model {} at {} (timeout {:?})",
        cfg.model, cfg.api_base_url, cfg.timeout
    );

    let client = GeminiClient::new(GeminiSettings {
        api_key: key,
        model: cfg.model.clone(),
        api_base_url: cfg.api_base_url.clone(),
        timeout: cfg.timeout,
    })
    .context("failed to build HTTP client")?;

    Ok(Some(client))
}
