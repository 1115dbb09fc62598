//! Mode selection and the single public entry point of the pipeline.

use crate::config::Config;
use crate::error::{PipelineFailure, RemoteFailure};
use crate::fallback;
use crate::llm::TextGenerator;
use crate::parser;
use crate::setup::build_gemini_client;
use crate::suggestions::CommitSuggestions;

/// Returned in mock mode, whatever the diff.
pub const MOCK_MESSAGES: [&str; 3] = [
    "feat: mock commit message",
    "fix: mock commit message",
    "refactor: mock commit message",
];

/// Returned when no API key is configured.
pub const MISSING_CREDENTIAL_MESSAGES: [&str; 3] = [
    "feat: add missing API key configuration",
    "fix: configure Gemini API key in environment",
    "docs: update setup instructions for API key",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    Mock,
    MissingCredential,
    Live,
}

impl OperatingMode {
    pub fn from_config(cfg: &Config) -> Self {
        if cfg.mock {
            OperatingMode::Mock
        } else if cfg.api_key.is_none() {
            OperatingMode::MissingCredential
        } else {
            OperatingMode::Live
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingMode::Mock => "mock",
            OperatingMode::MissingCredential => "missing-credential",
            OperatingMode::Live => "live",
        }
    }
}

enum Backend {
    Mock,
    MissingCredential,
    Live(Box<dyn TextGenerator>),
}

/// Produces commit suggestions for a diff.
pub struct Generator {
    backend: Backend,
}

impl Generator {
    /// Build a generator for the mode `cfg` selects.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let backend = match OperatingMode::from_config(cfg) {
            OperatingMode::Mock => Backend::Mock,
            OperatingMode::MissingCredential => Backend::MissingCredential,
            OperatingMode::Live => match build_gemini_client(cfg)? {
                Some(client) => Backend::Live(Box::new(client)),
                None => Backend::MissingCredential,
            },
        };

        Ok(Generator { backend })
    }

    pub fn mock() -> Self {
        Generator { backend: Backend::Mock }
    }

    pub fn missing_credential() -> Self {
        Generator {
            backend: Backend::MissingCredential,
        }
    }

    /// Live mode against any backend.
    pub fn with_remote(remote: Box<dyn TextGenerator>) -> Self {
        Generator {
            backend: Backend::Live(remote),
        }
    }

    pub fn mode(&self) -> OperatingMode {
        match self.backend {
            Backend::Mock => OperatingMode::Mock,
            Backend::MissingCredential => OperatingMode::MissingCredential,
            Backend::Live(_) => OperatingMode::Live,
        }
    }

    /// Always returns three usable messages; remote trouble degrades to
    /// [`fallback::derive`].
    pub fn generate(&self, diff: &str) -> CommitSuggestions {
        log::info!("Operating mode: {}", self.mode().as_str());

        let remote = match &self.backend {
            Backend::Mock => return CommitSuggestions::from_static(MOCK_MESSAGES),
            Backend::MissingCredential => {
                log::warn!("GEMINI_API_KEY not set; returning setup reminders.");
                log::warn!("Get an API key from: https://aistudio.google.com/app/apikey");
                return CommitSuggestions::from_static(MISSING_CREDENTIAL_MESSAGES);
            }
            Backend::Live(remote) => remote,
        };

        match try_remote(remote.as_ref(), diff) {
            Ok(suggestions) => {
                log::debug!("Parsed commit messages: {:?}", suggestions.as_slice());
                suggestions
            }
            Err(failure) => {
                report(&failure);
                log::warn!("Falling back to heuristic commit messages.");
                fallback::derive(diff)
            }
        }
    }
}

fn try_remote(remote: &dyn TextGenerator, diff: &str) -> Result<CommitSuggestions, PipelineFailure> {
    let raw = remote.request(diff)?;
    Ok(parser::normalize(&raw)?)
}

fn report(failure: &PipelineFailure) {
    log::error!("Remote generation failed: {failure}");
    match failure {
        PipelineFailure::Remote(RemoteFailure::Forbidden) => {
            log::error!("API key may be invalid or lack permission for this model.");
        }
        PipelineFailure::Remote(RemoteFailure::RateLimited) => {
            log::error!("Rate limit exceeded; try again later.");
        }
        _ => {}
    }
}
