//! Failure taxonomy for the generation pipeline.
//!
//! None of these reach the caller of `Generator::generate`; they only decide
//! what gets logged before the heuristic fallback takes over.

use thiserror::Error;

/// Why a call to the remote text-generation service produced nothing usable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteFailure {
    #[error("network error: {0}")]
    Network(String),

    #[error("remote service rejected the credential (HTTP 403)")]
    Forbidden,

    #[error("remote service rate limit exceeded (HTTP 429)")]
    RateLimited,

    #[error("remote service returned HTTP {0}")]
    Other(u16),

    #[error("remote service returned no generated text")]
    EmptyPayload,
}

impl RemoteFailure {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => RemoteFailure::Forbidden,
            429 => RemoteFailure::RateLimited,
            other => RemoteFailure::Other(other),
        }
    }
}

/// Why generated text could not be turned into suggestions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("generated text contained no usable lines")]
    NoUsableLines,
}

/// Anything that sends the orchestrator down the fallback path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineFailure {
    #[error(transparent)]
    Remote(#[from] RemoteFailure),

    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_statuses() {
        assert_eq!(RemoteFailure::from_status(403), RemoteFailure::Forbidden);
        assert_eq!(RemoteFailure::from_status(429), RemoteFailure::RateLimited);
        assert_eq!(RemoteFailure::from_status(500), RemoteFailure::Other(500));
        assert_eq!(RemoteFailure::from_status(401), RemoteFailure::Other(401));
    }

    #[test]
    fn pipeline_failure_wraps_both_sides() {
        let remote: PipelineFailure = RemoteFailure::RateLimited.into();
        let parse: PipelineFailure = ParseFailure::NoUsableLines.into();
        assert_eq!(remote.to_string(), "remote service rate limit exceeded (HTTP 429)");
        assert_eq!(parse.to_string(), "generated text contained no usable lines");
    }
}
