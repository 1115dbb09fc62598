//! commitgen - suggests conventional commit messages for a diff.
//!
//! The diff goes to Gemini; the reply is cut down to three messages. When the
//! model is unreachable, misconfigured, or says nothing useful, simple
//! substring heuristics on the diff produce the three messages instead.

pub mod cli_args;
pub mod config;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod git;
pub mod llm;
pub mod logging;
pub mod parser;
pub mod setup;
pub mod suggestions;

pub use config::Config;
pub use error::{ParseFailure, PipelineFailure, RemoteFailure};
pub use generator::{Generator, OperatingMode};
pub use suggestions::CommitSuggestions;
