pub mod gemini;
mod prompt_builder;
mod prompts;

use crate::error::RemoteFailure;

/// Trait for talking to a remote text-generation backend.
pub trait TextGenerator: Send + Sync {
    /// Ask for commit messages for `diff`; returns the raw generated text.
    fn request(&self, diff: &str) -> Result<String, RemoteFailure>;
}

/// Truncate long strings for debug logging.
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut cut = max_len;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    let dropped = s[cut..].chars().count();
    format!("{}...\n[truncated {} chars]", &s[..cut], dropped)
}
