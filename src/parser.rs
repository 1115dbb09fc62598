use crate::error::ParseFailure;
use crate::suggestions::CommitSuggestions;

/// Filler used when the model returns fewer than three usable lines.
pub const GENERIC_PAD: &str = "feat: update codebase based on diff";

/// Turn raw generated text into exactly three commit messages.
///
/// Lines are trimmed and blank ones dropped; the first three survivors are
/// kept in order and any shortfall is padded with [`GENERIC_PAD`].
pub fn normalize(raw: &str) -> Result<CommitSuggestions, ParseFailure> {
    let lines: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err(ParseFailure::NoUsableLines);
    }

    Ok(CommitSuggestions::padded(lines, GENERIC_PAD))
}
