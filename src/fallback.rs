//! Offline commit messages derived from plain substring checks on the diff.
//!
//! The checks look at the whole diff text, context lines and headers included,
//! so they misfire on occasion. That is accepted; this is a last resort, not
//! diff analysis.

use crate::suggestions::CommitSuggestions;

/// Filler used when fewer than three heuristics fire.
pub const GENERIC_PAD: &str = "chore: update codebase";

/// One row of the heuristic table.
pub struct Heuristic {
    pub name: &'static str,
    pub applies: fn(&str) -> bool,
    pub message: &'static str,
}

/// Checked top to bottom; each row contributes at most one message.
pub const HEURISTICS: &[Heuristic] = &[
    Heuristic {
        name: "new-code",
        applies: adds_code,
        message: "feat: add new functionality",
    },
    Heuristic {
        name: "modified-code",
        applies: |diff| diff.contains('+') && diff.contains('-'),
        message: "fix: update implementation",
    },
    Heuristic {
        name: "tests",
        applies: |diff| contains_any(diff, &["test", "spec"]),
        message: "test: add or update tests",
    },
    Heuristic {
        name: "docs",
        applies: |diff| contains_any(diff, &["README", ".md"]),
        message: "docs: update documentation",
    },
    Heuristic {
        name: "dependencies",
        applies: |diff| contains_any(diff, &["package.json", "dependencies"]),
        message: "deps: update dependencies",
    },
];

fn adds_code(diff: &str) -> bool {
    diff.contains('+') && contains_any(diff, &["function", "const ", "class "])
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Derive three messages from the diff. Never fails.
pub fn derive(diff: &str) -> CommitSuggestions {
    let fired = HEURISTICS.iter().filter(|h| (h.applies)(diff));

    let names: Vec<&str> = fired.clone().map(|h| h.name).collect();
    log::debug!("Fallback heuristics matched: {names:?}");

    CommitSuggestions::padded(fired.map(|h| h.message.to_string()), GENERIC_PAD)
}
