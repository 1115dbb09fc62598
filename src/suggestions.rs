use std::fmt;

/// Number of commit messages every generation produces.
pub const SUGGESTION_COUNT: usize = 3;

/// Exactly three non-empty commit messages, in the order they were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSuggestions([String; SUGGESTION_COUNT]);

impl CommitSuggestions {
    /// Take the first three non-blank candidates and fill any gap with `pad`.
    ///
    /// `pad` must itself be non-blank; every caller passes a constant.
    pub(crate) fn padded<I>(candidates: I, pad: &str) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut usable = candidates.into_iter().filter(|m| !m.trim().is_empty());
        let mut next = || usable.next().unwrap_or_else(|| pad.to_string());

        CommitSuggestions([next(), next(), next()])
    }

    pub(crate) fn from_static(messages: [&str; SUGGESTION_COUNT]) -> Self {
        CommitSuggestions(messages.map(str::to_string))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// 1-based lookup, matching how suggestions are numbered for users.
    pub fn get(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.0.get(idx))
            .map(String::as_str)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a CommitSuggestions {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One message per line.
impl fmt::Display for CommitSuggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}
