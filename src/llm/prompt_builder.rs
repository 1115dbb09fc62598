use crate::llm::prompts;

/// Instruction block for commit suggestions, with the diff embedded verbatim.
pub fn commit_suggestions_prompt(diff: &str) -> String {
    format!(
        "{instructions}\n\nDiff:\n{diff}\n\nExamples:\n{examples}",
        instructions = prompts::COMMIT_SUGGESTIONS,
        diff = diff,
        examples = prompts::EXAMPLES
    )
}

pub fn connection_check_prompt() -> String {
    prompts::CONNECTION_CHECK.to_owned()
}
