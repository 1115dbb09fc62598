pub const COMMIT_SUGGESTIONS: &str = "Generate 3 different concise git commit messages for the following diff. \
Follow conventional commit format (type: description). \
Return only the commit messages, one per line.";

pub const EXAMPLES: &str = r#"feat: add user authentication
fix: resolve memory leak in parser
refactor: extract validation logic"#;

pub const CONNECTION_CHECK: &str =
    "Hello, this is a test message. Please respond with 'Connection successful!'";
