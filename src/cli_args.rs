use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "commitgen",
    version,
    about = "Suggests conventional commit messages for your staged changes"
)]
pub struct Cli {
    /// Return fixed mock suggestions without calling the model
    #[arg(long, global = true)]
    pub mock: bool,

    /// Gemini model name (e.g. gemini-1.5-flash)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// API key (otherwise uses GEMINI_API_KEY env var)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Seconds to wait for the model before falling back
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..), global = true)]
    pub timeout: Option<u64>,

    /// Read the diff from a file ('-' for stdin) instead of `git diff --cached`
    #[arg(long, value_name = "PATH")]
    pub diff_file: Option<PathBuf>,

    /// Write suggestion N into .git/COMMIT_EDITMSG (no commit is created)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub apply: Option<u8>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand (e.g. 'check')
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands, e.g. `commitgen check`
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a short test prompt to verify the API key and model
    Check,
}
