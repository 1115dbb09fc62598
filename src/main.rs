use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Duration;

use commitgen::cli_args::{Cli, Command};
use commitgen::setup::build_gemini_client;
use commitgen::{git, logging, CommitSuggestions, Config, Generator, OperatingMode};

/// Read the diff from `--diff-file` (or stdin for '-'), else the staged diff.
fn load_diff(diff_file: Option<&Path>) -> Result<String> {
    match diff_file {
        Some(path) if path == Path::new("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read diff from stdin")?;
            Ok(buf)
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read diff from {:?}", path)),
        None => git::staged_diff(),
    }
}

fn generate_with_spinner(generator: &Generator, diff: &str) -> CommitSuggestions {
    if generator.mode() != OperatingMode::Live {
        return generator.generate(diff);
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Generating commit messages...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let suggestions = generator.generate(diff);
    spinner.finish_and_clear();
    suggestions
}

/// Default mode: suggest messages for the diff and optionally apply one.
fn run_generate(cli: &Cli, cfg: &Config) -> Result<()> {
    let diff = load_diff(cli.diff_file.as_deref())?;

    if diff.trim().is_empty() {
        println!("No staged changes found.");
        return Ok(());
    }

    let generator = Generator::from_config(cfg)?;
    let suggestions = generate_with_spinner(&generator, &diff);

    println!("{}", "Suggested commit messages:".bold());
    for (idx, message) in suggestions.iter().enumerate() {
        println!("{}. {}", idx + 1, message);
    }

    if let Some(n) = cli.apply {
        let message = suggestions
            .get(usize::from(n))
            .ok_or_else(|| anyhow!("no suggestion number {n}"))?;
        git::write_commit_editmsg(message)?;
        println!();
        println!("Wrote suggestion {n} to COMMIT_EDITMSG.");
    }

    Ok(())
}

/// `check`: verify the API key and model with a short prompt.
fn run_check(cfg: &Config) -> Result<()> {
    let Some(client) = build_gemini_client(cfg)? else {
        bail!(
            "GEMINI_API_KEY (or --api-key) is not set. \
             Get an API key from: https://aistudio.google.com/app/apikey"
        );
    };

    let reply = client
        .check_connection()
        .with_context(|| format!("Gemini connection check failed for model {}", cfg.model))?;

    println!("{} Gemini API connection successful!", "OK".green().bold());
    println!("Response: {}", reply.trim());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let cfg = Config::from_sources(&cli);
    log::info!(
        "GEMINI_API_KEY: {}",
        if cfg.api_key.is_some() { "set" } else { "not set" }
    );

    match &cli.command {
        Some(Command::Check) => run_check(&cfg),
        None => run_generate(&cli, &cfg),
    }
}
