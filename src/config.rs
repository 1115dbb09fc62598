use crate::cli_args::Cli;
use crate::llm::gemini::{DEFAULT_API_BASE_URL, DEFAULT_MODEL};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Final resolved configuration for commitgen.
#[derive(Debug, Clone)]
pub struct Config {
    pub mock: bool,
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--mock`, `--api-key`, `--model`, `--timeout`)
    ///   2. Env vars `AI_MODE`, `GEMINI_API_KEY`, `COMMITGEN_MODEL`, `COMMITGEN_API_BASE`
    ///   3. TOML `~/.config/commitgen.toml`
    ///   4. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();

        let cli_cfg = Settings {
            mode: cli.mock.then(|| "mock".to_string()),
            gemini_api_key: cli.api_key.clone(),
            model: cli.model.clone(),
            api_base_url: None,
            timeout_secs: cli.timeout,
        };

        let env_cfg = Settings {
            mode: env_var("AI_MODE"),
            gemini_api_key: env_var("GEMINI_API_KEY"),
            model: env_var("COMMITGEN_MODEL"),
            api_base_url: env_var("COMMITGEN_API_BASE"),
            timeout_secs: None,
        };

        Config::from_settings(cli_cfg.or(env_cfg).or(file_cfg))
    }

    /// Apply defaults and normalize one merged layer of settings.
    pub fn from_settings(settings: Settings) -> Self {
        let mock = settings.mode.as_deref().is_some_and(is_mock_mode);

        let api_key = settings
            .gemini_api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let model = settings
            .model
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base_url = settings
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = settings
            .timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Config {
            mock,
            api_key,
            model,
            api_base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// One layer of optional settings; also the shape of the TOML file.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Settings {
    /// `mock` forces mock suggestions; anything else is ignored.
    pub mode: Option<String>,
    pub gemini_api_key: Option<String>,
    pub model: Option<String>,
    pub api_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Fill every unset field from `fallback`.
    pub fn or(self, fallback: Settings) -> Settings {
        Settings {
            mode: self.mode.or(fallback.mode),
            gemini_api_key: self.gemini_api_key.or(fallback.gemini_api_key),
            model: self.model.or(fallback.model),
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            timeout_secs: self.timeout_secs.or(fallback.timeout_secs),
        }
    }
}

/// Unset and blank variables both count as absent.
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn is_mock_mode(value: &str) -> bool {
    let value = value.trim();
    if value.eq_ignore_ascii_case("mock") {
        return true;
    }
    if !value.is_empty() {
        log::warn!("Ignoring unknown AI mode {value:?}; only \"mock\" is recognized");
    }
    false
}

/// Return `~/.config/commitgen.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("commitgen.toml"))
}

fn load_file_config() -> Option<Settings> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path)
        .map_err(|e| log::warn!("Could not read {}: {e}", path.display()))
        .ok()?;
    parse_file_config(&data)
        .map_err(|e| log::warn!("Ignoring malformed {}: {e}", path.display()))
        .ok()
}

fn parse_file_config(data: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str::<Settings>(data)
}
