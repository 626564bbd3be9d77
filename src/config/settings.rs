use crate::adapters::openai::DEFAULT_BASE_URL;
use crate::config::{CliConfig, TomlConfig};
use crate::core::prompt::DEFAULT_MODEL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_url, Validate,
};
use std::env;
use std::fmt;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Values taken from the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        let read = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            api_key: read(API_KEY_ENV),
            base_url: read(BASE_URL_ENV),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_seconds: u64,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl Settings {
    /// Loads the optional settings file named on the command line, then resolves.
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };
        Self::from_sources(file.as_ref(), &EnvOverrides::from_env(), cli)
    }

    /// Precedence: default < file < environment < command line.
    pub fn from_sources(
        file: Option<&TomlConfig>,
        env: &EnvOverrides,
        cli: &CliConfig,
    ) -> Result<Self> {
        let api = file.map(|f| &f.api);

        let api_key = cli
            .api_key
            .clone()
            .or_else(|| env.api_key.clone())
            .or_else(|| file.and_then(|f| f.api_key()).map(str::to_string));
        let api_key = validate_required_field("api_key", &api_key)?.clone();

        let base_url = cli
            .base_url
            .clone()
            .or_else(|| env.base_url.clone())
            .or_else(|| api.and_then(|a| a.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = cli
            .model
            .clone()
            .or_else(|| api.and_then(|a| a.model.clone()))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let timeout_seconds = cli
            .timeout_seconds
            .or_else(|| api.and_then(|a| a.timeout_seconds))
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        let settings = Self {
            api_key,
            base_url,
            model,
            timeout_seconds,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key, true)?;
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("model", &self.model, false)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}
