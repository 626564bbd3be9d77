pub mod settings;
pub mod toml_config;

use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

pub use settings::{EnvOverrides, Settings};
pub use toml_config::TomlConfig;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "ceo-mailer")]
#[command(about = "Draft an investment outreach email to a company's CEO")]
pub struct CliConfig {
    /// Path to an optional TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API key (defaults to $OPENAI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Base URL of the chat completion API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
