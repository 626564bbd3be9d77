pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{ConsoleTerminal, OpenAiClient};
pub use config::{CliConfig, Settings};
pub use core::{generator::EmailGenerator, session::EmailSession};
pub use utils::error::{MailerError, Result};
