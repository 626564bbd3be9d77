pub mod generator;
pub mod prompt;
pub mod session;

pub use crate::domain::model::{ChatMessage, ChatRequest, CompanyProfile};
pub use crate::domain::ports::{CompletionClient, ConfigProvider, Terminal};
pub use crate::utils::error::Result;
