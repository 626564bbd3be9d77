use crate::domain::model::ChatRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The input/output handle a session asks its questions through.
pub trait Terminal {
    fn ask(&mut self, question: &str) -> Result<String>;
    fn say(&mut self, line: &str) -> Result<()>;
    /// Releases the handle. Calling it more than once has no effect.
    fn close(&mut self);
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one chat request and returns the first choice's content.
    async fn complete(&self, request: &ChatRequest) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
