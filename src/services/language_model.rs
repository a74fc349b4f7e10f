use async_trait::async_trait;

use crate::domain::prompt::ChatPrompt;
use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// Sends one system + user exchange and returns the model's answer.
    async fn complete(&self, prompt: &ChatPrompt) -> AppResult<String>;
}
