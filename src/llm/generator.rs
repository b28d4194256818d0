//! Answer generation contract
//!
//! Single-turn chat completion: one system message establishing the
//! persona, one user message carrying context + question. No streaming, no
//! history. Tests substitute deterministic fakes.

use async_trait::async_trait;

use crate::errors::Result;

/// One completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_message: String,
    pub user_message: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Text completion service
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Generate the completion text for a single-turn request
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
