//! Transport abstraction for chat calls

use async_trait::async_trait;

use crate::{ChatRequest, ChatResponse, Result};

/// Something that can deliver a chat request and return the reply.
///
/// Implementations are responsible for enforcing a finite timeout and
/// reporting it as [`Error::Timeout`](crate::Error::Timeout), distinct from
/// connection failures and HTTP status failures.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one chat turn
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse>;
}
