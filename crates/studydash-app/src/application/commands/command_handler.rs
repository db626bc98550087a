use async_trait::async_trait;

use studydash_domain::shared::DomainError;

/// Common shape for write-side handlers
#[async_trait]
pub trait CommandHandler<C>: Send + Sync {
    type Result;

    async fn handle(&self, cmd: C) -> Result<Self::Result, DomainError>;
}
