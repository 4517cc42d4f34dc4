//! Outbound mail transport port.

use crate::notification::domain::EmailMessage;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for mail transport operations.
pub type MailerResult<T> = Result<T, MailerError>;

/// Outbound mail transport contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers the message to its recipient.
    async fn send(&self, message: &EmailMessage) -> MailerResult<()>;
}

/// Errors returned by mail transport implementations.
#[derive(Debug, Clone, Error)]
pub enum MailerError {
    /// Delivery failed; the send may be retried on a later run.
    #[error("mail delivery failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl MailerError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
