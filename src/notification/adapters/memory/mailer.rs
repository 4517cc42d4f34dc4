//! Recording mail transport for reminder tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::notification::{
    domain::EmailMessage,
    ports::{Mailer, MailerError, MailerResult},
};

/// Mail transport that records every sent message instead of delivering
/// it. Delivery failure can be injected to exercise retry paths.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<RwLock<Vec<EmailMessage>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingMailer {
    /// Creates a mailer that accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent sends fail (or succeed again) with a transport
    /// error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns a snapshot of every accepted message.
    ///
    /// # Errors
    /// Returns a transport error when the interior lock is poisoned.
    pub fn sent(&self) -> MailerResult<Vec<EmailMessage>> {
        let sent = self.sent.read().map_err(lock_error)?;
        Ok(sent.clone())
    }
}

fn lock_error(err: impl ToString) -> MailerError {
    MailerError::transport(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> MailerResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailerError::transport(std::io::Error::other(
                "injected delivery failure",
            )));
        }
        let mut sent = self.sent.write().map_err(lock_error)?;
        sent.push(message.clone());
        Ok(())
    }
}
