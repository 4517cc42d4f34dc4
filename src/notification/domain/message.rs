//! Outbound email messages handed to the mail transport.

use crate::board::domain::EmailAddress;

/// A rendered reminder email ready for the mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    recipient: EmailAddress,
    subject: String,
    html_body: String,
}

impl EmailMessage {
    /// Creates a message addressed to `recipient`.
    #[must_use]
    pub fn new(
        recipient: EmailAddress,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            recipient,
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }

    /// Returns the recipient address.
    #[must_use]
    pub const fn recipient(&self) -> &EmailAddress {
        &self.recipient
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the rendered HTML body.
    #[must_use]
    pub fn html_body(&self) -> &str {
        &self.html_body
    }
}
