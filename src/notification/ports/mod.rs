//! Port contracts for reminder notifications.

pub mod mailer;
pub mod repository;

pub use mailer::{Mailer, MailerError, MailerResult};
pub use repository::{
    NotificationRepository, NotificationRepositoryError, NotificationRepositoryResult,
};
