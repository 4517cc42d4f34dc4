//! In-memory notification adapters for tests and examples.

mod mailer;
mod repository;

pub use mailer::RecordingMailer;
pub use repository::InMemoryNotificationRepository;
