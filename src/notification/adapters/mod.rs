//! Notification adapter implementations.
//!
//! - [`memory::InMemoryNotificationRepository`] and
//!   [`memory::RecordingMailer`]: thread-safe in-memory doubles for testing
//! - [`postgres::PostgresNotificationRepository`]: `PostgreSQL` claims using
//!   Diesel ORM

pub mod memory;
pub mod postgres;
