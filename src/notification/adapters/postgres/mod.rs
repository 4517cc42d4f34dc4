//! `PostgreSQL` adapter for sent-notification records.

mod models;
mod repository;
mod schema;

pub use repository::{NotificationPgPool, PostgresNotificationRepository};
