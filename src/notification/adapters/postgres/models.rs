//! Diesel row models for sent-notification records.

use super::schema::notifications;
use crate::notification::domain::Notification;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Insert model for sent-notification records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notifications)]
pub struct NewNotificationRow {
    /// Notification identifier.
    pub id: Uuid,
    /// Task the reminder was sent for.
    pub task_id: Uuid,
    /// Reminder category.
    pub kind: String,
    /// Send instant.
    pub sent_at: DateTime<Utc>,
}

/// Builds an insert row from a sent-notification record.
#[must_use]
pub fn to_new_row(notification: &Notification) -> NewNotificationRow {
    NewNotificationRow {
        id: notification.id().into_inner(),
        task_id: notification.task_id().into_inner(),
        kind: notification.kind().as_str().to_owned(),
        sent_at: notification.sent_at(),
    }
}
