//! Diesel schema for sent-notification records.

diesel::table! {
    /// Sent reminders keyed uniquely on task and kind.
    notifications (id) {
        /// Notification identifier.
        id -> Uuid,
        /// Task the reminder was sent for.
        task_id -> Uuid,
        /// Reminder category.
        #[max_length = 20]
        kind -> Varchar,
        /// Send instant.
        sent_at -> Timestamptz,
    }
}
