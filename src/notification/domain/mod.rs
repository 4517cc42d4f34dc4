//! Domain model for reminder notifications.

mod message;
mod notification;
mod policy;

pub use message::EmailMessage;
pub use notification::{Notification, NotificationId, NotificationKind, ParseNotificationKindError};
pub use policy::{reminder_window, should_alert};
