//! Application services for reminder delivery.

mod reminder;

pub use reminder::{
    ReminderFailure, ReminderRunSummary, ReminderService, ReminderServiceError,
    ReminderServiceResult,
};
