//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by the analytics,
//! report, and notification services.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
