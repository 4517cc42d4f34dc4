//! Deadline and overdue reminders for Taskboard.
//!
//! On a short fixed cadence the reminder service scans in-progress tasks,
//! decides per task whether a deadline or overdue email is due, sends it to
//! the task's project owner, and claims a notification record so the same
//! reminder is never sent twice. The claim is an atomic conditional insert;
//! recording happens only after a successful send, so a failed send is
//! retried on the next cycle rather than silently lost. The module follows
//! hexagonal architecture:
//!
//! - Domain types and the threshold policy in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
