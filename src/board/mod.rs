//! Task Store domain for Taskboard.
//!
//! The board module models the records the scheduled jobs read: tasks
//! organised into projects and kanban columns, owned by users. The store
//! itself (HTTP CRUD, ORM wiring) lives outside this crate; the [`ports`]
//! contract exposes the filtered range queries the analytics, report, and
//! notification services need. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
