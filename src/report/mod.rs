//! Periodic productivity reports for Taskboard.
//!
//! Once per scheduled period the report service computes, for every owner,
//! the task tally over the previous full calendar week or month, the
//! average completion time, and the matching completion-trend analysis, and
//! persists them as one immutable report row. A failure for one owner never
//! blocks the remaining owners. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
