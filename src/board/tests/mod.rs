//! Unit tests for the board module.
//!
//! Tests are organised by concern: domain validation and transitions,
//! period arithmetic, and the in-memory store queries.

mod domain_tests;
mod period_tests;
mod store_tests;
