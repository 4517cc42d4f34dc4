//! Persistence adapters for reports.
//!
//! - [`memory::InMemoryReportRepository`]: thread-safe in-memory storage for
//!   testing
//! - [`postgres::PostgresReportRepository`]: `PostgreSQL` persistence using
//!   Diesel ORM

pub mod memory;
pub mod postgres;
