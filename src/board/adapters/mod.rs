//! Store adapters for the task board.
//!
//! - [`memory::InMemoryTaskStore`]: thread-safe in-memory store for unit and
//!   integration testing
//! - [`postgres::PostgresTaskStore`]: `PostgreSQL` store using Diesel ORM

pub mod memory;
pub mod postgres;
