//! `PostgreSQL` adapter for board record queries.

mod models;
mod schema;
mod store;

pub use store::{BoardPgPool, PostgresTaskStore};
