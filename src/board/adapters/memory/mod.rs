//! In-memory store adapter for board records.

mod store;

pub use store::InMemoryTaskStore;
