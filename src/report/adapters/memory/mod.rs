//! In-memory report repository.

mod repository;

pub use repository::InMemoryReportRepository;
