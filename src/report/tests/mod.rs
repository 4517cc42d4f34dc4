//! Unit tests for the report module.

mod completion_tests;
