//! Unit tests for the analytics module.
