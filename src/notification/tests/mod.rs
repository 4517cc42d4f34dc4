//! Unit tests for the notification module.

mod policy_tests;
