//! Taskboard: task and project management backend core.
//!
//! This crate provides the scheduled-job core of a kanban-style task
//! management backend: completion-trend analytics, periodic per-user
//! productivity reports, and deadline/overdue reminder notifications with
//! duplicate-send prevention.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, mail, etc.)
//!
//! HTTP routing, request authentication, email transport, and the job
//! scheduler itself are external collaborators reached through ports; this
//! crate only decides what to compute, persist, and send.
//!
//! # Modules
//!
//! - [`board`]: Task Store domain model (tasks, projects, columns, owners)
//! - [`analytics`]: weekly and monthly completion-trend statistics
//! - [`report`]: per-user period report generation and persistence
//! - [`notification`]: deadline/overdue reminder policy with idempotent sends
//! - [`schedule`]: cadence configuration consumed by the external scheduler
//! - [`testing`]: deterministic test doubles shared by unit and integration
//!   tests

pub mod analytics;
pub mod board;
pub mod notification;
pub mod report;
pub mod schedule;
pub mod testing;
