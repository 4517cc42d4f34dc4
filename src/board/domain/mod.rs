//! Domain model for the task board.
//!
//! The board domain models tasks with deadlines and completion tracking,
//! their owning projects and kanban columns, and the half-open time periods
//! the reporting queries run over, while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod period;
mod project;
mod task;

pub use error::{BoardDomainError, ParsePriorityError, ParseTaskStatusError};
pub use ids::{ColumnId, EmailAddress, OwnerId, ProjectId, TaskId};
pub use period::{Period, PeriodError};
pub use project::{Column, Owner, Project};
pub use task::{NewTask, PersistedTaskData, Priority, Task, TaskStatus};
