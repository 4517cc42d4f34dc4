//! Error types for board domain validation and parsing.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The column name is empty after trimming.
    #[error("column name must not be empty")]
    EmptyColumnName,

    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The column belongs to a different project than the task.
    #[error("column {column} does not belong to the project of task {task}")]
    ColumnProjectMismatch {
        /// Task being moved.
        task: TaskId,
        /// Column from another project.
        column: ColumnId,
    },

    /// A persisted task carries a finish instant without being done.
    #[error("task {0} has a finish instant but is not done")]
    FinishInstantWithoutDone(TaskId),

    /// A persisted done task is missing its finish instant.
    #[error("task {0} is done but has no finish instant")]
    DoneWithoutFinishInstant(TaskId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
