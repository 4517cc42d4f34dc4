//! Diesel row models for board record queries.

use super::schema::{owners, tasks};
use crate::board::domain::{
    ColumnId, EmailAddress, Owner, OwnerId, PersistedTaskData, Priority, ProjectId, Task, TaskId,
    TaskStatus,
};
use crate::board::ports::{TaskStoreError, TaskStoreResult};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Query result row for owner records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = owners)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OwnerRow {
    /// Owner identifier.
    pub id: Uuid,
    /// Owner email address.
    pub email: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Optional free-text body.
    pub content: Option<String>,
    /// Deadline instant.
    pub deadline: DateTime<Utc>,
    /// Urgency level.
    pub priority: String,
    /// Lifecycle status.
    pub status: String,
    /// Finish instant, if any.
    pub finished_at: Option<DateTime<Utc>>,
    /// Owning project.
    pub project_id: Uuid,
    /// Current column.
    pub column_id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Converts an owner row to the domain type.
pub fn row_to_owner(row: OwnerRow) -> TaskStoreResult<Owner> {
    let email = EmailAddress::new(row.email).map_err(TaskStoreError::persistence)?;
    Ok(Owner::new(OwnerId::from_uuid(row.id), email))
}

/// Converts a task row to the domain aggregate, enforcing the
/// finish-instant invariant on the way out.
pub fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(TaskStoreError::persistence)?;
    let status = TaskStatus::try_from(row.status.as_str()).map_err(TaskStoreError::persistence)?;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title: row.title,
        content: row.content,
        deadline: row.deadline,
        priority,
        status,
        finished_at: row.finished_at,
        project_id: ProjectId::from_uuid(row.project_id),
        column_id: ColumnId::from_uuid(row.column_id),
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
    .map_err(TaskStoreError::persistence)
}
