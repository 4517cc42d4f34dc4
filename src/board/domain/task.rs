//! Task aggregate root and related lifecycle types.

use super::{
    BoardDomainError, Column, ColumnId, ParsePriorityError, ParseTaskStatusError, ProjectId,
    TaskId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task urgency level driving the reminder threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Routine work.
    Low,
    /// Default urgency.
    Medium,
    /// Urgent work with a wider reminder window.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is being worked on.
    Doing,
    /// Task has been completed.
    Done,
    /// Task passed its deadline without completion.
    Overdue,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Doing => "doing",
            Self::Done => "done",
            Self::Overdue => "overdue",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            "overdue" => Ok(Self::Overdue),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title; must be non-empty after trimming.
    pub title: String,
    /// Optional free-text body.
    pub content: Option<String>,
    /// Deadline instant.
    pub deadline: DateTime<Utc>,
    /// Urgency level.
    pub priority: Priority,
    /// Owning project.
    pub project_id: ProjectId,
    /// Column the task starts in.
    pub column_id: ColumnId,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted body, if any.
    pub content: Option<String>,
    /// Persisted deadline.
    pub deadline: DateTime<Utc>,
    /// Persisted urgency level.
    pub priority: Priority,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted finish instant, if any.
    pub finished_at: Option<DateTime<Utc>>,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted column.
    pub column_id: ColumnId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Task aggregate root.
///
/// Invariant: `finished_at` is `Some` exactly when the status is
/// [`TaskStatus::Done`]. Constructors and transitions maintain it;
/// [`Task::from_persisted`] rejects rows that violate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    content: Option<String>,
    deadline: DateTime<Utc>,
    priority: Priority,
    status: TaskStatus,
    finished_at: Option<DateTime<Utc>>,
    project_id: ProjectId,
    column_id: ColumnId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in [`TaskStatus::Doing`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn new(data: NewTask, clock: &impl Clock) -> Result<Self, BoardDomainError> {
        let title = data.title.trim().to_owned();
        if title.is_empty() {
            return Err(BoardDomainError::EmptyTaskTitle);
        }
        let timestamp = clock.utc();

        Ok(Self {
            id: TaskId::new(),
            title,
            content: data.content,
            deadline: data.deadline,
            priority: data.priority,
            status: TaskStatus::Doing,
            finished_at: None,
            project_id: data.project_id,
            column_id: data.column_id,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::FinishInstantWithoutDone`] or
    /// [`BoardDomainError::DoneWithoutFinishInstant`] when the persisted row
    /// violates the finish-instant invariant.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, BoardDomainError> {
        match (data.status, data.finished_at) {
            (TaskStatus::Done, None) => {
                return Err(BoardDomainError::DoneWithoutFinishInstant(data.id));
            }
            (TaskStatus::Doing | TaskStatus::Overdue, Some(_)) => {
                return Err(BoardDomainError::FinishInstantWithoutDone(data.id));
            }
            _ => {}
        }

        Ok(Self {
            id: data.id,
            title: data.title,
            content: data.content,
            deadline: data.deadline,
            priority: data.priority,
            status: data.status,
            finished_at: data.finished_at,
            project_id: data.project_id,
            column_id: data.column_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-text body, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the deadline instant.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the urgency level.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the finish instant, set only while the task is done.
    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the column the task currently sits in.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task into the given column.
    ///
    /// Entering a completion column transitions the task to
    /// [`TaskStatus::Done`] and stamps the finish instant. Leaving a
    /// completion column for a regular one returns a done task to
    /// [`TaskStatus::Doing`] and clears the finish instant.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnProjectMismatch`] when the column
    /// belongs to a different project.
    pub fn move_to_column(
        &mut self,
        column: &Column,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        if column.project_id() != self.project_id {
            return Err(BoardDomainError::ColumnProjectMismatch {
                task: self.id,
                column: column.id(),
            });
        }

        self.column_id = column.id();
        if column.is_completion() {
            if self.status != TaskStatus::Done {
                self.status = TaskStatus::Done;
                self.finished_at = Some(clock.utc());
            }
        } else if self.status == TaskStatus::Done {
            self.status = TaskStatus::Doing;
            self.finished_at = None;
        }
        self.touch(clock);
        Ok(())
    }

    /// Marks an in-progress task as overdue.
    ///
    /// Done tasks are left untouched; an already overdue task is a no-op.
    pub fn mark_overdue(&mut self, clock: &impl Clock) {
        if self.status == TaskStatus::Doing {
            self.status = TaskStatus::Overdue;
            self.touch(clock);
        }
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
