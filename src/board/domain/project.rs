//! Projects, kanban columns, and task owners.

use super::{BoardDomainError, ColumnId, EmailAddress, OwnerId, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user as seen by the scheduled jobs: reports are generated per owner and
/// reminder emails are addressed to the owner of the task's project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    id: OwnerId,
    email: EmailAddress,
}

impl Owner {
    /// Creates an owner record.
    #[must_use]
    pub const fn new(id: OwnerId, email: EmailAddress) -> Self {
        Self { id, email }
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn id(&self) -> OwnerId {
        self.id
    }

    /// Returns the owner's email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// A project grouping tasks and columns under one owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    owner_id: OwnerId,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyProjectName`] when the name is empty
    /// after trimming.
    pub fn new(
        name: impl Into<String>,
        owner_id: OwnerId,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(BoardDomainError::EmptyProjectName);
        }
        Ok(Self {
            id: ProjectId::new(),
            name,
            owner_id,
            created_at: clock.utc(),
        })
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A kanban column within a project.
///
/// Columns carry an integer rank defining display and processing order. A
/// column flagged as a completion column transitions tasks moved into it to
/// done status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    name: String,
    rank: i32,
    is_completion: bool,
    project_id: ProjectId,
    created_at: DateTime<Utc>,
}

impl Column {
    /// Creates a new column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnName`] when the name is empty
    /// after trimming.
    pub fn new(
        name: impl Into<String>,
        rank: i32,
        is_completion: bool,
        project_id: ProjectId,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(BoardDomainError::EmptyColumnName);
        }
        Ok(Self {
            id: ColumnId::new(),
            name,
            rank,
            is_completion,
            project_id,
            created_at: clock.utc(),
        })
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the order rank.
    #[must_use]
    pub const fn rank(&self) -> i32 {
        self.rank
    }

    /// Returns whether entering this column marks a task done.
    #[must_use]
    pub const fn is_completion(&self) -> bool {
        self.is_completion
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
