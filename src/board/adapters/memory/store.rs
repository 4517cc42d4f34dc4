//! In-memory task store for scheduled-job tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Owner, OwnerId, Period, Project, ProjectId, Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Seed the store with [`InMemoryTaskStore::add_owner`] and friends; the
/// [`TaskStore`] implementation then answers the same filtered queries the
/// `PostgreSQL` adapter does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    owners: Vec<Owner>,
    projects: HashMap<ProjectId, Project>,
    tasks: HashMap<TaskId, Task>,
}

impl StoreState {
    /// Returns whether the task's project belongs to the given owner.
    fn is_owned_by(&self, task: &Task, owner: OwnerId) -> bool {
        self.projects
            .get(&task.project_id())
            .is_some_and(|project| project.owner_id() == owner)
    }

    fn tasks_matching(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.values().filter(|t| predicate(t)).cloned().collect();
        tasks.sort_by_key(Task::id);
        tasks
    }
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an owner record.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the store lock is poisoned.
    pub fn add_owner(&self, owner: Owner) -> TaskStoreResult<()> {
        let mut state = write_state(&self.state)?;
        state.owners.retain(|existing| existing.id() != owner.id());
        state.owners.push(owner);
        Ok(())
    }

    /// Seeds a project record.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the store lock is poisoned.
    pub fn add_project(&self, project: Project) -> TaskStoreResult<()> {
        let mut state = write_state(&self.state)?;
        state.projects.insert(project.id(), project);
        Ok(())
    }

    /// Seeds or replaces a task record.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when the store lock is poisoned.
    pub fn add_task(&self, task: Task) -> TaskStoreResult<()> {
        let mut state = write_state(&self.state)?;
        state.tasks.insert(task.id(), task);
        Ok(())
    }
}

fn write_state(
    state: &Arc<RwLock<StoreState>>,
) -> TaskStoreResult<std::sync::RwLockWriteGuard<'_, StoreState>> {
    state
        .write()
        .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
}

fn read_state(
    state: &Arc<RwLock<StoreState>>,
) -> TaskStoreResult<std::sync::RwLockReadGuard<'_, StoreState>> {
    state
        .read()
        .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_owners(&self) -> TaskStoreResult<Vec<Owner>> {
        let state = read_state(&self.state)?;
        Ok(state.owners.clone())
    }

    async fn project_owner(&self, project_id: ProjectId) -> TaskStoreResult<Option<Owner>> {
        let state = read_state(&self.state)?;
        let owner = state.projects.get(&project_id).and_then(|project| {
            state
                .owners
                .iter()
                .find(|owner| owner.id() == project.owner_id())
                .cloned()
        });
        Ok(owner)
    }

    async fn tasks_created_in(
        &self,
        owner: OwnerId,
        period: &Period,
    ) -> TaskStoreResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        Ok(state.tasks_matching(|task| {
            state.is_owned_by(task, owner) && period.contains(task.created_at())
        }))
    }

    async fn tasks_finished_in(
        &self,
        owner: OwnerId,
        period: &Period,
    ) -> TaskStoreResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        Ok(state.tasks_matching(|task| {
            state.is_owned_by(task, owner)
                && task
                    .finished_at()
                    .is_some_and(|finished| period.contains(finished))
        }))
    }

    async fn tasks_overdue_in(
        &self,
        owner: OwnerId,
        period: &Period,
    ) -> TaskStoreResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        Ok(state.tasks_matching(|task| {
            state.is_owned_by(task, owner)
                && task.status() == TaskStatus::Overdue
                && period.contains(task.deadline())
        }))
    }

    async fn deadline_candidates(&self, now: DateTime<Utc>) -> TaskStoreResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        Ok(state.tasks_matching(|task| {
            task.status() == TaskStatus::Doing && task.deadline() >= now
        }))
    }

    async fn overdue_candidates(&self, now: DateTime<Utc>) -> TaskStoreResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        Ok(state.tasks_matching(|task| {
            task.status() == TaskStatus::Doing && task.deadline() <= now
        }))
    }
}
