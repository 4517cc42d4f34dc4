//! Scheduled reminder delivery over in-progress tasks.

use crate::board::{
    domain::{Priority, Task, TaskId},
    ports::{TaskStore, TaskStoreError},
};
use crate::notification::{
    domain::{EmailMessage, Notification, NotificationKind, should_alert},
    ports::{Mailer, MailerError, NotificationRepository, NotificationRepositoryError},
};
use chrono::Local;
use minijinja::Environment;
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// HTML body for deadline reminder emails.
const DEADLINE_TEMPLATE: &str = "\
<html>
  <body>
    <p>Your task <strong>{{ title }}</strong> is due at {{ deadline }}.</p>
    <p>Priority: {{ priority }}.</p>
  </body>
</html>
";

/// HTML body for overdue reminder emails.
const OVERDUE_TEMPLATE: &str = "\
<html>
  <body>
    <p>Your task <strong>{{ title }}</strong> was due at {{ deadline }} and
    is still in progress.</p>
    <p>Priority: {{ priority }}.</p>
  </body>
</html>
";

/// Service-level errors for reminder runs.
#[derive(Debug, Error)]
pub enum ReminderServiceError {
    /// Candidate listing failed; the run is aborted.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for reminder service operations.
pub type ReminderServiceResult<T> = Result<T, ReminderServiceError>;

/// One task whose reminder could not be delivered in a run.
#[derive(Debug, Clone)]
pub struct ReminderFailure {
    /// Task whose reminder failed.
    pub task: TaskId,
    /// Rendered failure reason.
    pub reason: String,
}

/// Outcome of one reminder run.
///
/// Per-task failures are collected here rather than propagated; a failed
/// send leaves no claim, so the reminder is retried on the next cycle.
#[derive(Debug, Clone, Default)]
pub struct ReminderRunSummary {
    /// Tasks whose reminder was sent and claimed this run.
    pub sent: Vec<TaskId>,
    /// Tasks skipped because their reminder was already sent.
    pub skipped: u64,
    /// Tasks whose reminder failed.
    pub failures: Vec<ReminderFailure>,
}

/// Per-task delivery errors, collected into the run summary.
#[derive(Debug, Error)]
enum TaskReminderError {
    /// The task's project no longer resolves to an owner.
    #[error("task's project has no owner")]
    OwnerNotFound,
    /// Store lookup failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// Sent-notification repository failed.
    #[error(transparent)]
    Repository(#[from] NotificationRepositoryError),
    /// Mail delivery failed.
    #[error(transparent)]
    Mail(#[from] MailerError),
    /// Template rendering failed.
    #[error("template render failed: {0}")]
    Template(String),
}

/// Reminder orchestration service.
#[derive(Clone)]
pub struct ReminderService<S, N, M, C>
where
    S: TaskStore,
    N: NotificationRepository,
    M: Mailer,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    repository: Arc<N>,
    mailer: Arc<M>,
    clock: Arc<C>,
}

impl<S, N, M, C> ReminderService<S, N, M, C>
where
    S: TaskStore,
    N: NotificationRepository,
    M: Mailer,
    C: Clock + Send + Sync,
{
    /// Creates a new reminder service.
    #[must_use]
    pub const fn new(store: Arc<S>, repository: Arc<N>, mailer: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            store,
            repository,
            mailer,
            clock,
        }
    }

    /// Sends deadline reminders for in-progress tasks whose deadline falls
    /// within the priority's reminder window: 36 hours ahead for high
    /// priority, 24 hours otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError`] when the candidate listing fails;
    /// per-task failures are collected in the summary instead.
    pub async fn send_deadline_reminders(&self) -> ReminderServiceResult<ReminderRunSummary> {
        let now = self.clock.utc();
        let candidates = self.store.deadline_candidates(now).await?;
        let due = candidates
            .into_iter()
            .filter(|task| should_alert(task, now))
            .collect();
        self.deliver(due, NotificationKind::Deadline).await
    }

    /// Sends overdue reminders for in-progress tasks whose deadline has
    /// passed.
    ///
    /// # Errors
    ///
    /// Returns [`ReminderServiceError`] when the candidate listing fails;
    /// per-task failures are collected in the summary instead.
    pub async fn send_overdue_reminders(&self) -> ReminderServiceResult<ReminderRunSummary> {
        let now = self.clock.utc();
        let candidates = self.store.overdue_candidates(now).await?;
        self.deliver(candidates, NotificationKind::Overdue).await
    }

    async fn deliver(
        &self,
        tasks: Vec<Task>,
        kind: NotificationKind,
    ) -> ReminderServiceResult<ReminderRunSummary> {
        let mut summary = ReminderRunSummary::default();

        for task in tasks {
            match self.deliver_one(&task, kind).await {
                Ok(true) => summary.sent.push(task.id()),
                Ok(false) => summary.skipped = summary.skipped.saturating_add(1),
                Err(error) => {
                    warn!(task = %task.id(), ?kind, %error, "reminder delivery failed; will retry next cycle");
                    summary.failures.push(ReminderFailure {
                        task: task.id(),
                        reason: error.to_string(),
                    });
                }
            }
        }

        Ok(summary)
    }

    /// Delivers one reminder; returns `false` when the task was skipped
    /// because its reminder was already sent or claimed elsewhere.
    async fn deliver_one(
        &self,
        task: &Task,
        kind: NotificationKind,
    ) -> Result<bool, TaskReminderError> {
        if self.repository.is_sent(task.id(), kind).await? {
            debug!(task = %task.id(), ?kind, "reminder already sent; skipping");
            return Ok(false);
        }

        let owner = self
            .store
            .project_owner(task.project_id())
            .await?
            .ok_or(TaskReminderError::OwnerNotFound)?;

        let message = EmailMessage::new(
            owner.email().clone(),
            subject_for(task, kind),
            render_body(task, kind)?,
        );
        self.mailer.send(&message).await?;

        // Claim after the send so a failed send stays retryable. Losing the
        // claim race means a concurrent run already recorded this reminder.
        let notification = Notification::new(task.id(), kind, &*self.clock);
        let claimed = self.repository.claim(&notification).await?;
        if !claimed {
            debug!(task = %task.id(), ?kind, "reminder claimed by a concurrent run");
        }
        Ok(claimed)
    }
}

/// Subject line for a reminder of the given kind.
fn subject_for(task: &Task, kind: NotificationKind) -> String {
    match (kind, task.priority()) {
        (NotificationKind::Deadline, Priority::High) => {
            "Task deadline approaching (high priority)".to_owned()
        }
        (NotificationKind::Deadline, Priority::Medium | Priority::Low) => {
            "Task deadline approaching".to_owned()
        }
        (NotificationKind::Overdue, _) => format!("Task overdue: {}", task.title()),
    }
}

/// Renders the HTML body for a reminder of the given kind.
fn render_body(task: &Task, kind: NotificationKind) -> Result<String, TaskReminderError> {
    let template = match kind {
        NotificationKind::Deadline => DEADLINE_TEMPLATE,
        NotificationKind::Overdue => OVERDUE_TEMPLATE,
    };
    let environment = Environment::new();
    environment
        .render_str(template, template_context(task))
        .map_err(|error| TaskReminderError::Template(error.to_string()))
}

/// Template context shared by both reminder bodies.
fn template_context(task: &Task) -> Value {
    serde_json::json!({
        "title": task.title(),
        "deadline": task
            .deadline()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        "priority": task.priority().as_str(),
    })
}
