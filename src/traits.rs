use async_trait::async_trait;

use crate::error::TaskActionError;
use crate::task::{Priority, TaskId};

/// Anything able to act on the tasks a server stores.
///
/// This is usually a [`Client`](crate::client::Client), but tests can use a [`MockTaskServer`](crate::mock::MockTaskServer) instead.
#[async_trait]
pub trait TaskActions {
    /// Change the priority of a task
    async fn update_task_priority(&self, id: TaskId, priority: Priority) -> Result<(), TaskActionError>;
    /// Re-plan a task for the day after today
    async fn move_task_tomorrow(&self, id: TaskId) -> Result<(), TaskActionError>;
    /// Delete a task. For a recurring task, this also deletes its later occurrences
    async fn delete_task_completely(&self, id: TaskId) -> Result<(), TaskActionError>;
    /// Flip the completion status of a task, and return the new one
    async fn toggle_task(&self, id: TaskId) -> Result<bool, TaskActionError>;
}

