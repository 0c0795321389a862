//! Task actions as values, so that they can be requested by the UI and run later

use std::fmt::{Display, Formatter};

use crate::error::TaskActionError;
use crate::task::{Priority, TaskId};
use crate::traits::TaskActions;

/// Something the user asked to do with a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskAction {
    UpdatePriority(TaskId, Priority),
    MoveTomorrow(TaskId),
    DeleteCompletely(TaskId),
    Toggle(TaskId),
}

impl TaskAction {
    /// The task this action is about
    pub fn task_id(&self) -> TaskId {
        match self {
            TaskAction::UpdatePriority(id, _)
            | TaskAction::MoveTomorrow(id)
            | TaskAction::DeleteCompletely(id)
            | TaskAction::Toggle(id) => *id,
        }
    }

    /// Send this action to a server
    pub async fn perform<A>(&self, server: &A) -> Result<ActionOutcome, TaskActionError>
    where
        A: TaskActions + ?Sized,
    {
        log::debug!("Performing {}", self);
        match *self {
            TaskAction::UpdatePriority(id, priority) => {
                server.update_task_priority(id, priority).await?;
                Ok(ActionOutcome::PriorityUpdated)
            },
            TaskAction::MoveTomorrow(id) => {
                server.move_task_tomorrow(id).await?;
                Ok(ActionOutcome::Moved)
            },
            TaskAction::DeleteCompletely(id) => {
                server.delete_task_completely(id).await?;
                Ok(ActionOutcome::Deleted)
            },
            TaskAction::Toggle(id) => {
                let completed = server.toggle_task(id).await?;
                Ok(ActionOutcome::Toggled { completed })
            },
        }
    }
}

impl Display for TaskAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskAction::UpdatePriority(id, priority) => write!(f, "priority update of task {} to {}", id, priority.as_u8()),
            TaskAction::MoveTomorrow(id) => write!(f, "move of task {} to tomorrow", id),
            TaskAction::DeleteCompletely(id) => write!(f, "deletion of task {}", id),
            TaskAction::Toggle(id) => write!(f, "completion toggle of task {}", id),
        }
    }
}

/// What a successful [`TaskAction`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    PriorityUpdated,
    Moved,
    Deleted,
    Toggled { completed: bool },
}
