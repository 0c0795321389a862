//! The task list page: the "new task" form, the per-task menus, and what happens when a task action completes
//!
//! User interactions are turned into [`Command`]s. Dispatching a command updates the page state, and returns the
//! [`Effect`] the caller (i.e. the UI glue) has to carry out.

use std::collections::HashMap;

use crate::action::{ActionOutcome, TaskAction};
use crate::error::TaskActionError;
use crate::task::{Priority, TaskId};

/// A user interaction with the task page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    OpenTaskModal,
    /// Close the "new task" form. This discards the selected priority
    CloseTaskModal,
    /// The "recurring" checkbox of the form has been (un)checked
    SetRecurring(bool),
    /// Clicking the selected priority deselects it, clicking another one selects it
    TogglePriority(Priority),
    ShowTaskMenu(TaskId),
    HideTaskMenus,
    /// A click somewhere on the page
    Click {
        /// The click landed on the backdrop around the "new task" form
        on_modal_backdrop: bool,
        /// The click landed in a task menu, or on the button that opens it
        inside_menu: bool,
    },
    Escape,
    /// An entry of a task menu has been chosen
    Request(TaskAction),
    /// The answer to a pending deletion confirmation
    ConfirmDelete(bool),
    DismissError,
}

/// What the caller must do after a command has been dispatched, or an action has completed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send this action to the server, then report back with [`TaskPage::complete`]
    Perform(TaskAction),
    /// Ask the user whether this task should really be deleted, then report back with [`Command::ConfirmDelete`]
    AskConfirmation(TaskId),
    /// The task list is stale, fetch it again
    Refresh,
    /// Only the completion mark of this task changed
    MarkCompleted { id: TaskId, completed: bool },
    ShowError(String),
}


/// The state of the task page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskPage {
    modal_open: bool,
    selected_priority: Option<Priority>,
    recurring: bool,
    open_menu: Option<TaskId>,
    pending_delete: Option<TaskId>,
    /// Completion statuses updated in place since the last refresh
    completed: HashMap<TaskId, bool>,
    error: Option<String>,
}

impl TaskPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_modal_open(&self) -> bool                   { self.modal_open }
    pub fn selected_priority(&self) -> Option<Priority>   { self.selected_priority }
    /// Whether the recurrence selector of the form can be used
    pub fn is_recurrence_enabled(&self) -> bool           { self.recurring }
    /// The only task menu that can be open at a time
    pub fn open_menu(&self) -> Option<TaskId>             { self.open_menu }
    pub fn pending_delete(&self) -> Option<TaskId>        { self.pending_delete }
    /// The error to display, if the last action failed
    pub fn error(&self) -> Option<&str>                   { self.error.as_deref() }

    /// The priority the form will submit (the server default when none is selected)
    pub fn form_priority(&self) -> Priority {
        self.selected_priority.unwrap_or_default()
    }

    /// The completion status a task was given since the last refresh, if any
    pub fn completion_of(&self, id: TaskId) -> Option<bool> {
        self.completed.get(&id).copied()
    }

    pub fn dispatch(&mut self, command: Command) -> Effect {
        log::debug!("Dispatching {:?}", command);
        match command {
            Command::OpenTaskModal => {
                self.modal_open = true;
            },
            Command::CloseTaskModal => self.close_modal(),
            Command::SetRecurring(checked) => {
                self.recurring = checked;
            },
            Command::TogglePriority(priority) => {
                self.selected_priority = match self.selected_priority {
                    Some(selected) if selected == priority => None,
                    _ => Some(priority),
                };
            },
            Command::ShowTaskMenu(id) => {
                self.open_menu = Some(id);
            },
            Command::HideTaskMenus => {
                self.open_menu = None;
            },
            Command::Click { on_modal_backdrop, inside_menu } => {
                if on_modal_backdrop {
                    self.close_modal();
                }
                if inside_menu == false {
                    self.open_menu = None;
                }
            },
            Command::Escape => {
                self.close_modal();
                self.open_menu = None;
            },
            Command::Request(TaskAction::DeleteCompletely(id)) => {
                self.pending_delete = Some(id);
                return Effect::AskConfirmation(id);
            },
            Command::Request(action) => {
                return Effect::Perform(action);
            },
            Command::ConfirmDelete(confirmed) => {
                if let Some(id) = self.pending_delete.take() {
                    if confirmed {
                        return Effect::Perform(TaskAction::DeleteCompletely(id));
                    }
                    log::debug!("Deletion of task {} cancelled", id);
                }
            },
            Command::DismissError => {
                self.error = None;
            },
        }
        Effect::None
    }

    /// Report the result of an action previously returned in an [`Effect::Perform`]
    pub fn complete(&mut self, action: TaskAction, result: Result<ActionOutcome, TaskActionError>) -> Effect {
        match result {
            Ok(ActionOutcome::Toggled { completed }) => {
                let id = action.task_id();
                self.completed.insert(id, completed);
                self.error = None;
                Effect::MarkCompleted { id, completed }
            },
            Ok(_) => {
                self.open_menu = None;
                self.error = None;
                Effect::Refresh
            },
            Err(err) => {
                log::warn!("The {} failed: {}", action, err);
                let message = format!("Unable to complete the {}: {}", action, err);
                self.error = Some(message.clone());
                Effect::ShowError(message)
            },
        }
    }

    /// Forget about in-place updates, e.g. once the task list has been fetched again
    pub fn refreshed(&mut self) {
        self.completed.clear();
    }

    fn close_modal(&mut self) {
        self.modal_open = false;
        self.selected_priority = None;
    }
}
