//! An in-memory server, that behaves like the real one when it comes to task actions
//!
//! This is mainly useful in tests, where failures can be injected with a [`MockBehaviour`].

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::clock::Clock;
use crate::error::{InvalidDateInput, TaskActionError};
use crate::mock_behaviour::MockBehaviour;
use crate::recurrence::Recurrence;
use crate::task::{Priority, Task, TaskId};
use crate::traits::TaskActions;

#[derive(Debug, Default)]
struct ServerData {
    tasks: BTreeMap<TaskId, Task>,
    last_id: u64,
}

impl ServerData {
    fn insert(&mut self, content: &str, date: NaiveDate, priority: Priority, recurrence: Option<Recurrence>) -> TaskId {
        self.last_id += 1;
        let id = TaskId::new(self.last_id);
        self.tasks.insert(id, Task::new(id, content.to_string(), date, priority, recurrence));
        id
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskActionError> {
        self.tasks.get_mut(&id).ok_or(TaskActionError::UnknownTask(id))
    }
}


/// A task server that lives in memory
#[derive(Debug)]
pub struct MockTaskServer<C> {
    clock: C,
    data: Mutex<ServerData>,
    behaviour: Mutex<MockBehaviour>,
}

impl<C: Clock> MockTaskServer<C> {
    /// Create an empty server. `clock` tells which day "tomorrow" is
    pub fn new(clock: C) -> Self {
        Self::with_behaviour(clock, MockBehaviour::new())
    }

    pub fn with_behaviour(clock: C, behaviour: MockBehaviour) -> Self {
        Self {
            clock,
            data: Mutex::new(ServerData::default()),
            behaviour: Mutex::new(behaviour),
        }
    }

    /// Replace the current behaviour
    pub fn set_behaviour(&self, behaviour: MockBehaviour) {
        *lock(&self.behaviour) = behaviour;
    }

    /// Add a task, plus one copy per occurrence if it is recurring. Returns the ID of the first one
    pub fn add_task(&self, content: &str, date: NaiveDate, priority: Priority, recurrence: Option<Recurrence>) -> TaskId {
        let mut data = lock(&self.data);
        let id = data.insert(content, date, priority, recurrence);
        if let Some(recurrence) = recurrence {
            let copies = recurrence.following_dates(date);
            log::debug!("Adding {} occurrences of {:?}", copies.len(), content);
            for copy_date in copies {
                data.insert(content, copy_date, priority, Some(recurrence));
            }
        }
        id
    }

    pub fn task(&self, id: TaskId) -> Option<Task> {
        lock(&self.data).tasks.get(&id).cloned()
    }

    /// The tasks planned on a given day
    pub fn tasks_on(&self, date: NaiveDate) -> Vec<Task> {
        lock(&self.data).tasks.values()
            .filter(|task| task.date() == date)
            .cloned()
            .collect()
    }

    /// Total number of tasks
    pub fn len(&self) -> usize {
        lock(&self.data).tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TaskActions for MockTaskServer<C> {
    async fn update_task_priority(&self, id: TaskId, priority: Priority) -> Result<(), TaskActionError> {
        lock(&self.behaviour).can_update_priority()?;
        lock(&self.data).get_mut(id)?.set_priority(priority);
        Ok(())
    }

    async fn move_task_tomorrow(&self, id: TaskId) -> Result<(), TaskActionError> {
        lock(&self.behaviour).can_move_tomorrow()?;
        let today = self.clock.today();
        let tomorrow = today.to_naive()?
            .succ_opt()
            .ok_or(InvalidDateInput::Year(today.year()))?;
        lock(&self.data).get_mut(id)?.set_date(tomorrow);
        Ok(())
    }

    async fn delete_task_completely(&self, id: TaskId) -> Result<(), TaskActionError> {
        lock(&self.behaviour).can_delete()?;
        let mut data = lock(&self.data);
        let task = data.tasks.get(&id).cloned().ok_or(TaskActionError::UnknownTask(id))?;

        if task.is_recurring() {
            // Every later occurrence of the series goes away too
            let before = data.tasks.len();
            data.tasks.retain(|_, other| other.content() != task.content() || other.date() < task.date());
            log::debug!("Deleted {} occurrences of {:?}", before - data.tasks.len(), task.content());
        } else {
            data.tasks.remove(&id);
        }
        Ok(())
    }

    async fn toggle_task(&self, id: TaskId) -> Result<bool, TaskActionError> {
        lock(&self.behaviour).can_toggle()?;
        Ok(lock(&self.data).get_mut(id)?.toggle())
    }
}

/// Lock a mutex, even if a previous holder panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
