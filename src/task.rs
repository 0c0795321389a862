//! To-do tasks, as the server stores them

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::recurrence::Recurrence;

/// The server-side identifier of a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}


/// How urgent a task is.
///
/// On the wire, priorities are the integers 1, 2 and 3. New tasks get [`Priority::Medium`] (2) unless told otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_u8(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(format!("Invalid priority {} (expected 1, 2 or 3)", other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        priority.as_u8()
    }
}

impl FromStr for Priority {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse().map_err(|_| format!("Invalid priority {:?}", s))?;
        Self::try_from(value)
    }
}


/// A to-do task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    /// What has to be done
    content: String,
    /// The day this task is planned for
    date: NaiveDate,
    completed: bool,
    priority: Priority,
    /// Set on every task of a recurring series
    recurrence: Option<Recurrence>,
}

impl Task {
    /// Create a new, uncompleted task
    pub fn new(id: TaskId, content: String, date: NaiveDate, priority: Priority, recurrence: Option<Recurrence>) -> Self {
        Self {
            id,
            content,
            date,
            completed: false,
            priority,
            recurrence,
        }
    }

    pub fn id(&self) -> TaskId                       { self.id            }
    pub fn content(&self) -> &str                    { &self.content      }
    pub fn date(&self) -> NaiveDate                  { self.date          }
    pub fn completed(&self) -> bool                  { self.completed     }
    pub fn priority(&self) -> Priority               { self.priority      }
    pub fn recurrence(&self) -> Option<Recurrence>   { self.recurrence    }
    pub fn is_recurring(&self) -> bool               { self.recurrence.is_some() }

    /// Flip the completion status, and return the new one
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }
}
