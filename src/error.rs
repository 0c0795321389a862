//! Error types of this crate

use thiserror::Error;

use crate::task::TaskId;

/// A year, month or day that does not describe a real calendar date
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidDateInput {
    /// Months are 0-based, so only `0..=11` are valid
    #[error("invalid month {0} (expected 0..=11)")]
    Month(u32),
    /// The day does not exist in the given month
    #[error("invalid day {day} for {year}-{month:02}")]
    Day { year: i32, month: u32, day: u32 },
    /// The year is outside the range chrono can represent
    #[error("year {0} is out of range")]
    Year(i32),
}

/// Everything that can go wrong when asking the server to act on a task
#[derive(Debug, Error)]
pub enum TaskActionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered `success: false`
    #[error("server rejected the action: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    #[error("malformed response: missing field `{0}`")]
    MalformedResponse(&'static str),

    #[error("unknown task {0}")]
    UnknownTask(TaskId),

    #[error("invalid date: {0}")]
    Date(#[from] InvalidDateInput),

    #[error("invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    /// Only produced by [`MockBehaviour`](crate::mock_behaviour::MockBehaviour)
    #[error("mocked failure for {0}")]
    Mocked(String),
}
