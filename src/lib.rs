//! This crate provides the client side of a simple task manager.
//!
//! Its core is the month grid of the calendar page, in the [`calendar`] module. It is a pure computation: "today" comes
//! from a [`Clock`](clock::Clock) and month names from a [`MonthLabeler`](calendar::MonthLabeler).
//!
//! The task actions (toggling, moving, deleting a task and changing its priority) are sent to a server by a [`Client`](client::Client). \
//! The pages themselves are modelled as explicit states ([`CalendarView`](view::CalendarView) and [`TaskPage`](page::TaskPage)), that turn
//! user interactions into effects for the UI to carry out.

pub mod traits;
pub mod error;

pub mod calendar;
pub use calendar::{CalendarGrid, CalendarGridBuilder, DayCell, MonthRelation};
pub mod clock;
pub mod recurrence;
pub mod task;
pub use task::Task;

pub mod action;
pub mod client;
pub mod mock;
pub mod mock_behaviour;
pub mod page;
pub mod view;

pub mod config;
pub mod utils;
