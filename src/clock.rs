//! Where "today" comes from
//!
//! Nothing else in this crate reads the system clock, so that grids and mocked servers behave the same in tests.

use chrono::Local;

use crate::calendar::CalendarDate;

pub trait Clock {
    /// The current local date
    fn today(&self) -> CalendarDate;
}

/// The local date of this machine
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from(Local::now().date_naive())
    }
}

/// A clock stuck on a given date
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
