//! The calendar page: which month is displayed, and where clicking a day leads

use std::fmt::{Display, Formatter};

use crate::calendar::{step_month, CalendarDate, CalendarGrid, CalendarGridBuilder, DayCell, MonthLabeler, YearMonth};
use crate::clock::Clock;
use crate::error::InvalidDateInput;

/// A request to open the task list of a given day
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavigationIntent {
    iso_date: String,
}

impl NavigationIntent {
    pub fn iso_date(&self) -> &str {
        &self.iso_date
    }

    /// The page that lists the tasks of this day
    pub fn path(&self) -> String {
        format!("/tasks/{}", self.iso_date)
    }
}

impl From<CalendarDate> for NavigationIntent {
    fn from(date: CalendarDate) -> Self {
        Self { iso_date: date.iso() }
    }
}

impl Display for NavigationIntent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}


/// The state of the calendar page.
///
/// Navigating never mutates a view: it returns the view of another month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarView {
    displayed: YearMonth,
}

impl CalendarView {
    pub fn new(displayed: YearMonth) -> Self {
        Self { displayed }
    }

    /// The view of the current month
    pub fn current<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::new(YearMonth::of(clock.today()))
    }

    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub fn previous(self) -> Self {
        self.step(-1)
    }

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn step(self, delta: i32) -> Self {
        Self::new(step_month(self.displayed, delta))
    }

    /// Compute the grid of the displayed month
    pub fn grid<L: MonthLabeler>(&self, builder: &CalendarGridBuilder<L>, today: CalendarDate) -> Result<CalendarGrid, InvalidDateInput> {
        builder.build(self.displayed.year(), self.displayed.month(), today)
    }

    /// What clicking a cell does. Only days of the displayed month lead somewhere
    pub fn select(&self, cell: &DayCell) -> Option<NavigationIntent> {
        cell.iso_date().map(|iso| NavigationIntent { iso_date: iso.to_string() })
    }
}
