//! The month grid shown by the calendar page
//!
//! A grid is made of whole weeks (5 or 6 of them). It starts with the last days of the previous month, so that the first day
//! of the displayed month falls under its weekday column, and ends with the first days of the next month.

use serde::{Deserialize, Serialize};

use super::label::{EnglishLabeler, MonthLabeler};
use super::{first_weekday, iso_date, try_step_month, CalendarDate, YearMonth, DAYS_IN_WEEK};
use crate::error::InvalidDateInput;

/// Size of a grid that spans 5 weeks
pub const SHORT_GRID_LEN: u32 = 5 * DAYS_IN_WEEK;
/// Size of a grid that spans 6 weeks
pub const LONG_GRID_LEN: u32 = 6 * DAYS_IN_WEEK;


/// Which month a cell belongs to, relative to the displayed month
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthRelation {
    Previous,
    Current,
    Next,
}

/// One day box of the grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DayCell {
    day_number: u32,
    relation: MonthRelation,
    is_today: bool,
    iso_date: Option<String>,
}

impl DayCell {
    fn outside(day_number: u32, relation: MonthRelation) -> Self {
        Self { day_number, relation, is_today: false, iso_date: None }
    }

    fn current(month: YearMonth, day_number: u32, today: CalendarDate) -> Self {
        Self {
            day_number,
            relation: MonthRelation::Current,
            is_today: YearMonth::of(today) == month && today.day() == day_number,
            iso_date: Some(iso_date(month.year(), month.month(), day_number)),
        }
    }

    /// The day of the month this cell belongs to (not its position in the grid)
    pub fn day_number(&self) -> u32              { self.day_number }
    pub fn relation(&self) -> MonthRelation      { self.relation   }
    pub fn is_today(&self) -> bool               { self.is_today   }
    /// The `YYYY-MM-DD` key of this day. Only days of the displayed month have one.
    pub fn iso_date(&self) -> Option<&str>       { self.iso_date.as_deref() }

    pub fn is_current_month(&self) -> bool {
        self.relation == MonthRelation::Current
    }
}


/// A month, laid out as whole weeks
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    month: YearMonth,
    month_label: String,
    cells: Vec<DayCell>,
}

impl CalendarGrid {
    pub fn month(&self) -> YearMonth    { self.month        }
    /// Human-readable "Month YYYY" text
    pub fn month_label(&self) -> &str   { &self.month_label }
    pub fn cells(&self) -> &[DayCell]   { &self.cells       }

    /// The cells, 7 by 7, each row starting on Sunday
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell> {
        self.cells.chunks(DAYS_IN_WEEK as usize)
    }

    /// The cell flagged as today, if today is part of the displayed month
    pub fn today(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_today)
    }
}


/// Builds [`CalendarGrid`]s. Month names are delegated to a [`MonthLabeler`].
#[derive(Clone, Debug, Default)]
pub struct CalendarGridBuilder<L = EnglishLabeler> {
    labeler: L,
}

impl CalendarGridBuilder<EnglishLabeler> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: MonthLabeler> CalendarGridBuilder<L> {
    pub fn with_labeler(labeler: L) -> Self {
        Self { labeler }
    }

    /// Compute the grid of a (0-based) `month`.
    ///
    /// This fails when the month does not exist or its year is not representable. `today` is only used to flag a cell.
    pub fn build(&self, year: i32, month: u32, today: CalendarDate) -> Result<CalendarGrid, InvalidDateInput> {
        let month = YearMonth::new(year, month)?;
        let leading = first_weekday(month)?;
        let month_len = month.days();
        // Before the first representable January comes a December all the same
        let prev_month_len = try_step_month(month, -1)
            .map(|previous| previous.days())
            .unwrap_or(31);

        let total = leading + month_len;
        let grid_len = if total > SHORT_GRID_LEN { LONG_GRID_LEN } else { SHORT_GRID_LEN };
        let trailing = grid_len - total;

        let mut cells = Vec::with_capacity(grid_len as usize);
        cells.extend(
            (prev_month_len - leading + 1..=prev_month_len)
                .map(|day| DayCell::outside(day, MonthRelation::Previous))
        );
        cells.extend(
            (1..=month_len)
                .map(|day| DayCell::current(month, day, today))
        );
        cells.extend(
            (1..=trailing)
                .map(|day| DayCell::outside(day, MonthRelation::Next))
        );

        log::debug!("Built a {}-cell grid for {} ({} leading, {} trailing)", cells.len(), month, leading, trailing);

        Ok(CalendarGrid {
            month,
            month_label: self.labeler.label(month),
            cells,
        })
    }
}

/// Compute the grid of a (0-based) `month`, with English month names
pub fn build(year: i32, month: u32, today: CalendarDate) -> Result<CalendarGrid, InvalidDateInput> {
    CalendarGridBuilder::new().build(year, month, today)
}
