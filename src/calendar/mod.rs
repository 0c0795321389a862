//! Calendar arithmetic: months, month navigation and the month grid
//!
//! Months are 0-based everywhere in this module (`0` is January, `11` is December), which is how the web client counts them.

pub mod grid;
pub mod label;

use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::InvalidDateInput;

pub use grid::{CalendarGrid, CalendarGridBuilder, DayCell, MonthRelation};
pub use label::{EnglishLabeler, MonthLabeler};

pub const DAYS_IN_WEEK: u32 = 7;
pub const MONTHS_IN_YEAR: u32 = 12;


/// The first year chrono can represent
pub fn min_year() -> i32 {
    NaiveDate::MIN.year()
}

/// The last year chrono can represent
pub fn max_year() -> i32 {
    NaiveDate::MAX.year()
}

fn check_year(year: i32) -> Result<(), InvalidDateInput> {
    if year < min_year() || year > max_year() {
        return Err(InvalidDateInput::Year(year));
    }
    Ok(())
}


/// A month of a given year
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = InvalidDateInput;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month)
    }
}

impl YearMonth {
    /// Create a `YearMonth`. `month` is 0-based, and `year` must be in the range chrono supports.
    pub fn new(year: i32, month: u32) -> Result<Self, InvalidDateInput> {
        if month >= MONTHS_IN_YEAR {
            return Err(InvalidDateInput::Month(month));
        }
        check_year(year)?;
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32  { self.year  }
    /// The 0-based month
    pub fn month(&self) -> u32 { self.month }

    /// The month that contains `date`
    pub fn of(date: CalendarDate) -> Self {
        Self { year: date.year, month: date.month }
    }

    /// The first day of this month, as a chrono date
    pub fn first_day(&self) -> Result<NaiveDate, InvalidDateInput> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
            .ok_or(InvalidDateInput::Year(self.year))
    }

    /// Number of days in this month
    pub fn days(&self) -> u32 {
        match self.month {
            0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
            3 | 5 | 8 | 10 => 30,
            _ => if is_leap_year(self.year) { 29 } else { 28 },
        }
    }

    pub fn previous(&self) -> Self {
        step_month(*self, -1)
    }

    pub fn next(&self) -> Self {
        step_month(*self, 1)
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}


/// A `(year, month, day)` triple, e.g. the "today" a [`Clock`](crate::clock::Clock) returns.
///
/// Like [`YearMonth`], the month is 0-based. Days are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarDate")]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Deserialize)]
struct RawCalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawCalendarDate> for CalendarDate {
    type Error = InvalidDateInput;

    fn try_from(raw: RawCalendarDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl CalendarDate {
    /// Create a date, checking it actually exists in the calendar
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, InvalidDateInput> {
        let ym = YearMonth::new(year, month)?;
        if day == 0 || day > ym.days() {
            return Err(InvalidDateInput::Day { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32  { self.year  }
    /// The 0-based month
    pub fn month(&self) -> u32 { self.month }
    pub fn day(&self) -> u32   { self.day   }

    /// The `YYYY-MM-DD` representation, used as a navigation key
    pub fn iso(&self) -> String {
        iso_date(self.year, self.month, self.day)
    }

    pub fn to_naive(&self) -> Result<NaiveDate, InvalidDateInput> {
        check_year(self.year)?;
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
            .ok_or(InvalidDateInput::Day { year: self.year, month: self.month, day: self.day })
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iso())
    }
}


/// Gregorian leap years: every 4 years, except centuries that are not a multiple of 400
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days of a (0-based) month
pub fn days_in_month(year: i32, month: u32) -> Result<u32, InvalidDateInput> {
    Ok(YearMonth::new(year, month)?.days())
}

/// Day of the week of the first day of a month, 0 being Sunday and 6 Saturday
pub fn first_weekday(month: YearMonth) -> Result<u32, InvalidDateInput> {
    Ok(month.first_day()?.weekday().num_days_from_sunday())
}

/// Move `delta` months away from `current`, rolling the year over when needed.
///
/// This fails with [`InvalidDateInput::Year`] when the target month is before [`min_year`] or after [`max_year`].
pub fn try_step_month(current: YearMonth, delta: i32) -> Result<YearMonth, InvalidDateInput> {
    let total = i64::from(current.month) + i64::from(delta);
    let year = i64::from(current.year) + total.div_euclid(i64::from(MONTHS_IN_YEAR));
    let month = total.rem_euclid(i64::from(MONTHS_IN_YEAR)) as u32;
    let year = i32::try_from(year).map_err(|_| {
        InvalidDateInput::Year(if year < 0 { i32::MIN } else { i32::MAX })
    })?;
    YearMonth::new(year, month)
}

/// Move `delta` months away from `current`, rolling the year over when needed.
///
/// Navigation stops at the first and last months chrono can represent. Apart from these two months,
/// `step_month(step_month(d, 1), -1) == d` always holds.
pub fn step_month(current: YearMonth, delta: i32) -> YearMonth {
    match try_step_month(current, delta) {
        Ok(month) => month,
        Err(_) if delta < 0 => YearMonth { year: min_year(), month: 0 },
        Err(_) => YearMonth { year: max_year(), month: MONTHS_IN_YEAR - 1 },
    }
}

/// The week (starting on Sunday) that contains `date`
pub fn week_of(date: NaiveDate) -> Option<[NaiveDate; DAYS_IN_WEEK as usize]> {
    let offset = date.weekday().num_days_from_sunday();
    let sunday = date.checked_sub_days(Days::new(offset.into()))?;
    let mut week = [sunday; DAYS_IN_WEEK as usize];
    for (i, day) in week.iter_mut().enumerate().skip(1) {
        *day = sunday.checked_add_days(Days::new(i as u64))?;
    }
    Some(week)
}

pub(crate) fn iso_date(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month + 1, day)
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
        assert!(is_leap_year(2023) == false);
        assert!(is_leap_year(1900) == false);
        assert!(is_leap_year(2100) == false);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 1), Ok(28));
        assert_eq!(days_in_month(2024, 1), Ok(29));
        assert_eq!(days_in_month(1900, 1), Ok(28));
        assert_eq!(days_in_month(2000, 1), Ok(29));
        assert_eq!(days_in_month(2024, 0), Ok(31));
        assert_eq!(days_in_month(2024, 3), Ok(30));
        assert_eq!(days_in_month(2024, 11), Ok(31));
        assert_eq!(days_in_month(2023, 13), Err(InvalidDateInput::Month(13)));
        assert_eq!(days_in_month(i32::MAX, 1), Err(InvalidDateInput::Year(i32::MAX)));
    }

    #[test]
    fn test_step_month() {
        let dec_2024 = YearMonth::new(2024, 11).unwrap();
        let jan_2024 = YearMonth::new(2024, 0).unwrap();
        assert_eq!(step_month(dec_2024, 1), YearMonth::new(2025, 0).unwrap());
        assert_eq!(step_month(jan_2024, -1), YearMonth::new(2023, 11).unwrap());
        assert_eq!(step_month(jan_2024, 25), YearMonth::new(2026, 1).unwrap());
        assert_eq!(step_month(jan_2024, -13), YearMonth::new(2022, 11).unwrap());
        assert_eq!(step_month(jan_2024, 0), jan_2024);

        for year in [1999, 2000, 2024] {
            for month in 0..12 {
                let d = YearMonth::new(year, month).unwrap();
                assert_eq!(step_month(step_month(d, 1), -1), d);
                assert_eq!(step_month(step_month(d, -1), 1), d);
            }
        }
    }

    #[test]
    fn test_first_weekday() {
        // Feb 1st, 2024 was a Thursday
        assert_eq!(first_weekday(YearMonth::new(2024, 1).unwrap()).unwrap(), 4);
        // Sep 1st, 2024 was a Sunday
        assert_eq!(first_weekday(YearMonth::new(2024, 8).unwrap()).unwrap(), 0);
        assert!(first_weekday(YearMonth::new(max_year(), 11).unwrap()).is_ok());
        assert!(first_weekday(YearMonth::new(min_year(), 0).unwrap()).is_ok());
    }

    #[test]
    fn test_year_range() {
        assert_eq!(YearMonth::new(i32::MAX, 11), Err(InvalidDateInput::Year(i32::MAX)));
        assert_eq!(YearMonth::new(i32::MIN, 0), Err(InvalidDateInput::Year(i32::MIN)));
        assert_eq!(YearMonth::new(max_year() + 1, 0), Err(InvalidDateInput::Year(max_year() + 1)));
        assert_eq!(YearMonth::new(min_year() - 1, 11), Err(InvalidDateInput::Year(min_year() - 1)));
        assert_eq!(CalendarDate::new(i32::MAX, 0, 1), Err(InvalidDateInput::Year(i32::MAX)));

        let last = YearMonth::new(max_year(), 11).unwrap();
        let first = YearMonth::new(min_year(), 0).unwrap();
        assert_eq!(try_step_month(last, 1), Err(InvalidDateInput::Year(max_year() + 1)));
        assert_eq!(try_step_month(first, -1), Err(InvalidDateInput::Year(min_year() - 1)));
        assert!(try_step_month(first, i32::MIN).is_err());
        assert!(try_step_month(last, i32::MAX).is_err());

        // Navigation stops at both ends
        assert_eq!(last.next(), last);
        assert_eq!(step_month(last, i32::MAX), last);
        assert_eq!(first.previous(), first);
        assert_eq!(step_month(first, i32::MIN), first);
        assert_eq!(last.previous().next(), last);
        assert_eq!(first.next().previous(), first);
    }

    #[test]
    fn test_deserialize_checks_dates() {
        let ym: YearMonth = serde_json::from_str(r#"{"year":2024,"month":11}"#).unwrap();
        assert_eq!(ym, YearMonth::new(2024, 11).unwrap());
        assert!(serde_json::from_str::<YearMonth>(r#"{"year":2024,"month":12}"#).is_err());
        assert!(serde_json::from_str::<YearMonth>(r#"{"year":2024,"month":15}"#).is_err());
        assert!(serde_json::from_str::<YearMonth>(r#"{"year":2147483647,"month":0}"#).is_err());

        let date: CalendarDate = serde_json::from_str(r#"{"year":2024,"month":1,"day":29}"#).unwrap();
        assert_eq!(date.iso(), "2024-02-29");
        assert!(serde_json::from_str::<CalendarDate>(r#"{"year":2023,"month":1,"day":31}"#).is_err());
        assert!(serde_json::from_str::<CalendarDate>(r#"{"year":2023,"month":1,"day":29}"#).is_err());

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(serde_json::from_str::<CalendarDate>(&json).unwrap(), date);
    }

    #[test]
    fn test_to_naive() {
        let date = CalendarDate::new(2024, 1, 29).unwrap();
        assert_eq!(date.to_naive(), Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        let last = CalendarDate::new(max_year(), 11, 31).unwrap();
        assert_eq!(last.to_naive(), Ok(NaiveDate::MAX));

        // Dates that bypass the constructor report what is wrong with them
        let bad_day = CalendarDate { year: 2023, month: 1, day: 31 };
        assert_eq!(bad_day.to_naive(), Err(InvalidDateInput::Day { year: 2023, month: 1, day: 31 }));
        let bad_year = CalendarDate { year: i32::MAX, month: 0, day: 1 };
        assert_eq!(bad_year.to_naive(), Err(InvalidDateInput::Year(i32::MAX)));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(YearMonth::new(2024, 12), Err(InvalidDateInput::Month(12)));
        assert_eq!(CalendarDate::new(2023, 1, 29), Err(InvalidDateInput::Day{ year: 2023, month: 1, day: 29 }));
        assert!(CalendarDate::new(2024, 1, 0).is_err());
        assert!(CalendarDate::new(2024, 1, 29).is_ok());
    }

    #[test]
    fn test_iso() {
        assert_eq!(CalendarDate::new(2024, 0, 5).unwrap().iso(), "2024-01-05");
        assert_eq!(CalendarDate::new(987, 11, 31).unwrap().to_string(), "0987-12-31");
        assert_eq!(YearMonth::new(2024, 8).unwrap().to_string(), "2024-09");
    }

    #[test]
    fn test_week_of() {
        let thursday = NaiveDate::from_ymd_opt(2023, 11, 16).unwrap();
        let week = week_of(thursday).unwrap();
        assert_eq!(week[0], NaiveDate::from_ymd_opt(2023, 11, 12).unwrap());
        assert_eq!(week[6], NaiveDate::from_ymd_opt(2023, 11, 18).unwrap());

        let sunday = NaiveDate::from_ymd_opt(2023, 11, 12).unwrap();
        assert_eq!(week_of(sunday).unwrap(), week);

        // Crossing a year boundary
        let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(week_of(new_year).unwrap()[0], NaiveDate::from_ymd_opt(2024, 12, 29).unwrap());
    }
}
