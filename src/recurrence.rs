//! Repeating tasks and events
//!
//! The server does not store recurrence rules: when a repeating item is created, it creates one copy per occurrence over a
//! fixed horizon. This module computes the dates of these copies (the original date is never part of the result).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use bitflags::bitflags;
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Number of daily copies
const DAILY_COUNT: u32 = 365;
/// Number of weekly copies
const WEEKLY_COUNT: u32 = 52;
/// Number of monthly copies
const MONTHLY_COUNT: u32 = 12;
/// Number of yearly copies
const YEARLY_COUNT: u32 = 5;
/// How many days ahead "every weekday" events are created
const WEEKDAYS_HORIZON: u64 = 90;
/// How many days ahead "every <day name>" events are created (12 weeks)
const DAY_OF_WEEK_HORIZON: u64 = 84;


/// How a recurring task repeats
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    /// Same day every month. Days that do not exist in a month (e.g. the 31st) fall back to its last day
    Monthly,
    /// Same day every year. February 29th falls back to the 28th on common years
    Yearly,
}

impl Recurrence {
    /// The dates of the copies created after `start`
    pub fn following_dates(&self, start: NaiveDate) -> Vec<NaiveDate> {
        match self {
            Recurrence::Daily => (1..=DAILY_COUNT)
                .filter_map(|i| start.checked_add_days(Days::new(i.into())))
                .collect(),
            Recurrence::Weekly => (1..=WEEKLY_COUNT)
                .filter_map(|i| start.checked_add_days(Days::new(u64::from(i) * 7)))
                .collect(),
            Recurrence::Monthly => (1..=MONTHLY_COUNT)
                .filter_map(|i| start.checked_add_months(Months::new(i)))
                .collect(),
            Recurrence::Yearly => (1..=YEARLY_COUNT)
                .filter_map(|i| start.checked_add_months(Months::new(i * 12)))
                .collect(),
        }
    }
}

impl FromStr for Recurrence {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            "yearly" => Ok(Recurrence::Yearly),
            other => Err(format!("Unknown recurrence {:?}", other)),
        }
    }
}

impl Display for Recurrence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Recurrence::Daily => write!(f, "daily"),
            Recurrence::Weekly => write!(f, "weekly"),
            Recurrence::Monthly => write!(f, "monthly"),
            Recurrence::Yearly => write!(f, "yearly"),
        }
    }
}


bitflags! {
    /// A set of days of the week
    pub struct WeekdaySet: u8 {
        const MONDAY = 1;
        const TUESDAY = 1 << 1;
        const WEDNESDAY = 1 << 2;
        const THURSDAY = 1 << 3;
        const FRIDAY = 1 << 4;
        const SATURDAY = 1 << 5;
        const SUNDAY = 1 << 6;
        /// Monday to Friday
        const WORKING_DAYS = Self::MONDAY.bits | Self::TUESDAY.bits | Self::WEDNESDAY.bits | Self::THURSDAY.bits | Self::FRIDAY.bits;
    }
}

impl WeekdaySet {
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::MONDAY,
            Weekday::Tue => Self::TUESDAY,
            Weekday::Wed => Self::WEDNESDAY,
            Weekday::Thu => Self::THURSDAY,
            Weekday::Fri => Self::FRIDAY,
            Weekday::Sat => Self::SATURDAY,
            Weekday::Sun => Self::SUNDAY,
        }
    }

    pub fn contains_weekday(&self, weekday: Weekday) -> bool {
        self.contains(Self::from_weekday(weekday))
    }
}


/// How a calendar event repeats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventFrequency {
    None,
    Daily,
    Weekly,
    /// Monday to Friday, over the next 90 days
    Weekdays,
    /// Given days of the week, over the next 12 weeks
    On(WeekdaySet),
}

impl EventFrequency {
    /// The dates of the copies created after `start`
    pub fn following_dates(&self, start: NaiveDate) -> Vec<NaiveDate> {
        match self {
            EventFrequency::None => Vec::new(),
            EventFrequency::Daily => Recurrence::Daily.following_dates(start),
            EventFrequency::Weekly => Recurrence::Weekly.following_dates(start),
            EventFrequency::Weekdays => days_matching(start, WEEKDAYS_HORIZON, WeekdaySet::WORKING_DAYS),
            EventFrequency::On(days) => days_matching(start, DAY_OF_WEEK_HORIZON, *days),
        }
    }
}

impl Default for EventFrequency {
    fn default() -> Self {
        EventFrequency::None
    }
}

impl FromStr for EventFrequency {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weekday = match s {
            "none" => return Ok(EventFrequency::None),
            "daily" => return Ok(EventFrequency::Daily),
            "weekly" => return Ok(EventFrequency::Weekly),
            "weekday" => return Ok(EventFrequency::Weekdays),
            "monday" => Weekday::Mon,
            "tuesday" => Weekday::Tue,
            "wednesday" => Weekday::Wed,
            "thursday" => Weekday::Thu,
            "friday" => Weekday::Fri,
            "saturday" => Weekday::Sat,
            "sunday" => Weekday::Sun,
            other => return Err(format!("Unknown event frequency {:?}", other)),
        };
        Ok(EventFrequency::On(WeekdaySet::from_weekday(weekday)))
    }
}

fn days_matching(start: NaiveDate, horizon: u64, days: WeekdaySet) -> Vec<NaiveDate> {
    (1..=horizon)
        .filter_map(|i| start.checked_add_days(Days::new(i)))
        .filter(|date| days.contains_weekday(date.weekday()))
        .collect()
}
