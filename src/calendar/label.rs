//! Month captions ("February 2024")

use std::convert::TryFrom;

use chrono::Month;

use super::YearMonth;

/// Turns a month into the text displayed above its grid
pub trait MonthLabeler {
    fn label(&self, month: YearMonth) -> String;
}

impl<T: MonthLabeler + ?Sized> MonthLabeler for &T {
    fn label(&self, month: YearMonth) -> String {
        (**self).label(month)
    }
}

/// English month names, e.g. "September 2024"
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnglishLabeler;

impl MonthLabeler for EnglishLabeler {
    fn label(&self, month: YearMonth) -> String {
        // A YearMonth is always in 0..=11, hence `month + 1` is a valid chrono Month
        let name = u8::try_from(month.month() + 1)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("?");
        format!("{} {}", name, month.year())
    }
}

/// Month names in any language chrono knows about, e.g. "septembre 2024" for `fr_FR`
#[cfg(feature = "locales")]
#[derive(Clone, Copy, Debug)]
pub struct LocalizedLabeler {
    locale: chrono::Locale,
}

#[cfg(feature = "locales")]
impl LocalizedLabeler {
    pub fn new(locale: chrono::Locale) -> Self {
        Self { locale }
    }
}

#[cfg(feature = "locales")]
impl MonthLabeler for LocalizedLabeler {
    fn label(&self, month: YearMonth) -> String {
        match month.first_day() {
            Ok(date) => date.format_localized("%B %Y", self.locale).to_string(),
            Err(_) => EnglishLabeler.label(month),
        }
    }
}
