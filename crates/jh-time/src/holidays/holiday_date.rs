//! `HolidayDate`: a date paired with its resolved holiday.

use super::week::WeekClassifier;
use crate::date::Date;
use crate::weekday::Weekday;

/// A calendar date enriched with its holiday name, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidayDate {
    date: Date,
    holiday: Option<&'static str>,
}

impl HolidayDate {
    /// Look `date` up with the process-wide classifier.
    pub fn new(date: Date) -> Self {
        Self::with_classifier(date, WeekClassifier::global())
    }

    /// Look `date` up with an explicit classifier.
    pub fn with_classifier(date: Date, classifier: &WeekClassifier<'_>) -> Self {
        HolidayDate {
            date,
            holiday: classifier.holiday_of(date),
        }
    }

    /// The date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The holiday name, substitute holidays included.
    pub fn holiday(&self) -> Option<&'static str> {
        self.holiday
    }

    /// Whether the date is a holiday.
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }

    /// Shorthand for `self.date().weekday()`.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

impl std::fmt::Display for HolidayDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.holiday {
            Some(name) => write!(f, "{} {name}", self.date),
            None => write!(f, "{}", self.date),
        }
    }
}
