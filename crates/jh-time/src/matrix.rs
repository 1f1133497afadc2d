//! Calendar matrices: months, years, and week windows laid out as
//! Sunday-first rows of seven [`HolidayDate`]s.
//!
//! This module only produces data. Rendering (terminal, HTML, …) belongs to
//! the caller.

use jh_core::errors::{Error, Result};
use jh_core::Year;

use crate::date::Date;
use crate::holidays::{HolidayDate, WeekClassifier};
use crate::month::Month;

/// Default number of weeks shown before the anchor week.
pub const DEFAULT_PAST_WEEKS: u32 = 7;

/// Default number of weeks shown after the anchor week.
pub const DEFAULT_NEXT_WEEKS: u32 = 7;

/// One row of a calendar, Sunday first.
pub type WeekRow = [HolidayDate; 7];

/// A month padded to whole weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthMatrix {
    year: Year,
    month: Month,
    weeks: Vec<WeekRow>,
}

impl MonthMatrix {
    /// Year of the month.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Rows of the month, including padding days of adjacent months.
    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// Whether `date` belongs to this month rather than the padding.
    pub fn is_in_month(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Holidays inside the month (padding excluded), in date order.
    pub fn holidays(&self) -> impl Iterator<Item = &HolidayDate> + '_ {
        self.weeks
            .iter()
            .flatten()
            .filter(move |d| d.is_holiday() && self.is_in_month(d.date()))
    }
}

/// Consecutive weeks around an anchor date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    anchor: Date,
    past: u32,
    weeks: Vec<WeekRow>,
}

impl WeekWindow {
    /// The date the window is centred on.
    pub fn anchor(&self) -> Date {
        self.anchor
    }

    /// Row index of the anchor's week.
    pub fn anchor_row(&self) -> usize {
        self.past as usize
    }

    /// All rows, oldest first.
    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// Holidays in the window, in date order.
    pub fn holidays(&self) -> impl Iterator<Item = &HolidayDate> + '_ {
        self.weeks.iter().flatten().filter(|d| d.is_holiday())
    }
}

/// Builds calendar matrices on top of a [`WeekClassifier`].
#[derive(Debug, Clone, Copy)]
pub struct CalendarMatrixBuilder<'c> {
    classifier: &'c WeekClassifier<'c>,
}

impl Default for CalendarMatrixBuilder<'static> {
    fn default() -> Self {
        CalendarMatrixBuilder::new(WeekClassifier::global())
    }
}

impl<'c> CalendarMatrixBuilder<'c> {
    /// Create a builder using `classifier` for holiday lookups.
    pub fn new(classifier: &'c WeekClassifier<'c>) -> Self {
        CalendarMatrixBuilder { classifier }
    }

    fn holiday_date(&self, date: Date) -> HolidayDate {
        HolidayDate::with_classifier(date, self.classifier)
    }

    /// `weeks` consecutive rows starting on `sunday`.
    fn rows(&self, sunday: Date, weeks: u32) -> Result<Vec<WeekRow>> {
        let mut rows = Vec::with_capacity(weeks as usize);
        for w in 0..weeks {
            let first = sunday.add_days(7 * w as i32)?;
            // Validate the whole row before filling it.
            first.add_days(6)?;
            rows.push(std::array::from_fn(|i| self.holiday_date(first + i as i32)));
        }
        Ok(rows)
    }

    /// Every day of `month` in `year`.
    pub fn month_dates(&self, year: Year, month: Month) -> Result<Vec<HolidayDate>> {
        let first = Date::from_ymd(year, month.number(), 1)?;
        let last = first.end_of_month();
        Ok((0..=(last - first))
            .map(|i| self.holiday_date(first + i))
            .collect())
    }

    /// `month` of `year`, padded back to a Sunday and forward to a Saturday.
    pub fn monthly_matrix(&self, year: Year, month: Month) -> Result<MonthMatrix> {
        let first = Date::from_ymd(year, month.number(), 1)?;
        let last = first.end_of_month();
        let start = first.add_days(-(first.weekday().index() as i32))?;
        let end = last.add_days(6 - last.weekday().index() as i32)?;
        let weeks = ((end - start + 1) / 7) as u32;
        Ok(MonthMatrix {
            year,
            month,
            weeks: self.rows(start, weeks)?,
        })
    }

    /// The twelve monthly matrices of `year`.
    pub fn yearly(&self, year: Year) -> Result<Vec<MonthMatrix>> {
        Month::ALL
            .iter()
            .map(|&m| self.monthly_matrix(year, m))
            .collect()
    }

    /// `past + 1 + next` weeks with `anchor`'s week at row `past`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the window is longer than
    /// the whole date range, and with [`Error::Date`] when it runs off
    /// either end.
    pub fn week_window(&self, anchor: Date, past: u32, next: u32) -> Result<WeekWindow> {
        let total = past as u64 + 1 + next as u64;
        if total * 7 > (Date::MAX - Date::MIN) as u64 {
            return Err(Error::InvalidArgument(format!(
                "week window of {total} weeks exceeds the date range"
            )));
        }
        let sunday = anchor.add_days(-(anchor.weekday().index() as i32))?;
        let start = sunday.add_days(-7 * past as i32)?;
        Ok(WeekWindow {
            anchor,
            past,
            weeks: self.rows(start, total as u32)?,
        })
    }
}
