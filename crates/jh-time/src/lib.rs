//! # jh-time
//!
//! Calendar dates, equinoxes, Japanese national holiday rules, and calendar
//! matrices.
//!
//! ```
//! use jh_time::{holiday_of, Date};
//!
//! let d = Date::from_ymd(2020, 1, 13).unwrap();
//! assert_eq!(holiday_of(d), Some("成人の日"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Vernal and autumnal equinox dates.
pub mod equinox;

/// Holiday rules, resolution, and week classification.
pub mod holidays;

/// Month, year, and week-window matrices.
pub mod matrix;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use equinox::{autumn_equinox, vernal_equinox};
pub use holidays::{
    classify_week, holiday_of, DaySelector, HolidayDate, HolidayResolver, HolidayRule,
    RuleTable, WeekClassification, WeekClassifier, SUBSTITUTE_HOLIDAY,
};
pub use matrix::{CalendarMatrixBuilder, MonthMatrix, WeekRow, WeekWindow};
pub use month::Month;
pub use weekday::Weekday;
