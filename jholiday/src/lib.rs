//! # jholiday
//!
//! Japanese national holidays from 1948 onward, including substitute
//! holidays.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on `jh-core` / `jh-time` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use jholiday::{holiday_of, Date};
//!
//! let d = Date::from_ymd(2019, 5, 1).unwrap();
//! assert_eq!(holiday_of(d), Some("天皇の即位の日"));
//!
//! let d = Date::from_ymd(2019, 5, 2).unwrap();
//! assert_eq!(holiday_of(d), Some("休日"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use jh_core as core;

/// Dates, holiday rules, and calendar matrices.
pub use jh_time as time;

pub use jh_core::{Error, Result};
pub use jh_time::{
    autumn_equinox, classify_week, holiday_of, vernal_equinox, CalendarMatrixBuilder, Date,
    HolidayDate, Month, MonthMatrix, Weekday, WeekWindow,
};
