//! Vernal and autumnal equinox dates.
//!
//! Each equinox instant is modelled as an affine function of the year,
//! `instant = (year - 1970) * TROPICAL_YEAR + offset`, in fixed-point units of
//! a tenth of a millisecond measured from local midnight, January 1 1970.
//! Only the calendar day of the instant is used.
//!
//! The constants are calibrated so the formula reproduces the equinox dates
//! proclaimed in Japan across roughly 1900–2100. It is an approximation and
//! not ephemeris-accurate; do not retune the constants independently.

use jh_core::Year;

use crate::date::Date;

/// Length of one tropical year in tenths of a millisecond (≈ 365.2422 days).
const TROPICAL_YEAR: i64 = 315_569_255_616;

/// Vernal equinox instant in 1970, relative to local 1970-01-01 00:00.
const VERNAL_OFFSET: i64 = 68_619_916_800;

/// Autumnal equinox instant in 1970, relative to local 1970-01-01 00:00.
const AUTUMN_OFFSET: i64 = 229_674_407_040;

/// Tenths of a millisecond in one calendar day.
const UNITS_PER_DAY: i64 = 864_000_000;

/// Reference year of both offsets.
const EPOCH_YEAR: i64 = 1970;

fn equinox(year: Year, offset: i64) -> Date {
    let instant = (year as i64 - EPOCH_YEAR) * TROPICAL_YEAR + offset;
    let serial = instant.div_euclid(UNITS_PER_DAY) as i32;
    // March and September of 1..=9999 are always inside the date range.
    Date::from_serial(serial).expect("year outside 1..=9999")
}

/// Calendar date of the vernal (March) equinox in `year`.
///
/// # Panics
///
/// If `year` is outside `1..=9999`.
///
/// ```
/// use jh_time::equinox::vernal_equinox;
/// assert_eq!(vernal_equinox(2024).to_string(), "2024-03-20");
/// ```
pub fn vernal_equinox(year: Year) -> Date {
    equinox(year, VERNAL_OFFSET)
}

/// Calendar date of the autumnal (September) equinox in `year`.
///
/// # Panics
///
/// If `year` is outside `1..=9999`.
///
/// ```
/// use jh_time::equinox::autumn_equinox;
/// assert_eq!(autumn_equinox(2024).to_string(), "2024-09-22");
/// ```
pub fn autumn_equinox(year: Year) -> Date {
    equinox(year, AUTUMN_OFFSET)
}
