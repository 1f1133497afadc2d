//! Japanese national holidays.
//!
//! [`holiday_of`] is the entry point for everything that only needs to know
//! whether a date is a holiday. The layers underneath are:
//!
//! * [`RuleTable`]: the built-in rule list, indexed by month and selector;
//! * [`HolidayResolver`]: base holidays for a single date;
//! * [`WeekClassifier`]: whole-week classification with substitute
//!   holidays, memoized per week.

pub mod holiday_date;
pub mod resolver;
pub mod rule;
pub mod table;
pub mod week;

pub use holiday_date::HolidayDate;
pub use resolver::HolidayResolver;
pub use rule::{DaySelector, HolidayRule, FIRST_RULE_YEAR, OPEN_END_YEAR};
pub use table::{RuleTable, JAPANESE_HOLIDAYS};
pub use week::{
    apply_bridge_rule, apply_sandwich_rule, WeekClassification, WeekClassifier, WeekKey,
    WeekSlots, BRIDGE_RULE_SINCE, SANDWICH_RULE_SINCE, SUBSTITUTE_HOLIDAY,
};

use crate::date::Date;

/// Holiday name of `date`, substitute holidays included.
///
/// Dates before 1948 and dates that match no rule return `None`.
///
/// ```
/// use jh_time::{holiday_of, Date};
/// let d = Date::from_ymd(2019, 4, 30).unwrap();
/// assert_eq!(holiday_of(d), Some("休日"));
/// ```
pub fn holiday_of(date: Date) -> Option<&'static str> {
    WeekClassifier::global().holiday_of(date)
}

/// Classification of the week containing `date`, from the process-wide
/// classifier.
pub fn classify_week(date: Date) -> WeekClassification {
    WeekClassifier::global().classify_week(date)
}
