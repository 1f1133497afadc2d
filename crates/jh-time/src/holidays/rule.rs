//! Holiday rules and day selectors.

use jh_core::Year;

use crate::month::Month;

/// Earliest year covered by the rule set (the National Holidays Act took
/// effect in July 1948).
pub const FIRST_RULE_YEAR: Year = 1948;

/// Upper bound used for rules that are still in force.
pub const OPEN_END_YEAR: Year = 10_000;

/// How a rule picks its day within the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySelector {
    /// A fixed day of the month (1–31).
    FixedDay(u8),
    /// The n-th Monday of the month (1–5).
    NthMonday(u8),
    /// The day of the vernal equinox (March).
    VernalEquinox,
    /// The day of the autumnal equinox (September).
    AutumnEquinox,
}

/// A named holiday and the years in which it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRule {
    name: &'static str,
    month: Month,
    selector: DaySelector,
    valid_from: Year,
    valid_to: Year,
}

impl HolidayRule {
    /// Create a rule.
    ///
    /// A missing `valid_from` (or one earlier than [`FIRST_RULE_YEAR`]) is
    /// clamped to [`FIRST_RULE_YEAR`]; a missing `valid_to` is
    /// [`OPEN_END_YEAR`].
    pub const fn new(
        name: &'static str,
        month: Month,
        selector: DaySelector,
        valid_from: Option<Year>,
        valid_to: Option<Year>,
    ) -> Self {
        let valid_from = match valid_from {
            Some(y) if y > FIRST_RULE_YEAR => y,
            _ => FIRST_RULE_YEAR,
        };
        let valid_to = match valid_to {
            Some(y) => y,
            None => OPEN_END_YEAR,
        };
        HolidayRule {
            name,
            month,
            selector,
            valid_from,
            valid_to,
        }
    }

    /// Holiday name, e.g. `"元日"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Month the holiday falls in.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Day selector within the month.
    pub fn selector(&self) -> DaySelector {
        self.selector
    }

    /// First year (inclusive) in which the rule applies.
    pub fn valid_from(&self) -> Year {
        self.valid_from
    }

    /// Last year (inclusive) in which the rule applies.
    pub fn valid_to(&self) -> Year {
        self.valid_to
    }

    /// Whether the rule is in force in `year` (inclusive bounds).
    pub fn is_active(&self, year: Year) -> bool {
        self.valid_from <= year && year <= self.valid_to
    }

    /// Whether the year ranges of `self` and `other` share at least one year.
    pub fn overlaps(&self, other: &HolidayRule) -> bool {
        self.valid_from <= other.valid_to && other.valid_from <= self.valid_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_clamping() {
        let r = HolidayRule::new("元日", Month::January, DaySelector::FixedDay(1), None, None);
        assert_eq!(r.valid_from(), FIRST_RULE_YEAR);
        assert_eq!(r.valid_to(), OPEN_END_YEAR);

        let r = HolidayRule::new("x", Month::January, DaySelector::FixedDay(1), Some(0), Some(1999));
        assert_eq!(r.valid_from(), FIRST_RULE_YEAR);
        assert_eq!(r.valid_to(), 1999);
    }

    #[test]
    fn inclusive_bounds() {
        let r = HolidayRule::new("x", Month::July, DaySelector::FixedDay(20), Some(1996), Some(2002));
        assert!(!r.is_active(1995));
        assert!(r.is_active(1996));
        assert!(r.is_active(2002));
        assert!(!r.is_active(2003));
    }

    #[test]
    fn overlap() {
        let a = HolidayRule::new("a", Month::May, DaySelector::FixedDay(1), Some(2019), Some(2019));
        let b = HolidayRule::new("b", Month::May, DaySelector::FixedDay(1), Some(2020), None);
        let c = HolidayRule::new("c", Month::May, DaySelector::FixedDay(1), Some(2010), Some(2019));
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }
}
