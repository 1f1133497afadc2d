//! Base holiday resolution for a single date.

use super::rule::{DaySelector, HolidayRule};
use super::table::RuleTable;
use crate::date::Date;
use crate::equinox::{autumn_equinox, vernal_equinox};
use crate::weekday::Weekday;

/// Evaluates a [`RuleTable`] for individual dates.
///
/// Substitute holidays are not considered here; see
/// [`WeekClassifier`](super::week::WeekClassifier).
#[derive(Debug, Clone, Copy)]
pub struct HolidayResolver<'a> {
    table: &'a RuleTable,
}

impl Default for HolidayResolver<'static> {
    fn default() -> Self {
        HolidayResolver::new(RuleTable::builtin())
    }
}

impl<'a> HolidayResolver<'a> {
    /// Create a resolver over `table`.
    pub fn new(table: &'a RuleTable) -> Self {
        HolidayResolver { table }
    }

    /// Return the rule that makes `date` a holiday, if any.
    ///
    /// Precedence, first match wins: fixed day of month, n-th Monday,
    /// vernal equinox, autumnal equinox. Within each step the first rule in
    /// table order whose year range contains the date's year is chosen.
    pub fn resolve_rule(&self, date: Date) -> Option<&'a HolidayRule> {
        let (year, _, day) = date.ymd();
        let month = date.month();
        let first_active = |selector| {
            self.table
                .rules_for(month, selector)
                .find(|r| r.is_active(year))
        };

        if let Some(r) = first_active(DaySelector::FixedDay(day)) {
            return Some(r);
        }
        if date.weekday() == Weekday::Monday {
            let nth = 1 + (day - 1) / 7;
            if let Some(r) = first_active(DaySelector::NthMonday(nth)) {
                return Some(r);
            }
        }
        if let Some(r) = first_active(DaySelector::VernalEquinox) {
            if vernal_equinox(year).day_of_month() == day {
                return Some(r);
            }
        }
        if let Some(r) = first_active(DaySelector::AutumnEquinox) {
            if autumn_equinox(year).day_of_month() == day {
                return Some(r);
            }
        }
        None
    }

    /// Return the base holiday name of `date`, if any.
    pub fn resolve(&self, date: Date) -> Option<&'static str> {
        self.resolve_rule(date).map(HolidayRule::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_day_before_nth_monday() {
        let table = RuleTable::new(vec![
            HolidayRule::new("nth", Month::June, DaySelector::NthMonday(1), None, None),
            HolidayRule::new("fixed", Month::June, DaySelector::FixedDay(2), None, None),
        ]);
        let r = HolidayResolver::new(&table);
        // 2025-06-02 is the first Monday of June
        assert_eq!(r.resolve(date(2025, 6, 2)), Some("fixed"));
        // 2026-06-01 is the first Monday of June, no fixed rule
        assert_eq!(r.resolve(date(2026, 6, 1)), Some("nth"));
    }

    #[test]
    fn first_declared_wins_on_overlap() {
        let table = RuleTable::new(vec![
            HolidayRule::new("first", Month::June, DaySelector::FixedDay(10), None, None),
            HolidayRule::new("second", Month::June, DaySelector::FixedDay(10), Some(2000), None),
        ]);
        let r = HolidayResolver::new(&table);
        assert_eq!(r.resolve(date(2010, 6, 10)), Some("first"));
    }

    #[test]
    fn resolve_rule_identity() {
        let r = HolidayResolver::default();
        let rule = r.resolve_rule(date(1966, 9, 15)).unwrap();
        assert_eq!(rule.selector(), DaySelector::FixedDay(15));
        let rule = r.resolve_rule(date(2003, 9, 15)).unwrap();
        assert_eq!(rule.selector(), DaySelector::NthMonday(3));
    }

    #[test]
    fn plain_day() {
        let r = HolidayResolver::default();
        assert_eq!(r.resolve(date(2023, 6, 15)), None);
    }
}
