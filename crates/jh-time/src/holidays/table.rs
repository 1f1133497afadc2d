//! The holiday rule table.
//!
//! Rules live in one arena (`Vec<HolidayRule>`) in declaration order. A
//! per-month index groups arena positions by [`DaySelector`], preserving that
//! order inside each group so the first active rule wins.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

use super::rule::{DaySelector, HolidayRule};
use crate::month::Month;

use DaySelector::{AutumnEquinox, FixedDay, NthMonday, VernalEquinox};
use Month::*;

const fn rule(
    name: &'static str,
    month: Month,
    selector: DaySelector,
    from: Option<u16>,
    to: Option<u16>,
) -> HolidayRule {
    HolidayRule::new(name, month, selector, from, to)
}

/// Japanese national holidays, 1948 onward.
pub const JAPANESE_HOLIDAYS: [HolidayRule; 26] = [
    rule("元日", January, FixedDay(1), None, None),
    rule("成人の日", January, FixedDay(15), None, Some(1999)),
    rule("成人の日", January, NthMonday(2), Some(2000), None),
    rule("建国記念の日", February, FixedDay(11), None, None),
    rule("春分の日", March, VernalEquinox, None, None),
    rule("憲法記念日", May, FixedDay(3), None, None),
    rule("みどりの日", May, FixedDay(4), Some(2007), None),
    rule("こどもの日", May, FixedDay(5), None, None),
    rule("海の日", July, FixedDay(20), Some(1996), Some(2002)),
    rule("海の日", July, NthMonday(3), Some(2003), None),
    rule("山の日", August, FixedDay(11), Some(2016), None),
    rule("敬老の日", September, FixedDay(15), Some(1966), Some(2002)),
    rule("敬老の日", September, NthMonday(3), Some(2003), None),
    rule("秋分の日", September, AutumnEquinox, None, None),
    rule("体育の日", October, FixedDay(10), None, Some(1999)),
    rule("体育の日", October, NthMonday(2), Some(2000), Some(2019)),
    rule("スポーツの日", October, NthMonday(2), Some(2020), None),
    rule("文化の日", November, FixedDay(3), None, None),
    rule("勤労感謝の日", November, FixedDay(23), None, None),
    // Showa
    rule("天皇誕生日", April, FixedDay(29), None, Some(1988)),
    rule("みどりの日", April, FixedDay(29), Some(1989), Some(2006)),
    rule("昭和の日", April, FixedDay(29), Some(2007), None),
    // Heisei
    rule("天皇誕生日", December, FixedDay(23), Some(1989), Some(2018)),
    // Reiwa
    rule("天皇の即位の日", May, FixedDay(1), Some(2019), Some(2019)),
    rule("即位礼正殿の儀が行われる日", October, FixedDay(22), Some(2019), Some(2019)),
    rule("天皇誕生日", February, FixedDay(23), Some(2020), None),
];

static BUILTIN: LazyLock<RuleTable> = LazyLock::new(|| {
    let table = RuleTable::new(JAPANESE_HOLIDAYS.to_vec());
    debug!(
        rules = table.len(),
        groups = table.group_count(),
        "indexed built-in holiday rules"
    );
    table
});

/// Immutable, indexed set of holiday rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<HolidayRule>,
    index: [HashMap<DaySelector, Vec<usize>>; 12],
}

impl RuleTable {
    /// Index `rules`, keeping their declaration order within each
    /// `(month, selector)` group.
    pub fn new(rules: Vec<HolidayRule>) -> Self {
        let mut index: [HashMap<DaySelector, Vec<usize>>; 12] =
            std::array::from_fn(|_| HashMap::new());
        for (i, r) in rules.iter().enumerate() {
            index[r.month().index()]
                .entry(r.selector())
                .or_default()
                .push(i);
        }
        RuleTable { rules, index }
    }

    /// The process-wide table of Japanese national holidays.
    pub fn builtin() -> &'static RuleTable {
        &BUILTIN
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of distinct `(month, selector)` groups.
    pub fn group_count(&self) -> usize {
        self.index.iter().map(HashMap::len).sum()
    }

    /// Rules for `(month, selector)` in declaration order.
    pub fn rules_for(
        &self,
        month: Month,
        selector: DaySelector,
    ) -> impl Iterator<Item = &HolidayRule> + '_ {
        self.index[month.index()]
            .get(&selector)
            .into_iter()
            .flatten()
            .map(move |&i| &self.rules[i])
    }

    /// All rules of `month` in declaration order.
    pub fn month_rules(&self, month: Month) -> impl Iterator<Item = &HolidayRule> + '_ {
        self.rules.iter().filter(move |r| r.month() == month)
    }
}
