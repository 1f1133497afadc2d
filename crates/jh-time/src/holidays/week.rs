//! Week classification and substitute-holiday inference.
//!
//! Substitute holidays depend on neighbouring days, so holidays are computed
//! a whole week at a time: the eight slots run from the Sunday of the week
//! through the following Sunday, which is only a lookahead for the Saturday.
//!
//! Two amendments are applied in order, each gated on the year of the date
//! the week was requested for:
//!
//! 1. From 1973, a holiday on Sunday moves to the first non-holiday day of
//!    the same week ([`apply_bridge_rule`]).
//! 2. From 1986, a non-holiday squeezed between two holidays becomes a
//!    holiday ([`apply_sandwich_rule`]). It sees the output of rule 1.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

use jh_core::Year;
use tracing::trace;

use super::resolver::HolidayResolver;
use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;

/// Name given to inferred substitute holidays.
pub const SUBSTITUTE_HOLIDAY: &str = "休日";

/// First year in which a Sunday holiday is carried over.
pub const BRIDGE_RULE_SINCE: Year = 1973;

/// First year in which a day between two holidays becomes a holiday.
pub const SANDWICH_RULE_SINCE: Year = 1986;

/// Holiday names for Sunday..Saturday plus the following Sunday.
pub type WeekSlots = [Option<&'static str>; 8];

/// Carry a Sunday holiday over to the first free day of the week.
///
/// At most one day is promoted. No-op before [`BRIDGE_RULE_SINCE`].
pub fn apply_bridge_rule(mut week: WeekSlots, year: Year) -> WeekSlots {
    if year < BRIDGE_RULE_SINCE || week[0].is_none() {
        return week;
    }
    if let Some(slot) = week[1..7].iter_mut().find(|s| s.is_none()) {
        *slot = Some(SUBSTITUTE_HOLIDAY);
    }
    week
}

/// Promote every free weekday slot whose neighbours are both holidays.
///
/// Slots 1..=6 are scanned in ascending order. No-op before
/// [`SANDWICH_RULE_SINCE`].
pub fn apply_sandwich_rule(mut week: WeekSlots, year: Year) -> WeekSlots {
    if year < SANDWICH_RULE_SINCE {
        return week;
    }
    for i in 1..7 {
        if week[i].is_none() && week[i - 1].is_some() && week[i + 1].is_some() {
            week[i] = Some(SUBSTITUTE_HOLIDAY);
        }
    }
    week
}

/// Cache key: the requesting date's year and month plus its week row
/// within that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekKey {
    /// Year of the requesting date.
    pub year: Year,
    /// Month of the requesting date.
    pub month: Month,
    /// Row of the week in a Sunday-first month grid (0–5).
    pub week: u8,
}

impl WeekKey {
    /// Key for the week containing `date`.
    pub fn of(date: Date) -> Self {
        let first = date.first_of_month().weekday().index();
        WeekKey {
            year: date.year(),
            month: date.month(),
            week: (first + date.day_of_month() - 1) / 7,
        }
    }

    /// Flattened integer form, `(year * 12 + month0) * 6 + week`.
    pub fn ordinal(&self) -> u32 {
        (self.year as u32 * 12 + self.month.index() as u32) * 6 + self.week as u32
    }
}

/// Holiday status of one week, Sunday first, with a one-day lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekClassification {
    start: Date,
    slots: WeekSlots,
}

impl WeekClassification {
    /// The Sunday that opens the week.
    pub fn start(&self) -> Date {
        self.start
    }

    /// All eight slots; index 7 is the following Sunday.
    pub fn slots(&self) -> &WeekSlots {
        &self.slots
    }

    /// Holiday name on `weekday` of this week.
    pub fn get(&self, weekday: Weekday) -> Option<&'static str> {
        self.slots[weekday.index() as usize]
    }

    /// Status of the following Sunday as seen from this week.
    ///
    /// Substitute rules are applied per week, so this may differ from the
    /// classification of that Sunday in its own week.
    pub fn lookahead(&self) -> Option<&'static str> {
        self.slots[7]
    }

    /// The seven visible days with their holiday names.
    pub fn days(&self) -> impl Iterator<Item = (Date, Option<&'static str>)> + '_ {
        self.slots[..7]
            .iter()
            .enumerate()
            .map(move |(i, name)| (self.start + i as i32, *name))
    }
}

impl std::ops::Index<Weekday> for WeekClassification {
    type Output = Option<&'static str>;

    fn index(&self, weekday: Weekday) -> &Self::Output {
        &self.slots[weekday.index() as usize]
    }
}

static GLOBAL: LazyLock<WeekClassifier<'static>> =
    LazyLock::new(|| WeekClassifier::new(HolidayResolver::default()));

/// Classifies whole weeks and memoizes the result per [`WeekKey`].
///
/// The cache only grows. Entries are pure functions of their key, so two
/// threads racing on the same key compute the same value and either insert
/// wins.
#[derive(Debug)]
pub struct WeekClassifier<'a> {
    resolver: HolidayResolver<'a>,
    cache: Mutex<HashMap<WeekKey, WeekClassification>>,
}

impl WeekClassifier<'static> {
    /// The process-wide classifier over the built-in rule table.
    pub fn global() -> &'static WeekClassifier<'static> {
        &GLOBAL
    }
}

impl<'a> WeekClassifier<'a> {
    /// Create a classifier with an empty cache.
    pub fn new(resolver: HolidayResolver<'a>) -> Self {
        WeekClassifier {
            resolver,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Classify the week containing `date`.
    pub fn classify_week(&self, date: Date) -> WeekClassification {
        let key = WeekKey::of(date);
        if let Some(hit) = self.lock().get(&key) {
            return *hit;
        }

        trace!(key = key.ordinal(), %date, "week cache miss");
        let computed = self.compute(date);
        *self.lock().entry(key).or_insert(computed)
    }

    /// Holiday name of `date`, including substitute holidays.
    pub fn holiday_of(&self, date: Date) -> Option<&'static str> {
        self.classify_week(date)[date.weekday()]
    }

    /// Number of memoized weeks.
    pub fn cached_weeks(&self) -> usize {
        self.lock().len()
    }

    fn compute(&self, date: Date) -> WeekClassification {
        let sunday = date.serial() - date.weekday().index() as i32;
        let mut slots: WeekSlots = [None; 8];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = Date::from_serial(sunday + i as i32)
                .ok()
                .and_then(|d| self.resolver.resolve(d));
        }

        let year = date.year();
        let slots = apply_sandwich_rule(apply_bridge_rule(slots, year), year);
        WeekClassification {
            // Only the week of 0001-01-01 starts before the valid range.
            start: Date::from_serial(sunday).unwrap_or(Date::MIN),
            slots,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<WeekKey, WeekClassification>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
