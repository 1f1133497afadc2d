//! Calendar matrices built on the holiday classifier.

use jh_time::holidays::{HolidayResolver, WeekClassifier};
use jh_time::matrix::{DEFAULT_NEXT_WEEKS, DEFAULT_PAST_WEEKS};
use jh_time::{CalendarMatrixBuilder, Date, Month, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn monthly_matrix_is_padded_to_whole_weeks() {
    let b = CalendarMatrixBuilder::default();

    // March 2024 starts on a Friday and ends on a Sunday.
    let m = b.monthly_matrix(2024, Month::March).unwrap();
    assert_eq!(m.weeks().len(), 6);
    assert_eq!(m.weeks()[0][0].date(), date(2024, 2, 25));
    assert_eq!(m.weeks()[5][6].date(), date(2024, 4, 6));
    assert!(!m.is_in_month(date(2024, 2, 29)));
    assert!(m.is_in_month(date(2024, 3, 1)));

    // February 2015 fills exactly four rows.
    let m = b.monthly_matrix(2015, Month::February).unwrap();
    assert_eq!(m.weeks().len(), 4);
    assert_eq!(m.weeks()[0][0].date(), date(2015, 2, 1));
    assert_eq!(m.weeks()[3][6].date(), date(2015, 2, 28));
}

#[test]
fn rows_are_sunday_first_and_contiguous() {
    let b = CalendarMatrixBuilder::default();
    let m = b.monthly_matrix(2019, Month::May).unwrap();
    let mut expected = m.weeks()[0][0].date();
    for row in m.weeks() {
        assert_eq!(row[0].weekday(), Weekday::Sunday);
        for day in row {
            assert_eq!(day.date(), expected);
            expected += 1;
        }
    }
}

#[test]
fn month_holidays_exclude_padding() {
    let b = CalendarMatrixBuilder::default();
    let m = b.monthly_matrix(2019, Month::May).unwrap();
    let days: Vec<u8> = m.holidays().map(|d| d.date().day_of_month()).collect();
    assert_eq!(days, [1, 2, 3, 4, 5, 6]);

    // The padding still carries its own holidays (April 29/30).
    let padding: Vec<_> = m.weeks()[0]
        .iter()
        .filter(|d| !m.is_in_month(d.date()) && d.is_holiday())
        .map(|d| d.holiday().unwrap())
        .collect();
    assert_eq!(padding, ["昭和の日", "休日"]);
}

#[test]
fn month_dates_carry_holidays() {
    let b = CalendarMatrixBuilder::default();
    let dates = b.month_dates(2020, Month::January).unwrap();
    assert_eq!(dates.len(), 31);
    assert_eq!(dates[0].holiday(), Some("元日"));
    assert_eq!(dates[12].holiday(), Some("成人の日"));
    assert_eq!(dates.iter().filter(|d| d.is_holiday()).count(), 2);
}

#[test]
fn yearly_has_twelve_months() {
    let b = CalendarMatrixBuilder::default();
    let year = b.yearly(2026).unwrap();
    assert_eq!(year.len(), 12);
    for (m, month) in Month::ALL.iter().zip(&year) {
        assert_eq!(month.month(), *m);
        assert_eq!(month.year(), 2026);
        assert!((4..=6).contains(&month.weeks().len()));
    }
    let total: usize = year.iter().map(|m| m.holidays().count()).sum();
    assert_eq!(total, 18);
}

#[test]
fn fifteen_week_window() {
    let b = CalendarMatrixBuilder::default();
    let anchor = date(2024, 5, 1);
    let w = b
        .week_window(anchor, DEFAULT_PAST_WEEKS, DEFAULT_NEXT_WEEKS)
        .unwrap();
    assert_eq!(w.weeks().len(), 15);
    assert_eq!(w.anchor(), anchor);
    assert_eq!(w.anchor_row(), 7);
    assert!(w.weeks()[7].iter().any(|d| d.date() == anchor));
    assert_eq!(w.weeks()[0][0].date(), date(2024, 3, 10));
    assert_eq!(w.weeks()[14][6].date(), date(2024, 6, 22));
    assert!(w.holidays().any(|d| d.date() == date(2024, 5, 6)));
}

#[test]
fn window_at_the_end_of_the_range_fails() {
    let b = CalendarMatrixBuilder::default();
    assert!(b.week_window(Date::MAX, 0, 1).is_err());
    assert!(b.monthly_matrix(9999, Month::December).is_err());
    assert!(b.monthly_matrix(2024, Month::March).is_ok());
}

#[test]
fn builder_uses_given_classifier() {
    let classifier = WeekClassifier::new(HolidayResolver::default());
    let b = CalendarMatrixBuilder::new(&classifier);
    b.monthly_matrix(2024, Month::May).unwrap();
    assert!(classifier.cached_weeks() >= 5);
}
