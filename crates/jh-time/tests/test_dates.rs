//! Date arithmetic and civil-calendar conversions.

use jh_time::date::{days_in_month, is_leap_year};
use jh_time::{Date, Month, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn consistency() {
    // Walk every day from 1800 to 2200 checking that serial, weekday and
    // (y, m, d) advance together.
    let min = date(1800, 1, 1);
    let max = date(2200, 12, 31);
    let mut prev = min;
    let mut d = min + 1;
    while d <= max {
        assert_eq!(d.serial(), prev.serial() + 1, "serial not contiguous at {d}");

        let (py, pm, pd) = prev.ymd();
        let (y, m, day) = d.ymd();
        let same_month = y == py && m == pm && day == pd + 1;
        let new_month = y == py && m == pm + 1 && day == 1 && pd == days_in_month(py, pm);
        let new_year = y == py + 1 && m == 1 && day == 1 && pm == 12 && pd == 31;
        assert!(same_month || new_month || new_year, "wrong successor {prev} -> {d}");

        assert_eq!(
            d.weekday().index(),
            (prev.weekday().index() + 1) % 7,
            "weekday not contiguous at {d}"
        );
        assert_eq!(date(y, m, day), d);

        prev = d;
        d += 1;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(1948));
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2023, 9), 30);
}

#[test]
fn known_weekdays() {
    assert_eq!(date(1948, 7, 20).weekday(), Weekday::Tuesday);
    assert_eq!(date(1989, 1, 8).weekday(), Weekday::Sunday);
    assert_eq!(date(2019, 5, 1).weekday(), Weekday::Wednesday);
    assert_eq!(date(1899, 12, 31).weekday(), Weekday::Sunday);
}

#[test]
fn arithmetic() {
    let d = date(2023, 1, 1);
    assert_eq!(d + 31, date(2023, 2, 1));
    assert_eq!(date(2023, 2, 1) - d, 31);
    assert_eq!(d.days_between(date(2022, 12, 31)), -1);
    assert_eq!(d - 1, date(2022, 12, 31));
    assert!(Date::MAX.add_days(1).is_err());
}

#[test]
fn month_accessors() {
    let d = date(2024, 9, 16);
    assert_eq!(d.month(), Month::September);
    assert_eq!(d.first_of_month(), date(2024, 9, 1));
    assert_eq!(d.end_of_month(), date(2024, 9, 30));
}

#[test]
fn third_monday_of_september() {
    for (y, expected) in [(2003, 15), (2009, 21), (2024, 16), (2026, 21)] {
        let d = Date::nth_weekday(3, Weekday::Monday, y, 9).unwrap();
        assert_eq!(d.day_of_month(), expected, "{y}");
    }
}
