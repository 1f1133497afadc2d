//! Plain-text rendering of calendar matrices.
//!
//! Every cell is three columns wide: the day number right-aligned in two
//! columns followed by a marker (`*` holiday, `@` today).

use std::fmt::Write as _;

use jholiday::{Date, HolidayDate, MonthMatrix, WeekWindow};
use unicode_width::UnicodeWidthStr;

/// Weekday header, Sunday first, aligned with the day cells.
pub const WEEKDAY_HEADER: &str = "日 月 火 水 木 金 土";

const GRID_WIDTH: usize = 7 * 3;
const MONTHS_PER_ROW: usize = 3;
const MAX_WEEKS: usize = 6;

/// Renders matrices relative to a fixed "today".
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub today: Date,
    pub weekday_header: bool,
}

impl Renderer {
    /// A single month with its holiday list.
    pub fn month(&self, m: &MonthMatrix) -> String {
        let mut out = String::new();
        let title = format!("{}年{}月", m.year(), m.month().number());
        for line in self.month_block(m, &title).iter().filter(|l| !l.is_empty()) {
            writeln!(out, "{}", line.trim_end()).ok();
        }
        out.push('\n');
        out.push_str(&legend(m.holidays()));
        out
    }

    /// Twelve months, three per row, followed by the year's holidays.
    pub fn year(&self, year: jholiday::core::Year, months: &[MonthMatrix]) -> String {
        let mut out = format!("{year}年\n");
        for chunk in months.chunks(MONTHS_PER_ROW) {
            out.push('\n');
            let blocks: Vec<Vec<String>> = chunk
                .iter()
                .map(|m| self.month_block(m, &format!("{}月", m.month().number())))
                .collect();
            let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
            for i in 0..height {
                let line = blocks
                    .iter()
                    .map(|b| pad_right(b.get(i).map_or("", String::as_str), GRID_WIDTH))
                    .collect::<Vec<_>>()
                    .join("  ");
                writeln!(out, "{}", line.trim_end()).ok();
            }
        }
        out.push('\n');
        out.push_str(&legend(months.iter().flat_map(MonthMatrix::holidays)));
        out
    }

    /// A week window headed by today's date; rows where a month starts are
    /// labelled with it.
    pub fn weeks(&self, w: &WeekWindow) -> String {
        let (y, m, d) = self.today.ymd();
        let mut out = format!("{y}年{m}月{d}日(本日)\n");
        if self.weekday_header {
            writeln!(out, "{:5}{WEEKDAY_HEADER}", "").ok();
        }
        for (i, row) in w.weeks().iter().enumerate() {
            let month_start = row.iter().find(|d| d.date().day_of_month() == 1);
            let label = match (i, month_start) {
                (_, Some(first)) => format!("{}月", first.date().month().number()),
                (0, None) => format!("{}月", row[0].date().month().number()),
                _ => String::new(),
            };
            let cells: String = row.iter().map(|d| self.cell(d, true)).collect();
            writeln!(out, "{} {}", pad_left(&label, 4), cells.trim_end()).ok();
        }
        out.push('\n');
        out.push_str(&legend(w.holidays()));
        out
    }

    /// Title, optional header, and exactly `MAX_WEEKS` grid lines.
    fn month_block(&self, m: &MonthMatrix, title: &str) -> Vec<String> {
        let mut lines = vec![title.to_string()];
        if self.weekday_header {
            lines.push(WEEKDAY_HEADER.to_string());
        }
        for row in m.weeks() {
            lines.push(
                row.iter()
                    .map(|d| self.cell(d, m.is_in_month(d.date())))
                    .collect(),
            );
        }
        for _ in m.weeks().len()..MAX_WEEKS {
            lines.push(String::new());
        }
        lines
    }

    fn cell(&self, day: &HolidayDate, visible: bool) -> String {
        if !visible {
            return "   ".to_string();
        }
        let mark = if day.date() == self.today {
            '@'
        } else if day.is_holiday() {
            '*'
        } else {
            ' '
        };
        format!("{:>2}{mark}", day.date().day_of_month())
    }
}

fn legend<'a>(holidays: impl Iterator<Item = &'a HolidayDate>) -> String {
    let mut out = String::new();
    for h in holidays {
        let (_, m, d) = h.date().ymd();
        if let Some(name) = h.holiday() {
            writeln!(out, "{m:>2}/{d:>2}({}) {name}", h.weekday().japanese_name()).ok();
        }
    }
    out
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{s}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jholiday::{CalendarMatrixBuilder, Month};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn renderer(today: Date) -> Renderer {
        Renderer {
            today,
            weekday_header: true,
        }
    }

    #[test]
    fn widths() {
        assert_eq!(WEEKDAY_HEADER.width(), 20);
        assert_eq!(pad_left("12月", 4), "12月");
        assert_eq!(pad_left("5月", 4), " 5月");
        assert_eq!(pad_right("5月", 5), "5月  ");
        // Half-width kana and combining marks are one and zero columns.
        assert_eq!(pad_left("ｶ", 4), "   ｶ");
        assert_eq!(pad_right("e\u{301}", 3), "e\u{301}  ");
    }

    #[test]
    fn month_view() {
        let m = CalendarMatrixBuilder::default()
            .monthly_matrix(2019, Month::May)
            .unwrap();
        let text = renderer(date(2019, 5, 10)).month(&m);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2019年5月");
        assert_eq!(lines[1], WEEKDAY_HEADER);
        // April padding is blank.
        assert_eq!(lines[2], "          1* 2* 3* 4*");
        assert_eq!(lines[3], " 5* 6* 7  8  9 10@11");
        assert!(text.contains(" 5/ 1(水) 天皇の即位の日\n"));
        assert!(text.contains(" 5/ 2(木) 休日\n"));
        assert!(!text.contains("昭和の日"));
    }

    #[test]
    fn header_can_be_disabled() {
        let m = CalendarMatrixBuilder::default()
            .monthly_matrix(2024, Month::March)
            .unwrap();
        let r = Renderer {
            today: date(2000, 1, 1),
            weekday_header: false,
        };
        let text = r.month(&m);
        assert!(text.starts_with("2024年3月\n"));
        assert!(!text.contains(WEEKDAY_HEADER));
        assert!(text.contains(" 3/20(水) 春分の日\n"));
    }

    #[test]
    fn year_view_has_three_months_per_row() {
        let months = CalendarMatrixBuilder::default().yearly(2026).unwrap();
        let text = renderer(date(2000, 1, 1)).year(2026, &months);
        assert!(text.starts_with("2026年\n"));
        let title_rows: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with(|c: char| c.is_ascii_digit()) && l.ends_with('月'))
            .collect();
        assert_eq!(title_rows.len(), 4);
        assert!(title_rows[0].starts_with("1月"));
        assert!(title_rows[0].contains("2月"));
        assert!(title_rows[0].contains("3月"));
        assert_eq!(text.matches('(').count(), 18);
    }

    #[test]
    fn week_view_labels_months() {
        let w = CalendarMatrixBuilder::default()
            .week_window(date(2024, 5, 1), 1, 1)
            .unwrap();
        let text = renderer(date(2024, 5, 1)).weeks(&w);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2024年5月1日(本日)");
        assert_eq!(lines[1], format!("     {WEEKDAY_HEADER}"));
        assert_eq!(lines[2], " 4月 21 22 23 24 25 26 27");
        assert_eq!(lines[3], " 5月 28 29*30  1@ 2  3* 4*");
        assert_eq!(lines[4], "      5* 6* 7  8  9 10 11");
        assert!(text.contains(" 4/29(月) 昭和の日\n"));

        // The header names today even when the window is anchored elsewhere.
        let text = renderer(date(2024, 6, 1)).weeks(&w);
        assert!(text.starts_with("2024年6月1日(本日)\n"));
        assert!(!text.contains('@'));
    }
}
