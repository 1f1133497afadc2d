mod cli;
mod config;
mod logging;
mod render;

use std::process;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Command, MonthArgs, WeeksArgs, YearArgs};
use config::{JhcalConfig, View};
use jholiday::{autumn_equinox, vernal_equinox, CalendarMatrixBuilder, Date, HolidayDate};
use render::Renderer;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = JhcalConfig::load(cli.config.as_deref())?;
    let today = today()?;
    debug!(%today, ?config, "starting");

    let renderer = Renderer {
        today,
        weekday_header: config.view.weekday_header && !cli.no_header,
    };
    let builder = CalendarMatrixBuilder::default();

    let command = cli.command.unwrap_or(match config.view.default {
        View::Monthly => Command::Month(MonthArgs::default()),
        View::Weekly => Command::Weeks(WeeksArgs::default()),
        View::Yearly => Command::Year(YearArgs::default()),
    });

    match command {
        Command::Month(args) => {
            let (year, month) = args.month.unwrap_or((today.year(), today.month()));
            let matrix = builder
                .monthly_matrix(year, month)
                .with_context(|| format!("Cannot build calendar for {year}-{}", month.number()))?;
            print!("{}", renderer.month(&matrix));
        }
        Command::Year(args) => {
            let year = args.year.unwrap_or(today.year());
            let months = builder
                .yearly(year)
                .with_context(|| format!("Cannot build calendar for {year}"))?;
            print!("{}", renderer.year(year, &months));
        }
        Command::Weeks(args) => {
            let anchor = args.date.unwrap_or(today);
            let past = args.past.unwrap_or(config.weeks.past);
            let next = args.next.unwrap_or(config.weeks.next);
            let window = builder
                .week_window(anchor, past, next)
                .with_context(|| format!("Cannot build {past}+{next} week window around {anchor}"))?;
            print!("{}", renderer.weeks(&window));
        }
        Command::Holiday(args) => {
            for date in args.dates {
                let day = HolidayDate::new(date);
                println!(
                    "{date}({}) {}",
                    day.weekday().japanese_name(),
                    day.holiday().unwrap_or("-")
                );
            }
        }
        Command::Equinox(args) => {
            let year = args.year;
            anyhow::ensure!((1..=9999).contains(&year), "year {year} out of range 1..=9999");
            for (label, date) in [("春分", vernal_equinox(year)), ("秋分", autumn_equinox(year))] {
                println!("{label} {date}({})", date.weekday().japanese_name());
            }
        }
    }
    Ok(())
}

/// Today's date from the local system clock.
fn today() -> Result<Date> {
    let now = chrono::Local::now().date_naive();
    let year = u16::try_from(now.year()).context("System clock year out of range")?;
    // month() and day() are 1-based and fit in u8.
    Date::from_ymd(year, now.month() as u8, now.day() as u8)
        .context("System clock date out of range")
}
