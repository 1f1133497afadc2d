use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jholiday::{Date, Month};

/// Terminal calendar of Japanese national holidays.
#[derive(Parser)]
#[command(
    name = "jhcal",
    version,
    about = "Japanese national holiday calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./jhcal.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not print the weekday header row.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// View to show; the configured default view when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show one month.
    Month(MonthArgs),
    /// Show a whole year, three months per row.
    Year(YearArgs),
    /// Show a window of weeks around a date.
    Weeks(WeeksArgs),
    /// Print the holiday name of one or more dates.
    Holiday(HolidayArgs),
    /// Print the equinox dates of a year.
    Equinox(EquinoxArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args, Default)]
pub struct MonthArgs {
    /// Month as YYYY-MM (defaults to the current month).
    #[arg(value_parser = parse_year_month)]
    pub month: Option<(u16, Month)>,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args, Default)]
pub struct YearArgs {
    /// Year (defaults to the current year).
    pub year: Option<u16>,
}

/// Arguments for the `weeks` subcommand.
#[derive(clap::Args, Default)]
pub struct WeeksArgs {
    /// Anchor date as YYYY-MM-DD (defaults to today).
    pub date: Option<Date>,

    /// Weeks shown before the anchor week (overrides config).
    #[arg(long)]
    pub past: Option<u32>,

    /// Weeks shown after the anchor week (overrides config).
    #[arg(long)]
    pub next: Option<u32>,
}

/// Arguments for the `holiday` subcommand.
#[derive(clap::Args)]
pub struct HolidayArgs {
    /// Dates as YYYY-MM-DD.
    #[arg(required = true)]
    pub dates: Vec<Date>,
}

/// Arguments for the `equinox` subcommand.
#[derive(clap::Args)]
pub struct EquinoxArgs {
    /// Year.
    pub year: u16,
}

fn parse_year_month(s: &str) -> Result<(u16, Month), String> {
    let (y, m) = s
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got {s:?}"))?;
    let year = y
        .parse::<u16>()
        .ok()
        .filter(|y| (1..=9999).contains(y))
        .ok_or_else(|| format!("invalid year {y:?}"))?;
    let month = m
        .parse::<u8>()
        .ok()
        .and_then(Month::from_number)
        .ok_or_else(|| format!("invalid month {m:?}"))?;
    Ok((year, month))
}
