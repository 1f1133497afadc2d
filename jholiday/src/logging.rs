use tracing_subscriber::EnvFilter;

/// Log targets of the binary and the library crates it drives.
const CRATE_TARGETS: &[&str] = &["jhcal", "jholiday", "jh_core", "jh_time"];

/// Install the stderr subscriber for `jhcal`.
///
/// Without `-v` only warnings are shown; each extra `-v` lowers the level
/// through info and debug down to trace, which includes every week-cache
/// miss. A `RUST_LOG` directive replaces the whole filter.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbosity));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One directive per crate target at the level chosen by `-v`.
fn default_filter(verbosity: u8) -> EnvFilter {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .fold(EnvFilter::new("off"), |filter, target| {
            match format!("{target}={level}").parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
}
