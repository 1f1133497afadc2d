//! Error types for jholiday.
//!
//! Holiday lookups themselves never fail (absence is `None`); errors only
//! arise when constructing or shifting dates and when building calendar
//! matrices. The `ensure!` macro keeps precondition checks short.

use thiserror::Error;

/// The top-level error type used throughout jholiday.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated (produced by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction, parsing, or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// Argument outside the range an operation supports.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout jholiday.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use jh_core::{ensure, errors::Error};
/// fn weeks(n: u32) -> jh_core::errors::Result<u32> {
///     ensure!(n <= 52, "at most 52 weeks, got {n}");
///     Ok(n)
/// }
/// assert!(weeks(7).is_ok());
/// assert_eq!(
///     weeks(60),
///     Err(Error::Precondition("at most 52 weeks, got 60".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::Date("bad day".into()).to_string(), "date error: bad day");
        assert_eq!(
            Error::InvalidArgument("month 13".into()).to_string(),
            "invalid argument: month 13"
        );
        assert_eq!(
            Error::Precondition("n >= 1".into()).to_string(),
            "precondition not satisfied: n >= 1"
        );
    }
}
