//! # jh-core
//!
//! Core error definitions shared by the jholiday crates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

/// A calendar year (proleptic Gregorian, 1–9999).
pub type Year = u16;

pub use errors::{Error, Result};
