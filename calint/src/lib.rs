//! calint: calendar interval literals.
//!
//! This crate is the primary entrypoint for the toolkit. It re-exports the interval value
//! type, the literal parsers, and the shared error types from the underlying `calint-*`
//! crates, providing a unified API surface for users.
//!
//! # Quick Start
//!
//! ```rust
//! use calint::{CalendarInterval, parse_interval, parse_year_month};
//!
//! let a = parse_interval("interval 1 year 2 days").unwrap();
//! let b = parse_year_month("-1-0").unwrap();
//! assert_eq!((a + b).to_string(), "interval 2 days");
//! assert_eq!(CalendarInterval::new(14, 0).to_string(), "interval 1 years 2 months");
//! ```
//!
//! # Architecture
//!
//! - **Values** (`calint-types`): [`CalendarInterval`], unit constants, canonical formatting.
//! - **Parsing** (`calint-parse`): full-form, year-month, day-time and single-unit grammars.
//! - **Errors** (`calint-result`): the [`Error`] taxonomy and [`Result`] alias.

pub use calint_parse::{
    DayTimeField, DayTimeOptions, parse_day_time, parse_day_time_with_fields,
    parse_day_time_with_options, parse_interval, parse_interval_opt, parse_single_unit,
    parse_single_unit_named, parse_year_month, try_parse_interval,
};
pub use calint_types::{
    CalendarInterval, IntervalUnit, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MILLI,
    MICROS_PER_MINUTE, MICROS_PER_SECOND, MICROS_PER_WEEK,
};

// Re-export result types for error handling
pub use calint_result::{Error, Result};
